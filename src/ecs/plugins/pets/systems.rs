use bevy::prelude::*;
use tracing::info;

use super::components::Pets;
use crate::ecs::core::PetConfig;
use crate::ecs::plugins::player::{PlayerJoinEvent, PlayerQuitEvent};
use crate::ecs::plugins::space::{PetSpace, StandLocation};

/// Seed the global defaults from the host configuration.
pub fn apply_config_system(config: Res<PetConfig>, pets: Res<Pets>) {
    pets.set_offset(config.default_offset);
    pets.set_rotate_z(config.default_rotate_z);
}

pub fn pet_spawn_system(
    mut join_events: EventReader<PlayerJoinEvent>,
    pets: Res<Pets>,
    space: Res<PetSpace>,
) {
    for event in join_events.read() {
        space.0.add_player(event.player_id);
        let stand = space.0.spawn_stand(StandLocation {
            position: event.position,
            yaw: 0.0,
            pitch: 0.0,
        });
        stand.set_marker(true);
        stand.set_small(true);
        stand.set_invisible(true);
        pets.insert(event.player_id, stand);
        info!(player_id = event.player_id, "pet stand spawned");
    }
}

pub fn pet_despawn_system(
    mut quit_events: EventReader<PlayerQuitEvent>,
    pets: Res<Pets>,
    space: Res<PetSpace>,
) {
    for event in quit_events.read() {
        space.0.remove_player(event.player_id);
        if pets.remove(event.player_id) {
            info!(player_id = event.player_id, "pet stand removed");
        }
    }
}
