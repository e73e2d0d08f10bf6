use bevy::prelude::*;

use super::components::{PlayerJoinEvent, PlayerQuitEvent, PlayerRegistry};
use super::systems::{player_despawn_system, player_spawn_system};
use crate::ecs::plugins::PetSet;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PlayerJoinEvent>()
            .add_event::<PlayerQuitEvent>()
            .init_resource::<PlayerRegistry>()
            .add_systems(
                FixedUpdate,
                (player_spawn_system, player_despawn_system).in_set(PetSet::Lifecycle),
            );
    }
}
