use bevy::prelude::*;

use super::components::Pets;
use super::systems::{apply_config_system, pet_despawn_system, pet_spawn_system};
use crate::ecs::core::PetConfig;
use crate::ecs::plugins::PetSet;
use crate::ecs::plugins::player::{PlayerJoinEvent, PlayerQuitEvent};

pub struct PetsPlugin;

impl Plugin for PetsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PetConfig>()
            .init_resource::<Pets>()
            .add_event::<PlayerJoinEvent>()
            .add_event::<PlayerQuitEvent>()
            .add_systems(Startup, apply_config_system)
            .add_systems(
                FixedUpdate,
                (pet_spawn_system, pet_despawn_system).in_set(PetSet::Lifecycle),
            );
    }
}
