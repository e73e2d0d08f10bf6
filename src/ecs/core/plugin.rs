use bevy::prelude::*;

use crate::ecs::core::PetConfig;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PetConfig>();
    }
}
