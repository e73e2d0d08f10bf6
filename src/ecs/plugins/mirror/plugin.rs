use bevy::prelude::*;

use super::systems::hand_mirror_system;
use crate::ecs::plugins::PetSet;

pub struct HandMirrorPlugin;

impl Plugin for HandMirrorPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, hand_mirror_system.in_set(PetSet::Mirror));
    }
}
