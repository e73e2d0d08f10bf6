use bevy::prelude::*;

use super::systems::{display_sync_system, every_sync_tick, shutdown_system, space_announce_system};
use crate::ecs::core::PetConfig;
use crate::ecs::plugins::PetSet;

pub struct DisplaySyncPlugin;

impl Plugin for DisplaySyncPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PetConfig>()
            .add_systems(
                FixedUpdate,
                (display_sync_system, space_announce_system)
                    .chain()
                    .in_set(PetSet::Sync)
                    .run_if(every_sync_tick),
            )
            .add_systems(Last, shutdown_system.run_if(on_event::<AppExit>));
    }
}
