use bevy::prelude::*;
use tracing::error;

use crate::ecs::core::PetConfig;
use crate::ecs::plugins::pets::{PetDefaults, PetEntry, Pets};
use crate::ecs::plugins::player::{Player, PlayerPose, PlayerRegistry};
use crate::ecs::plugins::space::{PetSpace, StandLocation};

/// Run condition for the sync cadence: due on the first fixed tick and every
/// `sync_interval_ticks` after.
pub fn every_sync_tick(config: Res<PetConfig>, mut ticks: Local<u32>) -> bool {
    let interval = config.sync_interval_ticks.max(1);
    let due = *ticks % interval == 0;
    *ticks = ticks.wrapping_add(1);
    due
}

pub fn display_sync_system(
    pets: Res<Pets>,
    registry: Res<PlayerRegistry>,
    poses: Query<&PlayerPose, With<Player>>,
) {
    let defaults = pets.defaults();
    for mut entry in pets.entries().iter_mut() {
        let player_id = *entry.key();
        // The player can vanish between the registry and world lookups; a
        // tracked-but-offline entry is skipped, not an error.
        let Some(player_entity) = registry.get_player_entity(player_id) else {
            continue;
        };
        let Ok(pose) = poses.get(player_entity) else {
            continue;
        };
        sync_entry(entry.value_mut(), pose, &defaults);
    }
}

/// One broadcast per sync pass, batching everything the pass changed.
pub fn space_announce_system(space: Res<PetSpace>) {
    space.0.announce();
}

/// Full teardown: remove every stand, then release the space. A close
/// failure is logged and shutdown proceeds.
pub fn shutdown_system(pets: Res<Pets>, space: Res<PetSpace>) {
    pets.clear();
    if let Err(err) = space.0.close() {
        error!("failed to close player space: {err}");
    }
}

fn sync_entry(entry: &mut PetEntry, pose: &PlayerPose, defaults: &PetDefaults) {
    if entry.stand().is_removed() {
        return;
    }

    let eye = pose.eye_pose();
    if entry.last_applied != Some(eye) {
        entry.last_applied = Some(eye);
        let offset = entry.offset.resolve(defaults.offset);
        let rotate_z = entry.rotate_z.resolve(defaults.rotate_z);
        entry.stand().set_head_pose(head_pose(pose.pitch, rotate_z));
        entry.stand().teleport(stand_location(pose, offset));
    }

    if entry.equipment.dirty {
        entry.stand().set_helmet(entry.equipment.pending.clone());
        entry.equipment.mark_applied();
    }
}

/// The configured offset rotated around the vertical axis by the body yaw,
/// hung off the eye position. View angles carry over to the stand.
fn stand_location(pose: &PlayerPose, offset: Vec3) -> StandLocation {
    let rotated = Quat::from_rotation_y(pose.body_yaw.to_radians()) * offset;
    StandLocation {
        position: pose.eye + rotated,
        yaw: pose.yaw,
        pitch: pose.pitch,
    }
}

fn head_pose(pitch_degrees: f32, rotate_z: bool) -> Vec3 {
    if rotate_z {
        Vec3::new(pitch_degrees.to_radians(), 0.0, 0.0)
    } else {
        Vec3::ZERO
    }
}
