use bevy::prelude::*;
use crossbeam_channel::Receiver;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::ecs::core::ItemStack;

/// World-space position plus view angles for a stand. Angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StandLocation {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

/// One state change applied to one stand. Head pose angles are radians.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StandChange {
    Spawn { location: StandLocation },
    Marker(bool),
    Small(bool),
    Invisible(bool),
    HeadPose(Vec3),
    Teleport(StandLocation),
    Helmet(Option<ItemStack>),
    Remove,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SpaceUpdate {
    PlayerAdded(u32),
    PlayerRemoved(u32),
    Stand { stand_id: u64, change: StandChange },
}

/// Everything flushed by one announce call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpaceBatch {
    pub updates: Vec<SpaceUpdate>,
}

/// Receiving end of the channel-backed space. Whatever transport ships
/// batches to clients drains this; each message is one JSON-encoded
/// [`SpaceBatch`].
#[derive(Resource)]
pub struct SpaceBridge {
    pub batches: Receiver<String>,
}
