use bevy::prelude::*;
use std::collections::HashMap;

use crate::ecs::core::ItemStack;

/// Eye height above the join position, used until the host reports a pose.
pub const EYE_HEIGHT: f32 = 1.62;

#[derive(Component, Debug, Clone, Copy)]
pub struct Player {
    pub id: u32,
}

/// Where the player is looking from. `yaw` and `pitch` are view angles in
/// degrees; `body_yaw` is the torso angle and may differ from `yaw`.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PlayerPose {
    pub eye: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub body_yaw: f32,
}

impl PlayerPose {
    pub fn eye_pose(&self) -> EyePose {
        EyePose {
            position: self.eye,
            yaw: self.yaw,
            pitch: self.pitch,
        }
    }
}

/// Snapshot gating pose updates. Equality is exact; body yaw is not part of
/// the snapshot, so a torso-only turn does not re-pose the stand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyePose {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct Hands {
    pub main_hand: Option<ItemStack>,
    pub off_hand: Option<ItemStack>,
}

#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: Player,
    pub pose: PlayerPose,
    pub hands: Hands,
}

impl PlayerBundle {
    pub fn new(player_id: u32, position: Vec3) -> Self {
        Self {
            player: Player { id: player_id },
            pose: PlayerPose {
                eye: position + Vec3::Y * EYE_HEIGHT,
                yaw: 0.0,
                pitch: 0.0,
                body_yaw: 0.0,
            },
            hands: Hands::default(),
        }
    }
}

#[derive(Event)]
pub struct PlayerJoinEvent {
    pub player_id: u32,
    pub position: Vec3,
}

#[derive(Event)]
pub struct PlayerQuitEvent {
    pub player_id: u32,
}

#[derive(Resource, Default)]
pub struct PlayerRegistry {
    pub players: HashMap<u32, Entity>,
}

impl PlayerRegistry {
    pub fn register_player(&mut self, player_id: u32, entity: Entity) -> Option<Entity> {
        self.players.insert(player_id, entity)
    }

    pub fn unregister_player(&mut self, player_id: u32) -> Option<Entity> {
        self.players.remove(&player_id)
    }

    pub fn get_player_entity(&self, player_id: u32) -> Option<Entity> {
        self.players.get(&player_id).copied()
    }
}
