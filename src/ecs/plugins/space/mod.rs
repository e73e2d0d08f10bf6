pub mod channel;
pub mod components;

use std::sync::Arc;

use bevy::prelude::*;
use thiserror::Error;

use crate::ecs::core::ItemStack;

pub use channel::ChannelSpace;
pub use components::{SpaceBatch, SpaceBridge, SpaceUpdate, StandChange, StandLocation};

#[derive(Debug, Error)]
pub enum SpaceError {
    #[error("space is already closed")]
    AlreadyClosed,
}

/// Handle to one stand inside a space. Calls on a removed stand are ignored.
pub trait StandHandle: Send + Sync {
    fn is_removed(&self) -> bool;
    fn set_marker(&self, marker: bool);
    fn set_small(&self, small: bool);
    fn set_invisible(&self, invisible: bool);
    /// Euler angles in radians, applied to the head.
    fn set_head_pose(&self, pose: Vec3);
    fn teleport(&self, location: StandLocation);
    fn set_helmet(&self, item: Option<ItemStack>);
    fn remove(&self);
}

/// A visibility scope containing players and the stands rendered to them.
///
/// State mutations accumulate until [`announce`](PlayerSpace::announce),
/// which broadcasts them as one batch. [`close`](PlayerSpace::close) is the
/// only fallible operation.
pub trait PlayerSpace: Send + Sync {
    fn add_player(&self, player_id: u32);
    fn remove_player(&self, player_id: u32);
    fn has_player(&self, player_id: u32) -> bool;
    fn spawn_stand(&self, location: StandLocation) -> Arc<dyn StandHandle>;
    fn announce(&self);
    fn close(&self) -> Result<(), SpaceError>;
}

/// The space the pet plugins render into. Insert your own before adding
/// [`SpacePlugin`] to swap the implementation.
#[derive(Resource, Clone)]
pub struct PetSpace(pub Arc<dyn PlayerSpace>);

pub struct SpacePlugin;

impl Plugin for SpacePlugin {
    fn build(&self, app: &mut App) {
        if app.world().get_resource::<PetSpace>().is_none() {
            let (space, batches) = ChannelSpace::new();
            app.insert_resource(PetSpace(Arc::new(space)))
                .insert_resource(SpaceBridge { batches });
        }
    }
}
