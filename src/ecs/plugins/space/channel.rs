use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crossbeam_channel::{Receiver, Sender, unbounded};
use dashmap::DashMap;
use glam::Vec3;
use parking_lot::Mutex;
use tracing::warn;

use super::components::{SpaceBatch, SpaceUpdate, StandChange, StandLocation};
use super::{PlayerSpace, SpaceError, StandHandle};
use crate::ecs::core::ItemStack;

struct SpaceInner {
    players: DashMap<u32, ()>,
    pending: Mutex<Vec<SpaceUpdate>>,
    batches: Sender<String>,
    next_stand_id: AtomicU64,
    closed: AtomicBool,
}

impl SpaceInner {
    fn push(&self, update: SpaceUpdate) {
        if self.closed.load(Ordering::Acquire) {
            return;
        }
        self.pending.lock().push(update);
    }

    fn flush(&self) {
        let updates: Vec<SpaceUpdate> = std::mem::take(&mut *self.pending.lock());
        if updates.is_empty() {
            return;
        }
        match serde_json::to_string(&SpaceBatch { updates }) {
            // Receiver may be gone; batches are best-effort
            Ok(json) => {
                let _ = self.batches.send(json);
            }
            Err(err) => warn!("dropping space batch: {err}"),
        }
    }
}

/// [`PlayerSpace`] that accumulates updates and hands each announce flush to
/// a channel as one JSON message.
pub struct ChannelSpace {
    inner: Arc<SpaceInner>,
}

impl ChannelSpace {
    pub fn new() -> (Self, Receiver<String>) {
        let (batches, receiver) = unbounded();
        let space = Self {
            inner: Arc::new(SpaceInner {
                players: DashMap::new(),
                pending: Mutex::new(Vec::new()),
                batches,
                next_stand_id: AtomicU64::new(1),
                closed: AtomicBool::new(false),
            }),
        };
        (space, receiver)
    }
}

impl PlayerSpace for ChannelSpace {
    fn add_player(&self, player_id: u32) {
        if self.inner.players.insert(player_id, ()).is_none() {
            self.inner.push(SpaceUpdate::PlayerAdded(player_id));
        }
    }

    fn remove_player(&self, player_id: u32) {
        if self.inner.players.remove(&player_id).is_some() {
            self.inner.push(SpaceUpdate::PlayerRemoved(player_id));
        }
    }

    fn has_player(&self, player_id: u32) -> bool {
        self.inner.players.contains_key(&player_id)
    }

    fn spawn_stand(&self, location: StandLocation) -> Arc<dyn StandHandle> {
        let stand_id = self.inner.next_stand_id.fetch_add(1, Ordering::Relaxed);
        self.inner.push(SpaceUpdate::Stand {
            stand_id,
            change: StandChange::Spawn { location },
        });
        Arc::new(ChannelStand {
            stand_id,
            removed: AtomicBool::new(false),
            inner: Arc::clone(&self.inner),
        })
    }

    fn announce(&self) {
        if self.inner.closed.load(Ordering::Acquire) {
            return;
        }
        self.inner.flush();
    }

    fn close(&self) -> Result<(), SpaceError> {
        if self.inner.closed.swap(true, Ordering::AcqRel) {
            return Err(SpaceError::AlreadyClosed);
        }
        // Final flush so consumers observe the teardown removals.
        self.inner.flush();
        Ok(())
    }
}

pub struct ChannelStand {
    stand_id: u64,
    removed: AtomicBool,
    inner: Arc<SpaceInner>,
}

impl ChannelStand {
    fn push(&self, change: StandChange) {
        if self.removed.load(Ordering::Acquire) {
            return;
        }
        self.inner.push(SpaceUpdate::Stand {
            stand_id: self.stand_id,
            change,
        });
    }
}

impl StandHandle for ChannelStand {
    fn is_removed(&self) -> bool {
        self.removed.load(Ordering::Acquire)
    }

    fn set_marker(&self, marker: bool) {
        self.push(StandChange::Marker(marker));
    }

    fn set_small(&self, small: bool) {
        self.push(StandChange::Small(small));
    }

    fn set_invisible(&self, invisible: bool) {
        self.push(StandChange::Invisible(invisible));
    }

    fn set_head_pose(&self, pose: Vec3) {
        self.push(StandChange::HeadPose(pose));
    }

    fn teleport(&self, location: StandLocation) {
        self.push(StandChange::Teleport(location));
    }

    fn set_helmet(&self, item: Option<ItemStack>) {
        self.push(StandChange::Helmet(item));
    }

    fn remove(&self) {
        if self.removed.swap(true, Ordering::AcqRel) {
            return;
        }
        self.inner.push(SpaceUpdate::Stand {
            stand_id: self.stand_id,
            change: StandChange::Remove,
        });
    }
}
