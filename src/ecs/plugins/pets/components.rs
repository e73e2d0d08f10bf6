use std::sync::Arc;

use bevy::prelude::*;
use dashmap::DashMap;
use parking_lot::RwLock;

use crate::ecs::core::{DEFAULT_OFFSET, DEFAULT_ROTATE_Z, ItemStack};
use crate::ecs::plugins::player::EyePose;
use crate::ecs::plugins::space::StandHandle;

/// A per-player value that falls back to the global default until it is
/// explicitly overridden. Global setters never rewrite overridden values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting<T> {
    Inherited,
    Overridden(T),
}

impl<T: Copy> Setting<T> {
    pub fn resolve(&self, default: T) -> T {
        match self {
            Setting::Inherited => default,
            Setting::Overridden(value) => *value,
        }
    }

    pub fn is_inherited(&self) -> bool {
        matches!(self, Setting::Inherited)
    }
}

/// Two-field equipment state: the item last applied to the stand and the item
/// requested since, with a flag marking the gap between them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Equipment {
    pub applied: Option<ItemStack>,
    pub pending: Option<ItemStack>,
    pub dirty: bool,
}

impl Equipment {
    /// Request a change. Equal requests, including `None` for an empty slot,
    /// are dropped before the dirty flag is touched.
    pub fn request(&mut self, item: Option<ItemStack>) {
        if self.pending == item {
            return;
        }
        self.pending = item;
        self.dirty = true;
    }

    /// Record that `pending` reached the stand.
    pub fn mark_applied(&mut self) {
        self.applied = self.pending.clone();
        self.dirty = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PetDefaults {
    pub offset: Vec3,
    pub rotate_z: bool,
}

pub struct PetEntry {
    pub(crate) stand: Arc<dyn StandHandle>,
    pub(crate) offset: Setting<Vec3>,
    pub(crate) rotate_z: Setting<bool>,
    pub(crate) last_applied: Option<EyePose>,
    pub(crate) equipment: Equipment,
}

impl PetEntry {
    fn new(stand: Arc<dyn StandHandle>) -> Self {
        Self {
            stand,
            offset: Setting::Inherited,
            rotate_z: Setting::Inherited,
            last_applied: None,
            equipment: Equipment::default(),
        }
    }

    pub(crate) fn stand(&self) -> &Arc<dyn StandHandle> {
        &self.stand
    }
}

/// The pet registry: one entry per online tracked player, plus the global
/// defaults new entries inherit.
///
/// Entries live in a concurrent map and the accessors take `&self`, so the
/// resource can be shared with non-ECS threads without extra locking.
#[derive(Resource)]
pub struct Pets {
    entries: DashMap<u32, PetEntry>,
    defaults: RwLock<PetDefaults>,
}

impl Default for Pets {
    fn default() -> Self {
        Self {
            entries: DashMap::new(),
            defaults: RwLock::new(PetDefaults {
                offset: DEFAULT_OFFSET,
                rotate_z: DEFAULT_ROTATE_Z,
            }),
        }
    }
}

impl Pets {
    /// Track a player. A duplicate join replaces the entry and removes the
    /// superseded stand.
    pub(crate) fn insert(&self, player_id: u32, stand: Arc<dyn StandHandle>) {
        if let Some(stale) = self.entries.insert(player_id, PetEntry::new(stand)) {
            stale.stand.remove();
        }
    }

    /// Stop tracking a player, removing their stand. Returns false when the
    /// player was not tracked.
    pub(crate) fn remove(&self, player_id: u32) -> bool {
        match self.entries.remove(&player_id) {
            Some((_, entry)) => {
                entry.stand.remove();
                true
            }
            None => false,
        }
    }

    /// Remove every stand and drop all entries.
    pub(crate) fn clear(&self) {
        self.entries.retain(|_, entry| {
            entry.stand.remove();
            false
        });
    }

    pub(crate) fn entries(&self) -> &DashMap<u32, PetEntry> {
        &self.entries
    }

    pub fn defaults(&self) -> PetDefaults {
        *self.defaults.read()
    }

    pub fn tracked(&self, player_id: u32) -> bool {
        self.entries.contains_key(&player_id)
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Global head-follow default.
    pub fn rotate_z(&self) -> bool {
        self.defaults.read().rotate_z
    }

    /// Update the global head-follow default. Entries that still inherit pick
    /// the value up on their next sync pass; overridden entries are left
    /// untouched.
    pub fn set_rotate_z(&self, rotate_z: bool) {
        {
            let mut defaults = self.defaults.write();
            if defaults.rotate_z == rotate_z {
                return;
            }
            defaults.rotate_z = rotate_z;
        }
        for mut entry in self.entries.iter_mut() {
            if entry.rotate_z.is_inherited() {
                entry.last_applied = None;
            }
        }
    }

    /// Effective head-follow flag for a player; the global default when the
    /// player is untracked.
    pub fn rotate_z_of(&self, player_id: u32) -> bool {
        let default = self.defaults.read().rotate_z;
        match self.entries.get(&player_id) {
            Some(entry) => entry.rotate_z.resolve(default),
            None => default,
        }
    }

    /// Override the head-follow flag for one player. Setting the value it
    /// already resolves to changes nothing. No-op when untracked.
    pub fn set_rotate_z_of(&self, player_id: u32, rotate_z: bool) {
        let default = self.defaults.read().rotate_z;
        if let Some(mut entry) = self.entries.get_mut(&player_id) {
            if entry.rotate_z.resolve(default) != rotate_z {
                entry.rotate_z = Setting::Overridden(rotate_z);
                entry.last_applied = None;
            }
        }
    }

    /// Global stand offset default.
    pub fn offset(&self) -> Vec3 {
        self.defaults.read().offset
    }

    /// Update the global offset default, same override rules as
    /// [`set_rotate_z`](Pets::set_rotate_z).
    pub fn set_offset(&self, offset: Vec3) {
        {
            let mut defaults = self.defaults.write();
            if defaults.offset == offset {
                return;
            }
            defaults.offset = offset;
        }
        for mut entry in self.entries.iter_mut() {
            if entry.offset.is_inherited() {
                entry.last_applied = None;
            }
        }
    }

    /// Effective offset for a player, or `None` when untracked.
    pub fn offset_of(&self, player_id: u32) -> Option<Vec3> {
        let default = self.defaults.read().offset;
        self.entries
            .get(&player_id)
            .map(|entry| entry.offset.resolve(default))
    }

    /// Override the offset for one player. No-op when untracked or unchanged.
    pub fn set_offset_of(&self, player_id: u32, offset: Vec3) {
        let default = self.defaults.read().offset;
        if let Some(mut entry) = self.entries.get_mut(&player_id) {
            if entry.offset.resolve(default) != offset {
                entry.offset = Setting::Overridden(offset);
                entry.last_applied = None;
            }
        }
    }

    /// Request the item shown on the pet's head, `None` to clear it. The
    /// change reaches the stand on the next sync pass. No-op when untracked.
    pub fn set_display(&self, player_id: u32, item: Option<ItemStack>) {
        if let Some(mut entry) = self.entries.get_mut(&player_id) {
            entry.equipment.request(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::plugins::space::{ChannelSpace, PlayerSpace, StandLocation};

    fn pets_with(players: &[u32]) -> Pets {
        let (space, _batches) = ChannelSpace::new();
        let pets = Pets::default();
        for &id in players {
            let stand = space.spawn_stand(StandLocation {
                position: Vec3::ZERO,
                yaw: 0.0,
                pitch: 0.0,
            });
            pets.insert(id, stand);
        }
        pets
    }

    fn eye_pose() -> EyePose {
        EyePose {
            position: Vec3::new(1.0, 2.0, 3.0),
            yaw: 10.0,
            pitch: 5.0,
        }
    }

    #[test]
    fn global_offset_applies_to_inherited_entries_only() {
        let pets = pets_with(&[1, 2]);
        let custom = Vec3::new(0.0, 0.5, 0.0);
        let global = Vec3::new(0.0, -1.0, -1.0);

        pets.set_offset_of(1, custom);
        pets.set_offset(global);

        assert_eq!(pets.offset(), global);
        assert_eq!(pets.offset_of(1), Some(custom));
        assert_eq!(pets.offset_of(2), Some(global));
    }

    #[test]
    fn global_setter_clears_pose_snapshot_for_inherited_entries_only() {
        let pets = pets_with(&[1, 2]);
        pets.set_offset_of(1, Vec3::new(0.0, 0.5, 0.0));
        for mut entry in pets.entries().iter_mut() {
            entry.last_applied = Some(eye_pose());
        }

        pets.set_offset(Vec3::new(1.0, 0.0, 0.0));

        assert!(pets.entries().get(&1).unwrap().last_applied.is_some());
        assert!(pets.entries().get(&2).unwrap().last_applied.is_none());
    }

    #[test]
    fn rotate_override_survives_global_toggles() {
        let pets = pets_with(&[1, 2]);
        assert!(pets.rotate_z());

        pets.set_rotate_z_of(1, false);
        assert!(!pets.rotate_z_of(1));
        assert!(pets.rotate_z_of(2));

        pets.set_rotate_z(false);
        assert!(!pets.rotate_z_of(1));
        assert!(!pets.rotate_z_of(2));

        pets.set_rotate_z(true);
        // 1 was overridden before the toggles and keeps its value
        assert!(!pets.rotate_z_of(1));
        assert!(pets.rotate_z_of(2));
    }

    #[test]
    fn setting_the_inherited_value_keeps_inheritance() {
        let pets = pets_with(&[1]);
        pets.set_rotate_z_of(1, true);

        pets.set_rotate_z(false);
        assert!(!pets.rotate_z_of(1));
    }

    #[test]
    fn untracked_player_accessors_are_total() {
        let pets = pets_with(&[]);
        assert_eq!(pets.offset_of(99), None);
        assert_eq!(pets.rotate_z_of(99), pets.rotate_z());
        pets.set_offset_of(99, Vec3::ONE);
        pets.set_rotate_z_of(99, false);
        pets.set_display(99, Some(ItemStack::of("stick")));
        assert!(!pets.remove(99));
        assert_eq!(pets.count(), 0);
    }

    #[test]
    fn equipment_requests_collapse_until_applied() {
        let mut equipment = Equipment::default();

        equipment.request(Some(ItemStack::of("stick")));
        equipment.request(Some(ItemStack::of("stick")));
        assert!(equipment.dirty);

        equipment.mark_applied();
        assert_eq!(equipment.applied, Some(ItemStack::of("stick")));
        assert!(!equipment.dirty);

        equipment.request(Some(ItemStack::of("stick")));
        assert!(!equipment.dirty);

        equipment.request(None);
        assert!(equipment.dirty);
    }

    #[test]
    fn duplicate_join_replaces_the_stand() {
        let (space, _batches) = ChannelSpace::new();
        let pets = Pets::default();
        let location = StandLocation {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
        };

        let first = space.spawn_stand(location);
        pets.insert(1, Arc::clone(&first));
        pets.insert(1, space.spawn_stand(location));

        assert!(first.is_removed());
        assert_eq!(pets.count(), 1);
    }
}
