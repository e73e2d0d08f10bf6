use bevy::prelude::*;

/// Default stand offset relative to the player's eye position.
pub const DEFAULT_OFFSET: Vec3 = Vec3::new(0.0, -0.2, -0.75);

/// Whether stands tilt their head with the player's view pitch by default.
pub const DEFAULT_ROTATE_Z: bool = true;

/// How many fixed ticks pass between display sync passes.
pub const DEFAULT_SYNC_INTERVAL_TICKS: u32 = 10;

#[derive(Resource, Debug, Clone)]
pub struct PetConfig {
    pub sync_interval_ticks: u32,
    pub default_offset: Vec3,
    pub default_rotate_z: bool,
}

impl Default for PetConfig {
    fn default() -> Self {
        Self {
            sync_interval_ticks: DEFAULT_SYNC_INTERVAL_TICKS,
            default_offset: DEFAULT_OFFSET,
            default_rotate_z: DEFAULT_ROTATE_Z,
        }
    }
}
