pub mod components;
pub mod plugin;
pub mod resources;

pub use components::ItemStack;
pub use plugin::CorePlugin;
pub use resources::{DEFAULT_OFFSET, DEFAULT_ROTATE_Z, DEFAULT_SYNC_INTERVAL_TICKS, PetConfig};
