pub mod core;
pub mod plugins;

pub use plugins::{PetDisplayPlugin, PetSet};
