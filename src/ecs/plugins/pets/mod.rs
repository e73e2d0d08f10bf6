pub mod components;
pub mod plugin;
pub mod systems;

pub use components::{Equipment, PetDefaults, PetEntry, Pets, Setting};
pub use plugin::PetsPlugin;
