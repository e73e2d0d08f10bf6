pub mod display;
pub mod mirror;
pub mod pets;
pub mod player;
pub mod space;

use bevy::prelude::*;

pub use display::DisplaySyncPlugin;
pub use mirror::HandMirrorPlugin;
pub use pets::PetsPlugin;
pub use player::PlayerPlugin;
pub use space::SpacePlugin;

use crate::ecs::core::CorePlugin;

/// Fixed-tick phases: lifecycle events first, then the per-tick hand mirror,
/// then the cadenced sync pass.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PetSet {
    Lifecycle,
    Mirror,
    Sync,
}

/// Everything needed to render pets on a host app.
pub struct PetDisplayPlugin;

impl Plugin for PetDisplayPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            FixedUpdate,
            (PetSet::Lifecycle, PetSet::Mirror, PetSet::Sync).chain(),
        )
        .add_plugins((
            CorePlugin,
            SpacePlugin,
            PlayerPlugin,
            PetsPlugin,
            HandMirrorPlugin,
            DisplaySyncPlugin,
        ));
    }
}
