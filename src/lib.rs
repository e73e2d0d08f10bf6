/*!
# Pet Display Server

Per-player cosmetic pets for a game server, built with Bevy ECS.

Each online player gets an invisible marker armor stand that floats near
their head, follows their view, and wears whatever they hold. The crate is a
set of plugins a host app composes; rendering goes through a pluggable
"space" abstraction that batches entity updates per announce.

## Architecture Overview

- **CorePlugin**: shared data model and configuration (`ItemStack`,
  `PetConfig`)
- **SpacePlugin**: the rendering surface (`PlayerSpace` / `StandHandle`
  traits, channel-backed batching implementation)
- **PlayerPlugin**: player lifecycle (join/quit events, avatar entities,
  id-to-entity registry)
- **PetsPlugin**: the pet registry (`Pets` resource with global defaults and
  per-player overrides)
- **HandMirrorPlugin**: per-tick policy mirroring held items onto pets
- **DisplaySyncPlugin**: the cadenced sync pass (pose dirty-check, equipment
  flush, one broadcast per pass) and shutdown

## How It Works

1. The host sends `PlayerJoinEvent` / `PlayerQuitEvent`
2. Each join spawns a marker stand in the space and registers a pet entry
3. Every fixed tick the mirror copies the main-hand item and off-hand state
4. Every tenth tick the sync pass re-poses changed pets, flushes pending
   equipment, and announces one batch
5. On app exit all stands are removed and the space is closed

Add [`PetDisplayPlugin`] to a headless app, or compose the plugins
individually. The demo binary wires a scripted walk around the default
channel space and prints each announced batch.
*/

pub mod ecs;

pub use ecs::core::{ItemStack, PetConfig};
pub use ecs::plugins::pets::Pets;
pub use ecs::plugins::player::{PlayerJoinEvent, PlayerQuitEvent};
pub use ecs::plugins::space::{PetSpace, PlayerSpace, SpaceBridge, SpaceError, StandHandle};
pub use ecs::plugins::{PetDisplayPlugin, PetSet};
