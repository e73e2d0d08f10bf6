pub mod components;
pub mod plugin;
pub mod systems;

pub use components::{
    EYE_HEIGHT, EyePose, Hands, Player, PlayerBundle, PlayerJoinEvent, PlayerPose,
    PlayerQuitEvent, PlayerRegistry,
};
pub use plugin::PlayerPlugin;
