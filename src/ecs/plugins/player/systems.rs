use bevy::prelude::*;
use tracing::info;

use super::components::*;

pub fn player_spawn_system(
    mut commands: Commands,
    mut join_events: EventReader<PlayerJoinEvent>,
    mut registry: ResMut<PlayerRegistry>,
) {
    for event in join_events.read() {
        let entity = commands
            .spawn(PlayerBundle::new(event.player_id, event.position))
            .id();
        if let Some(stale) = registry.register_player(event.player_id, entity) {
            commands.entity(stale).despawn();
        }
        info!(player_id = event.player_id, "player joined");
    }
}

pub fn player_despawn_system(
    mut commands: Commands,
    mut quit_events: EventReader<PlayerQuitEvent>,
    mut registry: ResMut<PlayerRegistry>,
) {
    for event in quit_events.read() {
        if let Some(entity) = registry.unregister_player(event.player_id) {
            commands.entity(entity).despawn();
            info!(player_id = event.player_id, "player left");
        }
    }
}
