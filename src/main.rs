use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;
use tracing_subscriber::EnvFilter;

use pet_display_server::ecs::core::ItemStack;
use pet_display_server::ecs::plugins::player::{
    Hands, Player, PlayerJoinEvent, PlayerPose, PlayerQuitEvent,
};
use pet_display_server::ecs::plugins::space::SpaceBridge;
use pet_display_server::ecs::plugins::{PetDisplayPlugin, PetSet};

const DEMO_PLAYERS: u32 = 2;
const DEMO_TICKS: u32 = 200;

/// Headless demo: two scripted players walk a circle while their pets follow.
/// Announced space batches are printed as the transport would see them.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("🐾 Starting pet display server (demo walk)...");
    println!("📦 Space batches are printed as they are announced");

    App::new()
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_millis(50))))
        .insert_resource(Time::<Fixed>::from_hz(20.0))
        .add_plugins(PetDisplayPlugin)
        .add_systems(
            FixedUpdate,
            (
                demo_join_system.before(PetSet::Lifecycle),
                demo_walk_system.before(PetSet::Mirror),
                demo_exit_system,
            ),
        )
        .add_systems(Update, demo_drain_system)
        .run();
}

fn demo_join_system(mut started: Local<bool>, mut join_events: EventWriter<PlayerJoinEvent>) {
    if *started {
        return;
    }
    *started = true;
    for player_id in 1..=DEMO_PLAYERS {
        join_events.send(PlayerJoinEvent {
            player_id,
            position: Vec3::new(player_id as f32 * 4.0, 64.0, 0.0),
        });
    }
}

/// Walk every player in a circle and swap what they hold along the way.
fn demo_walk_system(
    mut players: Query<(&Player, &mut PlayerPose, &mut Hands)>,
    mut tick: Local<u32>,
) {
    *tick += 1;
    for (player, mut pose, mut hands) in players.iter_mut() {
        let angle = (*tick as f32 * 3.0 + player.id as f32 * 180.0).to_radians();
        pose.eye = Vec3::new(angle.cos() * 6.0, 65.62, angle.sin() * 6.0);
        pose.yaw = angle.to_degrees();
        pose.body_yaw = pose.yaw;
        pose.pitch = angle.sin() * 25.0;

        if player.id == 1 {
            if *tick == 40 {
                hands.main_hand = Some(ItemStack::of("torch"));
            }
            if *tick == 80 {
                hands.off_hand = Some(ItemStack::of("shield"));
            }
        }
    }
}

fn demo_drain_system(bridge: Res<SpaceBridge>) {
    while let Ok(batch) = bridge.batches.try_recv() {
        println!("📡 {batch}");
    }
}

fn demo_exit_system(
    mut tick: Local<u32>,
    mut quit_events: EventWriter<PlayerQuitEvent>,
    mut exit: EventWriter<AppExit>,
) {
    *tick += 1;
    if *tick == DEMO_TICKS - 20 {
        quit_events.send(PlayerQuitEvent { player_id: 2 });
    }
    if *tick == DEMO_TICKS {
        println!("👋 Demo finished, shutting down");
        exit.send(AppExit::Success);
    }
}
