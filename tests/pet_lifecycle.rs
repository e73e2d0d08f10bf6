use bevy::prelude::*;

use pet_display_server::ecs::core::ItemStack;
use pet_display_server::ecs::plugins::PetDisplayPlugin;
use pet_display_server::ecs::plugins::pets::Pets;
use pet_display_server::ecs::plugins::player::{
    Hands, PlayerJoinEvent, PlayerPose, PlayerQuitEvent, PlayerRegistry,
};
use pet_display_server::ecs::plugins::space::{
    PetSpace, SpaceBatch, SpaceBridge, SpaceUpdate, StandChange,
};

/// App with the full plugin stack. `FixedUpdate` is driven manually so ticks
/// are deterministic; the first tick and every tenth after run a sync pass.
fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(PetDisplayPlugin);
    app.update();
    app
}

fn tick(app: &mut App) {
    app.world_mut().run_schedule(FixedUpdate);
}

fn ticks(app: &mut App, count: u32) {
    for _ in 0..count {
        tick(app);
    }
}

fn join(app: &mut App, player_id: u32) {
    app.world_mut().send_event(PlayerJoinEvent {
        player_id,
        position: Vec3::new(0.0, 64.0, 0.0),
    });
}

fn quit(app: &mut App, player_id: u32) {
    app.world_mut().send_event(PlayerQuitEvent { player_id });
}

fn drain(app: &App) -> Vec<SpaceUpdate> {
    let bridge = app.world().resource::<SpaceBridge>();
    let mut updates = Vec::new();
    while let Ok(json) = bridge.batches.try_recv() {
        let batch: SpaceBatch = serde_json::from_str(&json).expect("valid batch");
        updates.extend(batch.updates);
    }
    updates
}

fn teleports(updates: &[SpaceUpdate]) -> usize {
    updates
        .iter()
        .filter(|update| {
            matches!(
                update,
                SpaceUpdate::Stand {
                    change: StandChange::Teleport(_),
                    ..
                }
            )
        })
        .count()
}

fn player_entity(app: &App, player_id: u32) -> Entity {
    app.world()
        .resource::<PlayerRegistry>()
        .get_player_entity(player_id)
        .expect("player should be registered")
}

#[test]
fn registry_matches_online_players_across_join_and_quit() {
    let mut app = test_app();

    join(&mut app, 1);
    join(&mut app, 2);
    tick(&mut app);

    {
        let pets = app.world().resource::<Pets>();
        assert_eq!(pets.count(), 2);
        assert!(pets.tracked(1));
        assert!(pets.tracked(2));
        let space = app.world().resource::<PetSpace>();
        assert!(space.0.has_player(1));
        assert!(space.0.has_player(2));
    }
    assert_eq!(app.world().resource::<PlayerRegistry>().players.len(), 2);

    quit(&mut app, 2);
    tick(&mut app);

    {
        let pets = app.world().resource::<Pets>();
        assert_eq!(pets.count(), 1);
        assert!(!pets.tracked(2));
        assert!(!app.world().resource::<PetSpace>().0.has_player(2));
    }

    // quitting an untracked player is a no-op
    quit(&mut app, 2);
    tick(&mut app);
    assert_eq!(app.world().resource::<Pets>().count(), 1);
    assert_eq!(app.world().resource::<PlayerRegistry>().players.len(), 1);
}

#[test]
fn join_announces_the_stand_spawn() {
    let mut app = test_app();

    join(&mut app, 1);
    tick(&mut app);

    let updates = drain(&app);
    assert!(updates.contains(&SpaceUpdate::PlayerAdded(1)));
    assert!(updates.iter().any(|update| {
        matches!(
            update,
            SpaceUpdate::Stand {
                change: StandChange::Spawn { .. },
                ..
            }
        )
    }));
    assert!(updates.contains(&SpaceUpdate::Stand {
        stand_id: 1,
        change: StandChange::Marker(true),
    }));
    assert!(updates.contains(&SpaceUpdate::Stand {
        stand_id: 1,
        change: StandChange::Small(true),
    }));
    assert!(updates.contains(&SpaceUpdate::Stand {
        stand_id: 1,
        change: StandChange::Invisible(true),
    }));
    assert_eq!(teleports(&updates), 1);
}

#[test]
fn unchanged_pose_announces_nothing() {
    let mut app = test_app();

    join(&mut app, 1);
    tick(&mut app);
    drain(&app);

    // next sync pass lands on tick 11; the pose has not moved
    ticks(&mut app, 10);
    assert!(drain(&app).is_empty());

    let entity = player_entity(&app, 1);
    app.world_mut()
        .get_mut::<PlayerPose>(entity)
        .expect("pose component")
        .eye
        .x += 1.0;
    ticks(&mut app, 10);
    assert_eq!(teleports(&drain(&app)), 1);
}

#[test]
fn mirror_policy_dresses_the_pet_and_gates_head_tilt() {
    let mut app = test_app();

    join(&mut app, 1);
    tick(&mut app);
    drain(&app);

    let entity = player_entity(&app, 1);
    {
        let mut hands = app
            .world_mut()
            .get_mut::<Hands>(entity)
            .expect("hands component");
        hands.main_hand = Some(ItemStack::of("torch"));
        hands.off_hand = Some(ItemStack::of("shield"));
    }
    ticks(&mut app, 10);

    let updates = drain(&app);
    assert!(updates.contains(&SpaceUpdate::Stand {
        stand_id: 1,
        change: StandChange::Helmet(Some(ItemStack::of("torch"))),
    }));
    assert!(!app.world().resource::<Pets>().rotate_z_of(1));

    {
        let mut hands = app
            .world_mut()
            .get_mut::<Hands>(entity)
            .expect("hands component");
        hands.off_hand = None;
    }
    tick(&mut app);
    assert!(app.world().resource::<Pets>().rotate_z_of(1));
}

#[test]
fn global_offset_skips_overridden_entries() {
    let mut app = test_app();

    join(&mut app, 1);
    join(&mut app, 2);
    tick(&mut app);

    let pets = app.world().resource::<Pets>();
    let custom = Vec3::new(0.0, 0.5, 0.0);
    pets.set_offset_of(1, custom);

    let global = Vec3::new(0.0, -1.0, -1.0);
    pets.set_offset(global);
    assert_eq!(pets.offset_of(1), Some(custom));
    assert_eq!(pets.offset_of(2), Some(global));
    assert_eq!(pets.offset_of(99), None);
}

#[test]
fn shutdown_removes_pets_and_survives_a_double_close() {
    let mut app = test_app();

    join(&mut app, 1);
    tick(&mut app);
    drain(&app);

    app.world_mut().send_event(AppExit::Success);
    app.world_mut().run_schedule(Last);

    assert_eq!(app.world().resource::<Pets>().count(), 0);
    let updates = drain(&app);
    assert!(updates.iter().any(|update| {
        matches!(
            update,
            SpaceUpdate::Stand {
                change: StandChange::Remove,
                ..
            }
        )
    }));

    // a second exit closes an already-closed space; logged, not fatal
    app.world_mut().send_event(AppExit::Success);
    app.world_mut().run_schedule(Last);
    assert_eq!(app.world().resource::<Pets>().count(), 0);
}
