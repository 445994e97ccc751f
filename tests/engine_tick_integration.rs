//! Engine tick integration tests for movement, collision detection and
//! collision rule dispatch.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemState;

use collision_responders::components::boxcollider::BoxCollider;
use collision_responders::components::collision::{CollisionRule, CollisionRulesFile};
use collision_responders::components::group::Group;
use collision_responders::components::mapposition::MapPosition;
use collision_responders::components::rigidbody::RigidBody;
use collision_responders::components::signals::Signals;
use collision_responders::events::audio::AudioCmd;
use collision_responders::resources::audio::register_sound_queues;
use collision_responders::events::collision::CollisionEvent;
use collision_responders::resources::worldtime::WorldTime;
use collision_responders::responders::{CollisionAction, Modifier};
use collision_responders::systems::collision::{
    collision_detector, collision_observer, dispatch_collision,
};
use collision_responders::systems::movement::movement;
use collision_responders::systems::time::update_world_time;

const EPSILON: f32 = 1e-3;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    register_sound_queues(&mut world);
    world
}

fn tick_movement(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(movement);
    schedule.run(world);
}

fn tick_collision_detector(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(collision_detector);
    schedule.run(world);
    world.flush();
}

fn played_sounds(world: &mut World) -> Vec<String> {
    world.resource_mut::<Messages<AudioCmd>>().update();
    let mut state = SystemState::<MessageReader<AudioCmd>>::new(world);
    let mut reader = state.get_mut(world);
    reader
        .read()
        .filter_map(|cmd| match cmd {
            AudioCmd::PlayFx { id } => Some(id.clone()),
            AudioCmd::Shutdown => None,
        })
        .collect()
}

fn spawn_ball(world: &mut World, x: f32, y: f32, vx: f32, vy: f32) -> Entity {
    world
        .spawn((
            Group::new("ball"),
            MapPosition::new(x, y),
            BoxCollider::new(10.0, 10.0),
            RigidBody::with_velocity(vx, vy),
        ))
        .id()
}

fn spawn_paddle(world: &mut World) -> Entity {
    world
        .spawn((
            Group::new("paddle"),
            MapPosition::new(0.0, 100.0),
            BoxCollider::new(200.0, 20.0),
        ))
        .id()
}

// =============================================================================
// Movement
// =============================================================================

#[test]
fn movement_integrates_velocity_into_position() {
    let mut world = make_world();
    let entity = world
        .spawn((MapPosition::new(0.0, 0.0), RigidBody::with_velocity(10.0, -4.0)))
        .id();

    update_world_time(&mut world, 0.5);
    tick_movement(&mut world);

    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(pos.x, 5.0));
    assert!(approx_eq(pos.y, -2.0));
}

#[test]
fn movement_skips_frozen_bodies() {
    let mut world = make_world();
    let mut rb = RigidBody::with_velocity(10.0, 10.0);
    rb.freeze();
    let entity = world.spawn((MapPosition::new(1.0, 1.0), rb)).id();

    update_world_time(&mut world, 1.0);
    tick_movement(&mut world);

    let pos = world.get::<MapPosition>(entity).unwrap();
    assert_eq!((pos.x, pos.y), (1.0, 1.0));
}

#[test]
fn world_time_applies_time_scale_and_counts_frames() {
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(0.5));
    update_world_time(&mut world, 0.2);
    update_world_time(&mut world, 0.2);
    let wt = world.resource::<WorldTime>();
    assert!(approx_eq(wt.delta, 0.1));
    assert!(approx_eq(wt.elapsed, 0.2));
    assert_eq!(wt.frame_count, 2);
}

// =============================================================================
// Collision detection
// =============================================================================

#[test]
fn detector_triggers_event_for_overlapping_pair_only() {
    let mut world = make_world();
    let a = spawn_ball(&mut world, 0.0, 0.0, 0.0, 0.0);
    let b = spawn_ball(&mut world, 5.0, 5.0, 0.0, 0.0);
    let _far = spawn_ball(&mut world, 500.0, 500.0, 0.0, 0.0);

    let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    world.add_observer(move |trigger: On<CollisionEvent>| {
        let ev = *trigger.event();
        seen_clone.lock().unwrap().push((ev.a, ev.b));
    });
    world.flush();

    tick_collision_detector(&mut world);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (x, y) = seen[0];
    assert!((x == a && y == b) || (x == b && y == a));
}

// =============================================================================
// Rule dispatch
// =============================================================================

#[test]
fn dispatch_runs_bounce_with_entities_in_rule_order() {
    let mut world = make_world();
    let paddle = spawn_paddle(&mut world);
    let ball = spawn_ball(&mut world, 50.0, 92.0, 30.0, 200.0);
    world.spawn(CollisionRule::new("ball", "paddle", CollisionAction::Bounce));

    // Reported paddle-first; the rule still bounces the ball.
    assert_eq!(dispatch_collision(&mut world, paddle, ball), 1);

    let rb = world.get::<RigidBody>(ball).unwrap();
    assert_eq!(rb.velocity(), (30.0, -200.0));
}

#[test]
fn dispatch_without_matching_rule_does_nothing() {
    let mut world = make_world();
    let paddle = spawn_paddle(&mut world);
    let ball = spawn_ball(&mut world, 50.0, 92.0, 30.0, 200.0);
    world.spawn(CollisionRule::new("ball", "wall", CollisionAction::Bounce));

    assert_eq!(dispatch_collision(&mut world, ball, paddle), 0);
    assert_eq!(
        world.get::<RigidBody>(ball).unwrap().velocity(),
        (30.0, 200.0)
    );
}

#[test]
fn dispatch_ignores_entities_without_group() {
    let mut world = make_world();
    let a = world
        .spawn((MapPosition::new(0.0, 0.0), BoxCollider::new(4.0, 4.0)))
        .id();
    let ball = spawn_ball(&mut world, 0.0, 0.0, 1.0, 1.0);
    world.spawn(CollisionRule::new("ball", "paddle", CollisionAction::Bounce));
    assert_eq!(dispatch_collision(&mut world, a, ball), 0);
}

#[test]
fn dispatch_logs_failed_action_and_continues() {
    let mut world = make_world();
    let paddle = spawn_paddle(&mut world);
    // No RigidBody: the bounce fails on the velocity read.
    let ghost = world
        .spawn((
            Group::new("ball"),
            MapPosition::new(50.0, 92.0),
            BoxCollider::new(10.0, 10.0),
        ))
        .id();
    world.spawn(CollisionRule::new("ball", "paddle", CollisionAction::Bounce));
    world.spawn(
        CollisionRule::new("paddle", "ball", CollisionAction::HitPlayer)
            .with_modifier(Modifier::default().with_sound("crunch")),
    );

    assert_eq!(dispatch_collision(&mut world, ghost, paddle), 1);
    assert!(world.get_entity(paddle).is_err());
    assert!(world.get::<Signals>(ghost).unwrap().has_flag("was_hit"));
}

#[test]
fn dispatch_stops_once_an_entity_is_destroyed() {
    let mut world = make_world();
    let player = world
        .spawn((
            Group::new("player"),
            MapPosition::new(0.0, 0.0),
            BoxCollider::new(16.0, 16.0),
        ))
        .id();
    let bullet = world
        .spawn((
            Group::new("bullet"),
            MapPosition::new(4.0, 4.0),
            BoxCollider::new(4.0, 8.0),
            RigidBody::with_velocity(0.0, 100.0),
        ))
        .id();
    world.spawn(CollisionRule::new("bullet", "player", CollisionAction::HitPlayer));
    world.spawn(CollisionRule::new("bullet", "player", CollisionAction::HitPlayer));

    assert_eq!(dispatch_collision(&mut world, player, bullet), 1);
    assert_eq!(played_sounds(&mut world), vec!["player_hit".to_string()]);
}

// =============================================================================
// Full pipeline
// =============================================================================

#[test]
fn collision_pipeline_bounces_and_boosts_ball() {
    let mut world = make_world();
    spawn_paddle(&mut world);
    let ball = spawn_ball(&mut world, 50.0, 92.0, 300.0, 400.0);
    world.spawn(
        CollisionRule::new("ball", "paddle", CollisionAction::Bounce).with_modifier(
            Modifier::default()
                .with_speed_increase(5.0)
                .with_max_speed(600.0)
                .with_sound("paddle"),
        ),
    );
    world.add_observer(collision_observer);
    world.flush();

    tick_collision_detector(&mut world);

    let rb = world.get::<RigidBody>(ball).unwrap();
    assert!(approx_eq(rb.speed(), 505.0));
    assert!(approx_eq(rb.vx, 303.0));
    assert!(approx_eq(rb.vy, -404.0));
    assert_eq!(played_sounds(&mut world), vec!["paddle".to_string()]);
}

#[test]
fn collision_pipeline_hit_player_from_rules_file() {
    let mut world = make_world();
    let rules = CollisionRulesFile::from_json_str(
        r#"{ "rules": [ { "groups": ["bullet", "player"], "action": "hit_player",
                          "modifier": { "play_sound": "ouch" } } ] }"#,
    )
    .unwrap()
    .into_rules();
    for rule in rules {
        world.spawn(rule);
    }

    let player = world
        .spawn((
            Group::new("player"),
            MapPosition::new(0.0, 0.0),
            BoxCollider::new(16.0, 16.0),
        ))
        .id();
    let bullet = world
        .spawn((
            Group::new("bullet"),
            MapPosition::new(6.0, 10.0),
            BoxCollider::new(4.0, 8.0),
            RigidBody::with_velocity(0.0, 240.0),
        ))
        .id();
    world.add_observer(collision_observer);
    world.flush();

    tick_collision_detector(&mut world);

    assert!(world.get_entity(bullet).is_err());
    assert!(world.get::<Signals>(player).unwrap().has_flag("was_hit"));
    assert_eq!(played_sounds(&mut world), vec!["ouch".to_string()]);
}
