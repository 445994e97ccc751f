//! Headless demo scene.
//!
//! An arena closed by walls, a ball bouncing inside it, a paddle that speeds
//! the ball up, and a player shot at by a column of falling bullets. The
//! collision rule table decides what each contact does; this module only
//! builds the world, evaluates hits and wires the update schedule.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::boxcollider::BoxCollider;
use crate::components::collision::CollisionRule;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::signals::Signals;
use crate::resources::gameconfig::GameConfig;
use crate::responders::WAS_HIT_PROPERTY;
use crate::systems::audio::{
    forward_audio_cmds, poll_audio_messages, update_bevy_audio_cmds, update_bevy_audio_messages,
};
use crate::systems::collision::{collision_detector, collision_observer};
use crate::systems::movement::movement;

const WALL_THICKNESS: f32 = 20.0;
const BALL_SIZE: f32 = 8.0;
const PLAYER_LIVES: i32 = 3;
const BULLET_SPEED: f32 = 240.0;
const BULLET_COUNT: usize = 3;
const BULLET_SPACING: f32 = 60.0;

/// Spawn each rule on its own entity. Returns how many were spawned.
pub fn spawn_collision_rules(world: &mut World, rules: Vec<CollisionRule>) -> usize {
    let count = rules.len();
    for rule in rules {
        info!(
            "rule: {} + {} -> {}",
            rule.group_a,
            rule.group_b,
            rule.action.name()
        );
        world.spawn((Group::new("collision_rules"), rule));
    }
    count
}

fn spawn_wall(world: &mut World, x: f32, y: f32, w: f32, h: f32) {
    world.spawn((
        Group::new("wall"),
        MapPosition::new(x, y),
        BoxCollider::new(w, h),
    ));
}

/// Build the demo scene and register the collision observer.
pub fn setup(world: &mut World, config: &GameConfig) {
    let w = config.arena_width;
    let h = config.arena_height;
    let mut rng = fastrand::Rng::with_seed(config.seed);

    spawn_wall(world, -WALL_THICKNESS, 0.0, WALL_THICKNESS, h);
    spawn_wall(world, w, 0.0, WALL_THICKNESS, h);
    spawn_wall(world, 0.0, -WALL_THICKNESS, w, WALL_THICKNESS);
    spawn_wall(world, 0.0, h, w, WALL_THICKNESS);

    world.spawn((
        Group::new("paddle"),
        MapPosition::new(w / 2.0 - 40.0, h - 30.0),
        BoxCollider::new(80.0, 10.0),
    ));

    let vx = 80.0 + rng.f32() * 120.0;
    let vx = if rng.bool() { vx } else { -vx };
    let vy = -(150.0 + rng.f32() * 100.0);
    world.spawn((
        Group::new("ball"),
        MapPosition::new(w / 2.0 - BALL_SIZE / 2.0, h / 2.0),
        BoxCollider::new(BALL_SIZE, BALL_SIZE),
        RigidBody::with_velocity(vx, vy),
    ));

    let player_x = w / 4.0;
    let player_y = h / 2.0;
    let mut signals = Signals::default();
    signals.set_integer("lives", PLAYER_LIVES);
    world.spawn((
        Group::new("player"),
        MapPosition::new(player_x, player_y),
        BoxCollider::new(16.0, 16.0),
        signals,
    ));

    for i in 0..BULLET_COUNT {
        world.spawn((
            Group::new("bullet"),
            MapPosition::new(player_x + 6.0, player_y - 80.0 - i as f32 * BULLET_SPACING),
            BoxCollider::new(4.0, 8.0),
            RigidBody::with_velocity(0.0, BULLET_SPEED),
        ));
    }

    world.add_observer(collision_observer);
    world.flush();
}

/// Turn the `was_hit` flag raised by the hit responder into a lost life.
pub fn player_hit_system(mut query: Query<(Entity, &Group, &mut Signals)>) {
    for (entity, group, mut signals) in query.iter_mut() {
        if !signals.has_flag(WAS_HIT_PROPERTY) {
            continue;
        }
        signals.clear_flag(WAS_HIT_PROPERTY);
        let lives = signals.get_integer("lives").unwrap_or(0) - 1;
        signals.set_integer("lives", lives);
        info!("{} {:?} was hit, {} lives left", group.name(), entity, lives);
        if lives <= 0 {
            signals.set_flag("dead");
        }
    }
}

/// Despawn moving bodies that left the arena bounds.
pub fn out_of_bounds_system(
    query: Query<(Entity, &MapPosition), With<RigidBody>>,
    config: Res<GameConfig>,
    mut commands: Commands,
) {
    let margin = WALL_THICKNESS * 2.0;
    for (entity, pos) in query.iter() {
        if pos.x < -margin
            || pos.y < -margin - BULLET_SPACING * BULLET_COUNT as f32
            || pos.x > config.arena_width + margin
            || pos.y > config.arena_height + margin
        {
            commands.entity(entity).try_despawn();
        }
    }
}

/// Frame schedule: move, detect and dispatch collisions, evaluate hits,
/// then pump the audio bridge.
pub fn build_update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(movement);
    update.add_systems(out_of_bounds_system.after(movement));
    update.add_systems(collision_detector.after(out_of_bounds_system));
    update.add_systems(player_hit_system.after(collision_detector));
    update.add_systems(
        (
            update_bevy_audio_cmds,
            forward_audio_cmds,
            poll_audio_messages,
            update_bevy_audio_messages,
        )
            .chain()
            .after(player_hit_system),
    );
    update
}
