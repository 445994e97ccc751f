//! Bounce responder.
//!
//! Reflects the first entity's velocity on a single axis picked from how
//! deeply the two bounding boxes overlap on each axis: the shallower axis is
//! the one the boxes collided along. Afterwards the speed may be boosted
//! toward a cap and a sound may be played.
//!
//! This is a single-axis approximation, not a reflection about a contact
//! normal. On equal overlap the vertical axis wins.

use log::debug;

use super::engine::{EngineAccess, ResponderError};
use super::modifier::{DEFAULT_MAX_SPEED, Modifier};
use crate::components::boxcollider::Aabb;

/// Axis whose velocity component gets negated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceAxis {
    Horizontal,
    Vertical,
}

/// Pick the bounce axis for `a` colliding with `b`.
///
/// The boxes are assumed to overlap already; nothing here checks it.
pub fn bounce_axis(a: &Aabb, b: &Aabb) -> BounceAxis {
    let (ax, ay) = a.center();
    let (bx, by) = b.center();
    let dx = ax - bx;
    let dy = ay - by;
    let overlap_x = (a.w + b.w) / 2.0 - dx.abs();
    let overlap_y = (a.h + b.h) / 2.0 - dy.abs();
    if overlap_x < overlap_y {
        BounceAxis::Horizontal
    } else {
        BounceAxis::Vertical
    }
}

/// Apply the modifier's speed increase to `velocity`, capped at `max_speed`.
///
/// Returns the velocity unchanged when there is no increase, when the speed
/// already sits at or above the cap, or when the body is at rest. A cap that
/// is not a positive finite number is replaced by the default cap.
pub fn boost_speed(velocity: (f32, f32), modifier: &Modifier) -> (f32, f32) {
    if !(modifier.speed_increase > 0.0) {
        return velocity;
    }
    let max_speed = if modifier.max_speed.is_finite() && modifier.max_speed > 0.0 {
        modifier.max_speed
    } else {
        DEFAULT_MAX_SPEED
    };
    let (vx, vy) = velocity;
    let speed = vx.hypot(vy);
    if speed <= 0.0 || speed >= max_speed {
        return velocity;
    }
    let new_speed = (speed + modifier.speed_increase).min(max_speed);
    let k = new_speed / speed;
    (vx * k, vy * k)
}

/// Bounce `entity_a` off `entity_b`.
pub fn bounce<E: EngineAccess>(
    engine: &mut E,
    entity_a: E::Id,
    entity_b: E::Id,
    modifier: Option<&Modifier>,
) -> Result<(), ResponderError> {
    let a = engine.bounds(entity_a)?;
    let b = engine.bounds(entity_b)?;
    let (vx, vy) = engine.velocity(entity_a)?;

    let axis = bounce_axis(&a, &b);
    let reflected = match axis {
        BounceAxis::Horizontal => (-vx, vy),
        BounceAxis::Vertical => (vx, -vy),
    };
    let (nvx, nvy) = match modifier {
        Some(m) => boost_speed(reflected, m),
        None => reflected,
    };
    debug!(
        "bounce {:?} off {:?}: {:?} ({}, {}) -> ({}, {})",
        entity_a, entity_b, axis, vx, vy, nvx, nvy
    );
    engine.set_velocity(entity_a, nvx, nvy)?;

    if let Some(sound) = modifier.and_then(Modifier::sound) {
        engine.play_sound(sound)?;
    }
    Ok(())
}
