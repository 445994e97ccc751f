//! Collision event type.
//!
//! The collision detector triggers [`CollisionEvent`] whenever two entities
//! with box colliders overlap. The collision observer in
//! [`crate::systems::collision`] reacts to it by running the matching
//! collision rules.
use bevy_ecs::prelude::*;

/// Event fired when two entities with BoxCollider overlap.
///
/// No ordering guarantees are provided between [`CollisionEvent::a`] and
/// [`CollisionEvent::b`]; rules reorder them by group.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
}
