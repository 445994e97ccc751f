//! Collision responders.
//!
//! A responder is the action the collision dispatcher runs when two entities
//! whose groups match a [`CollisionRule`](crate::components::collision::CollisionRule)
//! overlap. Responders hold no state of their own: every read and write goes
//! through the [`EngineAccess`] capability handed to them, so the same code
//! runs against the ECS world ([`WorldEngine`]) or any other host.
//!
//! Submodules overview:
//! - [`engine`] – the capability trait, property values and the error type
//! - [`modifier`] – per-rule tuning record with documented defaults
//! - [`bounce`] – single-axis AABB reflection with optional speed-up
//! - [`hit_player`] – destroy a projectile and flag its target
//! - [`worldengine`] – [`EngineAccess`] over a `bevy_ecs` [`World`](bevy_ecs::world::World)

pub mod bounce;
pub mod engine;
pub mod hit_player;
pub mod modifier;
pub mod worldengine;

#[cfg(test)]
pub(crate) mod test_support;

use serde::Deserialize;

pub use bounce::{BounceAxis, boost_speed, bounce, bounce_axis};
pub use engine::{EngineAccess, PropertyValue, ResponderError};
pub use hit_player::{DEFAULT_HIT_SOUND, WAS_HIT_PROPERTY, hit_player};
pub use modifier::Modifier;
pub use worldengine::WorldEngine;

/// Named action a collision rule dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionAction {
    Bounce,
    HitPlayer,
}

impl CollisionAction {
    pub fn name(&self) -> &'static str {
        match self {
            CollisionAction::Bounce => "bounce",
            CollisionAction::HitPlayer => "hit_player",
        }
    }

    /// Run the action with `first` as the entity matching the rule's first group.
    pub fn run<E: EngineAccess>(
        &self,
        engine: &mut E,
        first: E::Id,
        second: E::Id,
        modifier: Option<&Modifier>,
    ) -> Result<(), ResponderError> {
        match self {
            CollisionAction::Bounce => bounce(engine, first, second, modifier),
            CollisionAction::HitPlayer => hit_player(engine, first, second, modifier),
        }
    }
}
