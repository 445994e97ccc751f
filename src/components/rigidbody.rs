//! Kinematic body component.
//!
//! The [`RigidBody`] component stores the velocity the movement system
//! integrates into [`MapPosition`](super::mapposition::MapPosition), and the
//! velocity collision responders read and rewrite.
//!
//! The `frozen` flag allows temporarily disabling movement, useful when an
//! entity's position is controlled externally.

use bevy_ecs::prelude::Component;

/// Kinematic body storing velocity in world units per second.
///
/// # Example
/// ```ignore
/// let mut rb = RigidBody::with_velocity(120.0, -80.0);
/// rb.frozen = true;    // movement system leaves it alone
/// ```
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct RigidBody {
    /// Horizontal velocity.
    pub vx: f32,
    /// Vertical velocity.
    pub vy: f32,
    /// When true, movement system skips this entity.
    pub frozen: bool,
}

impl RigidBody {
    /// Create a RigidBody with zero velocity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a RigidBody moving with the given velocity.
    pub fn with_velocity(vx: f32, vy: f32) -> Self {
        Self {
            vx,
            vy,
            frozen: false,
        }
    }

    /// Get the current velocity.
    pub fn velocity(&self) -> (f32, f32) {
        (self.vx, self.vy)
    }

    /// Set the velocity of the RigidBody.
    pub fn set_velocity(&mut self, vx: f32, vy: f32) {
        self.vx = vx;
        self.vy = vy;
    }

    /// Magnitude of the velocity.
    pub fn speed(&self) -> f32 {
        self.vx.hypot(self.vy)
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }
}
