//! World-space position of an entity.
//!
//! The position is the pivot the [`BoxCollider`](super::boxcollider::BoxCollider)
//! offset is applied to, and the value the movement system integrates
//! velocity into.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub x: f32,
    pub y: f32,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }
}
