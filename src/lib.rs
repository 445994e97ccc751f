//! Collision responders for a `bevy_ecs` 2D engine.
//!
//! This crate exposes the engine's components, events, resources, systems and
//! the collision responders themselves for use by the headless binary and by
//! integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod responders;
pub mod systems;
