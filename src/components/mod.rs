//! ECS components for entities.
//!
//! Submodules overview:
//! - [`boxcollider`] – axis-aligned rectangular collider for collision detection
//! - [`collision`] – collision rules mapping group pairs to responders
//! - [`group`] – tag component naming the entity type
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`rigidbody`] – simple kinematic body storing velocity
//! - [`signals`] – per-entity named properties

pub mod boxcollider;
pub mod collision;
pub mod group;
pub mod mapposition;
pub mod rigidbody;
pub mod signals;
