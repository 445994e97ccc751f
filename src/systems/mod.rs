//! Engine systems.
//!
//! Submodules overview
//! - [`audio`] – bridge with the audio thread (forward/poll message queues)
//! - [`collision`] – overlap checks, event emission and rule dispatch
//! - [`movement`] – integrate positions from rigid body velocities and time
//! - [`time`] – update simulation time and delta

pub mod audio;
pub mod collision;
pub mod movement;
pub mod time;
