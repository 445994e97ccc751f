//! Event and message types exchanged between systems.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the background audio thread
//! - [`collision`] – collision notifications emitted by the collision detector
pub mod audio;
pub mod collision;
