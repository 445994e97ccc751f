//! ECS resources made available to systems.
//!
//! Overview
//! - `audio` – bridge and channels for the background audio thread
//! - `gameconfig` – simulation settings loaded from an INI file
//! - `worldtime` – simulation time and delta
pub mod audio;
pub mod gameconfig;
pub mod worldtime;
