//! Headless collision demo.
//!
//! Loads the simulation config (INI) and the collision rule table (JSON),
//! builds the demo scene and runs a fixed number of frames without a window.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --rules ./collision_rules.json --ticks 300
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use bevy_ecs::prelude::*;
use clap::Parser;

use collision_responders::components::collision::CollisionRulesFile;
use collision_responders::components::group::Group;
use collision_responders::components::rigidbody::RigidBody;
use collision_responders::components::signals::Signals;
use collision_responders::game;
use collision_responders::resources::audio::{setup_audio, shutdown_audio};
use collision_responders::resources::gameconfig::GameConfig;
use collision_responders::resources::worldtime::WorldTime;
use collision_responders::systems::time::update_world_time;

/// Headless collision responder demo
#[derive(Parser)]
#[command(version, about = "Runs the collision responder demo scene without a window")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Collision rules JSON file (overrides the config value).
    #[arg(long, value_name = "PATH")]
    rules: Option<PathBuf>,

    /// Number of frames to simulate (overrides the config value).
    #[arg(long)]
    ticks: Option<u32>,

    /// Seed for the scene's random velocities (overrides the config value).
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}, using defaults", e);
    }
    if let Some(rules) = cli.rules {
        config.rules_path = rules;
    }
    if let Some(ticks) = cli.ticks {
        config.ticks = ticks;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    let rules = match CollisionRulesFile::load_from_file(&config.rules_path) {
        Ok(file) => file.into_rules(),
        Err(e) => {
            log::error!("{:?}: {}", config.rules_path, e);
            return ExitCode::FAILURE;
        }
    };

    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    setup_audio(&mut world);
    let rule_count = game::spawn_collision_rules(&mut world, rules);
    game::setup(&mut world, &config);
    world.insert_resource(config.clone());
    log::info!("scene ready with {} collision rules", rule_count);

    let mut update = game::build_update_schedule();
    for _ in 0..config.ticks {
        update_world_time(&mut world, config.delta);
        update.run(&mut world);
        world.clear_trackers();
    }

    let mut balls = world.query::<(&Group, &RigidBody)>();
    for (group, rb) in balls.iter(&world) {
        if group.name() == "ball" {
            log::info!("ball speed after {} frames: {:.1}", config.ticks, rb.speed());
        }
    }
    let mut players = world.query::<(&Group, &Signals)>();
    for (group, signals) in players.iter(&world) {
        if group.name() == "player" {
            log::info!(
                "player lives: {}",
                signals.get_integer("lives").unwrap_or_default()
            );
        }
    }

    shutdown_audio(&mut world);
    ExitCode::SUCCESS
}
