//! # game_app
//!
//! Host process for the gameplay runtime.
//!
//! ## Startup Sequence
//!
//! 1. Load the achievements table (`--config`).
//! 2. Pick the achievements backend: NATS with `--nats`, in-process otherwise.
//! 3. Register the `gpg` node module and log every registered node kind.
//! 4. Optionally load entity attributes (`--entities`) and write them back
//!    out (`--export`).
//! 5. Optionally fire one node (`--fire`).
//! 6. Drain queued achievement events before exiting.

mod cli;
mod entities;
mod fire;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use game_components::AttributesComponent;
use game_graph::EventSystem;
use game_gpg::nats::NATS_URL_ENV;
use game_gpg::{
    AchievementService, GpgConfig, LocalAchievements, MODULE_NAME, NatsAchievements,
    initialize_gpg_module,
};

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("game_app=info".parse()?))
        .init();

    let args = Args::parse();
    info!("game host starting");

    let config = GpgConfig::from_path(&args.config)
        .with_context(|| format!("failed to load {}", args.config.display()))?;
    info!(achievements = config.len(), "achievements table loaded");

    let mut publisher = None;
    let service: Arc<dyn AchievementService> = if args.nats {
        let url = args.nats_url(std::env::var(NATS_URL_ENV).ok());
        let (facade, handle) = NatsAchievements::connect(&url).await?;
        info!(client_id = facade.client_id(), "forwarding achievements over NATS");
        publisher = Some(handle);
        Arc::new(facade)
    } else {
        info!("tracking achievements locally");
        Arc::new(LocalAchievements::new())
    };

    let mut events = EventSystem::new();
    initialize_gpg_module(&mut events, Arc::new(config), service);
    for (module, node) in events.node_kinds() {
        info!(module, node, "node kind registered");
    }

    if let Some(path) = &args.entities {
        let mut attributes = AttributesComponent::new();
        entities::load(&mut attributes, path)?;
        if let Some(out) = &args.export {
            entities::save(&attributes, out)?;
        }
    }

    if let Some(node) = &args.fire {
        fire::fire(&events, MODULE_NAME, node, &args.name, args.flag)?;
    }

    // The node constructors hold the last facade handles; dropping them
    // closes the queue so the publisher can drain and exit.
    drop(events);
    if let Some(handle) = publisher {
        handle.await.context("achievement publisher panicked")?;
    }

    info!("game host shut down");
    Ok(())
}
