//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use game_gpg::nats::DEFAULT_NATS_URL;

/// Command-line arguments of the game host.
#[derive(Debug, Parser)]
#[command(name = "game_app", about = "Game host: achievements bridge and entity attributes")]
pub struct Args {
    /// Achievements configuration table (JSON).
    #[arg(short, long)]
    pub config: PathBuf,

    /// Forward achievement requests over NATS instead of tracking them locally.
    #[arg(long)]
    pub nats: bool,

    /// NATS server URL. Falls back to `NATS_URL`, then the default.
    #[arg(long)]
    pub nats_url: Option<String>,

    /// Entity attribute records to load (MessagePack).
    #[arg(short, long)]
    pub entities: Option<PathBuf>,

    /// Write the loaded entity attribute records back out (MessagePack).
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Invoke one `gpg` node by name, e.g. `grant_achievement`.
    #[arg(long)]
    pub fire: Option<String>,

    /// Achievement name passed to the fired node.
    #[arg(long, default_value = "")]
    pub name: String,

    /// Integer flag passed to the fired node.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub flag: i32,
}

impl Args {
    /// NATS server to connect to: `--nats-url`, then `env` (the value of
    /// `NATS_URL`), then [`DEFAULT_NATS_URL`].
    #[must_use]
    pub fn nats_url(&self, env: Option<String>) -> String {
        self.nats_url
            .clone()
            .or(env)
            .unwrap_or_else(|| DEFAULT_NATS_URL.to_string())
    }
}
