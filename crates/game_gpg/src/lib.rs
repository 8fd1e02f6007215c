//! # game_gpg
//!
//! Bridges behavior graphs to the game-services achievements backend.
//!
//! - [`config`]: the static table mapping achievement names to service ids.
//! - [`service`]: the [`AchievementService`] facade and an in-process
//!   implementation.
//! - [`nats`]: a facade implementation that forwards calls over NATS.
//! - [`nodes`]: the `increment_achievement` and `grant_achievement` nodes.
//! - [`module`]: registers those nodes as the `gpg` module.

pub mod config;
pub mod error;
pub mod module;
pub mod nats;
pub mod nodes;
pub mod service;

#[cfg(test)]
mod test_support;

pub use config::{AchievementDef, GpgConfig};
pub use error::GpgError;
pub use module::{GRANT_ACHIEVEMENT, INCREMENT_ACHIEVEMENT, MODULE_NAME, initialize_gpg_module};
pub use nats::NatsAchievements;
pub use nodes::{GrantAchievementNode, IncrementAchievementNode};
pub use service::{AchievementService, LocalAchievements};
