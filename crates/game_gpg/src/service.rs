//! The achievements-service facade.
//!
//! Nodes only see [`AchievementService`]. Which backend sits behind it is
//! decided once at startup: [`LocalAchievements`] keeps progress in process,
//! [`NatsAchievements`](crate::NatsAchievements) forwards to the backend.

use dashmap::{DashMap, DashSet};
use tracing::info;

use crate::error::GpgError;

/// Operations the achievements backend supports, keyed by service id.
pub trait AchievementService: Send + Sync {
    /// Advance an incremental achievement by one step.
    ///
    /// # Errors
    ///
    /// Returns a [`GpgError`] if the request cannot be delivered.
    fn increment(&self, id: &str) -> Result<(), GpgError>;

    /// Unlock an achievement. Unlocking twice is harmless.
    ///
    /// # Errors
    ///
    /// Returns a [`GpgError`] if the request cannot be delivered.
    fn unlock(&self, id: &str) -> Result<(), GpgError>;
}

/// In-process achievement progress, for offline play and tooling.
#[derive(Debug, Default)]
pub struct LocalAchievements {
    steps: DashMap<String, u32>,
    unlocked: DashSet<String>,
}

impl LocalAchievements {
    /// Create a tracker with no progress.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Steps recorded for `id` so far.
    #[must_use]
    pub fn steps(&self, id: &str) -> u32 {
        self.steps.get(id).map_or(0, |s| *s)
    }

    /// Whether `id` has been unlocked.
    #[must_use]
    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked.contains(id)
    }

    /// Number of distinct unlocked achievements.
    #[must_use]
    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }
}

impl AchievementService for LocalAchievements {
    fn increment(&self, id: &str) -> Result<(), GpgError> {
        let mut steps = self.steps.entry(id.to_string()).or_insert(0);
        *steps = steps.saturating_add(1);
        info!(id, steps = *steps, "achievement incremented");
        Ok(())
    }

    fn unlock(&self, id: &str) -> Result<(), GpgError> {
        if self.unlocked.insert(id.to_string()) {
            info!(id, "achievement unlocked");
        }
        Ok(())
    }
}
