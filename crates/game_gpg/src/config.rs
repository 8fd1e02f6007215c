//! The achievements configuration table.
//!
//! Designers refer to achievements by readable names (`"first_patron"`); the
//! backend knows them by opaque ids. The table is loaded once, before the
//! `gpg` module is initialised, and shared read-only afterwards.
//!
//! ```json
//! {
//!   "achievements": [
//!     { "name": "first_patron", "id": "CgkIq7Pp6NIFEAIQAQ" }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GpgError;

/// One achievement: its designer-facing name and its service id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementDef {
    pub name: String,
    pub id: String,
}

impl AchievementDef {
    /// Pair an achievement name with its service id.
    #[must_use]
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}

#[derive(Deserialize)]
struct RawConfig {
    #[serde(default)]
    achievements: Vec<AchievementDef>,
}

/// Name → id table, kept sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GpgConfig {
    achievements: Vec<AchievementDef>,
}

impl GpgConfig {
    /// Build a table from definitions.
    ///
    /// # Errors
    ///
    /// Returns [`GpgError::InvalidConfig`] if a name or id is empty or a name
    /// appears twice.
    pub fn from_achievements(mut achievements: Vec<AchievementDef>) -> Result<Self, GpgError> {
        let mut seen = HashSet::new();
        for def in &achievements {
            if def.name.is_empty() {
                return Err(GpgError::InvalidConfig(format!(
                    "achievement with id {:?} has an empty name",
                    def.id
                )));
            }
            if def.id.is_empty() {
                return Err(GpgError::InvalidConfig(format!(
                    "achievement {:?} has an empty id",
                    def.name
                )));
            }
            if !seen.insert(def.name.as_str()) {
                return Err(GpgError::InvalidConfig(format!(
                    "duplicate achievement name {:?}",
                    def.name
                )));
            }
        }
        achievements.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(Self { achievements })
    }

    /// Parse a table from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GpgError::Json`] for malformed JSON or
    /// [`GpgError::InvalidConfig`] for an invalid table.
    pub fn from_json_str(json: &str) -> Result<Self, GpgError> {
        let raw: RawConfig = serde_json::from_str(json)?;
        Self::from_achievements(raw.achievements)
    }

    /// Read and parse a JSON table from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`GpgError::Io`] if the file cannot be read, otherwise as
    /// [`GpgConfig::from_json_str`].
    pub fn from_path(path: &Path) -> Result<Self, GpgError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Find an achievement by name.
    #[must_use]
    pub fn lookup_by_key(&self, name: &str) -> Option<&AchievementDef> {
        self.achievements
            .binary_search_by(|def| def.name.as_str().cmp(name))
            .ok()
            .map(|i| &self.achievements[i])
    }

    /// The service id for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`GpgError::UnknownAchievement`] if `name` is not in the table.
    pub fn resolve(&self, name: &str) -> Result<&str, GpgError> {
        self.lookup_by_key(name)
            .map(|def| def.id.as_str())
            .ok_or_else(|| GpgError::UnknownAchievement(name.to_string()))
    }

    /// Definitions sorted by name.
    #[must_use]
    pub fn achievements(&self) -> &[AchievementDef] {
        &self.achievements
    }

    /// Number of configured achievements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.achievements.len()
    }

    /// Whether no achievements are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.achievements.is_empty()
    }
}
