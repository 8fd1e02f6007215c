//! Shared test doubles.

use std::sync::{Arc, Mutex};

use crate::config::{AchievementDef, GpgConfig};
use crate::error::GpgError;
use crate::nats::AchievementOp;
use crate::service::AchievementService;

/// Records every call it receives.
#[derive(Debug, Default)]
pub struct RecordingService {
    calls: Mutex<Vec<(AchievementOp, String)>>,
}

impl RecordingService {
    pub fn calls(&self) -> Vec<(AchievementOp, String)> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, op: AchievementOp, id: &str) -> Result<(), GpgError> {
        self.calls.lock().unwrap().push((op, id.to_string()));
        Ok(())
    }
}

impl AchievementService for RecordingService {
    fn increment(&self, id: &str) -> Result<(), GpgError> {
        self.record(AchievementOp::Increment, id)
    }

    fn unlock(&self, id: &str) -> Result<(), GpgError> {
        self.record(AchievementOp::Unlock, id)
    }
}

pub fn config() -> Arc<GpgConfig> {
    Arc::new(
        GpgConfig::from_achievements(vec![
            AchievementDef::new("first_patron", "CgkI-first"),
            AchievementDef::new("lap_master", "CgkI-lap"),
        ])
        .unwrap(),
    )
}
