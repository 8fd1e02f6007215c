//! Loading and saving entity attribute records.
//!
//! Files hold a MessagePack array of [`ComponentRecord`]s, one per entity,
//! each carrying that entity's `Attributes` raw data.

use std::path::Path;

use anyhow::{Context, Result};
use game_components::{AttributeDef, AttributesComponent};
use game_entity::ComponentRecord;
use tracing::{debug, info};

/// Read records from `path` and import them into `store`.
pub fn load(store: &mut AttributesComponent, path: &Path) -> Result<usize> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read entity records from {}", path.display()))?;
    let records: Vec<ComponentRecord> = rmp_serde::from_slice(&bytes)
        .with_context(|| format!("malformed entity records in {}", path.display()))?;
    let count = store
        .import_records(&records)
        .context("failed to import attribute records")?;

    for (entity, data) in store.iter() {
        debug!(
            %entity,
            target_score = data.get(AttributeDef::TargetScore),
            patrons_fed = data.get(AttributeDef::PatronsFed),
            "entity attributes loaded"
        );
    }
    info!(count, path = %path.display(), "entity attributes loaded");
    Ok(count)
}

/// Write every attached entity in `store` to `path`.
pub fn save(store: &AttributesComponent, path: &Path) -> Result<usize> {
    let records = store
        .export_records()
        .context("failed to export attribute records")?;
    let bytes = rmp_serde::to_vec_named(&records)?;
    std::fs::write(path, bytes)
        .with_context(|| format!("failed to write entity records to {}", path.display()))?;
    info!(count = records.len(), path = %path.display(), "entity attributes saved");
    Ok(records.len())
}
