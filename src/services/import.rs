use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::database::{self, setup, stats, DbPool};
use crate::domain::NewStats;

/// Loads a JSON array of stats payloads into the database.
pub struct ImportService {
    pool: DbPool,
}

impl ImportService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn run(&self, path: &Path) -> Result<usize> {
        info!("=== Starting Stats Import ===");

        let payloads = Self::read_payloads(path)?;
        info!("  → Read {} stats rows from {}", payloads.len(), path.display());

        let inserted = self.insert_all(&payloads)?;
        info!("=== Import Complete: {} rows ===", inserted);
        Ok(inserted)
    }

    fn read_payloads(path: &Path) -> Result<Vec<NewStats>> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse stats from {}", path.display()))
    }

    /// All rows land or none do.
    fn insert_all(&self, payloads: &[NewStats]) -> Result<usize> {
        let mut conn = database::get_connection(&self.pool)?;
        setup::ensure_schema(&conn)?;

        let tx = conn.transaction().context("Failed to start import transaction")?;
        for (idx, payload) in payloads.iter().enumerate() {
            stats::insert(&tx, payload)
                .with_context(|| format!("Failed to import row {}", idx + 1))?;
        }
        tx.commit().context("Failed to commit import")?;

        Ok(payloads.len())
    }
}
