//! Immutable destination store.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};
use thiserror::Error;

use crate::catalog::record::DestinationRecord;
use crate::catalog::seed;

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate destination id {0}")]
    DuplicateId(u32),

    #[error("destination {id}: estimated cost {cost} must be a non-negative number")]
    InvalidCost { id: u32, cost: f64 },

    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ordered, read-only collection of destination records.
///
/// Built once at startup and shared behind an `Arc`. There are no
/// mutating methods, so concurrent readers need no synchronization.
#[derive(Debug, PartialEq)]
pub struct CatalogStore {
    records: Vec<DestinationRecord>,
}

impl CatalogStore {
    /// Build a store, checking id uniqueness and costs.
    pub fn from_records(records: Vec<DestinationRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
            if !record.estimated_cost.is_finite() || record.estimated_cost < 0.0 {
                return Err(CatalogError::InvalidCost {
                    id: record.id,
                    cost: record.estimated_cost,
                });
            }
        }
        Ok(Self { records })
    }

    /// The built-in dataset, created on first use and shared afterwards.
    pub fn builtin() -> Arc<CatalogStore> {
        static BUILTIN: OnceLock<Arc<CatalogStore>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| {
                Arc::new(CatalogStore {
                    records: seed::destinations(),
                })
            })
            .clone()
    }

    /// Read a JSON array of records from `path`.
    pub fn load_json(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        let records: Vec<DestinationRecord> = serde_json::from_str(&content)?;
        Self::from_records(records)
    }

    /// All records in insertion order.
    pub fn list_all(&self) -> &[DestinationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
