//! Destination catalog subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     seed.rs (built-in dataset) or catalog JSON file
//!     → store.rs (validate ids and costs)
//!     → Arc<CatalogStore> (immutable, shared with handlers)
//! ```
//!
//! # Design Decisions
//! - Populated exactly once; no write operations exist
//! - Record order is insertion order and is never changed

pub mod record;
pub mod seed;
pub mod store;

use std::path::Path;
use std::sync::Arc;

use crate::config::CatalogConfig;

pub use record::DestinationRecord;
pub use store::{CatalogError, CatalogStore};

/// Build the catalog described by `config`.
pub fn load(config: &CatalogConfig) -> Result<Arc<CatalogStore>, CatalogError> {
    match &config.path {
        Some(path) => {
            let store = CatalogStore::load_json(Path::new(path))?;
            tracing::info!(path = %path, records = store.len(), "Catalog loaded from file");
            Ok(Arc::new(store))
        }
        None => Ok(CatalogStore::builtin()),
    }
}
