//! Lookups and filtering over the catalog.

use std::sync::Arc;
use thiserror::Error;

use crate::catalog::{CatalogStore, DestinationRecord};
use crate::query::types::{SearchResponse, TravelQuery, NO_MATCH_MESSAGE, SUGGESTION_COUNT};

/// Errors returned by query operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Destination not found")]
    NotFound,
}

/// Stateless query operations over a shared catalog.
#[derive(Debug, Clone)]
pub struct QueryService {
    catalog: Arc<CatalogStore>,
}

impl QueryService {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self { catalog }
    }

    /// Every record, in catalog order.
    pub fn list_all(&self) -> &[DestinationRecord] {
        self.catalog.list_all()
    }

    /// First record (in catalog order) whose destination contains `name`,
    /// ignoring case.
    pub fn find_by_destination(&self, name: &str) -> Result<&DestinationRecord, QueryError> {
        self.catalog
            .list_all()
            .iter()
            .find(|r| r.destination_contains(name))
            .ok_or(QueryError::NotFound)
    }

    /// Records matching the destination substring and, when given, the budget.
    ///
    /// An empty match set yields the fallback payload instead of an error.
    pub fn search(&self, query: &TravelQuery) -> SearchResponse {
        let results: Vec<DestinationRecord> = self
            .catalog
            .list_all()
            .iter()
            .filter(|r| r.destination_contains(&query.destination))
            .filter(|r| query.budget.map_or(true, |budget| r.within_budget(budget)))
            .cloned()
            .collect();

        if results.is_empty() {
            return SearchResponse::Fallback {
                message: NO_MATCH_MESSAGE.to_string(),
                suggestions: self
                    .catalog
                    .list_all()
                    .iter()
                    .take(SUGGESTION_COUNT)
                    .cloned()
                    .collect(),
            };
        }

        let count = results.len();
        SearchResponse::Results { results, count }
    }
}
