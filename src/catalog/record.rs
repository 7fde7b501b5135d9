//! Destination record type.

use serde::{Deserialize, Serialize};

/// One travel recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationRecord {
    /// Unique within a catalog.
    pub id: u32,
    /// Display name, e.g. "Paris, France".
    pub destination: String,
    pub description: String,
    /// Non-negative, in an implied currency unit.
    pub estimated_cost: f64,
    /// Free text, e.g. "5-7 days".
    pub recommended_duration: String,
    pub highlights: Vec<String>,
}

impl DestinationRecord {
    /// Case-insensitive substring match against the display name.
    ///
    /// An empty needle matches every record.
    pub fn destination_contains(&self, needle: &str) -> bool {
        self.destination
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }

    /// True when the record costs no more than `budget`.
    pub fn within_budget(&self, budget: f64) -> bool {
        self.estimated_cost <= budget
    }
}
