//! Search request and response types.

use serde::{Deserialize, Serialize};

use crate::catalog::DestinationRecord;

/// Message returned with suggestions when a search matches nothing.
pub const NO_MATCH_MESSAGE: &str = "No destinations found matching your criteria";

/// Number of records offered as suggestions on an empty search.
pub const SUGGESTION_COUNT: usize = 2;

/// Caller-supplied search criteria.
///
/// `start_date`, `end_date` and `preferences` are accepted for client
/// compatibility and do not take part in filtering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TravelQuery {
    pub destination: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(
        default,
        deserialize_with = "number_or_numeric_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub budget: Option<f64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub preferences: Vec<String>,
}

impl TravelQuery {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            ..Default::default()
        }
    }

    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = Some(budget);
        self
    }
}

/// `"preferences": null` is accepted and treated as an empty list.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts `3000`, `3000.5` or `"3000"` for the budget.
fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Budget {
        Number(f64),
        Text(String),
    }

    match Option::<Budget>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Budget::Number(n)) => Ok(Some(n)),
        Some(Budget::Text(text)) => text.trim().parse::<f64>().map(Some).map_err(|_| {
            serde::de::Error::custom(format!("budget: {text:?} is not a valid number"))
        }),
    }
}

/// Result of a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchResponse {
    /// At least one record matched.
    Results {
        results: Vec<DestinationRecord>,
        count: usize,
    },
    /// Nothing matched; the first catalog entries are offered instead.
    Fallback {
        message: String,
        suggestions: Vec<DestinationRecord>,
    },
}

impl SearchResponse {
    pub fn is_fallback(&self) -> bool {
        matches!(self, SearchResponse::Fallback { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_minimal_body() {
        let q: TravelQuery = serde_json::from_value(json!({"destination": "Tokyo"})).unwrap();
        assert_eq!(q, TravelQuery::new("Tokyo"));
        assert!(q.preferences.is_empty());
    }

    #[test]
    fn test_query_full_body() {
        let q: TravelQuery = serde_json::from_value(json!({
            "destination": "Paris",
            "start_date": "2025-06-01",
            "end_date": "2025-06-08",
            "budget": 1000,
            "preferences": ["museums", "food"],
        }))
        .unwrap();

        assert_eq!(q.budget, Some(1000.0));
        assert_eq!(q.start_date.as_deref(), Some("2025-06-01"));
        assert_eq!(q.preferences, vec!["museums", "food"]);
    }

    #[test]
    fn test_query_null_preferences() {
        let q: TravelQuery =
            serde_json::from_value(json!({"destination": "Paris", "preferences": null})).unwrap();
        assert!(q.preferences.is_empty());
    }

    #[test]
    fn test_query_budget_as_numeric_string() {
        let q: TravelQuery =
            serde_json::from_value(json!({"destination": "Tokyo", "budget": "3000"})).unwrap();
        assert_eq!(q.budget, Some(3000.0));

        let q: TravelQuery =
            serde_json::from_value(json!({"destination": "Tokyo", "budget": " 2500.5 "})).unwrap();
        assert_eq!(q.budget, Some(2500.5));

        let q: TravelQuery =
            serde_json::from_value(json!({"destination": "Tokyo", "budget": null})).unwrap();
        assert_eq!(q.budget, None);

        let err = serde_json::from_value::<TravelQuery>(json!({
            "destination": "Tokyo",
            "budget": "cheap",
        }))
        .unwrap_err();
        assert!(err.to_string().contains("budget"));

        assert!(serde_json::from_value::<TravelQuery>(json!({
            "destination": "Tokyo",
            "budget": true,
        }))
        .is_err());
    }

    #[test]
    fn test_query_requires_destination() {
        assert!(serde_json::from_value::<TravelQuery>(json!({"budget": 10})).is_err());
    }

    #[test]
    fn test_response_shapes() {
        let results = SearchResponse::Results {
            results: vec![],
            count: 0,
        };
        assert_eq!(
            serde_json::to_value(&results).unwrap(),
            json!({"results": [], "count": 0})
        );

        let fallback = SearchResponse::Fallback {
            message: NO_MATCH_MESSAGE.to_string(),
            suggestions: vec![],
        };
        assert_eq!(
            serde_json::to_value(&fallback).unwrap(),
            json!({"message": NO_MATCH_MESSAGE, "suggestions": []})
        );
        assert!(fallback.is_fallback());
    }

    #[test]
    fn test_response_parses_back_by_shape() {
        let parsed: SearchResponse =
            serde_json::from_value(json!({"message": "none", "suggestions": []})).unwrap();
        assert!(parsed.is_fallback());
    }
}
