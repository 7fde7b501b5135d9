//! Built-in destination dataset.

use crate::catalog::record::DestinationRecord;

struct Seed {
    id: u32,
    destination: &'static str,
    description: &'static str,
    estimated_cost: f64,
    recommended_duration: &'static str,
    highlights: &'static [&'static str],
}

const DESTINATIONS: &[Seed] = &[
    Seed {
        id: 1,
        destination: "Paris, France",
        description: "The City of Light offers romantic charm, world-class museums, and exceptional cuisine.",
        estimated_cost: 2500.0,
        recommended_duration: "5-7 days",
        highlights: &[
            "Eiffel Tower",
            "Louvre Museum",
            "Notre-Dame Cathedral",
            "Champs-Élysées",
        ],
    },
    Seed {
        id: 2,
        destination: "Tokyo, Japan",
        description: "A fascinating blend of traditional culture and cutting-edge technology.",
        estimated_cost: 3000.0,
        recommended_duration: "7-10 days",
        highlights: &[
            "Shibuya Crossing",
            "Senso-ji Temple",
            "Mount Fuji",
            "Tsukiji Market",
        ],
    },
];

/// The built-in records, in catalog order.
pub fn destinations() -> Vec<DestinationRecord> {
    DESTINATIONS
        .iter()
        .map(|s| DestinationRecord {
            id: s.id,
            destination: s.destination.to_string(),
            description: s.description.to_string(),
            estimated_cost: s.estimated_cost,
            recommended_duration: s.recommended_duration.to_string(),
            highlights: s.highlights.iter().map(|h| h.to_string()).collect(),
        })
        .collect()
}
