// src/itinerary/mod.rs
//! Day-by-day itinerary records and the read-only view built from them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod sample;
pub mod view;

pub use sample::sample_itinerary;
pub use view::{ActivityView, DayView, ItineraryView, TripOverview};

/// Category of an activity; drives the icon shown next to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Sightseeing,
    Dining,
    Activity,
    #[serde(alias = "hotel")]
    Lodging,
}

impl ActivityKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ActivityKind::Sightseeing => "camera",
            ActivityKind::Dining => "utensils",
            ActivityKind::Lodging => "bed",
            ActivityKind::Activity => "map-pin",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Sightseeing => "sightseeing",
            ActivityKind::Dining => "dining",
            ActivityKind::Activity => "activity",
            ActivityKind::Lodging => "lodging",
        }
    }
}

/// A single scheduled event within a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub time: String,
    pub title: String,
    pub description: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// One calendar day; activities stay in the order they were produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayItinerary {
    pub day: u32,
    pub date: NaiveDate,
    pub title: String,
    pub activities: Vec<Activity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hotel_is_accepted_as_lodging() {
        let kind: ActivityKind = serde_json::from_str("\"hotel\"").unwrap();
        assert_eq!(kind, ActivityKind::Lodging);
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"lodging\"");
    }

    #[test]
    fn unknown_categories_are_rejected() {
        assert!(serde_json::from_str::<ActivityKind>("\"shopping\"").is_err());
    }
}
