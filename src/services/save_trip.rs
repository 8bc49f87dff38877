// src/services/save_trip.rs
// Persists the trip shown on the itinerary screen: one trips row plus one
// itineraries row per displayed day.

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;
use uuid::Uuid;

use crate::generation::GeneratedTrip;
use crate::models::{NewItineraryDay, TripDetail, TripInsert};
use crate::store::{StoreError, TripStore};

pub const TRIP_SOURCE: &str = "planner";

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("End date is required to save a trip")]
    MissingEndDate,

    #[error("Invalid {field}: {value:?} (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },

    #[error("Invalid traveler count: {0:?}")]
    InvalidTravelers(String),

    #[error("Could not encode activities: {0}")]
    Payload(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct TripSaveService;

impl TripSaveService {
    pub async fn save_generated_trip(
        store: &dyn TripStore,
        trip: &GeneratedTrip,
        user_id: Uuid,
    ) -> Result<TripDetail, SaveError> {
        let insert = Self::build_trip_insert(trip, user_id)?;
        let days = trip
            .days
            .iter()
            .map(|day| {
                let activities = serde_json::to_value(&day.activities).map_err(|e| SaveError::Payload(e.to_string()))?;
                Ok(NewItineraryDay {
                    day_number: day.day as i32,
                    date: day.date,
                    title: day.title.clone(),
                    description: None,
                    activities: Some(activities),
                    total_cost: None,
                })
            })
            .collect::<Result<Vec<_>, SaveError>>()?;

        let detail = store.create_trip_with_days(insert, days).await.map_err(|e| {
            tracing::error!(user_id = %user_id, destination = %trip.destination, error = %e, "failed to save trip");
            e
        })?;
        tracing::info!(
            trip_id = %detail.trip.id,
            user_id = %user_id,
            destination = %detail.trip.destination,
            days = detail.itinerary.len(),
            "trip saved"
        );

        Ok(detail)
    }

    pub fn build_trip_insert(trip: &GeneratedTrip, user_id: Uuid) -> Result<TripInsert, SaveError> {
        let preferences = &trip.preferences;

        if preferences.end_date.is_empty() {
            return Err(SaveError::MissingEndDate);
        }
        let start_date = parse_date("start date", &preferences.start_date)?;
        let end_date = parse_date("end date", &preferences.end_date)?;

        let travelers = preferences
            .travelers
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| SaveError::InvalidTravelers(preferences.travelers.clone()))?;

        Ok(TripInsert {
            user_id,
            title: format!("{} Adventure", trip.destination),
            destination: trip.destination.clone(),
            start_date,
            end_date,
            source: TRIP_SOURCE.to_string(),
            budget: parse_budget(&preferences.budget),
            travelers: Some(travelers),
            interests: Some(preferences.interests.clone()),
            travel_style: Some(preferences.travel_style.clone()),
            special_requests: Some(preferences.special_requests.clone()).filter(|s| !s.is_empty()),
            status: None,
            ai_generated: Some(true),
        })
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, SaveError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| SaveError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// First amount in a free-text budget, thousands separators allowed
fn budget_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"\d[\d,]*(?:\.\d+)?").ok())
        .as_ref()
}

/// Leading number of a free-text budget: "$2,000 per person" → 2000
pub fn parse_budget(budget: &str) -> Option<Decimal> {
    let amount = budget_pattern()?.find(budget)?;
    Decimal::from_str(&amount.as_str().replace(',', "")).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::sample_itinerary;
    use crate::planner::{Interest, PreferencesForm};
    use crate::store::MemoryStore;

    fn generated(end_date: &str, travelers: &str) -> GeneratedTrip {
        let mut form = PreferencesForm::default();
        form.destination = "Costa Rica".to_string();
        form.start_date = "2024-03-15".to_string();
        form.end_date = end_date.to_string();
        form.budget = "$2,500 per person".to_string();
        form.travelers = travelers.to_string();
        form.toggle_interest(Interest::Nature);
        let preferences = form.to_preferences();
        GeneratedTrip {
            destination: preferences.destination.clone(),
            preferences,
            days: sample_itinerary(),
        }
    }

    #[test]
    fn budget_takes_the_leading_number() {
        assert_eq!(parse_budget("$2,000 per person"), Some(Decimal::from(2000)));
        assert_eq!(parse_budget("e.g. 1500.50"), Some(Decimal::from_str("1500.50").unwrap()));
        assert_eq!(parse_budget("3000."), Some(Decimal::from(3000)));
        assert_eq!(parse_budget("between 1,200 and 2,000 USD"), Some(Decimal::from(1200)));
        assert_eq!(parse_budget("flexible"), None);
        assert_eq!(parse_budget(""), None);
    }

    #[test]
    fn trip_insert_carries_preferences() {
        let insert = TripSaveService::build_trip_insert(&generated("2024-03-17", "2"), Uuid::new_v4()).unwrap();
        assert_eq!(insert.title, "Costa Rica Adventure");
        assert_eq!(insert.source, TRIP_SOURCE);
        assert_eq!(insert.travelers, Some(2));
        assert_eq!(insert.budget, Some(Decimal::from(2500)));
        assert_eq!(insert.interests, Some(vec!["Nature".to_string()]));
        assert_eq!(insert.travel_style.as_deref(), Some("comfort"));
        assert_eq!(insert.special_requests, None);
        assert_eq!(insert.ai_generated, Some(true));
    }

    #[test]
    fn incomplete_preferences_cannot_be_saved() {
        let user = Uuid::new_v4();
        assert!(matches!(
            TripSaveService::build_trip_insert(&generated("", "2"), user),
            Err(SaveError::MissingEndDate)
        ));
        assert!(matches!(
            TripSaveService::build_trip_insert(&generated("17/03/2024", "2"), user),
            Err(SaveError::InvalidDate { field: "end date", .. })
        ));
        assert!(matches!(
            TripSaveService::build_trip_insert(&generated("2024-03-17", "0"), user),
            Err(SaveError::InvalidTravelers(_))
        ));
    }

    #[tokio::test]
    async fn saves_trip_and_one_row_per_day() {
        let store = MemoryStore::new();
        let user_id = Uuid::new_v4();
        let detail = TripSaveService::save_generated_trip(&store, &generated("2024-03-17", "3"), user_id)
            .await
            .unwrap();

        assert_eq!(detail.itinerary.len(), 3);
        assert_eq!(detail.itinerary[0].title, "Arrival & City Exploration");
        let activities = detail.itinerary[0].activities.as_ref().unwrap();
        assert_eq!(activities[0]["type"], "lodging");
        assert_eq!(store.list_trips(user_id).await.unwrap().len(), 1);
        assert_eq!(store.list_itinerary_days(detail.trip.id).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn failed_day_insert_saves_nothing() {
        let store = MemoryStore::new();
        let user_id = Uuid::new_v4();
        let mut trip = generated("2024-03-17", "2");
        trip.days[2].day = 1;

        let err = TripSaveService::save_generated_trip(&store, &trip, user_id)
            .await
            .unwrap_err();
        assert!(matches!(err, SaveError::Store(StoreError::Conflict(_))));
        assert!(store.list_trips(user_id).await.unwrap().is_empty());
    }
}
