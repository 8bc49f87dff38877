// src/models/itinerary.rs
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One day of a trip, stored in the `itineraries` table.
/// `activities` is an opaque JSON payload owned by whoever wrote the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ItineraryRow {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub day_number: i32,
    pub date: NaiveDate,
    pub title: String,
    pub description: Option<String>,
    pub activities: Option<serde_json::Value>,
    pub total_cost: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryInsert {
    pub trip_id: Uuid,
    pub day_number: i32,
    pub date: NaiveDate,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub activities: Option<serde_json::Value>,
    #[serde(default)]
    pub total_cost: Option<Decimal>,
}

impl ItineraryInsert {
    pub fn into_row(self, now: DateTime<Utc>) -> ItineraryRow {
        ItineraryRow {
            id: Uuid::new_v4(),
            trip_id: self.trip_id,
            day_number: self.day_number,
            date: self.date,
            title: self.title,
            description: self.description,
            activities: self.activities,
            total_cost: self.total_cost,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Body of `POST /api/trips/:id/itineraries`; the trip comes from the path
#[derive(Debug, Clone, Deserialize)]
pub struct NewItineraryDay {
    pub day_number: i32,
    pub date: NaiveDate,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub activities: Option<serde_json::Value>,
    #[serde(default)]
    pub total_cost: Option<Decimal>,
}

impl NewItineraryDay {
    pub fn for_trip(self, trip_id: Uuid) -> ItineraryInsert {
        ItineraryInsert {
            trip_id,
            day_number: self.day_number,
            date: self.date,
            title: self.title,
            description: self.description,
            activities: self.activities,
            total_cost: self.total_cost,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItineraryUpdate {
    pub day_number: Option<i32>,
    pub date: Option<NaiveDate>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub activities: Option<serde_json::Value>,
    pub total_cost: Option<Decimal>,
}

impl ItineraryUpdate {
    pub fn apply_to(self, row: &mut ItineraryRow, now: DateTime<Utc>) {
        if let Some(day_number) = self.day_number {
            row.day_number = day_number;
        }
        if let Some(date) = self.date {
            row.date = date;
        }
        if let Some(title) = self.title {
            row.title = title;
        }
        row.description = self.description.or(row.description.take());
        row.activities = self.activities.or(row.activities.take());
        row.total_cost = self.total_cost.or(row.total_cost);
        row.updated_at = now;
    }
}
