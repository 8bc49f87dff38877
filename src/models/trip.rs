// src/models/trip.rs
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::ItineraryRow;

pub const DEFAULT_TRIP_STATUS: &str = "draft";
pub const DEFAULT_TRAVELERS: i32 = 1;

/// A persisted trip as stored in the `trips` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TripRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: Option<Decimal>,
    pub travelers: i32,
    pub interests: Option<Vec<String>>,
    pub travel_style: Option<String>,
    pub special_requests: Option<String>,
    pub status: Option<String>,
    pub source: String,
    pub ai_generated: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create shape. Destination, dates, source, title and user are required;
/// everything else falls back to the store's defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripInsert {
    pub user_id: Uuid,
    pub title: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub source: String,
    #[serde(default)]
    pub budget: Option<Decimal>,
    #[serde(default)]
    pub travelers: Option<i32>,
    #[serde(default)]
    pub interests: Option<Vec<String>>,
    #[serde(default)]
    pub travel_style: Option<String>,
    #[serde(default)]
    pub special_requests: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub ai_generated: Option<bool>,
}

impl TripInsert {
    pub fn into_row(self, now: DateTime<Utc>) -> TripRow {
        TripRow {
            id: Uuid::new_v4(),
            user_id: self.user_id,
            title: self.title,
            destination: self.destination,
            start_date: self.start_date,
            end_date: self.end_date,
            budget: self.budget,
            travelers: self.travelers.unwrap_or(DEFAULT_TRAVELERS),
            interests: self.interests,
            travel_style: self.travel_style,
            special_requests: self.special_requests,
            status: Some(self.status.unwrap_or_else(|| DEFAULT_TRIP_STATUS.to_string())),
            source: self.source,
            ai_generated: Some(self.ai_generated.unwrap_or(false)),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update; only provided fields are written
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TripUpdate {
    pub title: Option<String>,
    pub destination: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub budget: Option<Decimal>,
    pub travelers: Option<i32>,
    pub interests: Option<Vec<String>>,
    pub travel_style: Option<String>,
    pub special_requests: Option<String>,
    pub status: Option<String>,
    pub source: Option<String>,
    pub ai_generated: Option<bool>,
}

impl TripUpdate {
    pub fn apply_to(self, row: &mut TripRow, now: DateTime<Utc>) {
        if let Some(title) = self.title {
            row.title = title;
        }
        if let Some(destination) = self.destination {
            row.destination = destination;
        }
        if let Some(start_date) = self.start_date {
            row.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            row.end_date = end_date;
        }
        if let Some(travelers) = self.travelers {
            row.travelers = travelers;
        }
        if let Some(source) = self.source {
            row.source = source;
        }
        row.budget = self.budget.or(row.budget);
        row.interests = self.interests.or(row.interests.take());
        row.travel_style = self.travel_style.or(row.travel_style.take());
        row.special_requests = self.special_requests.or(row.special_requests.take());
        row.status = self.status.or(row.status.take());
        row.ai_generated = self.ai_generated.or(row.ai_generated);
        row.updated_at = now;
    }
}

/// A trip with its itinerary days in day order
#[derive(Debug, Clone, Serialize)]
pub struct TripDetail {
    #[serde(flatten)]
    pub trip: TripRow,
    pub itinerary: Vec<ItineraryRow>,
}

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub user_id: Uuid,
}
