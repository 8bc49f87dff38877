// src/models/saved_place.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A place bookmarked by a user. `place_type` maps to the `type` column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SavedPlaceRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub place_type: String,
    pub rating: Option<f64>,
    pub price_level: Option<i32>,
    pub details: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedPlaceInsert {
    pub user_id: Uuid,
    pub name: String,
    pub location: String,
    #[serde(rename = "type")]
    pub place_type: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub price_level: Option<i32>,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

impl SavedPlaceInsert {
    pub fn into_row(self, now: DateTime<Utc>) -> SavedPlaceRow {
        SavedPlaceRow {
            id: Uuid::new_v4(),
            user_id: self.user_id,
            name: self.name,
            location: self.location,
            latitude: self.latitude,
            longitude: self.longitude,
            place_type: self.place_type,
            rating: self.rating,
            price_level: self.price_level,
            details: self.details,
            created_at: now,
        }
    }
}

/// Saved places carry no `updated_at`; an update only rewrites fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedPlaceUpdate {
    pub name: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(rename = "type")]
    pub place_type: Option<String>,
    pub rating: Option<f64>,
    pub price_level: Option<i32>,
    pub details: Option<serde_json::Value>,
}

impl SavedPlaceUpdate {
    pub fn apply_to(self, row: &mut SavedPlaceRow) {
        if let Some(name) = self.name {
            row.name = name;
        }
        if let Some(location) = self.location {
            row.location = location;
        }
        if let Some(place_type) = self.place_type {
            row.place_type = place_type;
        }
        row.latitude = self.latitude.or(row.latitude);
        row.longitude = self.longitude.or(row.longitude);
        row.rating = self.rating.or(row.rating);
        row.price_level = self.price_level.or(row.price_level);
        row.details = self.details.or(row.details.take());
    }
}
