// src/store/mod.rs
//! Persistence seam for trips, itinerary days, profiles and saved places.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{
    ItineraryInsert, ItineraryRow, ItineraryUpdate, NewItineraryDay, ProfileInsert, ProfileRow, ProfileUpdate,
    SavedPlaceInsert, SavedPlaceRow, SavedPlaceUpdate, TripDetail, TripInsert, TripRow, TripUpdate,
};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Referenced record does not exist: {0}")]
    ForeignKey(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => StoreError::NotFound("record"),
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                StoreError::ForeignKey(db.message().to_string())
            }
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StoreError::Conflict(db.message().to_string())
            }
            _ => StoreError::Database(err.to_string()),
        }
    }
}

#[async_trait]
pub trait TripStore: Send + Sync {
    /// Backend name reported by the status endpoint
    fn backend(&self) -> &'static str;

    async fn health_check(&self) -> Result<(), StoreError>;

    async fn create_trip(&self, trip: TripInsert) -> Result<TripRow, StoreError>;
    async fn get_trip(&self, id: Uuid) -> Result<TripRow, StoreError>;
    /// Newest first
    async fn list_trips(&self, user_id: Uuid) -> Result<Vec<TripRow>, StoreError>;
    async fn update_trip(&self, id: Uuid, update: TripUpdate) -> Result<TripRow, StoreError>;
    /// Trip row and all of its days, or nothing
    async fn create_trip_with_days(
        &self,
        trip: TripInsert,
        days: Vec<NewItineraryDay>,
    ) -> Result<TripDetail, StoreError>;

    async fn create_itinerary_day(&self, day: ItineraryInsert) -> Result<ItineraryRow, StoreError>;
    /// Ordered by day number
    async fn list_itinerary_days(&self, trip_id: Uuid) -> Result<Vec<ItineraryRow>, StoreError>;
    async fn update_itinerary_day(&self, id: Uuid, update: ItineraryUpdate) -> Result<ItineraryRow, StoreError>;

    async fn create_profile(&self, profile: ProfileInsert) -> Result<ProfileRow, StoreError>;
    async fn get_profile(&self, user_id: Uuid) -> Result<ProfileRow, StoreError>;
    async fn update_profile(&self, user_id: Uuid, update: ProfileUpdate) -> Result<ProfileRow, StoreError>;

    async fn create_saved_place(&self, place: SavedPlaceInsert) -> Result<SavedPlaceRow, StoreError>;
    /// Newest first
    async fn list_saved_places(&self, user_id: Uuid) -> Result<Vec<SavedPlaceRow>, StoreError>;
    async fn update_saved_place(&self, id: Uuid, update: SavedPlaceUpdate) -> Result<SavedPlaceRow, StoreError>;
}
