// src/store/memory.rs
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{StoreError, TripStore};
use crate::models::{
    ItineraryInsert, ItineraryRow, ItineraryUpdate, NewItineraryDay, ProfileInsert, ProfileRow, ProfileUpdate,
    SavedPlaceInsert, SavedPlaceRow, SavedPlaceUpdate, TripDetail, TripInsert, TripRow, TripUpdate,
};

#[derive(Default)]
struct Tables {
    trips: HashMap<Uuid, TripRow>,
    itineraries: HashMap<Uuid, ItineraryRow>,
    profiles: HashMap<Uuid, ProfileRow>,
    saved_places: HashMap<Uuid, SavedPlaceRow>,
}

impl Tables {
    /// Mirrors the (trip_id, day_number) unique index
    fn day_taken(&self, trip_id: Uuid, day_number: i32, except: Option<Uuid>) -> bool {
        self.itineraries
            .values()
            .any(|d| d.trip_id == trip_id && d.day_number == day_number && Some(d.id) != except)
    }
}

fn duplicate_day(trip_id: Uuid, day_number: i32) -> StoreError {
    StoreError::Conflict(format!("trip {} already has day {}", trip_id, day_number))
}

/// In-memory store for tests and running without a database.
/// Enforces the itinerary → trip foreign key and one profile per user.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TripStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn create_trip(&self, trip: TripInsert) -> Result<TripRow, StoreError> {
        let row = trip.into_row(Utc::now());
        self.tables.write().await.trips.insert(row.id, row.clone());
        Ok(row)
    }

    async fn get_trip(&self, id: Uuid) -> Result<TripRow, StoreError> {
        self.tables
            .read()
            .await
            .trips
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound("trip"))
    }

    async fn list_trips(&self, user_id: Uuid) -> Result<Vec<TripRow>, StoreError> {
        let tables = self.tables.read().await;
        let mut trips: Vec<TripRow> = tables
            .trips
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        trips.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(trips)
    }

    async fn update_trip(&self, id: Uuid, update: TripUpdate) -> Result<TripRow, StoreError> {
        let mut tables = self.tables.write().await;
        let row = tables.trips.get_mut(&id).ok_or(StoreError::NotFound("trip"))?;
        update.apply_to(row, Utc::now());
        Ok(row.clone())
    }

    async fn create_trip_with_days(
        &self,
        trip: TripInsert,
        days: Vec<NewItineraryDay>,
    ) -> Result<TripDetail, StoreError> {
        let now = Utc::now();
        let trip = trip.into_row(now);
        let mut itinerary: Vec<ItineraryRow> = Vec::with_capacity(days.len());
        for day in days {
            if itinerary.iter().any(|d| d.day_number == day.day_number) {
                return Err(duplicate_day(trip.id, day.day_number));
            }
            itinerary.push(day.for_trip(trip.id).into_row(now));
        }

        // Validated before the write lock, so nothing is half-inserted
        let mut tables = self.tables.write().await;
        tables.trips.insert(trip.id, trip.clone());
        for day in &itinerary {
            tables.itineraries.insert(day.id, day.clone());
        }
        Ok(TripDetail { trip, itinerary })
    }

    async fn create_itinerary_day(&self, day: ItineraryInsert) -> Result<ItineraryRow, StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.trips.contains_key(&day.trip_id) {
            return Err(StoreError::ForeignKey(format!("trip {}", day.trip_id)));
        }
        if tables.day_taken(day.trip_id, day.day_number, None) {
            return Err(duplicate_day(day.trip_id, day.day_number));
        }
        let row = day.into_row(Utc::now());
        tables.itineraries.insert(row.id, row.clone());
        Ok(row)
    }

    async fn list_itinerary_days(&self, trip_id: Uuid) -> Result<Vec<ItineraryRow>, StoreError> {
        let tables = self.tables.read().await;
        let mut days: Vec<ItineraryRow> = tables
            .itineraries
            .values()
            .filter(|d| d.trip_id == trip_id)
            .cloned()
            .collect();
        days.sort_by_key(|d| d.day_number);
        Ok(days)
    }

    async fn update_itinerary_day(&self, id: Uuid, update: ItineraryUpdate) -> Result<ItineraryRow, StoreError> {
        let mut tables = self.tables.write().await;
        let trip_id = tables
            .itineraries
            .get(&id)
            .map(|d| d.trip_id)
            .ok_or(StoreError::NotFound("itinerary day"))?;
        if let Some(day_number) = update.day_number {
            if tables.day_taken(trip_id, day_number, Some(id)) {
                return Err(duplicate_day(trip_id, day_number));
            }
        }
        let row = tables
            .itineraries
            .get_mut(&id)
            .ok_or(StoreError::NotFound("itinerary day"))?;
        update.apply_to(row, Utc::now());
        Ok(row.clone())
    }

    async fn create_profile(&self, profile: ProfileInsert) -> Result<ProfileRow, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.profiles.contains_key(&profile.user_id) {
            return Err(StoreError::Conflict(format!("profile for user {} already exists", profile.user_id)));
        }
        let row = profile.into_row(Utc::now());
        tables.profiles.insert(row.user_id, row.clone());
        Ok(row)
    }

    async fn get_profile(&self, user_id: Uuid) -> Result<ProfileRow, StoreError> {
        self.tables
            .read()
            .await
            .profiles
            .get(&user_id)
            .cloned()
            .ok_or(StoreError::NotFound("profile"))
    }

    async fn update_profile(&self, user_id: Uuid, update: ProfileUpdate) -> Result<ProfileRow, StoreError> {
        let mut tables = self.tables.write().await;
        let row = tables
            .profiles
            .get_mut(&user_id)
            .ok_or(StoreError::NotFound("profile"))?;
        update.apply_to(row, Utc::now());
        Ok(row.clone())
    }

    async fn create_saved_place(&self, place: SavedPlaceInsert) -> Result<SavedPlaceRow, StoreError> {
        let row = place.into_row(Utc::now());
        self.tables.write().await.saved_places.insert(row.id, row.clone());
        Ok(row)
    }

    async fn list_saved_places(&self, user_id: Uuid) -> Result<Vec<SavedPlaceRow>, StoreError> {
        let tables = self.tables.read().await;
        let mut places: Vec<SavedPlaceRow> = tables
            .saved_places
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        places.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(places)
    }

    async fn update_saved_place(&self, id: Uuid, update: SavedPlaceUpdate) -> Result<SavedPlaceRow, StoreError> {
        let mut tables = self.tables.write().await;
        let row = tables
            .saved_places
            .get_mut(&id)
            .ok_or(StoreError::NotFound("saved place"))?;
        update.apply_to(row);
        Ok(row.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn trip_for(user_id: Uuid) -> TripInsert {
        TripInsert {
            user_id,
            title: "Lisbon Adventure".to_string(),
            destination: "Lisbon".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 17).unwrap(),
            source: "planner".to_string(),
            budget: None,
            travelers: Some(2),
            interests: Some(vec!["Food".to_string()]),
            travel_style: Some("comfort".to_string()),
            special_requests: None,
            status: None,
            ai_generated: Some(true),
        }
    }

    fn day(trip_id: Uuid, day_number: i32) -> ItineraryInsert {
        ItineraryInsert {
            trip_id,
            day_number,
            date: NaiveDate::from_ymd_opt(2024, 3, 14 + day_number as u32).unwrap(),
            title: format!("Day {}", day_number),
            description: None,
            activities: Some(serde_json::json!([{"time": "9:00 AM"}])),
            total_cost: None,
        }
    }

    #[tokio::test]
    async fn itinerary_days_require_an_existing_trip() {
        let store = MemoryStore::new();
        let err = store.create_itinerary_day(day(Uuid::new_v4(), 1)).await.unwrap_err();
        assert!(matches!(err, StoreError::ForeignKey(_)));
    }

    #[tokio::test]
    async fn itinerary_days_list_in_day_order() {
        let store = MemoryStore::new();
        let trip = store.create_trip(trip_for(Uuid::new_v4())).await.unwrap();
        for n in [3, 1, 2] {
            store.create_itinerary_day(day(trip.id, n)).await.unwrap();
        }

        let numbers: Vec<i32> = store
            .list_itinerary_days(trip.id)
            .await
            .unwrap()
            .iter()
            .map(|d| d.day_number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    fn new_day(day_number: i32) -> NewItineraryDay {
        NewItineraryDay {
            day_number,
            date: NaiveDate::from_ymd_opt(2024, 3, 14 + day_number as u32).unwrap(),
            title: format!("Day {}", day_number),
            description: None,
            activities: None,
            total_cost: None,
        }
    }

    #[tokio::test]
    async fn trip_with_days_is_written_together() {
        let store = MemoryStore::new();
        let user_id = Uuid::new_v4();
        let detail = store
            .create_trip_with_days(trip_for(user_id), vec![new_day(1), new_day(2)])
            .await
            .unwrap();

        assert_eq!(detail.itinerary.len(), 2);
        assert!(detail.itinerary.iter().all(|d| d.trip_id == detail.trip.id));
        assert_eq!(store.list_itinerary_days(detail.trip.id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn rejected_day_leaves_no_trip_behind() {
        let store = MemoryStore::new();
        let user_id = Uuid::new_v4();
        let err = store
            .create_trip_with_days(trip_for(user_id), vec![new_day(1), new_day(1)])
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::Conflict(_)));
        assert!(store.list_trips(user_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn day_numbers_are_unique_per_trip() {
        let store = MemoryStore::new();
        let trip = store.create_trip(trip_for(Uuid::new_v4())).await.unwrap();
        store.create_itinerary_day(day(trip.id, 1)).await.unwrap();
        let second = store.create_itinerary_day(day(trip.id, 2)).await.unwrap();

        let err = store.create_itinerary_day(day(trip.id, 1)).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));

        let update = ItineraryUpdate {
            day_number: Some(1),
            ..Default::default()
        };
        let err = store.update_itinerary_day(second.id, update).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn trips_are_scoped_to_their_owner() {
        let store = MemoryStore::new();
        let alice = Uuid::new_v4();
        store.create_trip(trip_for(alice)).await.unwrap();
        store.create_trip(trip_for(Uuid::new_v4())).await.unwrap();

        let trips = store.list_trips(alice).await.unwrap();
        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].user_id, alice);
    }

    #[tokio::test]
    async fn updating_a_missing_trip_is_not_found() {
        let store = MemoryStore::new();
        let err = store.update_trip(Uuid::new_v4(), TripUpdate::default()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound("trip")));
    }

    #[tokio::test]
    async fn one_profile_per_user() {
        let store = MemoryStore::new();
        let user_id = Uuid::new_v4();
        let profile = ProfileInsert {
            user_id,
            full_name: Some("Ana Costa".to_string()),
            email: None,
            phone: None,
            avatar_url: None,
            country: Some("PT".to_string()),
            language: None,
            currency: None,
        };
        store.create_profile(profile.clone()).await.unwrap();
        assert!(matches!(store.create_profile(profile).await, Err(StoreError::Conflict(_))));

        let updated = store
            .update_profile(
                user_id,
                ProfileUpdate {
                    currency: Some("EUR".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.currency.as_deref(), Some("EUR"));
        assert_eq!(updated.full_name.as_deref(), Some("Ana Costa"));
    }

    #[tokio::test]
    async fn saved_place_updates_keep_unset_fields() {
        let store = MemoryStore::new();
        let user_id = Uuid::new_v4();
        let place = store
            .create_saved_place(SavedPlaceInsert {
                user_id,
                name: "Time Out Market".to_string(),
                location: "Lisbon".to_string(),
                place_type: "dining".to_string(),
                latitude: Some(38.707),
                longitude: Some(-9.146),
                rating: Some(4.5),
                price_level: Some(2),
                details: None,
            })
            .await
            .unwrap();

        let updated = store
            .update_saved_place(
                place.id,
                SavedPlaceUpdate {
                    rating: Some(4.7),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.rating, Some(4.7));
        assert_eq!(updated.price_level, Some(2));
        assert_eq!(store.list_saved_places(user_id).await.unwrap().len(), 1);
    }
}
