// src/store/postgres.rs
// Queries are checked at runtime (no `query!` macros) so builds don't need DATABASE_URL.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use super::{StoreError, TripStore};
use crate::models::{
    ItineraryInsert, ItineraryRow, ItineraryUpdate, NewItineraryDay, ProfileInsert, ProfileRow, ProfileUpdate,
    SavedPlaceInsert, SavedPlaceRow, SavedPlaceUpdate, TripDetail, TripInsert, TripRow, TripUpdate,
};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TripStore for PgStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }

    async fn create_trip(&self, trip: TripInsert) -> Result<TripRow, StoreError> {
        let row = trip.into_row(Utc::now());
        Ok(insert_trip(&self.pool, &row).await?)
    }

    async fn get_trip(&self, id: Uuid) -> Result<TripRow, StoreError> {
        sqlx::query_as::<_, TripRow>("SELECT * FROM trips WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound("trip"))
    }

    async fn list_trips(&self, user_id: Uuid) -> Result<Vec<TripRow>, StoreError> {
        let trips = sqlx::query_as::<_, TripRow>(
            "SELECT * FROM trips WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(trips)
    }

    async fn update_trip(&self, id: Uuid, update: TripUpdate) -> Result<TripRow, StoreError> {
        sqlx::query_as::<_, TripRow>(
            r#"
            UPDATE trips SET
                title = COALESCE($2, title),
                destination = COALESCE($3, destination),
                start_date = COALESCE($4, start_date),
                end_date = COALESCE($5, end_date),
                budget = COALESCE($6, budget),
                travelers = COALESCE($7, travelers),
                interests = COALESCE($8, interests),
                travel_style = COALESCE($9, travel_style),
                special_requests = COALESCE($10, special_requests),
                status = COALESCE($11, status),
                source = COALESCE($12, source),
                ai_generated = COALESCE($13, ai_generated),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(update.title)
        .bind(update.destination)
        .bind(update.start_date)
        .bind(update.end_date)
        .bind(update.budget)
        .bind(update.travelers)
        .bind(update.interests)
        .bind(update.travel_style)
        .bind(update.special_requests)
        .bind(update.status)
        .bind(update.source)
        .bind(update.ai_generated)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound("trip"))
    }

    async fn create_trip_with_days(
        &self,
        trip: TripInsert,
        days: Vec<NewItineraryDay>,
    ) -> Result<TripDetail, StoreError> {
        let now = Utc::now();
        let row = trip.into_row(now);

        let mut tx = self.pool.begin().await?;
        let trip = insert_trip(&mut *tx, &row).await?;
        let mut itinerary = Vec::with_capacity(days.len());
        for day in days {
            let day = day.for_trip(trip.id).into_row(now);
            itinerary.push(insert_itinerary_day(&mut *tx, &day).await?);
        }
        // Dropping `tx` on an early return rolls everything back
        tx.commit().await?;

        Ok(TripDetail { trip, itinerary })
    }

    async fn create_itinerary_day(&self, day: ItineraryInsert) -> Result<ItineraryRow, StoreError> {
        let row = day.into_row(Utc::now());
        Ok(insert_itinerary_day(&self.pool, &row).await?)
    }

    async fn list_itinerary_days(&self, trip_id: Uuid) -> Result<Vec<ItineraryRow>, StoreError> {
        let days = sqlx::query_as::<_, ItineraryRow>(
            "SELECT * FROM itineraries WHERE trip_id = $1 ORDER BY day_number ASC",
        )
        .bind(trip_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(days)
    }

    async fn update_itinerary_day(&self, id: Uuid, update: ItineraryUpdate) -> Result<ItineraryRow, StoreError> {
        sqlx::query_as::<_, ItineraryRow>(
            r#"
            UPDATE itineraries SET
                day_number = COALESCE($2, day_number),
                date = COALESCE($3, date),
                title = COALESCE($4, title),
                description = COALESCE($5, description),
                activities = COALESCE($6, activities),
                total_cost = COALESCE($7, total_cost),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(update.day_number)
        .bind(update.date)
        .bind(update.title)
        .bind(update.description)
        .bind(update.activities)
        .bind(update.total_cost)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound("itinerary day"))
    }

    async fn create_profile(&self, profile: ProfileInsert) -> Result<ProfileRow, StoreError> {
        let row = profile.into_row(Utc::now());
        let profile = sqlx::query_as::<_, ProfileRow>(
            r#"
            INSERT INTO profiles (id, user_id, full_name, email, phone, avatar_url, country,
                                  language, currency, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(row.id)
        .bind(row.user_id)
        .bind(&row.full_name)
        .bind(&row.email)
        .bind(&row.phone)
        .bind(&row.avatar_url)
        .bind(&row.country)
        .bind(&row.language)
        .bind(&row.currency)
        .bind(row.created_at)
        .bind(row.updated_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(profile)
    }

    async fn get_profile(&self, user_id: Uuid) -> Result<ProfileRow, StoreError> {
        sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound("profile"))
    }

    async fn update_profile(&self, user_id: Uuid, update: ProfileUpdate) -> Result<ProfileRow, StoreError> {
        sqlx::query_as::<_, ProfileRow>(
            r#"
            UPDATE profiles SET
                full_name = COALESCE($2, full_name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                avatar_url = COALESCE($5, avatar_url),
                country = COALESCE($6, country),
                language = COALESCE($7, language),
                currency = COALESCE($8, currency),
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(update.full_name)
        .bind(update.email)
        .bind(update.phone)
        .bind(update.avatar_url)
        .bind(update.country)
        .bind(update.language)
        .bind(update.currency)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound("profile"))
    }

    async fn create_saved_place(&self, place: SavedPlaceInsert) -> Result<SavedPlaceRow, StoreError> {
        let row = place.into_row(Utc::now());
        let place = sqlx::query_as::<_, SavedPlaceRow>(
            r#"
            INSERT INTO saved_places (id, user_id, name, location, latitude, longitude, type,
                                      rating, price_level, details, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(row.id)
        .bind(row.user_id)
        .bind(&row.name)
        .bind(&row.location)
        .bind(row.latitude)
        .bind(row.longitude)
        .bind(&row.place_type)
        .bind(row.rating)
        .bind(row.price_level)
        .bind(&row.details)
        .bind(row.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(place)
    }

    async fn list_saved_places(&self, user_id: Uuid) -> Result<Vec<SavedPlaceRow>, StoreError> {
        let places = sqlx::query_as::<_, SavedPlaceRow>(
            "SELECT * FROM saved_places WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(places)
    }

    async fn update_saved_place(&self, id: Uuid, update: SavedPlaceUpdate) -> Result<SavedPlaceRow, StoreError> {
        sqlx::query_as::<_, SavedPlaceRow>(
            r#"
            UPDATE saved_places SET
                name = COALESCE($2, name),
                location = COALESCE($3, location),
                latitude = COALESCE($4, latitude),
                longitude = COALESCE($5, longitude),
                type = COALESCE($6, type),
                rating = COALESCE($7, rating),
                price_level = COALESCE($8, price_level),
                details = COALESCE($9, details)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(update.name)
        .bind(update.location)
        .bind(update.latitude)
        .bind(update.longitude)
        .bind(update.place_type)
        .bind(update.rating)
        .bind(update.price_level)
        .bind(update.details)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound("saved place"))
    }
}

async fn insert_trip<'e, E: PgExecutor<'e>>(executor: E, row: &TripRow) -> Result<TripRow, sqlx::Error> {
    sqlx::query_as::<_, TripRow>(
        r#"
        INSERT INTO trips (id, user_id, title, destination, start_date, end_date, budget,
                           travelers, interests, travel_style, special_requests, status,
                           source, ai_generated, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
        RETURNING *
        "#,
    )
    .bind(row.id)
    .bind(row.user_id)
    .bind(&row.title)
    .bind(&row.destination)
    .bind(row.start_date)
    .bind(row.end_date)
    .bind(row.budget)
    .bind(row.travelers)
    .bind(&row.interests)
    .bind(&row.travel_style)
    .bind(&row.special_requests)
    .bind(&row.status)
    .bind(&row.source)
    .bind(row.ai_generated)
    .bind(row.created_at)
    .bind(row.updated_at)
    .fetch_one(executor)
    .await
}

async fn insert_itinerary_day<'e, E: PgExecutor<'e>>(
    executor: E,
    row: &ItineraryRow,
) -> Result<ItineraryRow, sqlx::Error> {
    sqlx::query_as::<_, ItineraryRow>(
        r#"
        INSERT INTO itineraries (id, trip_id, day_number, date, title, description,
                                 activities, total_cost, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING *
        "#,
    )
    .bind(row.id)
    .bind(row.trip_id)
    .bind(row.day_number)
    .bind(row.date)
    .bind(&row.title)
    .bind(&row.description)
    .bind(&row.activities)
    .bind(row.total_cost)
    .bind(row.created_at)
    .bind(row.updated_at)
    .fetch_one(executor)
    .await
}
