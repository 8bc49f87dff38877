// src/models/profile.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Contact and localization details; at most one per user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub country: Option<String>,
    pub language: Option<String>,
    pub currency: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileInsert {
    pub user_id: Uuid,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
}

impl ProfileInsert {
    pub fn into_row(self, now: DateTime<Utc>) -> ProfileRow {
        ProfileRow {
            id: Uuid::new_v4(),
            user_id: self.user_id,
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            avatar_url: self.avatar_url,
            country: self.country,
            language: self.language,
            currency: self.currency,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub country: Option<String>,
    pub language: Option<String>,
    pub currency: Option<String>,
}

impl ProfileUpdate {
    pub fn apply_to(self, row: &mut ProfileRow, now: DateTime<Utc>) {
        row.full_name = self.full_name.or(row.full_name.take());
        row.email = self.email.or(row.email.take());
        row.phone = self.phone.or(row.phone.take());
        row.avatar_url = self.avatar_url.or(row.avatar_url.take());
        row.country = self.country.or(row.country.take());
        row.language = self.language.or(row.language.take());
        row.currency = self.currency.or(row.currency.take());
        row.updated_at = now;
    }
}
