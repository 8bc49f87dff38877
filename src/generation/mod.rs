// src/generation/mod.rs
//! Itinerary generation seam. The planner only knows the `ItineraryGenerator`
//! trait; the shipped implementation waits and returns the sample days.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::itinerary::DayItinerary;
use crate::planner::TripPreferences;

pub mod simulated;

pub use simulated::SimulatedGenerator;

/// Result of a successful generation: what the itinerary screen displays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedTrip {
    pub destination: String,
    pub preferences: TripPreferences,
    pub days: Vec<DayItinerary>,
}

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Generator unavailable: {0}")]
    Unavailable(String),

    #[error("Generator failed: {0}")]
    Failed(String),
}

#[async_trait]
pub trait ItineraryGenerator: Send + Sync {
    /// Short identifier reported by the status endpoint
    fn name(&self) -> &'static str;

    async fn generate(&self, preferences: &TripPreferences) -> Result<GeneratedTrip, GenerationError>;
}
