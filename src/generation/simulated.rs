// src/generation/simulated.rs
use async_trait::async_trait;
use std::time::Duration;

use super::{GeneratedTrip, GenerationError, ItineraryGenerator};
use crate::itinerary::sample_itinerary;
use crate::planner::TripPreferences;

pub const DEFAULT_GENERATION_DELAY: Duration = Duration::from_millis(3000);

/// Stand-in generator: sleeps for a fixed delay, then returns the sample
/// itinerary whatever the preferences were.
#[derive(Debug, Clone)]
pub struct SimulatedGenerator {
    delay: Duration,
}

impl SimulatedGenerator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_GENERATION_DELAY)
    }
}

#[async_trait]
impl ItineraryGenerator for SimulatedGenerator {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn generate(&self, preferences: &TripPreferences) -> Result<GeneratedTrip, GenerationError> {
        tracing::debug!(
            destination = %preferences.destination,
            delay_ms = %self.delay.as_millis(),
            "simulating itinerary generation"
        );
        tokio::time::sleep(self.delay).await;

        Ok(GeneratedTrip {
            destination: preferences.destination.clone(),
            preferences: preferences.clone(),
            days: sample_itinerary(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::PreferencesForm;

    #[tokio::test(start_paused = true)]
    async fn waits_then_returns_sample_days() {
        let mut form = PreferencesForm::default();
        form.destination = "Reykjavik".to_string();
        form.start_date = "2024-03-15".to_string();
        let preferences = form.to_preferences();

        let generator = SimulatedGenerator::default();
        let started = tokio::time::Instant::now();
        let trip = generator.generate(&preferences).await.unwrap();

        assert!(started.elapsed() >= DEFAULT_GENERATION_DELAY);
        assert_eq!(trip.destination, "Reykjavik");
        assert_eq!(trip.preferences, preferences);
        assert_eq!(trip.days, sample_itinerary());
    }
}
