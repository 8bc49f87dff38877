// src/planner/notification.rs
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// Toast shown after a generation attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn trip_generated(destination: &str) -> Self {
        Self {
            title: "Trip Generated!".to_string(),
            description: format!("Your personalized {} itinerary is ready!", destination),
            variant: NotificationVariant::Default,
        }
    }

    /// Same message for every failure; the cause only goes to the logs
    pub fn generation_failed() -> Self {
        Self {
            title: "Generation Failed".to_string(),
            description: "Something went wrong. Please try again.".to_string(),
            variant: NotificationVariant::Destructive,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}
