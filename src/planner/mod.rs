// src/planner/mod.rs
//! Planning sessions: one view state per browser session, driven through
//! landing → preferences → itinerary and back.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::generation::{GeneratedTrip, ItineraryGenerator};

pub mod notification;
pub mod preferences;
pub mod state;

pub use notification::{Notification, NotificationVariant};
pub use preferences::{FormUpdate, Interest, PreferencesForm, SubmitBlocker, TravelStyle, TripPreferences};
pub use state::{Draft, ViewState};

pub type SessionId = Uuid;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Session {0} not found")]
    SessionNotFound(SessionId),

    #[error("Cannot {action} from the {from} screen")]
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },

    #[error("Submission disabled: {0}")]
    SubmissionBlocked(SubmitBlocker),

    #[error("A trip is being generated and cannot be cancelled")]
    GenerationPending,

    #[error("Unknown interest: {0}")]
    UnknownInterest(String),

    #[error("Unknown travel style: {0}")]
    UnknownStyle(String),
}

#[derive(Debug, Clone)]
struct Session {
    state: ViewState,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Session {
    fn new() -> Self {
        let now = Utc::now();
        Self {
            state: ViewState::Landing,
            created_at: now,
            updated_at: now,
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Snapshot returned to callers after every operation
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub submit_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub state: ViewState,
}

impl SessionSnapshot {
    fn of(session_id: SessionId, session: &Session) -> Self {
        Self {
            session_id,
            submit_enabled: session.state.submit_enabled(),
            created_at: session.created_at,
            updated_at: session.updated_at,
            state: session.state.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationOutcome {
    pub notification: Notification,
    pub session: SessionSnapshot,
}

/// Owns every live session and the generator they submit to
pub struct Planner {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
    generator: Arc<dyn ItineraryGenerator>,
}

impl Planner {
    pub fn new(generator: Arc<dyn ItineraryGenerator>) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            generator,
        }
    }

    pub fn generator_name(&self) -> &'static str {
        self.generator.name()
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn create_session(&self) -> SessionSnapshot {
        let session_id = Uuid::new_v4();
        let session = Session::new();
        let snapshot = SessionSnapshot::of(session_id, &session);
        self.sessions.write().await.insert(session_id, session);
        tracing::info!(session_id = %session_id, "planning session created");
        snapshot
    }

    pub async fn snapshot(&self, session_id: SessionId) -> Result<SessionSnapshot, PlannerError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(&session_id)
            .map(|session| SessionSnapshot::of(session_id, session))
            .ok_or(PlannerError::SessionNotFound(session_id))
    }

    pub async fn discard(&self, session_id: SessionId) -> Result<(), PlannerError> {
        self.sessions
            .write()
            .await
            .remove(&session_id)
            .map(|_| tracing::info!(session_id = %session_id, "planning session discarded"))
            .ok_or(PlannerError::SessionNotFound(session_id))
    }

    /// Apply a synchronous transition under the write lock
    async fn transition<F>(&self, session_id: SessionId, action: &str, f: F) -> Result<SessionSnapshot, PlannerError>
    where
        F: FnOnce(&mut ViewState) -> Result<(), PlannerError>,
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&session_id)
            .ok_or(PlannerError::SessionNotFound(session_id))?;

        let from = session.state.screen();
        if let Err(e) = f(&mut session.state) {
            tracing::warn!(session_id = %session_id, action, from, error = %e, "transition rejected");
            return Err(e);
        }
        session.touch();
        tracing::debug!(session_id = %session_id, action, from, to = session.state.screen(), "transition applied");
        Ok(SessionSnapshot::of(session_id, session))
    }

    pub async fn start_planning(&self, session_id: SessionId) -> Result<SessionSnapshot, PlannerError> {
        self.transition(session_id, "start_planning", ViewState::start_planning).await
    }

    pub async fn update_preferences(
        &self,
        session_id: SessionId,
        update: FormUpdate,
    ) -> Result<SessionSnapshot, PlannerError> {
        self.transition(session_id, "update_preferences", |state| {
            state.form_mut()?.apply(update);
            Ok(())
        })
        .await
    }

    pub async fn toggle_interest(
        &self,
        session_id: SessionId,
        interest: Interest,
    ) -> Result<SessionSnapshot, PlannerError> {
        self.transition(session_id, "toggle_interest", |state| {
            state.form_mut()?.toggle_interest(interest);
            Ok(())
        })
        .await
    }

    pub async fn select_style(
        &self,
        session_id: SessionId,
        style: TravelStyle,
    ) -> Result<SessionSnapshot, PlannerError> {
        self.transition(session_id, "select_style", |state| {
            state.form_mut()?.select_style(style);
            Ok(())
        })
        .await
    }

    pub async fn back(&self, session_id: SessionId) -> Result<SessionSnapshot, PlannerError> {
        self.transition(session_id, "back", ViewState::back).await
    }

    /// Submit the form. The lock is released while the generator runs; the
    /// session's `pending` flag is what turns away a second submission.
    pub async fn generate(&self, session_id: SessionId) -> Result<GenerationOutcome, PlannerError> {
        let preferences = {
            let mut sessions = self.sessions.write().await;
            let session = sessions
                .get_mut(&session_id)
                .ok_or(PlannerError::SessionNotFound(session_id))?;
            let preferences = session.state.begin_generation().map_err(|e| {
                tracing::warn!(session_id = %session_id, error = %e, "generation rejected");
                e
            })?;
            session.touch();
            preferences
        };

        tracing::info!(
            session_id = %session_id,
            destination = %preferences.destination,
            generator = self.generator.name(),
            "generating itinerary"
        );
        let result = self.generator.generate(&preferences).await;
        if let Err(e) = &result {
            tracing::error!(session_id = %session_id, error = %e, "itinerary generation failed");
        }

        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&session_id)
            .ok_or(PlannerError::SessionNotFound(session_id))?;
        let notification = session.state.finish_generation(result)?;
        session.touch();

        if !notification.is_failure() {
            tracing::info!(session_id = %session_id, "itinerary ready");
        }
        Ok(GenerationOutcome {
            notification,
            session: SessionSnapshot::of(session_id, session),
        })
    }

    /// The trip on the itinerary screen
    pub async fn displayed_trip(&self, session_id: SessionId) -> Result<GeneratedTrip, PlannerError> {
        let sessions = self.sessions.read().await;
        let session = sessions
            .get(&session_id)
            .ok_or(PlannerError::SessionNotFound(session_id))?;
        match &session.state {
            ViewState::Displaying(trip) => Ok(trip.clone()),
            other => Err(PlannerError::InvalidTransition {
                from: other.screen(),
                action: "view the itinerary",
            }),
        }
    }

    /// Drop sessions idle for longer than `max_idle`, skipping any with a generation in flight
    pub async fn cleanup_idle_sessions(&self, max_idle: chrono::Duration) -> usize {
        let cutoff = Utc::now() - max_idle;
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| {
            let pending = matches!(&session.state, ViewState::Collecting(draft) if draft.pending);
            pending || session.updated_at >= cutoff
        });
        let removed = before - sessions.len();
        if removed > 0 {
            tracing::debug!(removed, "cleaned up idle planning sessions");
        }
        removed
    }
}
