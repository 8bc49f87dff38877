// src/planner/state.rs
//! Per-session view state: which screen is showing and what it holds.

use serde::Serialize;

use super::notification::Notification;
use super::preferences::{PreferencesForm, SubmitBlocker, TripPreferences};
use super::PlannerError;
use crate::generation::{GeneratedTrip, GenerationError};

/// The preferences screen's contents
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Draft {
    pub form: PreferencesForm,
    pub pending: bool,
    /// Trip the user came back from, kept until they return to landing
    pub previous_trip: Option<GeneratedTrip>,
}

impl Draft {
    pub fn submit_blocker(&self) -> Option<SubmitBlocker> {
        self.form.submit_blocker(self.pending)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum ViewState {
    #[default]
    Landing,
    Collecting(Draft),
    Displaying(GeneratedTrip),
}

impl ViewState {
    pub fn screen(&self) -> &'static str {
        match self {
            ViewState::Landing => "landing",
            ViewState::Collecting(_) => "collecting",
            ViewState::Displaying(_) => "displaying",
        }
    }

    fn invalid(&self, action: &'static str) -> PlannerError {
        PlannerError::InvalidTransition {
            from: self.screen(),
            action,
        }
    }

    /// Whether the submit control is enabled right now
    pub fn submit_enabled(&self) -> bool {
        matches!(self, ViewState::Collecting(draft) if draft.submit_blocker().is_none())
    }

    pub fn trip(&self) -> Option<&GeneratedTrip> {
        match self {
            ViewState::Displaying(trip) => Some(trip),
            ViewState::Collecting(draft) => draft.previous_trip.as_ref(),
            ViewState::Landing => None,
        }
    }

    /// Landing → preferences with a fresh form
    pub fn start_planning(&mut self) -> Result<(), PlannerError> {
        match self {
            ViewState::Landing => {
                *self = ViewState::Collecting(Draft::default());
                Ok(())
            }
            _ => Err(self.invalid("start planning")),
        }
    }

    pub fn form_mut(&mut self) -> Result<&mut PreferencesForm, PlannerError> {
        match self {
            ViewState::Collecting(draft) => Ok(&mut draft.form),
            _ => Err(self.invalid("edit preferences")),
        }
    }

    /// Mark the draft pending and hand out the record to generate from
    pub fn begin_generation(&mut self) -> Result<TripPreferences, PlannerError> {
        let ViewState::Collecting(draft) = self else {
            return Err(self.invalid("generate"));
        };
        if let Some(blocker) = draft.submit_blocker() {
            return Err(PlannerError::SubmissionBlocked(blocker));
        }
        draft.pending = true;
        Ok(draft.form.to_preferences())
    }

    /// Settle a pending generation. Success moves to the itinerary screen;
    /// failure clears `pending` and keeps the form editable.
    pub fn finish_generation(
        &mut self,
        result: Result<GeneratedTrip, GenerationError>,
    ) -> Result<Notification, PlannerError> {
        let ViewState::Collecting(draft) = self else {
            return Err(self.invalid("finish generation"));
        };
        if !draft.pending {
            return Err(PlannerError::InvalidTransition {
                from: "collecting",
                action: "finish generation",
            });
        }

        match result {
            Ok(trip) => {
                let notification = Notification::trip_generated(&trip.destination);
                *self = ViewState::Displaying(trip);
                Ok(notification)
            }
            Err(_) => {
                draft.pending = false;
                Ok(Notification::generation_failed())
            }
        }
    }

    /// Itinerary → preferences shows a fresh form but keeps the trip as the
    /// draft; preferences → landing drops it
    pub fn back(&mut self) -> Result<(), PlannerError> {
        match self {
            ViewState::Displaying(trip) => {
                let trip = trip.clone();
                *self = ViewState::Collecting(Draft {
                    form: PreferencesForm::default(),
                    pending: false,
                    previous_trip: Some(trip),
                });
                Ok(())
            }
            ViewState::Collecting(draft) if draft.pending => Err(PlannerError::GenerationPending),
            ViewState::Collecting(_) => {
                *self = ViewState::Landing;
                Ok(())
            }
            ViewState::Landing => Err(self.invalid("go back")),
        }
    }
}
