// src/planner/preferences.rs
//! Preferences form state and the record handed to the generator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::PlannerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interest {
    Adventure,
    Culture,
    Food,
    Nature,
    History,
    Art,
    Beach,
    Mountains,
    Cities,
    Wildlife,
    Photography,
    Relaxation,
}

impl Interest {
    /// Display order of the interest toggles
    pub const ALL: [Interest; 12] = [
        Interest::Adventure,
        Interest::Culture,
        Interest::Food,
        Interest::Nature,
        Interest::History,
        Interest::Art,
        Interest::Beach,
        Interest::Mountains,
        Interest::Cities,
        Interest::Wildlife,
        Interest::Photography,
        Interest::Relaxation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Interest::Adventure => "Adventure",
            Interest::Culture => "Culture",
            Interest::Food => "Food",
            Interest::Nature => "Nature",
            Interest::History => "History",
            Interest::Art => "Art",
            Interest::Beach => "Beach",
            Interest::Mountains => "Mountains",
            Interest::Cities => "Cities",
            Interest::Wildlife => "Wildlife",
            Interest::Photography => "Photography",
            Interest::Relaxation => "Relaxation",
        }
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interest {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interest::ALL
            .into_iter()
            .find(|i| i.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PlannerError::UnknownInterest(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelStyle {
    Luxury,
    #[default]
    Comfort,
    Budget,
    Adventure,
}

impl TravelStyle {
    pub const ALL: [TravelStyle; 4] = [
        TravelStyle::Luxury,
        TravelStyle::Comfort,
        TravelStyle::Budget,
        TravelStyle::Adventure,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            TravelStyle::Luxury => "luxury",
            TravelStyle::Comfort => "comfort",
            TravelStyle::Budget => "budget",
            TravelStyle::Adventure => "adventure",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TravelStyle::Luxury => "Luxury",
            TravelStyle::Comfort => "Comfort",
            TravelStyle::Budget => "Budget",
            TravelStyle::Adventure => "Adventure",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TravelStyle::Luxury => "Premium experiences and accommodations",
            TravelStyle::Comfort => "Balance of comfort and value",
            TravelStyle::Budget => "Cost-effective travel options",
            TravelStyle::Adventure => "Off-the-beaten-path experiences",
        }
    }
}

impl FromStr for TravelStyle {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TravelStyle::ALL
            .into_iter()
            .find(|style| style.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PlannerError::UnknownStyle(s.to_string()))
    }
}

/// Generation input contract. Everything is a string except `interests`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPreferences {
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: String,
    pub travelers: String,
    pub interests: Vec<String>,
    pub travel_style: String,
    pub special_requests: String,
}

/// Why the submit control is disabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitBlocker {
    Pending,
    MissingDestination,
    MissingStartDate,
}

impl fmt::Display for SubmitBlocker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitBlocker::Pending => f.write_str("a trip is already being generated"),
            SubmitBlocker::MissingDestination => f.write_str("destination is required"),
            SubmitBlocker::MissingStartDate => f.write_str("start date is required"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesForm {
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: String,
    pub travelers: String,
    /// Selected interests in selection order, no duplicates
    pub interests: Vec<Interest>,
    pub travel_style: TravelStyle,
    pub special_requests: String,
}

impl Default for PreferencesForm {
    fn default() -> Self {
        Self {
            destination: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            budget: String::new(),
            travelers: "2".to_string(),
            interests: Vec::new(),
            travel_style: TravelStyle::default(),
            special_requests: String::new(),
        }
    }
}

impl PreferencesForm {
    /// Remove the interest if selected, otherwise append it
    pub fn toggle_interest(&mut self, interest: Interest) {
        if let Some(pos) = self.interests.iter().position(|i| *i == interest) {
            self.interests.remove(pos);
        } else {
            self.interests.push(interest);
        }
    }

    pub fn is_selected(&self, interest: Interest) -> bool {
        self.interests.contains(&interest)
    }

    pub fn select_style(&mut self, style: TravelStyle) {
        self.travel_style = style;
    }

    pub fn apply(&mut self, update: FormUpdate) {
        let FormUpdate {
            destination,
            start_date,
            end_date,
            budget,
            travelers,
            special_requests,
        } = update;

        for (field, value) in [
            (&mut self.destination, destination),
            (&mut self.start_date, start_date),
            (&mut self.end_date, end_date),
            (&mut self.budget, budget),
            (&mut self.travelers, travelers),
            (&mut self.special_requests, special_requests),
        ] {
            if let Some(value) = value {
                *field = value;
            }
        }
    }

    /// First reason submission is disabled, if any. Presence only; values are not trimmed.
    pub fn submit_blocker(&self, pending: bool) -> Option<SubmitBlocker> {
        if pending {
            Some(SubmitBlocker::Pending)
        } else if self.destination.is_empty() {
            Some(SubmitBlocker::MissingDestination)
        } else if self.start_date.is_empty() {
            Some(SubmitBlocker::MissingStartDate)
        } else {
            None
        }
    }

    pub fn to_preferences(&self) -> TripPreferences {
        TripPreferences {
            destination: self.destination.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            budget: self.budget.clone(),
            travelers: self.travelers.clone(),
            interests: self.interests.iter().map(|i| i.to_string()).collect(),
            travel_style: self.travel_style.id().to_string(),
            special_requests: self.special_requests.clone(),
        }
    }
}

/// Partial edit of the text fields; absent fields are left alone
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormUpdate {
    pub destination: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub budget: Option<String>,
    pub travelers: Option<String>,
    pub special_requests: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_fresh_form() {
        let form = PreferencesForm::default();
        assert_eq!(form.travelers, "2");
        assert_eq!(form.travel_style, TravelStyle::Comfort);
        assert!(form.interests.is_empty());
    }

    #[test]
    fn double_toggle_restores_interests() {
        let mut form = PreferencesForm::default();
        form.toggle_interest(Interest::Food);
        form.toggle_interest(Interest::Art);
        let before = form.interests.clone();

        for interest in Interest::ALL {
            form.toggle_interest(interest);
            form.toggle_interest(interest);
            assert_eq!(form.interests.len(), before.len());
        }
        // toggling a selected tag twice re-appends it, so compare as sets
        for interest in &before {
            assert!(form.is_selected(*interest));
        }

        let mut fresh = PreferencesForm::default();
        fresh.toggle_interest(Interest::Beach);
        fresh.toggle_interest(Interest::Beach);
        assert!(fresh.interests.is_empty());
    }

    #[test]
    fn toggle_appends_in_selection_order() {
        let mut form = PreferencesForm::default();
        form.toggle_interest(Interest::Wildlife);
        form.toggle_interest(Interest::Adventure);
        assert_eq!(form.to_preferences().interests, vec!["Wildlife", "Adventure"]);
    }

    #[test]
    fn exactly_one_style_is_active() {
        let mut form = PreferencesForm::default();
        for style in TravelStyle::ALL {
            form.select_style(style);
            let active: Vec<_> = TravelStyle::ALL
                .into_iter()
                .filter(|s| *s == form.travel_style)
                .collect();
            assert_eq!(active, vec![style]);
        }
    }

    #[test]
    fn submission_needs_destination_and_start_date() {
        let mut form = PreferencesForm::default();
        assert_eq!(form.submit_blocker(false), Some(SubmitBlocker::MissingDestination));

        form.apply(FormUpdate {
            destination: Some("Lisbon".to_string()),
            ..Default::default()
        });
        assert_eq!(form.submit_blocker(false), Some(SubmitBlocker::MissingStartDate));

        form.apply(FormUpdate {
            start_date: Some("2024-03-15".to_string()),
            ..Default::default()
        });
        assert_eq!(form.submit_blocker(false), None);
        assert_eq!(form.submit_blocker(true), Some(SubmitBlocker::Pending));
    }

    #[test]
    fn whitespace_counts_as_present() {
        let mut form = PreferencesForm::default();
        form.destination = " ".to_string();
        form.start_date = "2024-03-15".to_string();
        assert_eq!(form.submit_blocker(false), None);
    }

    #[test]
    fn apply_leaves_absent_fields_untouched() {
        let mut form = PreferencesForm::default();
        form.apply(FormUpdate {
            budget: Some("$2000 per person".to_string()),
            ..Default::default()
        });
        assert_eq!(form.budget, "$2000 per person");
        assert_eq!(form.travelers, "2");
        assert_eq!(form.destination, "");
    }

    #[test]
    fn preferences_serialize_with_camel_case_strings() {
        let mut form = PreferencesForm::default();
        form.destination = "Lisbon".to_string();
        form.toggle_interest(Interest::History);
        form.select_style(TravelStyle::Budget);

        let json = serde_json::to_value(form.to_preferences()).unwrap();
        assert_eq!(json["destination"], "Lisbon");
        assert_eq!(json["travelStyle"], "budget");
        assert_eq!(json["interests"], serde_json::json!(["History"]));
        assert_eq!(json["specialRequests"], "");
        assert_eq!(json["travelers"], "2");
    }

    #[test]
    fn parsing_is_case_insensitive_and_rejects_unknown_values() {
        assert_eq!("photography".parse::<Interest>().unwrap(), Interest::Photography);
        assert_eq!("LUXURY".parse::<TravelStyle>().unwrap(), TravelStyle::Luxury);
        assert!(matches!("Skiing".parse::<Interest>(), Err(PlannerError::UnknownInterest(_))));
        assert!(matches!("backpacker".parse::<TravelStyle>(), Err(PlannerError::UnknownStyle(_))));
    }
}
