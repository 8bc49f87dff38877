// src/itinerary/view.rs
//! Display model for the itinerary screen. Built straight from the day list:
//! no sorting, deduplication or time-conflict checks.

use serde::Serialize;

use super::{Activity, ActivityKind, DayItinerary};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItineraryView {
    pub heading: String,
    pub subtitle: String,
    pub overview: TripOverview,
    pub days: Vec<DayView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripOverview {
    pub duration_days: usize,
    pub experiences: usize,
    /// Mean of the rated activities, one decimal ("4.7"); `None` when nothing is rated
    pub average_rating: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayView {
    pub day: u32,
    pub date: String,
    pub title: String,
    pub activities: Vec<ActivityView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityView {
    pub time: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub kind: ActivityKind,
    pub icon: &'static str,
    pub rating_badge: Option<String>,
    pub thumbnail: Option<String>,
    /// Draw the timeline connector below this entry (every activity but the last of the day)
    pub connector: bool,
}

impl ItineraryView {
    pub fn build(destination: &str, days: &[DayItinerary]) -> Self {
        let experiences = days.iter().map(|d| d.activities.len()).sum();
        let duration_days = days.len();

        Self {
            heading: format!("Your {} Adventure", destination),
            subtitle: format!(
                "AI-crafted itinerary • {} {}",
                duration_days,
                if duration_days == 1 { "day" } else { "days" }
            ),
            overview: TripOverview {
                duration_days,
                experiences,
                average_rating: average_rating(days),
            },
            days: days.iter().map(DayView::from_day).collect(),
        }
    }
}

impl DayView {
    fn from_day(day: &DayItinerary) -> Self {
        let last = day.activities.len().saturating_sub(1);
        Self {
            day: day.day,
            date: day.date.format("%B %-d, %Y").to_string(),
            title: day.title.clone(),
            activities: day
                .activities
                .iter()
                .enumerate()
                .map(|(index, activity)| ActivityView::from_activity(activity, index < last))
                .collect(),
        }
    }
}

impl ActivityView {
    fn from_activity(activity: &Activity, connector: bool) -> Self {
        Self {
            time: activity.time.clone(),
            title: activity.title.clone(),
            description: activity.description.clone(),
            location: activity.location.clone(),
            kind: activity.kind,
            icon: activity.kind.icon(),
            rating_badge: activity.rating.map(|r| r.to_string()),
            thumbnail: activity.image.clone(),
            connector,
        }
    }
}

fn average_rating(days: &[DayItinerary]) -> Option<String> {
    let ratings: Vec<f64> = days
        .iter()
        .flat_map(|d| d.activities.iter())
        .filter_map(|a| a.rating)
        .collect();

    if ratings.is_empty() {
        return None;
    }

    let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
    Some(format!("{:.1}", mean))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::sample_itinerary;

    #[test]
    fn sample_overview_matches_fixed_cards() {
        let view = ItineraryView::build("Costa Rica", &sample_itinerary());
        assert_eq!(view.heading, "Your Costa Rica Adventure");
        assert_eq!(view.subtitle, "AI-crafted itinerary • 3 days");
        assert_eq!(view.overview.duration_days, 3);
        assert_eq!(view.overview.experiences, 8);
        assert_eq!(view.overview.average_rating.as_deref(), Some("4.7"));
    }

    #[test]
    fn icons_follow_activity_category() {
        let view = ItineraryView::build("Kyoto", &sample_itinerary());
        let first_day: Vec<_> = view.days[0].activities.iter().map(|a| a.icon).collect();
        assert_eq!(first_day, vec!["bed", "camera", "utensils"]);
        assert_eq!(view.days[1].activities[0].icon, "map-pin");
    }

    #[test]
    fn activities_keep_given_order_and_connectors() {
        let mut days = sample_itinerary();
        days[0].activities.reverse();
        let view = ItineraryView::build("Kyoto", &days);

        let times: Vec<_> = view.days[0].activities.iter().map(|a| a.time.as_str()).collect();
        assert_eq!(times, vec!["7:00 PM", "2:00 PM", "10:00 AM"]);

        let connectors: Vec<_> = view.days[0].activities.iter().map(|a| a.connector).collect();
        assert_eq!(connectors, vec![true, true, false]);
    }

    #[test]
    fn dates_render_long_form_and_badges_only_when_rated() {
        let mut days = sample_itinerary();
        days[2].activities[1].rating = None;
        let view = ItineraryView::build("Kyoto", &days);

        assert_eq!(view.days[0].date, "March 15, 2024");
        assert_eq!(view.days[0].activities[0].rating_badge.as_deref(), Some("4.8"));
        assert_eq!(view.days[2].activities[1].rating_badge, None);
        assert_eq!(view.days[0].activities[2].thumbnail, None);
    }

    #[test]
    fn empty_itinerary_has_no_rating() {
        let view = ItineraryView::build("Nowhere", &[]);
        assert_eq!(view.overview.experiences, 0);
        assert_eq!(view.overview.average_rating, None);
        assert_eq!(view.subtitle, "AI-crafted itinerary • 0 days");
    }
}
