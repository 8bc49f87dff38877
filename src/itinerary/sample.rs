// src/itinerary/sample.rs
// Fixed three-day itinerary shown for every generated trip.

use chrono::NaiveDate;

use super::{Activity, ActivityKind, DayItinerary};

const CITY_IMAGE: &str = "/assets/city.svg";
const MOUNTAINS_IMAGE: &str = "/assets/mountains.svg";
const RAINFOREST_IMAGE: &str = "/assets/rainforest.svg";

fn activity(
    time: &str,
    title: &str,
    description: &str,
    location: &str,
    kind: ActivityKind,
    rating: f64,
    image: Option<&str>,
) -> Activity {
    Activity {
        time: time.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        kind,
        rating: Some(rating),
        image: image.map(str::to_string),
    }
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, day).unwrap_or_default()
}

pub fn sample_itinerary() -> Vec<DayItinerary> {
    vec![
        DayItinerary {
            day: 1,
            date: date(15),
            title: "Arrival & City Exploration".to_string(),
            activities: vec![
                activity(
                    "10:00 AM",
                    "Hotel Check-in",
                    "Luxury resort with ocean views and spa facilities",
                    "Paradise Beach Resort",
                    ActivityKind::Lodging,
                    4.8,
                    Some(CITY_IMAGE),
                ),
                activity(
                    "2:00 PM",
                    "Historic Old Town Tour",
                    "Guided walking tour through cobblestone streets and ancient architecture",
                    "Old Town Square",
                    ActivityKind::Sightseeing,
                    4.6,
                    Some(CITY_IMAGE),
                ),
                activity(
                    "7:00 PM",
                    "Sunset Dinner",
                    "Fine dining with local specialties and panoramic city views",
                    "Sky Terrace Restaurant",
                    ActivityKind::Dining,
                    4.9,
                    None,
                ),
            ],
        },
        DayItinerary {
            day: 2,
            date: date(16),
            title: "Mountain Adventure".to_string(),
            activities: vec![
                activity(
                    "8:00 AM",
                    "Mountain Hiking Trail",
                    "Scenic hike through alpine meadows with stunning mountain vistas",
                    "Eagle Peak Trail",
                    ActivityKind::Activity,
                    4.7,
                    Some(MOUNTAINS_IMAGE),
                ),
                activity(
                    "12:30 PM",
                    "Mountain Lodge Lunch",
                    "Traditional mountain cuisine with local ingredients",
                    "Alpine Lodge",
                    ActivityKind::Dining,
                    4.5,
                    None,
                ),
                activity(
                    "3:00 PM",
                    "Cable Car Ride",
                    "Breathtaking aerial views of the mountain range",
                    "Summit Station",
                    ActivityKind::Sightseeing,
                    4.8,
                    None,
                ),
            ],
        },
        DayItinerary {
            day: 3,
            date: date(17),
            title: "Rainforest Exploration".to_string(),
            activities: vec![
                activity(
                    "9:00 AM",
                    "Rainforest Trek",
                    "Guided nature walk through lush tropical rainforest",
                    "Emerald Forest Reserve",
                    ActivityKind::Activity,
                    4.6,
                    Some(RAINFOREST_IMAGE),
                ),
                activity(
                    "1:00 PM",
                    "Waterfall Swimming",
                    "Refreshing swim in natural pools beneath cascading waterfalls",
                    "Crystal Falls",
                    ActivityKind::Activity,
                    4.9,
                    None,
                ),
            ],
        },
    ]
}
