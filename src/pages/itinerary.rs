// src/pages/itinerary.rs
use super::{escape, layout};
use crate::generation::GeneratedTrip;
use crate::itinerary::{ActivityView, DayView, ItineraryView};
use crate::planner::SessionId;

fn icon(name: &str) -> &'static str {
    match name {
        "camera" => "📷",
        "utensils" => "🍴",
        "bed" => "🛏️",
        _ => "📍",
    }
}

fn render_activity(activity: &ActivityView) -> String {
    let rating = activity
        .rating_badge
        .as_deref()
        .map(|r| format!(r#"<span class="rating">⭐ {}</span>"#, escape(r)))
        .unwrap_or_default();
    let thumbnail = activity
        .thumbnail
        .as_deref()
        .map(|url| format!(r#"<div class="thumb" style="background-image: url('{}')"></div>"#, escape(url)))
        .unwrap_or_default();
    let connector = if activity.connector { r#"<div class="line"></div>"# } else { "" };

    format!(
        r#"<div class="timeline">
            <div class="marker"><div>{icon}</div><div class="time">{time}</div>{connector}</div>
            <div style="flex: 1;">
                <h3>{title}{rating}</h3>
                <p class="muted">{description}</p>
                <div style="color: #0284c7;">📍 {location}</div>
            </div>
            {thumbnail}
        </div>"#,
        icon = icon(activity.icon),
        time = escape(&activity.time),
        connector = connector,
        title = escape(&activity.title),
        rating = rating,
        description = escape(&activity.description),
        location = escape(&activity.location),
        thumbnail = thumbnail,
    )
}

fn render_day(day: &DayView) -> String {
    let activities: String = day.activities.iter().map(render_activity).collect();
    format!(
        r#"<div class="card">
        <div style="display: flex; gap: 1rem; align-items: center; margin-bottom: 1.5rem;">
            <div class="day-number">{day}</div>
            <div><h2>{title}</h2><p class="muted">{date}</p></div>
        </div>
        {activities}
    </div>"#,
        day = day.day,
        title = escape(&day.title),
        date = escape(&day.date),
        activities = activities,
    )
}

pub fn render(session_id: SessionId, trip: &GeneratedTrip) -> String {
    let view = ItineraryView::build(&trip.destination, &trip.days);
    let days: String = view.days.iter().map(render_day).collect();
    let rating = view
        .overview
        .average_rating
        .as_deref()
        .map(|r| format!("{}/5", r))
        .unwrap_or_else(|| "Unrated".to_string());

    let body = format!(
        r###"
<div class="container">
    <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 2rem;">
        <div style="display: flex; gap: 1rem; align-items: center;">
            <button class="btn btn-outline" onclick="call('POST', '/api/sessions/{id}/back')">← Back</button>
            <div><h1>{heading}</h1><p class="muted">{subtitle}</p></div>
        </div>
        <button class="btn btn-outline" onclick="saveTrip()">♡ Save</button>
    </div>
    <div class="grid grid-3" style="margin-bottom: 2.5rem;">
        <div class="card"><h3>📅 Duration</h3><p style="font-size: 1.6rem; font-weight: bold;">{duration} Days</p></div>
        <div class="card"><h3>📍 Activities</h3><p style="font-size: 1.6rem; font-weight: bold;">{experiences} Experiences</p></div>
        <div class="card"><h3>⭐ Rating</h3><p style="font-size: 1.6rem; font-weight: bold;">{rating}</p></div>
    </div>
    {days}
</div>
<script>
    function saveTrip() {{
        const userId = prompt('User id to save this trip under');
        if (userId) call('POST', '/api/sessions/{id}/save', {{ user_id: userId }});
    }}
</script>"###,
        id = session_id,
        heading = escape(&view.heading),
        subtitle = escape(&view.subtitle),
        duration = view.overview.duration_days,
        experiences = view.overview.experiences,
        rating = rating,
        days = days,
    );

    layout(&format!("Trip Planner - {}", view.heading), &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::sample_itinerary;
    use crate::planner::PreferencesForm;
    use uuid::Uuid;

    #[test]
    fn header_shows_submitted_destination() {
        let mut form = PreferencesForm::default();
        form.destination = "Kyoto & Osaka".to_string();
        let trip = GeneratedTrip {
            destination: form.destination.clone(),
            preferences: form.to_preferences(),
            days: sample_itinerary(),
        };

        let html = render(Uuid::new_v4(), &trip);
        assert!(html.contains("<h1>Your Kyoto &amp; Osaka Adventure</h1>"));
        assert!(html.contains("3 Days"));
        assert!(html.contains("8 Experiences"));
        assert!(html.contains("4.7/5"));
        assert!(html.contains("March 16, 2024"));
    }
}
