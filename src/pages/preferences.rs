// src/pages/preferences.rs
use super::{escape, layout};
use crate::planner::{Draft, Interest, SessionId, TravelStyle};

fn text_input(id: &str, label: &str, input_type: &str, value: &str, placeholder: &str) -> String {
    format!(
        r#"<div><label for="{id}">{label}</label><input id="{id}" type="{input_type}" value="{value}" placeholder="{placeholder}"></div>"#,
        id = id,
        label = label,
        input_type = input_type,
        value = escape(value),
        placeholder = placeholder,
    )
}

pub fn render(session_id: SessionId, draft: &Draft) -> String {
    let form = &draft.form;

    let interests: String = Interest::ALL
        .iter()
        .map(|interest| {
            format!(
                r#"<button type="button" class="toggle{active}" onclick="saveFields().then(() => call('POST', '/api/sessions/{id}/interests/toggle', {{ interest: '{name}' }}))">{name}</button>"#,
                active = if form.is_selected(*interest) { " active" } else { "" },
                id = session_id,
                name = interest.as_str(),
            )
        })
        .collect();

    let styles: String = TravelStyle::ALL
        .iter()
        .map(|style| {
            format!(
                r#"<button type="button" class="toggle{active}" onclick="saveFields().then(() => call('POST', '/api/sessions/{id}/style', {{ style: '{style_id}' }}))"><strong>{name}</strong><div>{desc}</div></button>"#,
                active = if form.travel_style == *style { " active" } else { "" },
                id = session_id,
                style_id = style.id(),
                name = style.name(),
                desc = style.description(),
            )
        })
        .collect();

    let submit_label = if draft.pending {
        "Crafting Your Perfect Trip..."
    } else {
        "✨ Generate My Trip Plan"
    };

    let body = format!(
        r###"
<div class="container">
    <div style="text-align: center; margin-bottom: 2.5rem;">
        <div class="badge" style="background: #e0f2fe; color: #0284c7;">✨ Personalize Your Journey</div>
        <h2 style="font-size: 2.4rem;">Tell Us About Your Dream Trip</h2>
        <p class="muted">Share your preferences and let our AI create the perfect itinerary tailored just for you</p>
    </div>
    <div class="card">
        <div class="grid grid-3" style="margin-bottom: 1.5rem;">
            {destination}
            {start_date}
            {end_date}
        </div>
        <div class="grid grid-2" style="margin-bottom: 1.5rem;">
            {budget}
            {travelers}
        </div>
        <label>What interests you?</label>
        <div class="grid grid-4" style="margin-bottom: 1.5rem;">{interests}</div>
        <label>Travel Style</label>
        <div class="grid grid-2" style="margin-bottom: 1.5rem;">{styles}</div>
        <div style="margin-bottom: 1.5rem;">
            <label for="specialRequests">Special Requests or Requirements</label>
            <textarea id="specialRequests" placeholder="Any dietary restrictions, accessibility needs, or special occasions?">{special_requests}</textarea>
        </div>
        <button id="generateButton" class="btn btn-primary btn-block" {disabled} onclick="saveFields().then(() => call('POST', '/api/sessions/{id}/generate'))">{submit_label}</button>
        <div style="margin-top: 1rem;"><button class="btn btn-outline" onclick="call('POST', '/api/sessions/{id}/back')">← Back</button></div>
    </div>
</div>
<script>
    const value = (id) => document.getElementById(id).value;
    const pending = {pending};

    function refreshSubmit() {{
        document.getElementById('generateButton').disabled =
            pending || !value('destination').trim() || !value('startDate').trim();
    }}
    ['destination', 'startDate'].forEach((id) => document.getElementById(id).addEventListener('input', refreshSubmit));

    function saveFields() {{
        return fetch('/api/sessions/{id}/preferences', {{
            method: 'PATCH',
            headers: {{ 'Content-Type': 'application/json' }},
            body: JSON.stringify({{
                destination: value('destination'),
                startDate: value('startDate'),
                endDate: value('endDate'),
                budget: value('budget'),
                travelers: value('travelers'),
                specialRequests: value('specialRequests'),
            }}),
        }});
    }}
</script>"###,
        destination = text_input("destination", "📍 Destination", "text", &form.destination, "Where would you like to go?"),
        start_date = text_input("startDate", "📅 Start Date", "date", &form.start_date, ""),
        end_date = text_input("endDate", "End Date", "date", &form.end_date, ""),
        budget = text_input("budget", "💲 Budget (USD)", "text", &form.budget, "e.g. $2000 per person"),
        travelers = text_input("travelers", "👥 Number of Travelers", "number", &form.travelers, ""),
        interests = interests,
        styles = styles,
        special_requests = escape(&form.special_requests),
        disabled = if draft.submit_blocker().is_some() { "disabled" } else { "" },
        id = session_id,
        submit_label = submit_label,
        pending = draft.pending,
    );

    layout("Trip Planner - Preferences", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn submit_is_disabled_until_required_fields_are_present() {
        let mut draft = Draft::default();
        let html = render(Uuid::new_v4(), &draft);
        assert!(html.contains("btn-block\" disabled"));

        draft.form.destination = "Lisbon".to_string();
        draft.form.start_date = "2024-03-15".to_string();
        let html = render(Uuid::new_v4(), &draft);
        assert!(!html.contains("btn-block\" disabled"));

        draft.pending = true;
        let html = render(Uuid::new_v4(), &draft);
        assert!(html.contains("Crafting Your Perfect Trip..."));
        assert!(html.contains("btn-block\" disabled"));
    }

    #[test]
    fn typing_required_fields_rechecks_the_submit_button() {
        let mut draft = Draft::default();
        let html = render(Uuid::new_v4(), &draft);
        assert!(html.contains("id=\"generateButton\""));
        assert!(html.contains("addEventListener('input', refreshSubmit)"));
        assert!(html.contains("['destination', 'startDate']"));
        assert!(html.contains("const pending = false;"));

        draft.pending = true;
        let html = render(Uuid::new_v4(), &draft);
        assert!(html.contains("const pending = true;"));
    }

    #[test]
    fn user_text_is_escaped_and_selection_marked() {
        let mut draft = Draft::default();
        draft.form.destination = "\"><script>".to_string();
        draft.form.toggle_interest(Interest::Food);
        let html = render(Uuid::new_v4(), &draft);

        assert!(html.contains("value=\"&quot;&gt;&lt;script&gt;\""));
        assert!(html.contains("class=\"toggle active\" onclick=\"saveFields().then(() => call('POST', '/api/sessions/"));
        assert!(html.contains(">Food</button>"));
    }
}
