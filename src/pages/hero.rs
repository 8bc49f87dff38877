// src/pages/hero.rs
use super::layout;
use crate::planner::SessionId;

/// Landing screen. Without a session the button creates one first.
pub fn render(session_id: Option<SessionId>) -> String {
    let action = match session_id {
        Some(id) => format!(
            "call('POST', '/api/sessions/{id}/start')",
            id = id
        ),
        None => "fetch('/api/sessions', { method: 'POST' }).then(r => r.json()).then(s => fetch('/api/sessions/' + s.session_id + '/start', { method: 'POST' }).then(() => { window.location.href = '/plan/' + s.session_id; }))".to_string(),
    };

    let body = format!(
        r###"
<div class="hero">
    <div>
        <div class="badge">✨ AI-Powered Planning</div>
        <h1>Your Perfect Trip<br>Awaits</h1>
        <p>Let our AI create personalized itineraries based on your preferences, budget, and travel style.</p>
        <button class="btn btn-outline" onclick="{action}">📍 Start Planning</button>
    </div>
</div>"###,
        action = action
    );

    layout("Trip Planner - Your Perfect Trip Awaits", &body)
}
