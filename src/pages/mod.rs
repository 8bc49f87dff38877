// src/pages/mod.rs
//! Server-rendered HTML for the three screens. Buttons call the JSON API and reload.

pub mod hero;
pub mod itinerary;
pub mod preferences;

use crate::planner::{SessionId, ViewState};

const STYLE: &str = r###"
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #1f2937;
            background: linear-gradient(180deg, #e0f2fe 0%, #f8fafc 100%);
            min-height: 100vh;
        }
        .container { max-width: 1100px; margin: 0 auto; padding: 3rem 1.5rem; }
        .hero {
            min-height: 100vh; display: flex; align-items: center; justify-content: center;
            text-align: center; color: white;
            background: linear-gradient(135deg, #0ea5e9 0%, #6366f1 60%, #f97316 100%);
        }
        .hero h1 { font-size: 4rem; line-height: 1.1; margin-bottom: 1.5rem; }
        .hero p { font-size: 1.4rem; max-width: 40rem; margin: 0 auto 3rem; opacity: 0.9; }
        .badge { display: inline-block; padding: 0.3rem 1rem; border-radius: 999px; background: rgba(255,255,255,0.2); margin-bottom: 1.5rem; }
        .card { background: white; border-radius: 16px; padding: 2rem; box-shadow: 0 10px 30px rgba(15, 23, 42, 0.08); margin-bottom: 2rem; }
        .grid { display: grid; gap: 1.25rem; }
        .grid-2 { grid-template-columns: repeat(2, 1fr); }
        .grid-3 { grid-template-columns: repeat(3, 1fr); }
        .grid-4 { grid-template-columns: repeat(4, 1fr); }
        label { display: block; font-weight: 600; margin-bottom: 0.4rem; }
        input, textarea { width: 100%; padding: 0.75rem; border: 1px solid #cbd5e1; border-radius: 10px; font-size: 1rem; }
        textarea { min-height: 6rem; }
        .toggle { padding: 0.75rem; border: 1px solid #cbd5e1; border-radius: 10px; background: white; cursor: pointer; text-align: left; }
        .toggle.active { background: #0ea5e9; border-color: #0ea5e9; color: white; }
        .btn { padding: 0.9rem 1.8rem; border: none; border-radius: 999px; font-weight: 600; font-size: 1rem; cursor: pointer; }
        .btn-primary { background: linear-gradient(135deg, #0ea5e9, #6366f1); color: white; }
        .btn-primary:disabled { opacity: 0.5; cursor: not-allowed; }
        .btn-outline { background: rgba(255,255,255,0.8); border: 1px solid #cbd5e1; }
        .btn-block { width: 100%; }
        .muted { color: #64748b; }
        .timeline { display: flex; gap: 1.5rem; margin-bottom: 1.5rem; }
        .timeline .marker { display: flex; flex-direction: column; align-items: center; }
        .timeline .time { font-size: 0.85rem; color: #0284c7; background: #e0f2fe; padding: 0.2rem 0.7rem; border-radius: 999px; }
        .timeline .line { width: 1px; height: 3rem; background: #cbd5e1; margin-top: 1rem; }
        .thumb { width: 6rem; height: 6rem; border-radius: 10px; background-size: cover; background-position: center; }
        .rating { font-size: 0.85rem; background: #f1f5f9; border-radius: 999px; padding: 0.1rem 0.6rem; margin-left: 0.5rem; }
        .day-number { width: 3rem; height: 3rem; border-radius: 50%; background: #0ea5e9; color: white; display: flex; align-items: center; justify-content: center; font-weight: bold; }
        .toast { position: fixed; bottom: 1.5rem; right: 1.5rem; padding: 1rem 1.5rem; border-radius: 12px; background: #0f172a; color: white; display: none; }
        .toast.destructive { background: #dc2626; }
    </style>
"###;

const SCRIPT: &str = r###"
    <script>
        async function call(method, path, body) {
            const response = await fetch(path, {
                method,
                headers: { 'Content-Type': 'application/json' },
                body: body === undefined ? undefined : JSON.stringify(body),
            });
            const data = await response.json().catch(() => ({}));
            if (data.notification) {
                sessionStorage.setItem('toast', JSON.stringify(data.notification));
            } else if (!response.ok && data.message) {
                sessionStorage.setItem('toast', JSON.stringify({ title: 'Error', description: data.message, variant: 'destructive' }));
            }
            window.location.reload();
        }
        window.addEventListener('load', () => {
            const raw = sessionStorage.getItem('toast');
            if (!raw) return;
            sessionStorage.removeItem('toast');
            const toast = JSON.parse(raw);
            const el = document.getElementById('toast');
            el.textContent = toast.title + ' ' + toast.description;
            el.className = 'toast ' + (toast.variant || '');
            el.style.display = 'block';
            setTimeout(() => { el.style.display = 'none'; }, 4000);
        });
    </script>
"###;

/// Minimal HTML escaping for text and attribute values
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn layout(title: &str, body: &str) -> String {
    let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n    <meta charset=\"UTF-8\">\n    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!("    <title>{}</title>\n", escape(title)));
    html.push_str(STYLE);
    html.push_str(SCRIPT);
    html.push_str("</head>\n<body>\n");
    html.push_str(body);
    html.push_str("\n<div id=\"toast\" class=\"toast\"></div>\n</body>\n</html>\n");
    html
}

/// Whatever screen the session is on
pub fn render_session(session_id: SessionId, state: &ViewState) -> String {
    match state {
        ViewState::Landing => hero::render(Some(session_id)),
        ViewState::Collecting(draft) => preferences::render(session_id, draft),
        ViewState::Displaying(trip) => itinerary::render(session_id, trip),
    }
}
