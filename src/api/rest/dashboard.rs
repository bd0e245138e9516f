//! Dashboard page

use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::api::websocket::state::AppState;

const DASHBOARD_TEMPLATE: &str = include_str!("../../../templates/dashboard.html");

/// Placeholder replaced with the advertised server URL
const SERVER_URL_PLACEHOLDER: &str = "{{SERVER_URL}}";

/// GET / - Dashboard page
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_dashboard(&state.config.advertised_url))
}

/// Render the dashboard with `server_url` embedded
pub fn render_dashboard(server_url: &str) -> String {
    DASHBOARD_TEMPLATE.replace(SERVER_URL_PLACEHOLDER, &escape_html(server_url))
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_embeds_server_url() {
        let page = render_dashboard("https://relay.up.railway.app");
        assert!(page.contains("https://relay.up.railway.app/api/send-notification"));
        assert!(!page.contains(SERVER_URL_PLACEHOLDER));
    }

    #[test]
    fn test_render_escapes_markup() {
        let page = render_dashboard("http://x\"><script>");
        assert!(!page.contains("<script>\""));
        assert!(page.contains("&quot;&gt;&lt;script&gt;"));
    }
}
