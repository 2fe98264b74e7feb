use axum::{
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};
use serde_json::json;

use crate::AppState;

pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAVIGATION: [NavItem; 5] = [
    NavItem { name: "Dashboard", href: "/dashboard" },
    NavItem { name: "Chat", href: "/chat" },
    NavItem { name: "Portfolio", href: "/portfolio" },
    NavItem { name: "Market Sentiment", href: "/market" },
    NavItem { name: "Alerts", href: "/alerts" },
];

pub fn is_htmx(headers: &HeaderMap) -> bool {
    headers
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn nav_json(current_path: &str) -> Vec<serde_json::Value> {
    NAVIGATION
        .iter()
        .map(|item| {
            json!({
                "name": item.name,
                "href": item.href,
                "active": item.href == current_path,
            })
        })
        .collect()
}

pub fn render_full(
    state: &AppState,
    title: &str,
    current_path: &str,
    body_html: String,
) -> Result<String, String> {
    let ctx = json!({
        "title": title,
        "body": body_html,
        "nav": nav_json(current_path),
    });

    state
        .hbs
        .render("layouts/base", &ctx)
        .map_err(|e| e.to_string())
}

/// Renders `tpl` as a page: the bare body for HTMX navigation, the full layout otherwise.
pub fn page_response(
    state: &AppState,
    headers: &HeaderMap,
    status: StatusCode,
    tpl: &str,
    title: &str,
    current_path: &str,
    ctx: &serde_json::Value,
) -> Response {
    let body = match state.hbs.render(tpl, ctx) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(template = tpl, "render failed: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(format!("template error: {e}")),
            )
                .into_response();
        }
    };

    if is_htmx(headers) {
        return (status, Html(body)).into_response();
    }

    match render_full(state, title, current_path, body) {
        Ok(page) => (status, Html(page)).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, Html(e)).into_response(),
    }
}

pub fn render_partial(state: &AppState, tpl: &str, ctx: &serde_json::Value) -> String {
    state
        .hbs
        .render(tpl, ctx)
        .unwrap_or_else(|e| format!("template error: {e}"))
}
