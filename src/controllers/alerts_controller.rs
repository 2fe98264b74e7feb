use axum::{
    extract::{Form, Path, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    format,
    models::{Alert, AlertKind, Severity},
    render,
    services::{
        alerts_service::{self, NewAlert, ALERTS_UPDATED},
        mock_data,
    },
    AppState,
};

fn with_trigger(mut res: Response) -> Response {
    res.headers_mut()
        .insert("HX-Trigger", HeaderValue::from_static(ALERTS_UPDATED));
    res
}

fn kind_icon(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Price => "$",
        AlertKind::Percentage => "%",
        AlertKind::News => "🔔",
        AlertKind::Volume => "⚠",
    }
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "text-success",
        Severity::Warning => "text-warning",
        Severity::Info => "text-primary",
    }
}

fn alert_json(a: &Alert) -> serde_json::Value {
    json!({
        "id": a.id,
        "title": a.title,
        "description": a.description,
        "kind": a.kind.as_str(),
        "icon": kind_icon(a.kind),
        "symbol": a.symbol,
        "threshold": format::fmt2(a.threshold),
        "condition": a.condition.as_str(),
        "active": a.active,
        "triggered": a.triggered,
        "triggered_at": a.triggered_at.map(format::date_time),
        "created_at": format::date(a.created_at),
    })
}

async fn alerts_list_html(state: &AppState) -> String {
    let overview = alerts_service::alerts_overview(state).await;
    let items: Vec<serde_json::Value> = overview.alerts.iter().map(alert_json).collect();

    let ctx = json!({
        "alerts": items,
        "has_alerts": !items.is_empty(),
        "active_count": overview.active,
        "triggered_count": overview.triggered,
    });

    render::render_partial(state, "partials/alerts_list", &ctx)
}

// ---------------- Pages ----------------

// GET /alerts
pub async fn get_alerts_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let triggers: Vec<serde_json::Value> = mock_data::recent_triggers()
        .into_iter()
        .map(|t| {
            json!({
                "id": t.id,
                "message": t.message,
                "time": format::date_time(t.timestamp),
                "icon": kind_icon(t.kind),
                "class": severity_class(t.severity),
            })
        })
        .collect();

    let ctx = json!({
        "alerts_html": alerts_list_html(&state).await,
        "triggers": triggers,
    });

    render::page_response(
        &state,
        &headers,
        StatusCode::OK,
        "pages/alerts",
        "Alerts & Notifications",
        "/alerts",
        &ctx,
    )
}

// ---------------- Partials ----------------

// GET /alerts/list
pub async fn get_alerts_list(State(state): State<AppState>) -> Response {
    (StatusCode::OK, Html(alerts_list_html(&state).await)).into_response()
}

#[derive(Deserialize)]
pub struct CreateAlertForm {
    #[serde(default, rename = "alertType")]
    pub alert_type: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub threshold: String,
    #[serde(default)]
    pub condition: String,
}

// POST /alerts
pub async fn post_create_alert(
    State(state): State<AppState>,
    Form(form): Form<CreateAlertForm>,
) -> Response {
    let input = NewAlert {
        kind: form.alert_type,
        symbol: form.symbol,
        threshold: form.threshold,
        condition: form.condition,
    };

    if let Err(msg) = alerts_service::create_alert(&state, &input).await {
        return (
            StatusCode::OK,
            Html(format!(r#"<div class="text-danger">{msg}</div>"#)),
        )
            .into_response();
    }

    with_trigger(
        (
            StatusCode::OK,
            Html(r#"<div class="text-success">Alert created.</div>"#.to_string()),
        )
            .into_response(),
    )
}

// POST /alerts/:id/toggle
pub async fn post_toggle_alert(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    if let Err(e) = alerts_service::toggle_alert(&state, &id).await {
        return (StatusCode::NOT_FOUND, e).into_response();
    }

    with_trigger((StatusCode::OK, Html(alerts_list_html(&state).await)).into_response())
}

// POST /alerts/:id/delete
pub async fn post_delete_alert(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    if let Err(e) = alerts_service::delete_alert(&state, &id).await {
        return (StatusCode::NOT_FOUND, e).into_response();
    }

    with_trigger((StatusCode::OK, Html(alerts_list_html(&state).await)).into_response())
}
