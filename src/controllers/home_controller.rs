use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde_json::json;

use crate::{
    format, render,
    services::{mock_data, portfolio_service},
    AppState,
};

pub async fn root() -> Redirect {
    Redirect::to("/dashboard")
}

// GET /dashboard
pub async fn dashboard(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let portfolio_service::PortfolioSnapshot { views, summary, day } =
        portfolio_service::portfolio_snapshot(&state).await;

    let holdings: Vec<serde_json::Value> = views
        .iter()
        .map(|v| {
            json!({
                "symbol": v.symbol,
                "qty": v.qty,
                "price": format::fmt2(v.current_price),
                "change": format::fmt2(v.change_percent.abs()),
                "up": v.change_percent >= 0.0,
                "change_class": v.change_class,
            })
        })
        .collect();

    let suggestions: Vec<serde_json::Value> = mock_data::suggestions()
        .into_iter()
        .map(|s| {
            let risk_class = match s.risk {
                "Low" => "text-bg-success",
                "Medium" => "text-bg-warning",
                _ => "text-bg-danger",
            };
            json!({
                "stock": s.stock,
                "reason": s.reason,
                "confidence": s.confidence,
                "risk": s.risk,
                "risk_class": risk_class,
                "action": s.action,
                "action_class": if s.action == "Buy" { "text-bg-primary" } else { "text-bg-secondary" },
            })
        })
        .collect();

    let sectors: Vec<serde_json::Value> = mock_data::sector_overview()
        .into_iter()
        .map(|s| {
            json!({
                "name": s.name,
                "sentiment": s.sentiment.as_str(),
                "class": s.sentiment.css_class(),
                "score": s.score,
            })
        })
        .collect();

    let ctx = json!({
        "total_value": format::money(summary.total_value),
        "day_change": format::money(day.amount),
        "day_change_pct": format::percent(day.percent),
        "day_up": day.amount >= 0.0,
        "day_class": if day.amount >= 0.0 { "text-success" } else { "text-danger" },
        "positions": summary.positions,
        "ai_confidence": mock_data::AI_CONFIDENCE,
        "holdings": holdings,
        "suggestions": suggestions,
        "sectors": sectors,
    });

    render::page_response(
        &state,
        &headers,
        StatusCode::OK,
        "pages/dashboard",
        "Dashboard",
        "/dashboard",
        &ctx,
    )
}

pub async fn not_found(State(state): State<AppState>, headers: HeaderMap) -> Response {
    render::page_response(
        &state,
        &headers,
        StatusCode::NOT_FOUND,
        "pages/not_found",
        "404",
        "",
        &json!({}),
    )
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Html("ok".to_string()))
}
