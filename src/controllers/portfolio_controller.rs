use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    format, render,
    services::portfolio_service::{self, NewPosition, PORTFOLIO_UPDATED},
    AppState,
};

fn recommendation_class(rec: &str) -> &'static str {
    match rec {
        "Buy" => "text-bg-success",
        "Sell" => "text-bg-danger",
        _ => "text-bg-warning",
    }
}

fn with_trigger(mut res: Response) -> Response {
    res.headers_mut()
        .insert("HX-Trigger", HeaderValue::from_static(PORTFOLIO_UPDATED));
    res
}

async fn holdings_html(state: &AppState) -> String {
    let portfolio_service::PortfolioSnapshot { views, summary, day } =
        portfolio_service::portfolio_snapshot(state).await;

    let rows: Vec<serde_json::Value> = views
        .into_iter()
        .map(|v| {
            json!({
                "id": v.id,
                "symbol": v.symbol,
                "name": v.name,
                "qty": v.qty,
                "avg": format::fmt2(v.avg_price),
                "current_price": format::fmt2(v.current_price),
                "change_pct": format::fmt2(v.change_percent.abs()),
                "up": v.change_percent >= 0.0,
                "change_class": v.change_class,
                "market_value": format::money(v.market_value),
                "pnl": format!("{:.0}", v.pnl.abs()),
                "pnl_sign": format::sign(v.pnl),
                "pnl_pct": v.pnl_pct.map(|p| format!("{:.1}%", p.abs())).unwrap_or_else(|| "n/a".to_string()),
                "pnl_class": v.pnl_class,
                "recommendation": v.recommendation.as_str(),
                "recommendation_class": recommendation_class(v.recommendation.as_str()),
            })
        })
        .collect();

    let ctx = json!({
        "rows": rows,
        "has_rows": !rows.is_empty(),
        "total_value": format::money(summary.total_value),
        "positions": summary.positions,
        "gain_sign": format::sign(summary.total_gain_loss),
        "gain": format::money(summary.total_gain_loss),
        "gain_pct": format::percent(summary.gain_loss_percent),
        "gain_class": if summary.total_gain_loss >= 0.0 { "text-success" } else { "text-danger" },
        "day_sign": format::sign(day.amount),
        "day_change": format::money(day.amount),
        "day_pct": format::percent(day.percent),
        "day_class": if day.amount >= 0.0 { "text-success" } else { "text-danger" },
    });

    render::render_partial(state, "partials/portfolio_holdings", &ctx)
}

// GET /portfolio (SSR page)
pub async fn get_portfolio_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let ctx = json!({ "holdings_html": holdings_html(&state).await });

    render::page_response(
        &state,
        &headers,
        StatusCode::OK,
        "pages/portfolio",
        "Portfolio",
        "/portfolio",
        &ctx,
    )
}

// GET /portfolio/holdings (HTMX partial)
pub async fn get_portfolio_holdings(State(state): State<AppState>) -> Response {
    (StatusCode::OK, Html(holdings_html(&state).await)).into_response()
}

#[derive(Deserialize)]
pub struct AddPositionForm {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default, rename = "avgPrice")]
    pub avg_price: String,
}

// POST /portfolio/positions
pub async fn post_add_position(
    State(state): State<AppState>,
    Form(form): Form<AddPositionForm>,
) -> Response {
    let input = NewPosition {
        symbol: form.symbol,
        quantity: form.quantity,
        avg_price: form.avg_price,
    };

    match portfolio_service::add_position(&state, &input).await {
        Ok(item) => with_trigger(
            (
                StatusCode::OK,
                Html(format!(
                    r#"<div class="text-success">Added {} to your portfolio.</div>"#,
                    item.symbol
                )),
            )
                .into_response(),
        ),
        Err(msg) => (
            StatusCode::OK,
            Html(format!(r#"<div class="text-danger">{msg}</div>"#)),
        )
            .into_response(),
    }
}

// POST /portfolio/positions/:id/delete
pub async fn post_delete_position(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    if let Err(e) = portfolio_service::delete_position(&state, &id).await {
        return (StatusCode::NOT_FOUND, e).into_response();
    }

    with_trigger((StatusCode::OK, Html(holdings_html(&state).await)).into_response())
}
