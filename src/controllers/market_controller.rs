use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Response,
};
use serde_json::json;

use crate::{models::Sentiment, render, services::mock_data, AppState};

fn sentiment_badge(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Bullish => "text-bg-success",
        Sentiment::Neutral => "text-bg-warning",
        Sentiment::Bearish => "text-bg-danger",
    }
}

// GET /market
pub async fn get_market_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let indicators: Vec<serde_json::Value> = mock_data::market_indicators()
        .into_iter()
        .map(|i| {
            json!({
                "name": i.name,
                "value": i.value.to_string(),
                "status": i.status,
                "class": i.tone.css_class(),
            })
        })
        .collect();

    let sectors: Vec<serde_json::Value> = mock_data::sector_sentiment()
        .into_iter()
        .map(|s| {
            json!({
                "name": s.name,
                "sentiment": s.sentiment.as_str(),
                "badge_class": sentiment_badge(s.sentiment),
                "score": s.score,
                "change": s.change.abs().to_string(),
                "up": s.change >= 0.0,
                "change_class": if s.change >= 0.0 { "text-success" } else { "text-danger" },
            })
        })
        .collect();

    let outlook = mock_data::market_outlook();
    let factors: Vec<serde_json::Value> = outlook
        .factors
        .iter()
        .map(|f| json!({ "text": f.text, "class": f.tone.css_class() }))
        .collect();

    let news: Vec<serde_json::Value> = mock_data::news_impact()
        .into_iter()
        .map(|n| {
            json!({
                "headline": n.headline,
                "impact": if n.positive { "Positive" } else { "Negative" },
                "badge_class": if n.positive { "text-bg-success" } else { "text-bg-danger" },
                "sectors": n.sectors,
                "confidence": n.confidence,
            })
        })
        .collect();

    let ctx = json!({
        "indicators": indicators,
        "sectors": sectors,
        "outlook": {
            "label": outlook.label,
            "horizon": outlook.horizon,
            "confidence": outlook.confidence,
            "factors": factors,
        },
        "news": news,
    });

    render::page_response(
        &state,
        &headers,
        StatusCode::OK,
        "pages/market",
        "Market Sentiment",
        "/market",
        &ctx,
    )
}
