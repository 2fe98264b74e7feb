use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    render,
    services::{query_service, relay::RelayError},
    AppState,
};

#[derive(Deserialize)]
struct QueryBody {
    query: Option<serde_json::Value>,
}

// POST /api/query
pub async fn post_api_query(body: Bytes) -> Response {
    // anything that isn't {"query": "<string>"} gets the fallback answer
    let query = serde_json::from_slice::<QueryBody>(&body)
        .ok()
        .and_then(|b| b.query)
        .and_then(|v| v.as_str().map(str::to_string));

    let answer = match query.as_deref() {
        Some(q) => {
            tracing::debug!(query = q, "stub query received");
            query_service::answer_for(q)
        }
        None => query_service::DEFAULT_ANSWER,
    };

    (StatusCode::OK, Json(json!({ "result": answer }))).into_response()
}

// any other method on /api/query
pub async fn api_query_method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method Not Allowed" })),
    )
        .into_response()
}

#[derive(Deserialize)]
pub struct QueryForm {
    #[serde(default)]
    pub query: String,
}

// POST /query (HTMX partial for the query box)
pub async fn post_query_form(
    State(state): State<AppState>,
    Form(form): Form<QueryForm>,
) -> Response {
    let ctx = match state.relay.send(&form.query).await {
        Ok(answer) => json!({ "answer": answer }),
        Err(RelayError::EmptyQuery) => json!({ "error": "Enter a query first." }),
        Err(e) => {
            tracing::warn!("query relay failed: {e}");
            json!({ "error": e.user_message() })
        }
    };

    let html = render::render_partial(&state, "partials/query_result", &ctx);
    (StatusCode::OK, Html(html)).into_response()
}
