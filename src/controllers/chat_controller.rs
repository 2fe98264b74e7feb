use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    format,
    models::{ChatMessage, Sender},
    render,
    services::{chat_service, mock_data},
    AppState,
};

fn messages_ctx(messages: &[ChatMessage], show_quick: bool) -> serde_json::Value {
    let items: Vec<serde_json::Value> = messages
        .iter()
        .map(|m| {
            json!({
                "id": m.id,
                "text": m.text,
                "from_user": m.sender == Sender::User,
                "time": format::clock(m.timestamp),
            })
        })
        .collect();

    json!({
        "messages": items,
        "show_quick": show_quick,
        "quick_questions": mock_data::QUICK_QUESTIONS,
    })
}

// GET /chat
pub async fn get_chat_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (messages, show_quick) = chat_service::list_messages(&state).await;
    let messages_html = render::render_partial(
        &state,
        "partials/chat_messages",
        &messages_ctx(&messages, show_quick),
    );

    render::page_response(
        &state,
        &headers,
        StatusCode::OK,
        "pages/chat",
        "Chat",
        "/chat",
        &json!({ "messages_html": messages_html }),
    )
}

// GET /chat/messages
pub async fn get_chat_messages(State(state): State<AppState>) -> Response {
    let (messages, show_quick) = chat_service::list_messages(&state).await;
    let html = render::render_partial(
        &state,
        "partials/chat_messages",
        &messages_ctx(&messages, show_quick),
    );
    (StatusCode::OK, Html(html)).into_response()
}

#[derive(Deserialize)]
pub struct SendForm {
    #[serde(default)]
    pub message: String,
}

// POST /chat/send
pub async fn post_chat_send(
    State(state): State<AppState>,
    Form(form): Form<SendForm>,
) -> Response {
    let sent = chat_service::send_message(&state, &form.message).await;

    let (messages, show_quick) = chat_service::list_messages(&state).await;
    let html = render::render_partial(
        &state,
        "partials/chat_messages",
        &messages_ctx(&messages, show_quick),
    );

    let mut res = (StatusCode::OK, Html(html)).into_response();
    if sent {
        res.headers_mut().insert(
            "HX-Trigger",
            HeaderValue::from_static(chat_service::CHAT_UPDATED),
        );
    }
    res
}
