use axum::{Router, routing::{get, post}};
use crate::{AppState, controllers::chat_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/chat", get(chat_controller::get_chat_page))
        .route("/chat/messages", get(chat_controller::get_chat_messages))
        .route("/chat/send", post(chat_controller::post_chat_send))
}
