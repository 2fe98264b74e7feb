use axum::{Router, routing::post};
use crate::{AppState, controllers::query_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/api/query",
            post(query_controller::post_api_query)
                .fallback(query_controller::api_query_method_not_allowed),
        )
        .route("/query", post(query_controller::post_query_form))
}
