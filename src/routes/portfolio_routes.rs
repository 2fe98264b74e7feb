use axum::{Router, routing::{get, post}};

use crate::{AppState, controllers::portfolio_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/portfolio", get(portfolio_controller::get_portfolio_page))
        .route("/portfolio/holdings", get(portfolio_controller::get_portfolio_holdings))
        .route("/portfolio/positions", post(portfolio_controller::post_add_position))
        .route("/portfolio/positions/:id/delete", post(portfolio_controller::post_delete_position))
}
