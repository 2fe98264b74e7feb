pub mod alerts_controller;
pub mod chat_controller;
pub mod home_controller;
pub mod market_controller;
pub mod portfolio_controller;
pub mod query_controller;
pub mod realtime_controller;
