use std::sync::LazyLock;

use regex::Regex;

pub mod mock_data;
pub mod relay;

pub mod alerts_service;
pub mod chat_service;
pub mod portfolio_service;
pub mod query_service;

static TICKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z0-9][A-Z0-9.\-]{0,9}$").expect("ticker pattern")
});

/// Upper-case ticker: letters, digits, `.` and `-`, at most 10 chars.
pub fn is_ticker(symbol: &str) -> bool {
    TICKER.is_match(symbol)
}
