use finrag::{
    config, format,
    models::{PortfolioItem, Recommendation, Sender},
    services::{
        self,
        alerts_service::{AlertBook, NewAlert},
        chat_service::ChatSession,
        mock_data,
        portfolio_service::{self, NewPosition, PortfolioBook},
        query_service,
        relay::{RelayError, GENERIC_ERROR},
    },
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

// ---------------- Query responder ----------------

#[test]
fn answer_for_is_case_insensitive() {
    assert_eq!(
        query_service::answer_for("Tell me about Reliance"),
        "Reliance Industries is a major Indian conglomerate with interests in energy, petrochemicals, retail, and telecom."
    );
    assert_eq!(query_service::answer_for("RELIANCE"), query_service::RELIANCE_ANSWER);
    assert_eq!(query_service::answer_for("pc Jeweller q1"), query_service::PC_JEWELLER_ANSWER);
    assert_eq!(query_service::answer_for("TeSlA"), query_service::TESLA_ANSWER);
}

#[test]
fn answer_for_checks_keywords_in_order() {
    assert_eq!(
        query_service::answer_for("tesla or reliance?"),
        query_service::RELIANCE_ANSWER
    );
    assert_eq!(
        query_service::answer_for("tesla vs pc jeweller"),
        query_service::PC_JEWELLER_ANSWER
    );
}

#[test]
fn answer_for_unknown_or_empty_is_default() {
    assert_eq!(
        query_service::answer_for("random text"),
        "Sorry, I don't have information on that."
    );
    assert_eq!(query_service::answer_for(""), query_service::DEFAULT_ANSWER);
    // "pc jeweller" needs the space
    assert_eq!(query_service::answer_for("pcjeweller"), query_service::DEFAULT_ANSWER);
}

// ---------------- Relay errors ----------------

#[test]
fn relay_error_user_message_uses_detail_when_present() {
    let err = RelayError::Server {
        status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        detail: Some("quota exceeded".to_string()),
    };
    assert_eq!(err.user_message(), "quota exceeded");

    let err = RelayError::Server {
        status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        detail: None,
    };
    assert_eq!(err.user_message(), GENERIC_ERROR);
    assert_eq!(RelayError::MissingAnswer.user_message(), "An error occurred");
}

// ---------------- Alerts ----------------

#[test]
fn toggle_twice_restores_active_flag() {
    let mut book = AlertBook::seeded();
    let before = book.get("2").unwrap().active;

    assert_eq!(book.toggle("2"), Some(!before));
    assert_eq!(book.toggle("2"), Some(before));
    assert_eq!(book.get("2").unwrap().active, before);
}

#[test]
fn toggle_unknown_id_is_none() {
    let mut book = AlertBook::seeded();
    assert_eq!(book.toggle("nope"), None);
}

#[test]
fn delete_removes_exactly_one_and_keeps_order() {
    let mut book = AlertBook::seeded();

    let removed = book.delete("2").unwrap();
    assert_eq!(removed.id, "2");

    let ids: Vec<&str> = book.list().iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3", "4"]);

    assert!(book.delete("2").is_none());
    assert_eq!(book.list().len(), 3);
}

#[test]
fn seeded_alert_counts() {
    let mut book = AlertBook::seeded();
    assert_eq!(book.active_count(), 4);
    assert_eq!(book.triggered_count(), 2);

    book.toggle("1");
    assert_eq!(book.active_count(), 3);
}

#[test]
fn create_alert_derives_title_and_appends() {
    let mut book = AlertBook::seeded();
    let alert = book
        .create(&NewAlert {
            kind: "price".to_string(),
            symbol: "nvda".to_string(),
            threshold: "900".to_string(),
            condition: "Below".to_string(),
        })
        .unwrap();

    assert_eq!(alert.symbol.as_deref(), Some("NVDA"));
    assert_eq!(alert.title, "NVDA Price Alert");
    assert_eq!(alert.description, "NVDA below $900.00");
    assert!(alert.active);
    assert!(!alert.triggered);
    assert_eq!(book.list().last().unwrap().id, alert.id);
    assert_eq!(book.list().len(), 5);
}

#[test]
fn create_news_alert_without_symbol() {
    let mut book = AlertBook::default();
    let alert = book
        .create(&NewAlert {
            kind: "news".to_string(),
            symbol: String::new(),
            threshold: "0".to_string(),
            condition: "above".to_string(),
        })
        .unwrap();

    assert!(alert.symbol.is_none());
    assert_eq!(alert.title, "Market News Alert");
}

#[test]
fn create_alert_rejects_bad_input() {
    let mut book = AlertBook::seeded();
    let good = NewAlert {
        kind: "price".to_string(),
        symbol: "AAPL".to_string(),
        threshold: "100".to_string(),
        condition: "above".to_string(),
    };

    let bad_threshold = NewAlert { threshold: "abc".to_string(), ..good.clone() };
    assert!(book.create(&bad_threshold).is_err());

    let negative = NewAlert { threshold: "-1".to_string(), ..good.clone() };
    assert!(book.create(&negative).is_err());

    let bad_kind = NewAlert { kind: "weather".to_string(), ..good.clone() };
    assert!(book.create(&bad_kind).is_err());

    let bad_condition = NewAlert { condition: "sideways".to_string(), ..good.clone() };
    assert!(book.create(&bad_condition).is_err());

    let bad_symbol = NewAlert { symbol: "<script>".to_string(), ..good.clone() };
    assert!(book.create(&bad_symbol).is_err());

    assert_eq!(book.list().len(), 4);
}

#[test]
fn create_alert_without_symbol_targets_market() {
    let mut book = AlertBook::new(vec![]);
    let alert = book
        .create(&NewAlert {
            kind: "price".to_string(),
            symbol: " ".to_string(),
            threshold: "100".to_string(),
            condition: "above".to_string(),
        })
        .unwrap();

    assert_eq!(alert.symbol, None);
    assert_eq!(alert.title, "Market Price Alert");
    assert_eq!(alert.description, "Market above $100.00");
    assert_eq!(book.list().len(), 1);
}

#[test]
fn ticker_pattern() {
    assert!(services::is_ticker("AAPL"));
    assert!(services::is_ticker("BRK.B"));
    assert!(services::is_ticker("BTC-ETF"));
    assert!(!services::is_ticker("aapl"));
    assert!(!services::is_ticker(".X"));
    assert!(!services::is_ticker("ABCDEFGHIJK"));
    assert!(!services::is_ticker(""));
}

// ---------------- Portfolio ----------------

#[test]
fn seeded_portfolio_totals() {
    let items = mock_data::initial_portfolio();
    let summary = portfolio_service::summarize(&items);

    let expected_value: f64 = items
        .iter()
        .map(|it| it.quantity as f64 * it.current_price)
        .sum();
    let expected_gain: f64 = items
        .iter()
        .map(|it| it.quantity as f64 * (it.current_price - it.avg_price))
        .sum();

    assert!(close(summary.total_value, expected_value));
    assert!(close(summary.total_value, 102_582.35));
    assert!(close(summary.total_gain_loss, expected_gain));
    assert!(close(summary.total_gain_loss, 4_424.85));
    assert_eq!(summary.positions, 4);

    let pct = summary.gain_loss_percent.unwrap();
    assert!(close(pct, 4_424.85 / (102_582.35 - 4_424.85) * 100.0));
}

#[test]
fn market_value_matches_seed_figures() {
    let items = mock_data::initial_portfolio();
    let values: Vec<f64> = items.iter().map(PortfolioItem::market_value).collect();
    assert!(close(values[0], 8771.50));
    assert!(close(values[1], 71190.75));
    assert!(close(values[2], 7466.10));
    assert!(close(values[3], 15154.00));
}

#[test]
fn gain_percent_is_none_when_basis_is_zero() {
    let items = vec![PortfolioItem {
        id: "x".to_string(),
        symbol: "FREE".to_string(),
        name: "Free shares".to_string(),
        quantity: 10,
        avg_price: 0.0,
        current_price: 5.0,
        change: 0.0,
        change_percent: 0.0,
        recommendation: Recommendation::Hold,
    }];

    let summary = portfolio_service::summarize(&items);
    assert!(close(summary.total_value, 50.0));
    assert!(close(summary.total_gain_loss, 50.0));
    assert_eq!(summary.gain_loss_percent, None);
    assert_eq!(items[0].gain_loss_percent(), None);
}

#[test]
fn empty_portfolio_has_no_percentages() {
    let summary = portfolio_service::summarize(&[]);
    assert_eq!(summary.total_value, 0.0);
    assert_eq!(summary.gain_loss_percent, None);

    let day = portfolio_service::day_change(&[]);
    assert_eq!(day.amount, 0.0);
    assert_eq!(day.percent, None);
}

#[test]
fn day_change_is_value_weighted() {
    let items = mock_data::initial_portfolio();
    let day = portfolio_service::day_change(&items);

    let expected: f64 = items
        .iter()
        .map(|it| it.market_value() * it.change_percent / 100.0)
        .sum();
    assert!(close(day.amount, expected));
    assert!(close(day.percent.unwrap(), expected / 102_582.35 * 100.0));
}

#[test]
fn add_position_marks_at_cost() {
    let mut book = PortfolioBook::seeded();
    let item = book
        .add(&NewPosition {
            symbol: " nvda ".to_string(),
            quantity: "10".to_string(),
            avg_price: "800".to_string(),
        })
        .unwrap();

    assert_eq!(item.symbol, "NVDA");
    assert!(close(item.current_price, 800.0));
    assert!(close(item.gain_loss(), 0.0));
    assert_eq!(item.recommendation, Recommendation::Hold);
    assert_eq!(book.items().len(), 5);
}

#[test]
fn add_position_rejects_bad_input() {
    let mut book = PortfolioBook::seeded();
    let base = NewPosition {
        symbol: "AAPL".to_string(),
        quantity: "1".to_string(),
        avg_price: "1".to_string(),
    };

    assert!(book.add(&NewPosition { quantity: "0".to_string(), ..base.clone() }).is_err());
    assert!(book.add(&NewPosition { quantity: "x".to_string(), ..base.clone() }).is_err());
    assert!(book.add(&NewPosition { avg_price: "-3".to_string(), ..base.clone() }).is_err());
    assert!(book.add(&NewPosition { symbol: String::new(), ..base }).is_err());
    assert_eq!(book.items().len(), 4);
}

#[test]
fn add_position_rejects_unbounded_value() {
    let mut book = PortfolioBook::seeded();

    let huge = NewPosition {
        symbol: "BIG".to_string(),
        quantity: i64::MAX.to_string(),
        avg_price: "1e300".to_string(),
    };
    assert!(book.add(&huge).is_err());

    let near_max = NewPosition {
        symbol: "BIG".to_string(),
        quantity: "1".to_string(),
        avg_price: "1.5e308".to_string(),
    };
    assert!(book.add(&near_max).is_ok());
    assert!(book.add(&near_max).is_err());

    let summary = portfolio_service::summarize(book.items());
    assert!(summary.total_value.is_finite());
    assert_eq!(book.items().len(), 5);
}

#[test]
fn snapshot_totals_match_rows() {
    let items = mock_data::initial_portfolio();
    let snap = portfolio_service::snapshot(&items);

    let row_total: f64 = snap.views.iter().map(|v| v.market_value).sum();
    assert_eq!(snap.views.len(), snap.summary.positions);
    assert!(close(row_total, snap.summary.total_value));
    assert_eq!(snap.day, portfolio_service::day_change(&items));
}

#[test]
fn delete_position_keeps_order() {
    let mut book = PortfolioBook::seeded();
    assert!(book.delete("1").is_some());
    let ids: Vec<&str> = book.items().iter().map(|it| it.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "3", "4"]);
    assert!(book.delete("1").is_none());
}

// ---------------- Chat ----------------

#[test]
fn chat_starts_with_greeting_and_quick_questions() {
    let chat = ChatSession::new();
    assert_eq!(chat.messages().len(), 1);
    assert_eq!(chat.messages()[0].sender, Sender::Ai);
    assert_eq!(chat.messages()[0].text, mock_data::CHAT_GREETING);
    assert!(chat.show_quick_questions());
}

#[test]
fn chat_ignores_blank_input() {
    let mut chat = ChatSession::new();
    assert!(chat.push_user("   ").is_none());
    assert_eq!(chat.messages().len(), 1);
}

#[test]
fn chat_replies_cycle_through_samples() {
    let mut chat = ChatSession::new();
    let msg = chat.push_user("  hi there ").unwrap();
    assert_eq!(msg.text, "hi there");
    assert!(!chat.show_quick_questions());

    let replies: Vec<String> = (0..6).map(|_| chat.push_reply().text).collect();
    assert_eq!(replies[0], mock_data::CHAT_REPLIES[0]);
    assert_eq!(replies[4], mock_data::CHAT_REPLIES[4]);
    assert_eq!(replies[5], mock_data::CHAT_REPLIES[0]);
}

#[test]
fn chat_message_ids_are_unique() {
    let mut chat = ChatSession::new();
    chat.push_user("a");
    chat.push_reply();
    chat.push_user("b");

    let mut ids: Vec<&str> = chat.messages().iter().map(|m| m.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

// ---------------- Formatting ----------------

#[test]
fn money_groups_thousands() {
    assert_eq!(format::money(102_582.35), "102,582.35");
    assert_eq!(format::money(1_234_567.891), "1,234,567.89");
    assert_eq!(format::money(999.0), "999.00");
    assert_eq!(format::money(-4_424.85), "4,424.85");
    assert_eq!(format::money(0.0), "0.00");
}

#[test]
fn percent_handles_missing_values() {
    assert_eq!(format::percent(Some(-1.234)), "1.23%");
    assert_eq!(format::percent(None), "n/a");
    assert_eq!(format::percent(Some(f64::INFINITY)), "n/a");
}

// ---------------- Config ----------------

#[test]
fn default_query_url_uses_loopback_for_wildcard_hosts() {
    assert_eq!(
        config::default_query_api_url("0.0.0.0", 3000),
        "http://127.0.0.1:3000/api/query"
    );
    assert_eq!(config::default_query_api_url("::", 8080), "http://127.0.0.1:8080/api/query");
    assert_eq!(
        config::default_query_api_url("192.168.1.5", 3000),
        "http://192.168.1.5:3000/api/query"
    );
}
