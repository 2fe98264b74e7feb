//! Hand-authored sample data the dashboard starts from.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{
    Alert, AlertKind, AlertTrigger, Condition, MarketIndicator, MarketOutlook, NewsImpact,
    OutlookFactor, PortfolioItem, Recommendation, SectorSentiment, Sentiment, Severity,
    Suggestion, Tone,
};

pub const CHAT_GREETING: &str = "Hello! I'm your AI Financial Advisor. I can help you analyze your portfolio, suggest investments, and answer questions about market trends. What would you like to know?";

pub const CHAT_REPLIES: [&str; 5] = [
    "Based on your portfolio, I recommend diversifying into tech ETFs. The current market conditions favor technology stocks with strong fundamentals.",
    "Your AAPL position is performing well. Consider taking partial profits if it reaches $180. The company's recent earnings beat expectations by 12%.",
    "I notice you're overweight in growth stocks. Adding some dividend-paying stocks could provide better stability and income generation.",
    "The Fed's recent interest rate decision suggests a cautious approach. Consider reducing exposure to high-beta stocks temporarily.",
    "Your portfolio's beta is currently 1.2, indicating higher volatility than the market. Would you like me to suggest some defensive positions?",
];

pub const QUICK_QUESTIONS: [&str; 4] = [
    "Analyze my portfolio performance",
    "What are the trending stocks today?",
    "Should I buy or sell Tesla?",
    "Explain market volatility",
];

pub const AI_CONFIDENCE: u8 = 84;

fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(hh, mm, 0))
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    symbol: &str,
    name: &str,
    quantity: i64,
    avg_price: f64,
    current_price: f64,
    change: f64,
    change_percent: f64,
    recommendation: Recommendation,
) -> PortfolioItem {
    PortfolioItem {
        id: id.to_string(),
        symbol: symbol.to_string(),
        name: name.to_string(),
        quantity,
        avg_price,
        current_price,
        change,
        change_percent,
        recommendation,
    }
}

pub fn initial_portfolio() -> Vec<PortfolioItem> {
    vec![
        item("1", "AAPL", "Apple Inc.", 50, 150.25, 175.43, 4.21, 2.46, Recommendation::Hold),
        item("2", "GOOGL", "Alphabet Inc.", 25, 2800.00, 2847.63, -15.23, -0.53, Recommendation::Buy),
        item("3", "TSLA", "Tesla Inc.", 30, 220.50, 248.87, 12.34, 5.21, Recommendation::Sell),
        item("4", "MSFT", "Microsoft Corp.", 40, 350.75, 378.85, 5.67, 1.52, Recommendation::Hold),
    ]
}

pub fn initial_alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: "1".to_string(),
            title: "AAPL Price Alert".to_string(),
            description: "Apple reaches $180".to_string(),
            kind: AlertKind::Price,
            symbol: Some("AAPL".to_string()),
            threshold: 180.0,
            condition: Condition::Above,
            active: true,
            triggered: false,
            triggered_at: None,
            created_at: at(2024, 1, 15, 0, 0),
        },
        Alert {
            id: "2".to_string(),
            title: "TSLA Drop Alert".to_string(),
            description: "Tesla drops below $200".to_string(),
            kind: AlertKind::Price,
            symbol: Some("TSLA".to_string()),
            threshold: 200.0,
            condition: Condition::Below,
            active: true,
            triggered: true,
            triggered_at: Some(at(2024, 1, 20, 10, 30)),
            created_at: at(2024, 1, 10, 0, 0),
        },
        Alert {
            id: "3".to_string(),
            title: "NVDA Gain Alert".to_string(),
            description: "NVDA gains 5% in a day".to_string(),
            kind: AlertKind::Percentage,
            symbol: Some("NVDA".to_string()),
            threshold: 5.0,
            condition: Condition::Above,
            active: true,
            triggered: true,
            triggered_at: Some(at(2024, 1, 19, 14, 20)),
            created_at: at(2024, 1, 12, 0, 0),
        },
        Alert {
            id: "4".to_string(),
            title: "Market News Alert".to_string(),
            description: "Federal Reserve announcements".to_string(),
            kind: AlertKind::News,
            symbol: None,
            threshold: 0.0,
            condition: Condition::Above,
            active: true,
            triggered: false,
            triggered_at: None,
            created_at: at(2024, 1, 8, 0, 0),
        },
    ]
}

pub fn recent_triggers() -> Vec<AlertTrigger> {
    vec![
        AlertTrigger {
            id: "1".to_string(),
            message: "TSLA dropped to $195.40, triggering your price alert".to_string(),
            timestamp: at(2024, 1, 20, 10, 30),
            kind: AlertKind::Price,
            severity: Severity::Warning,
        },
        AlertTrigger {
            id: "2".to_string(),
            message: "NVDA gained 6.2% today, reaching $825.30".to_string(),
            timestamp: at(2024, 1, 19, 14, 20),
            kind: AlertKind::Percentage,
            severity: Severity::Success,
        },
        AlertTrigger {
            id: "3".to_string(),
            message: "Bitcoin ETF approval news impacting crypto markets".to_string(),
            timestamp: at(2024, 1, 18, 9, 15),
            kind: AlertKind::News,
            severity: Severity::Info,
        },
    ]
}

pub fn suggestions() -> Vec<Suggestion> {
    vec![
        Suggestion {
            stock: "NVDA",
            reason: "Strong AI growth potential",
            confidence: 87,
            risk: "Medium",
            action: "Buy",
        },
        Suggestion {
            stock: "BTC-ETF",
            reason: "Crypto market recovery signals",
            confidence: 72,
            risk: "High",
            action: "Consider",
        },
        Suggestion {
            stock: "SPY",
            reason: "Diversification opportunity",
            confidence: 94,
            risk: "Low",
            action: "Buy",
        },
    ]
}

/// The three-sector strip on the dashboard.
pub fn sector_overview() -> Vec<SectorSentiment> {
    vec![
        SectorSentiment { name: "Tech Sector", sentiment: Sentiment::Bullish, score: 75, change: 0.0 },
        SectorSentiment { name: "Energy Sector", sentiment: Sentiment::Neutral, score: 50, change: 0.0 },
        SectorSentiment { name: "Real Estate", sentiment: Sentiment::Bearish, score: 25, change: 0.0 },
    ]
}

pub fn sector_sentiment() -> Vec<SectorSentiment> {
    vec![
        SectorSentiment { name: "Technology", sentiment: Sentiment::Bullish, score: 78, change: 5.2 },
        SectorSentiment { name: "Healthcare", sentiment: Sentiment::Bullish, score: 72, change: 2.1 },
        SectorSentiment { name: "Financial", sentiment: Sentiment::Neutral, score: 58, change: -1.3 },
        SectorSentiment { name: "Energy", sentiment: Sentiment::Neutral, score: 52, change: 0.8 },
        SectorSentiment { name: "Consumer Discretionary", sentiment: Sentiment::Bearish, score: 38, change: -4.7 },
        SectorSentiment { name: "Real Estate", sentiment: Sentiment::Bearish, score: 32, change: -6.2 },
    ]
}

pub fn market_indicators() -> Vec<MarketIndicator> {
    vec![
        MarketIndicator { name: "Fear & Greed Index", value: 67.0, status: "Greed", tone: Tone::Caution },
        MarketIndicator { name: "VIX (Volatility)", value: 18.5, status: "Low", tone: Tone::Positive },
        MarketIndicator { name: "Dollar Index", value: 103.2, status: "Strong", tone: Tone::Neutral },
        MarketIndicator { name: "Bond Yield (10Y)", value: 4.2, status: "High", tone: Tone::Negative },
    ]
}

pub fn news_impact() -> Vec<NewsImpact> {
    vec![
        NewsImpact {
            headline: "Fed Hints at Rate Cuts in Q2 2024",
            positive: true,
            sectors: vec!["Technology", "Growth Stocks"],
            confidence: 85,
        },
        NewsImpact {
            headline: "China Manufacturing Data Beats Expectations",
            positive: true,
            sectors: vec!["Commodities", "Industrial"],
            confidence: 72,
        },
        NewsImpact {
            headline: "Banking Sector Faces Credit Concerns",
            positive: false,
            sectors: vec!["Financial", "REITs"],
            confidence: 68,
        },
    ]
}

pub fn market_outlook() -> MarketOutlook {
    MarketOutlook {
        label: "Moderately Bullish",
        horizon: "Next 30 days outlook",
        confidence: 72,
        factors: vec![
            OutlookFactor { text: "Strong earnings season performance (+15%)", tone: Tone::Positive },
            OutlookFactor { text: "Favorable monetary policy signals", tone: Tone::Positive },
            OutlookFactor { text: "Geopolitical tensions remain elevated", tone: Tone::Caution },
            OutlookFactor { text: "Inflation concerns persist", tone: Tone::Negative },
        ],
    }
}
