pub mod alert;
pub mod chat;
pub mod market;
pub mod portfolio;

pub use alert::{Alert, AlertKind, AlertTrigger, Condition, Severity};
pub use chat::{ChatMessage, Sender};
pub use market::{
    MarketIndicator, MarketOutlook, NewsImpact, OutlookFactor, SectorSentiment, Sentiment,
    Suggestion, Tone,
};
pub use portfolio::{PortfolioItem, Recommendation};
