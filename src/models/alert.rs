use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Price,
    Percentage,
    News,
    Volume,
}

impl AlertKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "price" => Some(Self::Price),
            "percentage" => Some(Self::Percentage),
            "news" => Some(Self::News),
            "volume" => Some(Self::Volume),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Percentage => "percentage",
            Self::News => "news",
            Self::Volume => "volume",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Price => "Price",
            Self::Percentage => "Percentage",
            Self::News => "News",
            Self::Volume => "Volume",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Above,
    Below,
}

impl Condition {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "above" => Some(Self::Above),
            "below" => Some(Self::Below),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Above => "above",
            Self::Below => "below",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: AlertKind,
    pub symbol: Option<String>,
    pub threshold: f64,
    pub condition: Condition,
    pub active: bool,
    pub triggered: bool,
    pub triggered_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Info,
}

/// A past firing shown under "Recent Activity".
#[derive(Debug, Clone, Serialize)]
pub struct AlertTrigger {
    pub id: String,
    pub message: String,
    pub timestamp: NaiveDateTime,
    pub kind: AlertKind,
    pub severity: Severity,
}
