use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sentiment {
    Bullish,
    Neutral,
    Bearish,
}

impl Sentiment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bullish => "Bullish",
            Self::Neutral => "Neutral",
            Self::Bearish => "Bearish",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Bullish => "text-success",
            Self::Neutral => "text-warning",
            Self::Bearish => "text-danger",
        }
    }
}

/// Colour hint for a figure on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Caution,
    Negative,
    Neutral,
}

impl Tone {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Positive => "text-success",
            Self::Caution => "text-warning",
            Self::Negative => "text-danger",
            Self::Neutral => "text-primary",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SectorSentiment {
    pub name: &'static str,
    pub sentiment: Sentiment,
    pub score: u8,
    pub change: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketIndicator {
    pub name: &'static str,
    pub value: f64,
    pub status: &'static str,
    pub tone: Tone,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsImpact {
    pub headline: &'static str,
    pub positive: bool,
    pub sectors: Vec<&'static str>,
    pub confidence: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutlookFactor {
    pub text: &'static str,
    pub tone: Tone,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketOutlook {
    pub label: &'static str,
    pub horizon: &'static str,
    pub confidence: u8,
    pub factors: Vec<OutlookFactor>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub stock: &'static str,
    pub reason: &'static str,
    pub confidence: u8,
    pub risk: &'static str,
    pub action: &'static str,
}
