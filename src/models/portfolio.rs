use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Buy,
    Hold,
    Sell,
}

impl Recommendation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Hold => "Hold",
            Self::Sell => "Sell",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub quantity: i64,
    pub avg_price: f64,
    pub current_price: f64,

    // day change, absolute and percent
    pub change: f64,
    pub change_percent: f64,

    pub recommendation: Recommendation,
}

impl PortfolioItem {
    pub fn market_value(&self) -> f64 {
        self.quantity as f64 * self.current_price
    }

    pub fn gain_loss(&self) -> f64 {
        (self.current_price - self.avg_price) * self.quantity as f64
    }

    /// `None` when the average price is zero.
    pub fn gain_loss_percent(&self) -> Option<f64> {
        if self.avg_price == 0.0 {
            return None;
        }
        Some((self.current_price - self.avg_price) / self.avg_price * 100.0)
    }
}
