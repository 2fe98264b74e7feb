use crate::{
    models::{PortfolioItem, Recommendation},
    services::{is_ticker, mock_data},
    AppState,
};

pub const PORTFOLIO_UPDATED: &str = "portfolioUpdated";

#[derive(Debug, Clone)]
pub struct PositionView {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub qty: i64,
    pub avg_price: f64,
    pub current_price: f64,
    pub change_percent: f64,
    pub market_value: f64,
    pub pnl: f64,
    pub pnl_pct: Option<f64>,
    pub pnl_class: &'static str,
    pub change_class: &'static str,
    pub recommendation: Recommendation,
}

/// Totals shown in the portfolio summary cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortfolioSummary {
    pub total_value: f64,
    pub total_gain_loss: f64,
    /// Gain relative to cost basis; `None` when the basis is zero.
    pub gain_loss_percent: Option<f64>,
    pub positions: usize,
}

/// Today's move, weighted by market value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayChange {
    pub amount: f64,
    /// `None` when the portfolio is worth nothing.
    pub percent: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct NewPosition {
    pub symbol: String,
    pub quantity: String,
    pub avg_price: String,
}

pub fn pnl_class(pnl: f64) -> &'static str {
    if pnl > 0.0 {
        "text-success"
    } else if pnl < 0.0 {
        "text-danger"
    } else {
        "text-muted"
    }
}

pub fn summarize(items: &[PortfolioItem]) -> PortfolioSummary {
    let total_value: f64 = items.iter().map(PortfolioItem::market_value).sum();
    let total_gain_loss: f64 = items.iter().map(PortfolioItem::gain_loss).sum();

    let basis = total_value - total_gain_loss;
    let gain_loss_percent = if basis == 0.0 {
        None
    } else {
        Some(total_gain_loss / basis * 100.0)
    };

    PortfolioSummary {
        total_value,
        total_gain_loss,
        gain_loss_percent,
        positions: items.len(),
    }
}

pub fn day_change(items: &[PortfolioItem]) -> DayChange {
    let total_value: f64 = items.iter().map(PortfolioItem::market_value).sum();
    let amount: f64 = items
        .iter()
        .map(|it| it.market_value() * it.change_percent / 100.0)
        .sum();

    let percent = if total_value == 0.0 {
        None
    } else {
        Some(amount / total_value * 100.0)
    };

    DayChange { amount, percent }
}

pub fn position_view(item: &PortfolioItem) -> PositionView {
    let pnl = item.gain_loss();
    PositionView {
        id: item.id.clone(),
        symbol: item.symbol.clone(),
        name: item.name.clone(),
        qty: item.quantity,
        avg_price: item.avg_price,
        current_price: item.current_price,
        change_percent: item.change_percent,
        market_value: item.market_value(),
        pnl,
        pnl_pct: item.gain_loss_percent(),
        pnl_class: pnl_class(pnl),
        change_class: if item.change_percent >= 0.0 { "text-success" } else { "text-danger" },
        recommendation: item.recommendation,
    }
}

#[derive(Debug, Clone, Default)]
pub struct PortfolioBook {
    items: Vec<PortfolioItem>,
}

impl PortfolioBook {
    pub fn new(items: Vec<PortfolioItem>) -> Self {
        Self { items }
    }

    pub fn seeded() -> Self {
        Self::new(mock_data::initial_portfolio())
    }

    pub fn items(&self) -> &[PortfolioItem] {
        &self.items
    }

    pub fn add(&mut self, input: &NewPosition) -> Result<PortfolioItem, String> {
        let symbol = input.symbol.trim().to_uppercase();
        if !is_ticker(&symbol) {
            return Err("Please enter a valid symbol.".to_string());
        }

        let quantity: i64 = match input.quantity.trim().parse() {
            Ok(q) if q > 0 => q,
            _ => return Err("Enter a valid quantity.".to_string()),
        };

        let avg_price: f64 = match input.avg_price.trim().parse::<f64>() {
            Ok(p) if p.is_finite() && p > 0.0 => p,
            _ => return Err("Enter a valid average price.".to_string()),
        };

        let value = quantity as f64 * avg_price;
        let book_value: f64 = self.items.iter().map(PortfolioItem::market_value).sum();
        if !value.is_finite() || !(book_value + value).is_finite() {
            return Err("Position is too large.".to_string());
        }

        // no quote feed: the position is marked at cost until prices exist
        let item = PortfolioItem {
            id: uuid::Uuid::new_v4().to_string(),
            name: symbol.clone(),
            symbol,
            quantity,
            avg_price,
            current_price: avg_price,
            change: 0.0,
            change_percent: 0.0,
            recommendation: Recommendation::Hold,
        };

        self.items.push(item.clone());
        Ok(item)
    }

    pub fn delete(&mut self, id: &str) -> Option<PortfolioItem> {
        let idx = self.items.iter().position(|it| it.id == id)?;
        Some(self.items.remove(idx))
    }
}

/// Rows and totals computed from the same items.
#[derive(Debug, Clone)]
pub struct PortfolioSnapshot {
    pub views: Vec<PositionView>,
    pub summary: PortfolioSummary,
    pub day: DayChange,
}

pub fn snapshot(items: &[PortfolioItem]) -> PortfolioSnapshot {
    PortfolioSnapshot {
        views: items.iter().map(position_view).collect(),
        summary: summarize(items),
        day: day_change(items),
    }
}

pub async fn portfolio_snapshot(state: &AppState) -> PortfolioSnapshot {
    snapshot(state.portfolio.read().await.items())
}

pub async fn add_position(state: &AppState, input: &NewPosition) -> Result<PortfolioItem, String> {
    let item = state.portfolio.write().await.add(input)?;

    let _ = state.events_tx.send(PORTFOLIO_UPDATED.to_string());
    tracing::info!(symbol = %item.symbol, qty = item.quantity, "position added");

    Ok(item)
}

pub async fn delete_position(state: &AppState, id: &str) -> Result<(), String> {
    state
        .portfolio
        .write()
        .await
        .delete(id)
        .ok_or_else(|| format!("position {id} not found"))?;

    let _ = state.events_tx.send(PORTFOLIO_UPDATED.to_string());
    tracing::debug!(id, "position deleted");

    Ok(())
}
