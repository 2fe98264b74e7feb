use chrono::Utc;

use crate::{
    models::{Alert, AlertKind, Condition},
    services::{is_ticker, mock_data},
    AppState,
};

pub const ALERTS_UPDATED: &str = "alertsUpdated";

/// Raw form values for a new alert, validated by [`AlertBook::create`].
#[derive(Debug, Clone, Default)]
pub struct NewAlert {
    pub kind: String,
    pub symbol: String,
    pub threshold: String,
    pub condition: String,
}

/// In-memory alert list, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct AlertBook {
    alerts: Vec<Alert>,
}

impl AlertBook {
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self { alerts }
    }

    pub fn seeded() -> Self {
        Self::new(mock_data::initial_alerts())
    }

    pub fn list(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn get(&self, id: &str) -> Option<&Alert> {
        self.alerts.iter().find(|a| a.id == id)
    }

    pub fn active_count(&self) -> usize {
        self.alerts.iter().filter(|a| a.active).count()
    }

    pub fn triggered_count(&self) -> usize {
        self.alerts.iter().filter(|a| a.triggered).count()
    }

    /// Flips the active flag; returns the new value, or `None` for an unknown id.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let alert = self.alerts.iter_mut().find(|a| a.id == id)?;
        alert.active = !alert.active;
        Some(alert.active)
    }

    /// Removes exactly one alert, leaving the others in order.
    pub fn delete(&mut self, id: &str) -> Option<Alert> {
        let idx = self.alerts.iter().position(|a| a.id == id)?;
        Some(self.alerts.remove(idx))
    }

    pub fn create(&mut self, input: &NewAlert) -> Result<Alert, String> {
        let kind = AlertKind::parse(&input.kind).ok_or("Please choose an alert type.")?;
        let condition =
            Condition::parse(&input.condition).ok_or("Please choose a valid condition.")?;

        let threshold: f64 = input
            .threshold
            .trim()
            .parse()
            .map_err(|_| "Please enter a valid threshold.".to_string())?;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err("Please enter a valid threshold.".to_string());
        }

        let symbol = input.symbol.trim().to_uppercase();
        let symbol = if symbol.is_empty() {
            None
        } else if is_ticker(&symbol) {
            Some(symbol)
        } else {
            return Err("Please enter a valid symbol.".to_string());
        };

        let alert = Alert {
            id: uuid::Uuid::new_v4().to_string(),
            title: alert_title(kind, symbol.as_deref()),
            description: alert_description(kind, symbol.as_deref(), condition, threshold),
            kind,
            symbol,
            threshold,
            condition,
            active: true,
            triggered: false,
            triggered_at: None,
            created_at: Utc::now().naive_utc(),
        };

        self.alerts.push(alert.clone());
        Ok(alert)
    }
}

fn alert_title(kind: AlertKind, symbol: Option<&str>) -> String {
    match symbol {
        Some(sym) => format!("{sym} {} Alert", kind.label()),
        None => format!("Market {} Alert", kind.label()),
    }
}

fn alert_description(
    kind: AlertKind,
    symbol: Option<&str>,
    condition: Condition,
    threshold: f64,
) -> String {
    let subject = symbol.unwrap_or("Market");
    let cond = condition.as_str();
    match kind {
        AlertKind::Price => format!("{subject} {cond} ${threshold:.2}"),
        AlertKind::Percentage => format!("{subject} moves {cond} {threshold}% in a day"),
        AlertKind::Volume => format!("{subject} volume {cond} {threshold}"),
        AlertKind::News => format!("News mentioning {subject}"),
    }
}

/// Alerts plus the header counts, read under one guard.
pub struct AlertsOverview {
    pub alerts: Vec<Alert>,
    pub active: usize,
    pub triggered: usize,
}

pub async fn alerts_overview(state: &AppState) -> AlertsOverview {
    let book = state.alerts.read().await;
    AlertsOverview {
        alerts: book.list().to_vec(),
        active: book.active_count(),
        triggered: book.triggered_count(),
    }
}

pub async fn toggle_alert(state: &AppState, id: &str) -> Result<bool, String> {
    let active = state
        .alerts
        .write()
        .await
        .toggle(id)
        .ok_or_else(|| format!("alert {id} not found"))?;

    let _ = state.events_tx.send(ALERTS_UPDATED.to_string());
    tracing::debug!(id, active, "alert toggled");

    Ok(active)
}

pub async fn delete_alert(state: &AppState, id: &str) -> Result<(), String> {
    state
        .alerts
        .write()
        .await
        .delete(id)
        .ok_or_else(|| format!("alert {id} not found"))?;

    let _ = state.events_tx.send(ALERTS_UPDATED.to_string());
    tracing::debug!(id, "alert deleted");

    Ok(())
}

pub async fn create_alert(state: &AppState, input: &NewAlert) -> Result<Alert, String> {
    let alert = state.alerts.write().await.create(input)?;

    let _ = state.events_tx.send(ALERTS_UPDATED.to_string());
    tracing::info!(id = %alert.id, title = %alert.title, "alert created");

    Ok(alert)
}
