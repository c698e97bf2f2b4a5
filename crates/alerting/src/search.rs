//! Free-text alert filtering and selection

use store::Alert;

/// Case-insensitive substring match against message or location
pub fn matches_query(alert: &Alert, query: &str) -> bool {
    let query = query.to_lowercase();
    alert.message.to_lowercase().contains(&query)
        || alert.location.to_lowercase().contains(&query)
}

/// Filter alerts by a free-text query, preserving order
pub fn search<'a>(alerts: &'a [Alert], query: &str) -> Vec<&'a Alert> {
    alerts.iter().filter(|a| matches_query(a, query)).collect()
}

/// Search state plus the currently viewed alert
///
/// Selection is independent of the filter and stays put: when the selected
/// alert is filtered out, `selection` yields nothing rather than jumping to
/// another entry.
#[derive(Debug, Clone, Default)]
pub struct AlertBrowser {
    query: String,
    selected_id: Option<String>,
}

impl AlertBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn select(&mut self, alert_id: impl Into<String>) {
        self.selected_id = Some(alert_id.into());
    }

    /// Alerts passing the current query
    pub fn visible<'a>(&self, alerts: &'a [Alert]) -> Vec<&'a Alert> {
        search(alerts, &self.query)
    }

    /// The alert shown in the detail view: the explicit selection, or the
    /// first element of the unfiltered list when nothing was selected yet.
    /// Yields nothing when the effective selection is filtered out.
    pub fn selection<'a>(&self, alerts: &'a [Alert]) -> Option<&'a Alert> {
        let selected_id = match &self.selected_id {
            Some(id) => id.as_str(),
            None => alerts.first()?.id.as_str(),
        };
        alerts
            .iter()
            .find(|a| a.id == selected_id)
            .filter(|a| matches_query(a, &self.query))
    }
}
