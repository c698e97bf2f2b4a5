//! Bounded notification surface
//!
//! Toast-equivalent events shown outside the alert tab. Newest first,
//! bounded history, read/dismiss bookkeeping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use store::{Alert, AlertPriority};

/// Most recent notifications retained
pub const NOTIFICATION_LIMIT: usize = 10;

/// Notification kind, mapped onto the toast styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Alert,
    Warning,
    Info,
    Success,
}

impl From<AlertPriority> for NotificationKind {
    fn from(priority: AlertPriority) -> Self {
        match priority {
            AlertPriority::High => NotificationKind::Alert,
            AlertPriority::Medium => NotificationKind::Warning,
            AlertPriority::Low => NotificationKind::Info,
        }
    }
}

/// A single transient notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

/// Newest-first notification list with a bounded history
#[derive(Debug, Default)]
pub struct NotificationCenter {
    entries: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a notification, dropping history beyond [`NOTIFICATION_LIMIT`].
    /// Returns the assigned id.
    pub fn push(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Uuid {
        let notification = Notification {
            id: Uuid::new_v4(),
            kind,
            title: title.into(),
            message: message.into(),
            timestamp: Utc::now(),
            read: false,
        };
        let id = notification.id;
        self.entries.insert(0, notification);
        self.entries.truncate(NOTIFICATION_LIMIT);
        debug!(%id, "notification pushed");
        id
    }

    /// Surface a freshly synthesized alert as a toast carrying its type,
    /// location, and priority
    pub fn push_alert(&mut self, alert: &Alert) -> Uuid {
        self.push(
            NotificationKind::from(alert.priority),
            alert.alert_type.clone(),
            format!(
                "{} at {} ({} priority)",
                alert.message,
                alert.location,
                alert.priority.as_str()
            ),
        )
    }

    pub fn mark_read(&mut self, id: Uuid) -> bool {
        match self.entries.iter_mut().find(|n| n.id == id) {
            Some(entry) => {
                entry.read = true;
                true
            }
            None => false,
        }
    }

    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| n.id != id);
        self.entries.len() != before
    }

    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|n| !n.read).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries, newest first
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }
}
