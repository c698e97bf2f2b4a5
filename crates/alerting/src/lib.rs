//! Alert Center Logic
//!
//! View-model logic consumed by the alert tab: free-text filtering with a
//! stable selection, and the bounded notification surface fed by tick
//! reports.

mod notifications;
mod search;

pub use notifications::{Notification, NotificationCenter, NotificationKind, NOTIFICATION_LIMIT};
pub use search::{matches_query, search, AlertBrowser};
