//! Route handlers

pub mod alerts;
pub mod analytics;
pub mod cameras;
pub mod evidence;
pub mod notifications;
pub mod snapshot;
