//! Outbound notifications.
//!
//! Services produce `Notification` payloads and hand them to a `Notifier`. Delivery (email,
//! chat, webhooks) lives behind the trait; the bundled `LogNotifier` only records them.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{model::report::ReportDto, server::error::AppError};

/// Payload handed to the notification collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    /// Previous-period report for administrators.
    MonthlyReport(ReportDto),
    /// CSV booking history requested by a user.
    BookingHistory {
        recipient: String,
        filename: String,
        csv: String,
    },
    /// A booking has been active longer than the reminder threshold.
    Reminder {
        recipient: String,
        username: String,
        booking_id: i32,
        lot_name: String,
        started_at: DateTime<Utc>,
        accrued_cents: i64,
    },
}

impl Notification {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MonthlyReport(_) => "monthly_report",
            Self::BookingHistory { .. } => "booking_history",
            Self::Reminder { .. } => "reminder",
        }
    }
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: Notification) -> Result<(), AppError>;
}

/// Notifier that serializes the payload into the application log.
#[derive(Debug, Default, Clone)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, notification: Notification) -> Result<(), AppError> {
        let kind = notification.kind();
        let payload = serde_json::to_string(&notification)?;

        tracing::info!(kind, payload = %payload, "Notification dispatched");

        Ok(())
    }
}

/// Notifier that keeps every payload in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    sent: std::sync::Mutex<Vec<Notification>>,
}

#[cfg(test)]
impl MemoryNotifier {
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl Notifier for MemoryNotifier {
    async fn notify(&self, notification: Notification) -> Result<(), AppError> {
        self.sent.lock().unwrap().push(notification);
        Ok(())
    }
}
