//! Reminders for bookings that have stayed Active too long.

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, lot::LotRepository},
    error::AppError,
    service::{
        notification::{Notification, Notifier},
        pricing,
    },
};

pub struct ReminderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReminderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sends one reminder per Active booking started more than `overdue_after` before `now`.
    ///
    /// A failed notification is logged and does not stop the remaining reminders.
    ///
    /// # Returns
    /// - `Ok(sent)` - Number of reminders delivered to the notifier
    pub async fn send_overdue_reminders(
        &self,
        notifier: &dyn Notifier,
        now: DateTime<Utc>,
        overdue_after: Duration,
    ) -> Result<usize, AppError> {
        let overdue = BookingRepository::new(self.db)
            .get_active_started_before(now - overdue_after)
            .await?;
        let lot_repo = LotRepository::new(self.db);

        let mut sent = 0;
        for (booking, user) in overdue {
            let Some(user) = user else {
                tracing::warn!("Booking {} has no user, skipping reminder", booking.id);
                continue;
            };
            let Some(lot) = lot_repo.find_by_id(booking.lot_id).await? else {
                continue;
            };

            let accrued_cents = pricing::compute_cost(
                pricing::billable_seconds(booking.start_time, now),
                lot.hourly_rate_cents,
            )
            .unwrap_or(0);

            let notification = Notification::Reminder {
                recipient: user.email,
                username: user.username,
                booking_id: booking.id,
                lot_name: lot.name,
                started_at: booking.start_time,
                accrued_cents,
            };

            match notifier.notify(notification).await {
                Ok(()) => sent += 1,
                Err(e) => tracing::error!("Failed to send reminder for booking {}: {}", booking.id, e),
            }
        }

        Ok(sent)
    }
}
