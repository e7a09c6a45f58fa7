//! Booking history export as CSV.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::booking::BookingRepository, error::AppError, model::booking::BookingWithLot,
    service::pricing::format_cents,
};

const HEADER: [&str; 6] = [
    "Booking ID",
    "Lot Name",
    "Spot Number",
    "Check-In Time",
    "Check-Out Time",
    "Total Cost",
];
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// CSV export ready to hand to the notifier.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingHistoryExport {
    pub filename: String,
    pub csv: String,
    pub row_count: usize,
}

pub struct ExportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Renders a user's bookings, newest first, as CSV.
    ///
    /// # Returns
    /// - `Ok(Some(export))` - The user has at least one booking
    /// - `Ok(None)` - The user has no bookings
    pub async fn booking_history_csv(
        &self,
        user_id: i32,
        generated_at: DateTime<Utc>,
    ) -> Result<Option<BookingHistoryExport>, AppError> {
        let bookings = BookingRepository::new(self.db)
            .get_by_user_with_lot(user_id)
            .await?;

        if bookings.is_empty() {
            return Ok(None);
        }

        let csv = render_csv(&bookings)?;

        Ok(Some(BookingHistoryExport {
            filename: format!(
                "booking_history_{}_{}.csv",
                user_id,
                generated_at.format("%Y%m%d_%H%M%S")
            ),
            csv,
            row_count: bookings.len(),
        }))
    }
}

fn render_csv(bookings: &[BookingWithLot]) -> Result<String, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;

    for entry in bookings {
        let booking = &entry.booking;
        writer.write_record([
            booking.id.to_string(),
            entry.lot_name.clone(),
            booking.spot_number.to_string(),
            booking.start_time.format(TIME_FORMAT).to_string(),
            booking
                .end_time
                .map(|t| t.format(TIME_FORMAT).to_string())
                .unwrap_or_default(),
            booking.cost_cents.map(format_cents).unwrap_or_default(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::InternalError(format!("Failed to flush CSV: {}", e)))?;

    String::from_utf8(bytes)
        .map_err(|e| AppError::InternalError(format!("CSV is not valid UTF-8: {}", e)))
}
