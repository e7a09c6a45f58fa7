//! Period reporting over the booking ledger.
//!
//! Reads run inside their own transaction for a consistent snapshot. The aggregation itself
//! is a pure function over the loaded rows.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::{BTreeMap, HashMap};

use crate::server::{
    data::{booking::BookingRepository, lot::LotRepository, spot::SpotRepository, user::UserRepository},
    error::AppError,
    model::{
        booking::Booking,
        lot::Lot,
        report::{AdminSummary, LotReport, Report},
    },
};

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Summarizes Completed bookings with `period_start <= end_time < period_end`.
    ///
    /// # Returns
    /// - `Ok(Report)` - Per-lot aggregates for lots with at least one counted booking
    /// - `Err(AppError::BadRequest)` - `period_end` is not after `period_start`
    pub async fn summarize(
        &self,
        period_start: DateTime<Utc>,
        period_end: DateTime<Utc>,
    ) -> Result<Report, AppError> {
        if period_end <= period_start {
            return Err(AppError::BadRequest(
                "Report period end must be after its start".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let bookings = BookingRepository::new(&txn)
            .get_completed_in_period(period_start, period_end)
            .await?;
        let lots = LotRepository::new(&txn).get_all().await?;

        txn.commit().await?;

        Ok(aggregate(period_start, period_end, &bookings, &lots))
    }

    /// Point-in-time totals across users, lots, spots and revenue.
    pub async fn admin_summary(&self) -> Result<AdminSummary, AppError> {
        let txn = self.db.begin().await?;

        let total_users = UserRepository::new(&txn).count_regular().await?;
        let total_lots = LotRepository::new(&txn).count().await?;
        let counts = SpotRepository::new(&txn).counts_by_lot().await?;
        let total_revenue_cents = BookingRepository::new(&txn).total_revenue().await?;

        txn.commit().await?;

        let spots_available: u64 = counts.values().map(|c| c.available).sum();
        let spots_occupied: u64 = counts.values().map(|c| c.occupied).sum();

        Ok(AdminSummary {
            total_users,
            total_lots,
            total_spots: spots_available + spots_occupied,
            spots_available,
            spots_occupied,
            total_revenue_cents,
        })
    }
}

/// Builds a report from completed bookings that already fall in the period.
///
/// Lots are listed in ID order. Occupancy is booked time clipped to the period, divided by
/// `capacity × period length`, capped at 1.0, and 0.0 for lots without capacity.
pub fn aggregate(
    period_start: DateTime<Utc>,
    period_end: DateTime<Utc>,
    bookings: &[Booking],
    lots: &[Lot],
) -> Report {
    let lots_by_id: HashMap<i32, &Lot> = lots.iter().map(|l| (l.id, l)).collect();
    let period_seconds = (period_end - period_start).num_seconds().max(0);

    #[derive(Default)]
    struct Acc {
        count: u64,
        revenue: i64,
        booked_seconds: i64,
    }

    let mut per_lot: BTreeMap<i32, Acc> = BTreeMap::new();
    for booking in bookings {
        let acc = per_lot.entry(booking.lot_id).or_default();
        acc.count += 1;
        acc.revenue += booking.cost_cents.unwrap_or(0);

        let end = booking.end_time.unwrap_or(period_end).min(period_end);
        let start = booking.start_time.max(period_start);
        acc.booked_seconds += (end - start).num_seconds().max(0);
    }

    let lots: Vec<LotReport> = per_lot
        .into_iter()
        .map(|(lot_id, acc)| {
            let lot = lots_by_id.get(&lot_id);
            let capacity = lot.map(|l| l.capacity).unwrap_or(0);

            let occupancy_ratio = if capacity <= 0 || period_seconds == 0 {
                0.0
            } else {
                let available = capacity as f64 * period_seconds as f64;
                (acc.booked_seconds as f64 / available).min(1.0)
            };

            LotReport {
                lot_id,
                lot_name: lot
                    .map(|l| l.name.clone())
                    .unwrap_or_else(|| format!("Lot {}", lot_id)),
                booking_count: acc.count,
                revenue_cents: acc.revenue,
                occupancy_ratio,
            }
        })
        .collect();

    Report {
        period_start,
        period_end,
        total_booking_count: lots.iter().map(|l| l.booking_count).sum(),
        total_revenue_cents: lots.iter().map(|l| l.revenue_cents).sum(),
        lots,
    }
}

/// The calendar month before the one containing `now`, as `[start, end)` in UTC.
pub fn previous_month_period(now: DateTime<Utc>) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let this_month = Utc
        .with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
        .single()?;

    let (year, month) = if now.month() == 1 {
        (now.year() - 1, 12)
    } else {
        (now.year(), now.month() - 1)
    };
    let previous_month = Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).single()?;

    Some((previous_month, this_month))
}
