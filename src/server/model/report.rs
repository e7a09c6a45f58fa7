//! Reporting domain models.

use chrono::{DateTime, Utc};

use crate::model::report::{AdminSummaryDto, LotReportDto, ReportDto};

/// Aggregates for one lot within a report period.
#[derive(Debug, Clone, PartialEq)]
pub struct LotReport {
    pub lot_id: i32,
    pub lot_name: String,
    pub booking_count: u64,
    pub revenue_cents: i64,
    /// Booked time over available spot time, in `[0.0, 1.0]`.
    pub occupancy_ratio: f64,
}

/// Completed-booking aggregates over the half-open period `[period_start, period_end)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub period_start: DateTime<Utc>,
    pub period_end: DateTime<Utc>,
    /// Only lots with at least one counted booking, ordered by lot id.
    pub lots: Vec<LotReport>,
    pub total_booking_count: u64,
    pub total_revenue_cents: i64,
}

impl Report {
    pub fn into_dto(self) -> ReportDto {
        ReportDto {
            period_start: self.period_start,
            period_end: self.period_end,
            lots: self
                .lots
                .into_iter()
                .map(|l| LotReportDto {
                    lot_id: l.lot_id,
                    lot_name: l.lot_name,
                    booking_count: l.booking_count,
                    revenue_cents: l.revenue_cents,
                    occupancy_ratio: l.occupancy_ratio,
                })
                .collect(),
            total_booking_count: self.total_booking_count,
            total_revenue_cents: self.total_revenue_cents,
        }
    }
}

/// Point-in-time totals for the admin dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminSummary {
    /// Regular users only.
    pub total_users: u64,
    pub total_lots: u64,
    pub total_spots: u64,
    pub spots_available: u64,
    pub spots_occupied: u64,
    /// Sum over all completed bookings.
    pub total_revenue_cents: i64,
}

impl AdminSummary {
    pub fn into_dto(self) -> AdminSummaryDto {
        AdminSummaryDto {
            total_users: self.total_users,
            total_lots: self.total_lots,
            total_spots: self.total_spots,
            spots_available: self.spots_available,
            spots_occupied: self.spots_occupied,
            total_revenue_cents: self.total_revenue_cents,
        }
    }
}
