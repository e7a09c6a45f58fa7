use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LotReportDto {
    pub lot_id: i32,
    pub lot_name: String,
    pub booking_count: u64,
    pub revenue_cents: i64,
    pub occupancy_ratio: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReportDto {
    pub period_start: DateTime<Utc>,
    pub period_end: DateTime<Utc>,
    pub lots: Vec<LotReportDto>,
    pub total_booking_count: u64,
    pub total_revenue_cents: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AdminSummaryDto {
    pub total_users: u64,
    pub total_lots: u64,
    pub total_spots: u64,
    pub spots_available: u64,
    pub spots_occupied: u64,
    pub total_revenue_cents: i64,
}
