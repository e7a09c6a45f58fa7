use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateBookingDto {
    pub lot_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatusDto {
    Active,
    Completed,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BookingDto {
    pub booking_id: i32,
    pub lot_id: i32,
    pub lot_name: String,
    pub spot_number: i32,
    pub check_in_time: DateTime<Utc>,
    pub check_out_time: Option<DateTime<Utc>>,
    pub total_cost_cents: Option<i64>,
    pub status: BookingStatusDto,
}

/// Result of releasing a spot: the completed booking and its billed duration.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReleasedBookingDto {
    pub booking_id: i32,
    pub total_cost_cents: i64,
    pub billed_hours: i64,
    pub check_out_time: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserSummaryDto {
    pub total_bookings: u64,
    pub active_bookings: u64,
    pub total_spent_cents: i64,
}
