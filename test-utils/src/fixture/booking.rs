//! Booking fixtures for creating in-memory test data.

use chrono::{DateTime, Duration, TimeZone, Utc};
use entity::booking::{self, BookingStatus};

/// Start time shared by booking fixtures.
pub fn default_start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
}

/// Creates an active booking entity model on spot 1 of lot 1 for user 1.
pub fn active_entity() -> booking::Model {
    booking::Model {
        id: 1,
        user_id: 1,
        lot_id: 1,
        spot_id: Some(1),
        spot_number: 1,
        start_time: default_start_time(),
        end_time: None,
        cost_cents: None,
        status: BookingStatus::Active,
    }
}

/// Creates a completed booking entity model lasting 1.5 hours and costing $20.00.
pub fn completed_entity() -> booking::Model {
    booking::Model {
        end_time: Some(default_start_time() + Duration::seconds(5400)),
        cost_cents: Some(2000),
        status: BookingStatus::Completed,
        ..active_entity()
    }
}
