//! Lot fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::lot;

/// Default test lot name.
pub const DEFAULT_NAME: &str = "Test Lot";

/// Default test lot capacity.
pub const DEFAULT_CAPACITY: i32 = 4;

/// Default hourly rate in cents.
pub const DEFAULT_HOURLY_RATE_CENTS: i64 = 1000;

/// Creates a lot entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Lot"`
/// - address: `"1 Test Street"`
/// - pincode: `"560001"`
/// - capacity: `4`
/// - hourly_rate_cents: `1000`
pub fn entity() -> lot::Model {
    lot::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        address: "1 Test Street".to_string(),
        pincode: "560001".to_string(),
        capacity: DEFAULT_CAPACITY,
        hourly_rate_cents: DEFAULT_HOURLY_RATE_CENTS,
        created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
    }
}
