//! User fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::user::{self, UserRole};

/// Default test username.
pub const DEFAULT_USERNAME: &str = "testuser";

/// Default test email.
pub const DEFAULT_EMAIL: &str = "testuser@example.com";

/// Creates a regular user entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - username: `"testuser"`
/// - email: `"testuser@example.com"`
/// - role: `Regular`
pub fn entity() -> user::Model {
    user::Model {
        id: 1,
        username: DEFAULT_USERNAME.to_string(),
        email: DEFAULT_EMAIL.to_string(),
        role: UserRole::Regular,
        created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
    }
}
