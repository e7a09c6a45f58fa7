//! Shared helper utilities for factory methods.
//!
//! Provides unique ID generation and convenience methods for creating entities
//! together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a regular user and a single-spot lot whose spot is held by an active booking.
///
/// The lot charges the factory default rate. Use the individual factories if you need
/// to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, lot, spot, booking))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_active_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::lot::Model,
        entity::spot::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let (lot, mut spots) = crate::factory::lot::create_lot(db, 1).await?;
    let spot = spots.remove(0);
    let booking = crate::factory::booking::create_active_booking(db, user.id, &spot).await?;

    Ok((user, lot, spot, booking))
}
