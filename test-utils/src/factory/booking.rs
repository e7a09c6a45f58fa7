//! Booking factory for creating active and completed test bookings.
//!
//! Active bookings mark their spot Occupied so the stored state stays consistent with
//! what the allocator would have produced.

use chrono::{DateTime, Duration, Utc};
use entity::{booking::BookingStatus, spot::SpotStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, IntoActiveModel};

/// Factory for creating test bookings on a given spot.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::booking::BookingFactory;
///
/// let booking = BookingFactory::new(&db, user.id, &spot)
///     .start_time(start)
///     .completed(start + Duration::hours(2), 2000)
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    spot: entity::spot::Model,
    start_time: DateTime<Utc>,
    completion: Option<(DateTime<Utc>, i64)>,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory for an active booking started one hour ago.
    pub fn new(db: &'a DatabaseConnection, user_id: i32, spot: &entity::spot::Model) -> Self {
        Self {
            db,
            user_id,
            spot: spot.clone(),
            start_time: Utc::now() - Duration::hours(1),
            completion: None,
        }
    }

    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    /// Marks the booking Completed with the given end time and cost.
    pub fn completed(mut self, end_time: DateTime<Utc>, cost_cents: i64) -> Self {
        self.completion = Some((end_time, cost_cents));
        self
    }

    /// Builds and inserts the booking, occupying the spot for active bookings.
    ///
    /// # Returns
    /// - `Ok(entity::booking::Model)` - Created booking entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        let (end_time, cost_cents, status) = match self.completion {
            Some((end, cost)) => (Some(end), Some(cost), BookingStatus::Completed),
            None => (None, None, BookingStatus::Active),
        };

        let booking = entity::booking::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            lot_id: ActiveValue::Set(self.spot.lot_id),
            spot_id: ActiveValue::Set(Some(self.spot.id)),
            spot_number: ActiveValue::Set(self.spot.spot_number),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(end_time),
            cost_cents: ActiveValue::Set(cost_cents),
            status: ActiveValue::Set(status),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        if status == BookingStatus::Active {
            let mut spot = self.spot.into_active_model();
            spot.status = ActiveValue::Set(SpotStatus::Occupied);
            spot.update(self.db).await?;
        }

        Ok(booking)
    }
}

/// Creates an active booking started one hour ago and occupies the spot.
pub async fn create_active_booking(
    db: &DatabaseConnection,
    user_id: i32,
    spot: &entity::spot::Model,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, user_id, spot).build().await
}

/// Creates a completed booking spanning `[start_time, end_time]` with the given cost.
pub async fn create_completed_booking(
    db: &DatabaseConnection,
    user_id: i32,
    spot: &entity::spot::Model,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    cost_cents: i64,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, user_id, spot)
        .start_time(start_time)
        .completed(end_time, cost_cents)
        .build()
        .await
}
