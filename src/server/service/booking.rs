//! Booking ledger: the Active to Completed lifecycle of a booking.
//!
//! Reserving a spot and inserting the booking commit together, as do completing the booking
//! and releasing its spot. A failure at any step drops the transaction and rolls back both.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{booking::BookingRepository, lot::LotRepository},
    error::{booking::BookingError, AppError},
    model::{
        booking::{BookingWithLot, CompletedBooking, CreateBookingParams, UserSummary},
        user::User,
    },
    service::{pricing, spot::SpotAllocator},
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reserves a spot in a lot and opens an Active booking on it.
    ///
    /// # Returns
    /// - `Ok(BookingWithLot)` - The new Active booking and its lot name
    /// - `Err(AppError::NotFound)` - No lot with that ID
    /// - `Err(BookingError::NoCapacity)` - The lot has no Available spot
    pub async fn create_booking(
        &self,
        user: &User,
        lot_id: i32,
        start_time: DateTime<Utc>,
    ) -> Result<BookingWithLot, AppError> {
        let txn = self.db.begin().await?;

        let lot = LotRepository::new(&txn)
            .find_by_id(lot_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking lot not found".to_string()))?;

        let spot = SpotAllocator::new(&txn).reserve(lot.id).await?;

        let booking = BookingRepository::new(&txn)
            .create(CreateBookingParams {
                user_id: user.id,
                lot_id: lot.id,
                spot_id: spot.id,
                spot_number: spot.spot_number,
                start_time,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            "User {} booked spot {} in lot {} (booking {})",
            user.id,
            spot.spot_number,
            lot.id,
            booking.id
        );

        Ok(BookingWithLot {
            booking,
            lot_name: lot.name,
        })
    }

    /// Completes an Active booking, bills it and releases its spot.
    ///
    /// Regular users may only complete their own bookings; admins may complete any.
    ///
    /// # Returns
    /// - `Ok(CompletedBooking)` - End time, cost and billed hours
    /// - `Err(AppError::NotFound)` - Booking missing or owned by another user
    /// - `Err(BookingError::NotActive)` - Booking already completed
    /// - `Err(BookingError::InvalidDuration)` - `end_time` is not after the start time
    /// - `Err(BookingError::CostOutOfRange)` - The fee overflows
    pub async fn complete_booking(
        &self,
        user: &User,
        booking_id: i32,
        end_time: DateTime<Utc>,
    ) -> Result<CompletedBooking, AppError> {
        let txn = self.db.begin().await?;
        let booking_repo = BookingRepository::new(&txn);

        let booking = booking_repo
            .find_by_id(booking_id)
            .await?
            .filter(|b| b.user_id == user.id || user.is_admin())
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        if !booking.is_active() {
            return Err(BookingError::NotActive.into());
        }

        let lot = LotRepository::new(&txn)
            .find_by_id(booking.lot_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking lot not found".to_string()))?;

        let fee = pricing::compute_fee(
            pricing::billable_seconds(booking.start_time, end_time),
            lot.hourly_rate_cents,
        )?;

        if !booking_repo
            .complete_if_active(booking.id, end_time, fee.cost_cents)
            .await?
        {
            return Err(BookingError::NotActive.into());
        }

        let Some(spot_id) = booking.spot_id else {
            return Err(BookingError::NotOccupied.into());
        };
        SpotAllocator::new(&txn).release(spot_id).await?;

        txn.commit().await?;

        tracing::info!(
            "Booking {} completed: {} hour(s), {} cents",
            booking.id,
            fee.billed_hours,
            fee.cost_cents
        );

        Ok(CompletedBooking {
            id: booking.id,
            end_time,
            cost_cents: fee.cost_cents,
            billed_hours: fee.billed_hours,
        })
    }

    /// Gets the caller's bookings with lot names, newest first.
    pub async fn get_user_bookings(&self, user: &User) -> Result<Vec<BookingWithLot>, AppError> {
        Ok(BookingRepository::new(self.db)
            .get_by_user_with_lot(user.id)
            .await?)
    }

    /// Gets booking counts and total spend for the caller.
    pub async fn get_user_summary(&self, user: &User) -> Result<UserSummary, AppError> {
        let repo = BookingRepository::new(self.db);

        Ok(UserSummary {
            total_bookings: repo.count_by_user(user.id).await?,
            active_bookings: repo.count_active_by_user(user.id).await?,
            total_spent_cents: repo.total_spent_by_user(user.id).await?,
        })
    }
}
