//! Spot allocation within a lot.
//!
//! `SpotAllocator` is the only code path that changes a spot's status. It works on any
//! `ConnectionTrait`, so booking operations run it inside their own transaction.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::spot::SpotRepository,
    error::{booking::BookingError, AppError},
    model::spot::Spot,
};

pub struct SpotAllocator<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SpotAllocator<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Reserves the lowest-ID Available spot of a lot.
    ///
    /// The spot is claimed with a conditional update. If another reservation claimed it first,
    /// the next Available spot is tried.
    ///
    /// # Returns
    /// - `Ok(Spot)` - The reserved spot, now Occupied
    /// - `Err(BookingError::NoCapacity)` - No Available spot remains in the lot
    pub async fn reserve(&self, lot_id: i32) -> Result<Spot, AppError> {
        let repo = SpotRepository::new(self.db);

        loop {
            let Some(mut spot) = repo.find_first_available(lot_id).await? else {
                return Err(BookingError::NoCapacity.into());
            };

            if repo.occupy(spot.id).await? {
                spot.status = entity::spot::SpotStatus::Occupied;
                return Ok(spot);
            }

            tracing::debug!("Spot {} in lot {} was claimed concurrently, retrying", spot.id, lot_id);
        }
    }

    /// Releases an Occupied spot.
    ///
    /// # Returns
    /// - `Ok(())` - The spot is Available again
    /// - `Err(BookingError::NotOccupied)` - The spot was already Available or does not exist
    pub async fn release(&self, spot_id: i32) -> Result<(), AppError> {
        let repo = SpotRepository::new(self.db);

        if !repo.vacate(spot_id).await? {
            return Err(BookingError::NotOccupied.into());
        }

        Ok(())
    }
}
