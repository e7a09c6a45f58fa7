//! Capacity store: lot definitions and their spot rows.
//!
//! Every mutation runs in one transaction so a lot always owns exactly `capacity` spots and
//! capacity never drops below the number of Occupied spots.

use entity::spot::SpotStatus;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        booking::BookingRepository,
        lot::LotRepository,
        spot::{SpotCounts, SpotRepository},
    },
    error::{booking::BookingError, AppError},
    model::{
        lot::{CreateLotParams, Lot, LotAvailability, LotDetails, UpdateLotParams},
        spot::SpotDetails,
    },
};

/// Largest number of spots a single lot may hold.
pub const MAX_LOT_CAPACITY: i32 = 10_000;

/// Largest hourly rate, 1,000,000.00 per hour.
pub const MAX_HOURLY_RATE_CENTS: i64 = 100_000_000;

pub struct LotService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LotService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a lot with spots numbered `1..=capacity`, all Available.
    ///
    /// # Returns
    /// - `Ok(Lot)` - The created lot
    /// - `Err(AppError::BadRequest)` - Empty name, capacity or rate out of range
    pub async fn create_lot(&self, params: CreateLotParams) -> Result<Lot, AppError> {
        if params.name.trim().is_empty() {
            return Err(AppError::BadRequest("Lot name must not be empty".to_string()));
        }
        validate_capacity(params.capacity)?;
        validate_rate(params.hourly_rate_cents)?;

        let capacity = params.capacity;
        let txn = self.db.begin().await?;

        let lot = LotRepository::new(&txn).create(params).await?;
        SpotRepository::new(&txn)
            .create_range(lot.id, 1, capacity)
            .await?;

        txn.commit().await?;

        tracing::info!("Created lot {} ({}) with {} spots", lot.id, lot.name, capacity);

        Ok(lot)
    }

    /// Grows or shrinks a lot to `new_capacity` spots.
    ///
    /// Growth appends Available spots after the current highest number. Shrinking removes the
    /// highest-numbered Available spots; Occupied spots are never removed.
    ///
    /// # Returns
    /// - `Ok(Lot)` - The lot with its new capacity
    /// - `Err(AppError::NotFound)` - No lot with that ID
    /// - `Err(AppError::BadRequest)` - Capacity out of range
    /// - `Err(BookingError::CapacityBelowOccupancy)` - More spots are Occupied than requested
    pub async fn set_capacity(&self, lot_id: i32, new_capacity: i32) -> Result<Lot, AppError> {
        validate_capacity(new_capacity)?;

        let txn = self.db.begin().await?;

        let lot = find_lot(&txn, lot_id).await?;
        apply_capacity(&txn, &lot, new_capacity).await?;
        let lot = find_lot(&txn, lot_id).await?;

        txn.commit().await?;

        Ok(lot)
    }

    /// Applies a partial update, including an optional capacity change, atomically.
    pub async fn update_lot(&self, params: UpdateLotParams) -> Result<Lot, AppError> {
        if let Some(name) = &params.name {
            if name.trim().is_empty() {
                return Err(AppError::BadRequest("Lot name must not be empty".to_string()));
            }
        }
        if let Some(capacity) = params.capacity {
            validate_capacity(capacity)?;
        }
        if let Some(rate) = params.hourly_rate_cents {
            validate_rate(rate)?;
        }

        let txn = self.db.begin().await?;

        let lot = find_lot(&txn, params.id).await?;
        if let Some(capacity) = params.capacity {
            apply_capacity(&txn, &lot, capacity).await?;
        }

        let lot = LotRepository::new(&txn)
            .update_details(&params)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking lot not found".to_string()))?;

        txn.commit().await?;

        Ok(lot)
    }

    /// Deletes a lot that has no Occupied spots.
    ///
    /// # Returns
    /// - `Ok(())` - Lot, spots and completed bookings removed
    /// - `Err(AppError::NotFound)` - No lot with that ID
    /// - `Err(BookingError::LotHasActiveBookings)` - At least one spot is Occupied
    pub async fn delete_lot(&self, lot_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let lot = find_lot(&txn, lot_id).await?;

        let occupied = SpotRepository::new(&txn)
            .count_by_status(lot.id, SpotStatus::Occupied)
            .await?;
        if occupied > 0 {
            return Err(BookingError::LotHasActiveBookings { occupied }.into());
        }

        LotRepository::new(&txn).delete(lot.id).await?;

        txn.commit().await?;

        tracing::info!("Deleted lot {} ({})", lot.id, lot.name);

        Ok(())
    }

    /// Gets every lot with its spot counts.
    pub async fn get_all_lots(&self) -> Result<Vec<LotAvailability>, AppError> {
        let lots = LotRepository::new(self.db).get_all().await?;
        let mut counts = SpotRepository::new(self.db).counts_by_lot().await?;

        Ok(lots
            .into_iter()
            .map(|lot| {
                let SpotCounts {
                    available,
                    occupied,
                } = counts.remove(&lot.id).unwrap_or_default();
                LotAvailability {
                    lot,
                    available_spots: available,
                    occupied_spots: occupied,
                }
            })
            .collect())
    }

    /// Gets lots with at least one Available spot.
    pub async fn get_available_lots(&self) -> Result<Vec<LotAvailability>, AppError> {
        Ok(self
            .get_all_lots()
            .await?
            .into_iter()
            .filter(|l| l.available_spots > 0)
            .collect())
    }

    /// Gets a lot with every spot and, for Occupied spots, the booking holding it.
    pub async fn get_lot_details(&self, lot_id: i32) -> Result<Option<LotDetails>, AppError> {
        let Some(lot) = LotRepository::new(self.db).find_by_id(lot_id).await? else {
            return Ok(None);
        };

        let spots = SpotRepository::new(self.db).get_by_lot(lot.id).await?;
        let occupied_ids: Vec<i32> = spots
            .iter()
            .filter(|s| !s.is_available())
            .map(|s| s.id)
            .collect();
        let mut occupants = BookingRepository::new(self.db)
            .get_occupants(&occupied_ids)
            .await?;

        let spots = spots
            .into_iter()
            .map(|spot| SpotDetails {
                occupant: occupants.remove(&spot.id),
                spot,
            })
            .collect();

        Ok(Some(LotDetails { lot, spots }))
    }
}

fn validate_capacity(capacity: i32) -> Result<(), AppError> {
    if capacity < 0 {
        return Err(AppError::BadRequest(
            "Capacity must not be negative".to_string(),
        ));
    }
    if capacity > MAX_LOT_CAPACITY {
        return Err(AppError::BadRequest(format!(
            "Capacity must not exceed {}",
            MAX_LOT_CAPACITY
        )));
    }
    Ok(())
}

fn validate_rate(hourly_rate_cents: i64) -> Result<(), AppError> {
    if hourly_rate_cents < 0 {
        return Err(AppError::BadRequest(
            "Hourly rate must not be negative".to_string(),
        ));
    }
    if hourly_rate_cents > MAX_HOURLY_RATE_CENTS {
        return Err(AppError::BadRequest(format!(
            "Hourly rate must not exceed {} cents",
            MAX_HOURLY_RATE_CENTS
        )));
    }
    Ok(())
}

async fn find_lot<C: ConnectionTrait>(db: &C, lot_id: i32) -> Result<Lot, AppError> {
    LotRepository::new(db)
        .find_by_id(lot_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Parking lot not found".to_string()))
}

/// Adjusts spot rows and the capacity column. Must run inside the caller's transaction.
async fn apply_capacity<C: ConnectionTrait>(
    db: &C,
    lot: &Lot,
    new_capacity: i32,
) -> Result<(), AppError> {
    let spot_repo = SpotRepository::new(db);

    let occupied = spot_repo
        .count_by_status(lot.id, SpotStatus::Occupied)
        .await?;
    if (new_capacity as u64) < occupied {
        return Err(BookingError::CapacityBelowOccupancy {
            requested: new_capacity,
            occupied,
        }
        .into());
    }

    let available = spot_repo
        .count_by_status(lot.id, SpotStatus::Available)
        .await?;
    let current = (available + occupied) as i32;

    if new_capacity > current {
        let added = new_capacity - current;
        let highest = spot_repo.max_spot_number(lot.id).await?.unwrap_or(0);
        let (first, last) = highest
            .checked_add(1)
            .zip(highest.checked_add(added))
            .ok_or_else(|| {
                AppError::Conflict("Spot numbers for this lot are exhausted".to_string())
            })?;
        spot_repo.create_range(lot.id, first, last).await?;
    } else if new_capacity < current {
        let to_remove = (current - new_capacity) as u64;
        let ids: Vec<i32> = spot_repo
            .get_highest_available(lot.id, to_remove)
            .await?
            .into_iter()
            .map(|s| s.id)
            .collect();

        let removed = spot_repo.delete_available(&ids).await?;
        if removed != to_remove {
            return Err(AppError::Conflict(
                "Spot availability changed while resizing the lot, try again".to_string(),
            ));
        }
    }

    LotRepository::new(db)
        .set_capacity(lot.id, new_capacity)
        .await?;

    tracing::info!(
        "Lot {} capacity changed from {} to {}",
        lot.id,
        current,
        new_capacity
    );

    Ok(())
}
