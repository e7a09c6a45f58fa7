//! Lot factory for creating test lots together with their spot rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::spot::SpotStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Default hourly rate used by the factory, in cents ($10.00).
pub const DEFAULT_HOURLY_RATE_CENTS: i64 = 1000;

/// Factory for creating test lots with customizable fields.
///
/// Building a lot also inserts `capacity` Available spots numbered from 1, matching the
/// invariant that a lot always owns exactly `capacity` spot rows.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::lot::LotFactory;
///
/// let (lot, spots) = LotFactory::new(&db)
///     .capacity(2)
///     .hourly_rate_cents(1500)
///     .build()
///     .await?;
/// ```
pub struct LotFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    address: String,
    pincode: String,
    capacity: i32,
    hourly_rate_cents: i64,
}

impl<'a> LotFactory<'a> {
    /// Creates a new LotFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Lot {id}"`
    /// - address: `"{id} Test Street"`
    /// - pincode: `"560001"`
    /// - capacity: `1`
    /// - hourly_rate_cents: `1000`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Lot {}", id),
            address: format!("{} Test Street", id),
            pincode: "560001".to_string(),
            capacity: 1,
            hourly_rate_cents: DEFAULT_HOURLY_RATE_CENTS,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn hourly_rate_cents(mut self, hourly_rate_cents: i64) -> Self {
        self.hourly_rate_cents = hourly_rate_cents;
        self
    }

    /// Builds and inserts the lot and its spots into the database.
    ///
    /// # Returns
    /// - `Ok((lot, spots))` - Created lot and its spots ordered by spot number
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<(entity::lot::Model, Vec<entity::spot::Model>), DbErr> {
        let lot = entity::lot::ActiveModel {
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            pincode: ActiveValue::Set(self.pincode),
            capacity: ActiveValue::Set(self.capacity),
            hourly_rate_cents: ActiveValue::Set(self.hourly_rate_cents),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut spots = Vec::with_capacity(self.capacity.max(0) as usize);
        for spot_number in 1..=self.capacity {
            let spot = entity::spot::ActiveModel {
                lot_id: ActiveValue::Set(lot.id),
                spot_number: ActiveValue::Set(spot_number),
                status: ActiveValue::Set(SpotStatus::Available),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            spots.push(spot);
        }

        Ok((lot, spots))
    }
}

/// Creates a lot with the given capacity and default values otherwise.
pub async fn create_lot(
    db: &DatabaseConnection,
    capacity: i32,
) -> Result<(entity::lot::Model, Vec<entity::spot::Model>), DbErr> {
    LotFactory::new(db).capacity(capacity).build().await
}
