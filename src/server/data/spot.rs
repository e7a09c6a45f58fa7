//! Spot data repository.
//!
//! Status transitions are conditional updates: a write only happens when the row is still in
//! the expected state, and the caller learns from the return value whether it won.

use entity::spot::SpotStatus;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::spot::Spot;

/// Spot rows per multi-row insert, well under SQLite's bound parameter limit.
const INSERT_BATCH_SIZE: usize = 500;

/// Available and Occupied spot counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpotCounts {
    pub available: u64,
    pub occupied: u64,
}

impl SpotCounts {
    pub fn total(&self) -> u64 {
        self.available + self.occupied
    }
}

pub struct SpotRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SpotRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts Available spots numbered `first..=last` for a lot.
    ///
    /// Rows are written in batches of `INSERT_BATCH_SIZE`. Returns an empty list when
    /// `first > last`.
    pub async fn create_range(&self, lot_id: i32, first: i32, last: i32) -> Result<Vec<Spot>, DbErr> {
        if first > last {
            return Ok(Vec::new());
        }

        let numbers: Vec<i32> = (first..=last).collect();
        for chunk in numbers.chunks(INSERT_BATCH_SIZE) {
            let models = chunk.iter().map(|&spot_number| entity::spot::ActiveModel {
                lot_id: ActiveValue::Set(lot_id),
                spot_number: ActiveValue::Set(spot_number),
                status: ActiveValue::Set(SpotStatus::Available),
                ..Default::default()
            });

            entity::prelude::Spot::insert_many(models)
                .exec(self.db)
                .await?;
        }

        let entities = entity::prelude::Spot::find()
            .filter(entity::spot::Column::LotId.eq(lot_id))
            .filter(entity::spot::Column::SpotNumber.between(first, last))
            .order_by_asc(entity::spot::Column::SpotNumber)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Spot::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Spot>, DbErr> {
        let entity = entity::prelude::Spot::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Spot::from_entity))
    }

    /// Finds the Available spot with the lowest ID in a lot.
    pub async fn find_first_available(&self, lot_id: i32) -> Result<Option<Spot>, DbErr> {
        let entity = entity::prelude::Spot::find()
            .filter(entity::spot::Column::LotId.eq(lot_id))
            .filter(entity::spot::Column::Status.eq(SpotStatus::Available))
            .order_by_asc(entity::spot::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Spot::from_entity))
    }

    /// Flips a spot from Available to Occupied.
    ///
    /// # Returns
    /// - `Ok(true)` - This call performed the transition
    /// - `Ok(false)` - The spot was not Available (or does not exist)
    pub async fn occupy(&self, id: i32) -> Result<bool, DbErr> {
        self.transition(id, SpotStatus::Available, SpotStatus::Occupied)
            .await
    }

    /// Flips a spot from Occupied to Available.
    ///
    /// # Returns
    /// - `Ok(true)` - This call performed the transition
    /// - `Ok(false)` - The spot was not Occupied (or does not exist)
    pub async fn vacate(&self, id: i32) -> Result<bool, DbErr> {
        self.transition(id, SpotStatus::Occupied, SpotStatus::Available)
            .await
    }

    async fn transition(&self, id: i32, from: SpotStatus, to: SpotStatus) -> Result<bool, DbErr> {
        let result = entity::prelude::Spot::update_many()
            .set(entity::spot::ActiveModel {
                status: ActiveValue::Set(to),
                ..Default::default()
            })
            .filter(entity::spot::Column::Id.eq(id))
            .filter(entity::spot::Column::Status.eq(from))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Gets all spots of a lot ordered by spot number.
    pub async fn get_by_lot(&self, lot_id: i32) -> Result<Vec<Spot>, DbErr> {
        let entities = entity::prelude::Spot::find()
            .filter(entity::spot::Column::LotId.eq(lot_id))
            .order_by_asc(entity::spot::Column::SpotNumber)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Spot::from_entity).collect())
    }

    pub async fn count_by_status(&self, lot_id: i32, status: SpotStatus) -> Result<u64, DbErr> {
        entity::prelude::Spot::find()
            .filter(entity::spot::Column::LotId.eq(lot_id))
            .filter(entity::spot::Column::Status.eq(status))
            .count(self.db)
            .await
    }

    /// Highest spot number currently present in a lot.
    pub async fn max_spot_number(&self, lot_id: i32) -> Result<Option<i32>, DbErr> {
        let entity = entity::prelude::Spot::find()
            .filter(entity::spot::Column::LotId.eq(lot_id))
            .order_by_desc(entity::spot::Column::SpotNumber)
            .one(self.db)
            .await?;

        Ok(entity.map(|s| s.spot_number))
    }

    /// Gets up to `limit` Available spots of a lot, highest spot number first.
    pub async fn get_highest_available(&self, lot_id: i32, limit: u64) -> Result<Vec<Spot>, DbErr> {
        let entities = entity::prelude::Spot::find()
            .filter(entity::spot::Column::LotId.eq(lot_id))
            .filter(entity::spot::Column::Status.eq(SpotStatus::Available))
            .order_by_desc(entity::spot::Column::SpotNumber)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Spot::from_entity).collect())
    }

    /// Deletes the given spots, but only those still Available.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    pub async fn delete_available(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Spot::delete_many()
            .filter(entity::spot::Column::Id.is_in(ids.to_vec()))
            .filter(entity::spot::Column::Status.eq(SpotStatus::Available))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Spot counts for every lot that owns at least one spot, keyed by lot ID.
    pub async fn counts_by_lot(&self) -> Result<HashMap<i32, SpotCounts>, DbErr> {
        let rows: Vec<(i32, SpotStatus)> = entity::prelude::Spot::find()
            .select_only()
            .column(entity::spot::Column::LotId)
            .column(entity::spot::Column::Status)
            .into_tuple()
            .all(self.db)
            .await?;

        let mut counts: HashMap<i32, SpotCounts> = HashMap::new();
        for (lot_id, status) in rows {
            let entry = counts.entry(lot_id).or_default();
            match status {
                SpotStatus::Available => entry.available += 1,
                SpotStatus::Occupied => entry.occupied += 1,
            }
        }

        Ok(counts)
    }
}
