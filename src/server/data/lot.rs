//! Lot data repository.
//!
//! Only touches the `lot` table. Spot rows are managed through `SpotRepository` so that
//! callers can keep both inside one transaction.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryOrder,
};

use crate::server::model::lot::{CreateLotParams, Lot, UpdateLotParams};

pub struct LotRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LotRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the lot row. The caller is responsible for creating its spots.
    pub async fn create(&self, params: CreateLotParams) -> Result<Lot, DbErr> {
        let entity = entity::lot::ActiveModel {
            name: ActiveValue::Set(params.name),
            address: ActiveValue::Set(params.address),
            pincode: ActiveValue::Set(params.pincode),
            capacity: ActiveValue::Set(params.capacity),
            hourly_rate_cents: ActiveValue::Set(params.hourly_rate_cents),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Lot::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Lot>, DbErr> {
        let entity = entity::prelude::Lot::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Lot::from_entity))
    }

    /// Gets all lots ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Lot>, DbErr> {
        let entities = entity::prelude::Lot::find()
            .order_by_asc(entity::lot::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Lot::from_entity).collect())
    }

    /// Applies the descriptive fields of an update. Capacity is ignored here.
    ///
    /// # Returns
    /// - `Ok(Some(Lot))` - The updated lot
    /// - `Ok(None)` - No lot with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_details(&self, params: &UpdateLotParams) -> Result<Option<Lot>, DbErr> {
        let Some(entity) = entity::prelude::Lot::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(name) = &params.name {
            active.name = ActiveValue::Set(name.clone());
        }
        if let Some(address) = &params.address {
            active.address = ActiveValue::Set(address.clone());
        }
        if let Some(pincode) = &params.pincode {
            active.pincode = ActiveValue::Set(pincode.clone());
        }
        if let Some(rate) = params.hourly_rate_cents {
            active.hourly_rate_cents = ActiveValue::Set(rate);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Lot::from_entity(entity)))
    }

    /// Writes the capacity column. Spot rows must be adjusted by the caller.
    pub async fn set_capacity(&self, id: i32, capacity: i32) -> Result<(), DbErr> {
        entity::lot::ActiveModel {
            id: ActiveValue::Unchanged(id),
            capacity: ActiveValue::Set(capacity),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Deletes a lot. Spots and bookings are removed by cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - The lot was deleted
    /// - `Ok(false)` - No lot with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Lot::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Lot::find().count(self.db).await
    }
}
