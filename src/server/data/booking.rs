//! Booking data repository.
//!
//! The ledger is append-mostly: a booking row is inserted Active and written once more when
//! it completes. Completion is guarded on the Active status so it can only happen once.

use chrono::{DateTime, Utc};
use entity::booking::BookingStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::{
    booking::{Booking, BookingWithLot, CreateBookingParams},
    spot::SpotOccupant,
    user::User,
};

pub struct BookingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new Active booking.
    pub async fn create(&self, params: CreateBookingParams) -> Result<Booking, DbErr> {
        let entity = entity::booking::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            lot_id: ActiveValue::Set(params.lot_id),
            spot_id: ActiveValue::Set(Some(params.spot_id)),
            spot_number: ActiveValue::Set(params.spot_number),
            start_time: ActiveValue::Set(params.start_time),
            end_time: ActiveValue::Set(None),
            cost_cents: ActiveValue::Set(None),
            status: ActiveValue::Set(BookingStatus::Active),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Booking::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Booking>, DbErr> {
        let entity = entity::prelude::Booking::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Booking::from_entity))
    }

    /// Writes end time and cost and marks the booking Completed, if it is still Active.
    ///
    /// # Returns
    /// - `Ok(true)` - The booking was completed by this call
    /// - `Ok(false)` - The booking was not Active (or does not exist)
    pub async fn complete_if_active(
        &self,
        id: i32,
        end_time: DateTime<Utc>,
        cost_cents: i64,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .set(entity::booking::ActiveModel {
                end_time: ActiveValue::Set(Some(end_time)),
                cost_cents: ActiveValue::Set(Some(cost_cents)),
                status: ActiveValue::Set(BookingStatus::Completed),
                ..Default::default()
            })
            .filter(entity::booking::Column::Id.eq(id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Active))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Gets a user's bookings with lot names, newest first.
    pub async fn get_by_user_with_lot(&self, user_id: i32) -> Result<Vec<BookingWithLot>, DbErr> {
        let rows = entity::prelude::Booking::find()
            .find_also_related(entity::prelude::Lot)
            .filter(entity::booking::Column::UserId.eq(user_id))
            .order_by_desc(entity::booking::Column::StartTime)
            .order_by_desc(entity::booking::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(booking, lot)| BookingWithLot {
                lot_name: lot
                    .map(|l| l.name)
                    .unwrap_or_else(|| format!("Lot {}", booking.lot_id)),
                booking: Booking::from_entity(booking),
            })
            .collect())
    }

    pub async fn count_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .count(self.db)
            .await
    }

    pub async fn count_active_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Active))
            .count(self.db)
            .await
    }

    /// Sum of completed booking costs for a user, in cents.
    pub async fn total_spent_by_user(&self, user_id: i32) -> Result<i64, DbErr> {
        let costs: Vec<Option<i64>> = entity::prelude::Booking::find()
            .select_only()
            .column(entity::booking::Column::CostCents)
            .filter(entity::booking::Column::UserId.eq(user_id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Completed))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(costs.into_iter().flatten().sum())
    }

    /// Sum of all completed booking costs, in cents.
    pub async fn total_revenue(&self) -> Result<i64, DbErr> {
        let costs: Vec<Option<i64>> = entity::prelude::Booking::find()
            .select_only()
            .column(entity::booking::Column::CostCents)
            .filter(entity::booking::Column::Status.eq(BookingStatus::Completed))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(costs.into_iter().flatten().sum())
    }

    /// Gets Completed bookings with `period_start <= end_time < period_end`.
    pub async fn get_completed_in_period(
        &self,
        period_start: DateTime<Utc>,
        period_end: DateTime<Utc>,
    ) -> Result<Vec<Booking>, DbErr> {
        let entities = entity::prelude::Booking::find()
            .filter(entity::booking::Column::Status.eq(BookingStatus::Completed))
            .filter(entity::booking::Column::EndTime.gte(period_start))
            .filter(entity::booking::Column::EndTime.lt(period_end))
            .order_by_asc(entity::booking::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Booking::from_entity).collect())
    }

    /// Gets Active bookings that started before `cutoff`, with their user.
    pub async fn get_active_started_before(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<(Booking, Option<User>)>, DbErr> {
        let rows = entity::prelude::Booking::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::booking::Column::Status.eq(BookingStatus::Active))
            .filter(entity::booking::Column::StartTime.lt(cutoff))
            .order_by_asc(entity::booking::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(booking, user)| (Booking::from_entity(booking), user.map(User::from_entity)))
            .collect())
    }

    /// Occupants of the given spots, keyed by spot ID.
    pub async fn get_occupants(
        &self,
        spot_ids: &[i32],
    ) -> Result<HashMap<i32, SpotOccupant>, DbErr> {
        if spot_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::Booking::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::booking::Column::Status.eq(BookingStatus::Active))
            .filter(entity::booking::Column::SpotId.is_in(spot_ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(booking, user)| {
                let spot_id = booking.spot_id?;
                Some((
                    spot_id,
                    SpotOccupant {
                        booking_id: booking.id,
                        user_id: booking.user_id,
                        username: user.map(|u| u.username).unwrap_or_default(),
                        check_in_time: booking.start_time,
                    },
                ))
            })
            .collect())
    }
}
