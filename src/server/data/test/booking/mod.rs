use crate::server::{data::booking::BookingRepository, model::booking::CreateBookingParams};
use chrono::{Duration, TimeZone, Utc};
use entity::booking::BookingStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod complete_if_active;
mod create;
mod get_by_user_with_lot;
mod get_completed_in_period;
mod totals;
