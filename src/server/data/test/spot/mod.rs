use crate::server::data::spot::{SpotCounts, SpotRepository};
use entity::spot::SpotStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod counts_by_lot;
mod create_range;
mod delete_available;
mod find_first_available;
mod occupy;
mod vacate;
