use crate::server::{
    data::lot::LotRepository,
    model::lot::{CreateLotParams, UpdateLotParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update_details;
