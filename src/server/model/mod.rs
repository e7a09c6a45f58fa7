//! Domain models and operation parameters.
//!
//! Repositories convert SeaORM entity models into these types at the data layer boundary;
//! controllers convert them into DTOs from `crate::model` for API responses.

pub mod booking;
pub mod lot;
pub mod report;
pub mod spot;
pub mod user;
