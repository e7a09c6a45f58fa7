//! SeaORM entity models for the parking booking schema.

pub mod prelude;

pub mod booking;
pub mod lot;
pub mod spot;
pub mod user;
