//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Every repository is generic over `ConnectionTrait`, so services can hand it either the
//! connection pool or an open `DatabaseTransaction` when several writes must commit together.

pub mod booking;
pub mod lot;
pub mod spot;
pub mod user;

#[cfg(test)]
mod test;
