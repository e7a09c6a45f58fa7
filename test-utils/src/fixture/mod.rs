//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for unit
//! tests of conversions and pure business logic.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let lot = fixture::lot::entity();
//! let booking = fixture::booking::completed_entity();
//! ```

pub mod booking;
pub mod lot;
pub mod user;

pub use booking::{
    active_entity as active_booking_entity, completed_entity as completed_booking_entity,
};
pub use lot::entity as lot_entity;
pub use user::entity as user_entity;
