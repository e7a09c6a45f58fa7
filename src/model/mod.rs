//! Data transfer objects exchanged over the HTTP API.

pub mod api;
pub mod booking;
pub mod lot;
pub mod report;
pub mod user;
