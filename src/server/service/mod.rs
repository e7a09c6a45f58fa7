//! Business logic services.
//!
//! Services sit between controllers and repositories. Operations that change more than one
//! row open a transaction and pass it to the repositories they use.

pub mod booking;
pub mod export;
pub mod lot;
pub mod notification;
pub mod pricing;
pub mod reminder;
pub mod report;
pub mod spot;
pub mod user;

#[cfg(test)]
mod test;
