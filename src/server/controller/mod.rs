//! HTTP request handlers.
//!
//! Controllers extract the caller identity, enforce access through `AuthGuard`, convert DTOs
//! into service parameters and convert domain models back into DTOs.

pub mod admin;
pub mod booking;
pub mod export;
pub mod lot;
pub mod user;
