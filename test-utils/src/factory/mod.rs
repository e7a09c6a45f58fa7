//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert into the database; use `fixture` for
//! in-memory models instead.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let (lot, spots) = factory::lot::create_lot(&db, 3).await?;
//!
//!     // Lot with a single spot already held by an active booking
//!     let (user, lot, spot, booking) =
//!         factory::helpers::create_active_booking_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let lot = factory::lot::LotFactory::new(&db)
//!     .name("Harbour Front")
//!     .capacity(1)
//!     .hourly_rate_cents(1000)
//!     .build()
//!     .await?;
//! ```

pub mod booking;
pub mod helpers;
pub mod lot;
pub mod user;

pub use booking::{create_active_booking, create_completed_booking};
pub use lot::create_lot;
pub use user::{create_admin, create_user};
