pub use super::booking::Entity as Booking;
pub use super::lot::Entity as Lot;
pub use super::spot::Entity as Spot;
pub use super::user::Entity as User;
