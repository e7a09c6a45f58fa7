//! Booking domain models and parameters.

use chrono::{DateTime, Utc};
use entity::booking::BookingStatus;

use crate::model::booking::{BookingDto, BookingStatusDto, ReleasedBookingDto, UserSummaryDto};

/// Ledger entry for one use of a spot.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub lot_id: i32,
    /// Cleared when the spot row is removed by a capacity shrink.
    pub spot_id: Option<i32>,
    /// Snapshot of the spot number at booking time.
    pub spot_number: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    /// Written exactly once, at completion.
    pub cost_cents: Option<i64>,
    pub status: BookingStatus,
}

impl Booking {
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            lot_id: entity.lot_id,
            spot_id: entity.spot_id,
            spot_number: entity.spot_number,
            start_time: entity.start_time,
            end_time: entity.end_time,
            cost_cents: entity.cost_cents,
            status: entity.status,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == BookingStatus::Active
    }
}

/// Booking joined with the name of its lot, for history listings.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingWithLot {
    pub booking: Booking,
    pub lot_name: String,
}

impl BookingWithLot {
    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            booking_id: self.booking.id,
            lot_id: self.booking.lot_id,
            lot_name: self.lot_name,
            spot_number: self.booking.spot_number,
            check_in_time: self.booking.start_time,
            check_out_time: self.booking.end_time,
            total_cost_cents: self.booking.cost_cents,
            status: match self.booking.status {
                BookingStatus::Active => BookingStatusDto::Active,
                BookingStatus::Completed => BookingStatusDto::Completed,
            },
        }
    }
}

/// Result of completing a booking.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedBooking {
    pub id: i32,
    pub end_time: DateTime<Utc>,
    pub cost_cents: i64,
    pub billed_hours: i64,
}

impl CompletedBooking {
    pub fn into_dto(self) -> ReleasedBookingDto {
        ReleasedBookingDto {
            booking_id: self.id,
            total_cost_cents: self.cost_cents,
            billed_hours: self.billed_hours,
            check_out_time: self.end_time,
        }
    }
}

/// Parameters for inserting a new Active booking on a reserved spot.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub user_id: i32,
    pub lot_id: i32,
    pub spot_id: i32,
    pub spot_number: i32,
    pub start_time: DateTime<Utc>,
}

/// Per-user booking totals.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub total_bookings: u64,
    pub active_bookings: u64,
    pub total_spent_cents: i64,
}

impl UserSummary {
    pub fn into_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            total_bookings: self.total_bookings,
            active_bookings: self.active_bookings,
            total_spent_cents: self.total_spent_cents,
        }
    }
}
