use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Precondition violations of the booking lifecycle.
///
/// None of these are transient: they are surfaced to the caller verbatim and never retried.
/// A failed precondition leaves every entity unchanged.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookingError {
    /// No Available spot exists in the requested lot.
    #[error("No available spots in this lot")]
    NoCapacity,

    /// Release was requested for a spot that is already Available.
    #[error("Spot is not occupied")]
    NotOccupied,

    /// Completion was requested for a booking that is not Active.
    #[error("Booking is not active")]
    NotActive,

    /// The billed duration is zero or negative.
    #[error("Booking duration must be positive")]
    InvalidDuration,

    /// Billed hours times the hourly rate does not fit in the cost column.
    #[error("Booking cost exceeds the supported range")]
    CostOutOfRange,

    /// The requested capacity is below the lot's current Occupied spot count.
    #[error("Cannot reduce capacity to {requested}. {occupied} spots are currently occupied.")]
    CapacityBelowOccupancy { requested: i32, occupied: u64 },

    /// The lot still has Occupied spots and cannot be deleted.
    #[error("Cannot delete lot. {occupied} spot(s) are still occupied.")]
    LotHasActiveBookings { occupied: u64 },
}

impl BookingError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidDuration | Self::CostOutOfRange => StatusCode::BAD_REQUEST,
            Self::NoCapacity
            | Self::NotOccupied
            | Self::NotActive
            | Self::CapacityBelowOccupancy { .. }
            | Self::LotHasActiveBookings { .. } => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
