use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::ErrorDto,
        booking::{BookingDto, CreateBookingDto, ReleasedBookingDto, UserSummaryDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Identity},
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Book a spot in a lot.
///
/// Reserves the first Available spot of the lot and opens an Active booking
/// starting now.
///
/// # Returns
/// - `201 Created` - The new booking
/// - `401 Unauthorized` - Missing or unknown identity
/// - `404 Not Found` - No lot with that ID
/// - `409 Conflict` - No Available spot in the lot
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Spot reserved", body = BookingDto),
        (status = 401, description = "Missing or unknown identity", body = ErrorDto),
        (status = 404, description = "Lot not found", body = ErrorDto),
        (status = 409, description = "No available spots in this lot", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    identity: Identity,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let booking = BookingService::new(&state.db)
        .create_booking(&user, payload.lot_id, Utc::now())
        .await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

/// List the caller's bookings, newest first.
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "Booking history", body = Vec<BookingDto>),
        (status = 401, description = "Missing or unknown identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let bookings = BookingService::new(&state.db)
        .get_user_bookings(&user)
        .await?;
    let bookings: Vec<_> = bookings.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(bookings)))
}

/// Release a spot and complete its booking.
///
/// Ends the booking now, bills every started hour at the lot's rate and frees
/// the spot. Admins may release any booking.
///
/// # Returns
/// - `200 OK` - Final cost and billed hours
/// - `401 Unauthorized` - Missing or unknown identity
/// - `404 Not Found` - Booking missing or owned by another user
/// - `409 Conflict` - Booking already completed
#[utoipa::path(
    put,
    path = "/api/bookings/{booking_id}/release",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Spot released", body = ReleasedBookingDto),
        (status = 401, description = "Missing or unknown identity", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Booking is not active", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn release_booking(
    State(state): State<AppState>,
    identity: Identity,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let completed = BookingService::new(&state.db)
        .complete_booking(&user, booking_id, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(completed.into_dto())))
}

/// Booking counts and total spend for the caller.
#[utoipa::path(
    get,
    path = "/api/user/summary",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "User booking summary", body = UserSummaryDto),
        (status = 401, description = "Missing or unknown identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_summary(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let summary = BookingService::new(&state.db)
        .get_user_summary(&user)
        .await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}
