use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        lot::{
            CreateLotDto, LotAvailabilityDto, LotDetailsDto, LotDto, SetCapacityDto, UpdateLotDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Identity, Permission},
        model::lot::{CreateLotParams, UpdateLotParams},
        service::lot::LotService,
        state::AppState,
    },
};

/// Tag for grouping lot endpoints in OpenAPI documentation
pub static LOT_TAG: &str = "lot";

/// List lots with free spots.
///
/// Returns every lot that currently has at least one Available spot, with its
/// spot counts. Accessible by any registered user.
///
/// # Returns
/// - `200 OK` - Lots with availability
/// - `401 Unauthorized` - Missing or unknown identity
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/lots",
    tag = LOT_TAG,
    responses(
        (status = 200, description = "Lots with at least one available spot", body = Vec<LotAvailabilityDto>),
        (status = 401, description = "Missing or unknown identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_lots(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let lots = LotService::new(&state.db).get_available_lots().await?;
    let lots: Vec<_> = lots.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(lots)))
}

/// Create a parking lot.
///
/// Creates the lot and its spots, numbered from 1, in one transaction.
///
/// # Access Control
/// - `Admin` - Only admins can create lots
///
/// # Returns
/// - `201 Created` - The created lot
/// - `400 Bad Request` - Empty name, negative capacity or negative rate
/// - `401 Unauthorized` - Missing or unknown identity
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    post,
    path = "/api/admin/lots",
    tag = LOT_TAG,
    request_body = CreateLotDto,
    responses(
        (status = 201, description = "Successfully created lot", body = LotDto),
        (status = 400, description = "Invalid lot data", body = ErrorDto),
        (status = 401, description = "Missing or unknown identity", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_lot(
    State(state): State<AppState>,
    identity: Identity,
    Json(payload): Json<CreateLotDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Admin])
        .await?;

    let lot = LotService::new(&state.db)
        .create_lot(CreateLotParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(lot.into_dto())))
}

/// List all lots with spot counts.
///
/// # Access Control
/// - `Admin` - Only admins can list every lot
#[utoipa::path(
    get,
    path = "/api/admin/lots",
    tag = LOT_TAG,
    responses(
        (status = 200, description = "All lots with spot counts", body = Vec<LotAvailabilityDto>),
        (status = 401, description = "Missing or unknown identity", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_lots(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Admin])
        .await?;

    let lots = LotService::new(&state.db).get_all_lots().await?;
    let lots: Vec<_> = lots.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(lots)))
}

/// Get a lot with every spot and its occupant.
///
/// # Access Control
/// - `Admin` - Only admins can see who occupies a spot
///
/// # Returns
/// - `200 OK` - Lot details
/// - `404 Not Found` - No lot with that ID
#[utoipa::path(
    get,
    path = "/api/admin/lots/{lot_id}",
    tag = LOT_TAG,
    params(
        ("lot_id" = i32, Path, description = "Lot ID")
    ),
    responses(
        (status = 200, description = "Lot with spots and occupants", body = LotDetailsDto),
        (status = 401, description = "Missing or unknown identity", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Lot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lot_details(
    State(state): State<AppState>,
    identity: Identity,
    Path(lot_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Admin])
        .await?;

    let details = LotService::new(&state.db)
        .get_lot_details(lot_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Parking lot not found".to_string()))?;

    Ok((StatusCode::OK, Json(details.into_dto())))
}

/// Update a lot.
///
/// Every field is optional. A capacity change follows the same rules as
/// `PUT /api/admin/lots/{lot_id}/capacity` and is applied in the same transaction.
///
/// # Access Control
/// - `Admin` - Only admins can update lots
///
/// # Returns
/// - `200 OK` - The updated lot
/// - `400 Bad Request` - Invalid values
/// - `404 Not Found` - No lot with that ID
/// - `409 Conflict` - Capacity below the number of occupied spots
#[utoipa::path(
    put,
    path = "/api/admin/lots/{lot_id}",
    tag = LOT_TAG,
    params(
        ("lot_id" = i32, Path, description = "Lot ID")
    ),
    request_body = UpdateLotDto,
    responses(
        (status = 200, description = "Successfully updated lot", body = LotDto),
        (status = 400, description = "Invalid lot data", body = ErrorDto),
        (status = 401, description = "Missing or unknown identity", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Lot not found", body = ErrorDto),
        (status = 409, description = "Capacity below occupancy", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_lot(
    State(state): State<AppState>,
    identity: Identity,
    Path(lot_id): Path<i32>,
    Json(payload): Json<UpdateLotDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Admin])
        .await?;

    let lot = LotService::new(&state.db)
        .update_lot(UpdateLotParams::from_dto(lot_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(lot.into_dto())))
}

/// Change a lot's capacity.
///
/// Growing appends Available spots; shrinking removes the highest-numbered
/// Available spots.
///
/// # Access Control
/// - `Admin` - Only admins can resize lots
///
/// # Returns
/// - `200 OK` - The resized lot
/// - `400 Bad Request` - Negative capacity
/// - `404 Not Found` - No lot with that ID
/// - `409 Conflict` - Capacity below the number of occupied spots
#[utoipa::path(
    put,
    path = "/api/admin/lots/{lot_id}/capacity",
    tag = LOT_TAG,
    params(
        ("lot_id" = i32, Path, description = "Lot ID")
    ),
    request_body = SetCapacityDto,
    responses(
        (status = 200, description = "Successfully resized lot", body = LotDto),
        (status = 400, description = "Negative capacity", body = ErrorDto),
        (status = 401, description = "Missing or unknown identity", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Lot not found", body = ErrorDto),
        (status = 409, description = "Capacity below occupancy", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_capacity(
    State(state): State<AppState>,
    identity: Identity,
    Path(lot_id): Path<i32>,
    Json(payload): Json<SetCapacityDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Admin])
        .await?;

    let lot = LotService::new(&state.db)
        .set_capacity(lot_id, payload.capacity)
        .await?;

    Ok((StatusCode::OK, Json(lot.into_dto())))
}

/// Delete a lot.
///
/// Refused while any spot of the lot is occupied.
///
/// # Access Control
/// - `Admin` - Only admins can delete lots
///
/// # Returns
/// - `204 No Content` - Lot deleted
/// - `404 Not Found` - No lot with that ID
/// - `409 Conflict` - The lot has occupied spots
#[utoipa::path(
    delete,
    path = "/api/admin/lots/{lot_id}",
    tag = LOT_TAG,
    params(
        ("lot_id" = i32, Path, description = "Lot ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted lot"),
        (status = 401, description = "Missing or unknown identity", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Lot not found", body = ErrorDto),
        (status = 409, description = "Lot has occupied spots", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_lot(
    State(state): State<AppState>,
    identity: Identity,
    Path(lot_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Admin])
        .await?;

    LotService::new(&state.db).delete_lot(lot_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
