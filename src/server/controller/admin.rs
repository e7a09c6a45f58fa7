use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        report::{AdminSummaryDto, ReportDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Identity, Permission},
        service::{report::ReportService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

#[derive(Deserialize)]
pub struct ReportPeriodParams {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Dashboard totals across users, lots, spots and revenue.
///
/// # Access Control
/// - `Admin` - Only admins can view the summary
#[utoipa::path(
    get,
    path = "/api/admin/summary",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Admin summary", body = AdminSummaryDto),
        (status = 401, description = "Missing or unknown identity", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_summary(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Admin])
        .await?;

    let summary = ReportService::new(&state.db).admin_summary().await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// List all regular users.
///
/// # Access Control
/// - `Admin` - Only admins can list users
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Regular users ordered by username", body = Vec<UserDto>),
        (status = 401, description = "Missing or unknown identity", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db).get_regular_users().await?;
    let users: Vec<_> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users)))
}

/// Report over completed bookings in `[start, end)`.
///
/// # Access Control
/// - `Admin` - Only admins can run reports
///
/// # Returns
/// - `200 OK` - Per-lot revenue, booking count and occupancy
/// - `400 Bad Request` - Malformed timestamps or `end` not after `start`
#[utoipa::path(
    get,
    path = "/api/admin/reports",
    tag = ADMIN_TAG,
    params(
        ("start" = String, Query, description = "Period start (RFC 3339), inclusive"),
        ("end" = String, Query, description = "Period end (RFC 3339), exclusive")
    ),
    responses(
        (status = 200, description = "Period report", body = ReportDto),
        (status = 400, description = "Invalid period", body = ErrorDto),
        (status = 401, description = "Missing or unknown identity", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_report(
    State(state): State<AppState>,
    identity: Identity,
    Query(params): Query<ReportPeriodParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &identity)
        .require(&[Permission::Admin])
        .await?;

    let report = ReportService::new(&state.db)
        .summarize(params.start, params.end)
        .await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}
