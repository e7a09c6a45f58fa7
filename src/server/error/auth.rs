use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request did not carry the identity header set by the authentication gateway.
    #[error("Request is missing the authenticated user identity")]
    MissingIdentity,

    /// The identity header was present but not a valid user ID.
    #[error("Invalid user identity header value '{0}'")]
    InvalidIdentity(String),

    /// The identity refers to a user that does not exist in the database.
    #[error("User {0} not found in database")]
    UnknownUser(i32),

    /// The user lacks a permission required by the endpoint.
    ///
    /// # Fields
    /// - ID of the user that was denied
    /// - Reason logged server-side
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingIdentity` / `InvalidIdentity` / `UnknownUser` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
///
/// Errors are logged at debug level while the client receives a generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingIdentity | Self::InvalidIdentity(_) | Self::UnknownUser(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Admins only!".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
