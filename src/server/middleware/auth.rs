//! Caller identity and role checks.
//!
//! Authentication happens upstream: the gateway verifies the caller and forwards the user ID
//! in the `x-user-id` header. `Identity` extracts that ID; `AuthGuard` resolves it to a user
//! and enforces permissions.

use axum::{extract::FromRequestParts, http::request::Parts};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
};

/// Header carrying the authenticated user ID.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Verified user ID supplied with the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity(pub i32);

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(USER_ID_HEADER) else {
            return Err(AuthError::MissingIdentity.into());
        };

        let raw = value
            .to_str()
            .map_err(|_| AuthError::InvalidIdentity("<non-ascii>".to_string()))?;

        raw.trim()
            .parse::<i32>()
            .map(Identity)
            .map_err(|_| AuthError::InvalidIdentity(raw.to_string()).into())
    }
}

pub enum Permission {
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    identity: &'a Identity,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, identity: &'a Identity) -> Self {
        Self { db, identity }
    }

    /// Loads the calling user and checks every required permission.
    ///
    /// # Returns
    /// - `Ok(User)` - The caller, holding all permissions
    /// - `Err(AuthError::UnknownUser)` - The identity matches no user
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);
        let Identity(user_id) = *self.identity;

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UnknownUser(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted to access an admin endpoint without admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
