//! User domain models and parameters.
//!
//! Provides the user profile as seen by the booking services, along with the parameters
//! used to register users and bootstrap the first admin.

use chrono::{DateTime, Utc};
use entity::user::UserRole;

use crate::model::user::{RegisterUserDto, RoleDto, UserDto};

/// Application user with role.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Unique login name.
    pub username: String,
    /// Unique contact address, also the recipient of notifications.
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            role: match self.role {
                UserRole::Admin => RoleDto::Admin,
                UserRole::Regular => RoleDto::Regular,
            },
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            role: entity.role,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a user profile.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    /// Whether the user is created with the Admin role.
    pub is_admin: bool,
}

impl CreateUserParams {
    /// Converts a self-registration request into parameters for a Regular user.
    ///
    /// Surrounding whitespace is trimmed from both fields.
    pub fn from_dto(dto: RegisterUserDto) -> Self {
        Self {
            username: dto.username.trim().to_string(),
            email: dto.email.trim().to_string(),
            is_admin: false,
        }
    }
}
