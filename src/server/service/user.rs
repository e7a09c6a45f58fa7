use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a Regular user profile.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Empty username or malformed email
    /// - `Err(AppError::Conflict)` - Username or email already registered
    pub async fn register(&self, params: CreateUserParams) -> Result<User, AppError> {
        if params.username.is_empty() {
            return Err(AppError::BadRequest("Username must not be empty".to_string()));
        }
        if !params.email.contains('@') {
            return Err(AppError::BadRequest("Email address is invalid".to_string()));
        }

        let repo = UserRepository::new(self.db);

        if repo
            .username_or_email_taken(&params.username, &params.email)
            .await?
        {
            return Err(AppError::Conflict(
                "Username or email already exists".to_string(),
            ));
        }

        let user = repo.create(params).await?;

        tracing::info!("Registered user {} ({})", user.username, user.id);

        Ok(user)
    }

    /// Gets all Regular users ordered by username.
    pub async fn get_regular_users(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_regular_users().await?)
    }
}
