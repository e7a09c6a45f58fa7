use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, data::user::UserRepository, error::AppError, model::user::CreateUserParams,
};

const DEFAULT_LOG_FILTER: &str = "parkbook=info,tower_http=info";

/// Installs the global tracing subscriber.
///
/// Honors `RUST_LOG` when set, otherwise logs the application and HTTP layer at info level.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the bootstrap admin account if configured and no admin exists yet.
///
/// # Returns
/// - `Ok(true)` - An admin account was created
/// - `Ok(false)` - Nothing to do (no bootstrap configured or an admin already exists)
pub async fn ensure_admin(db: &DatabaseConnection, config: &Config) -> Result<bool, AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.admin_exists().await? {
        return Ok(false);
    }

    let Some(admin) = &config.admin else {
        tracing::warn!(
            "No admin user exists. Set ADMIN_USERNAME and ADMIN_EMAIL to create one on startup."
        );
        return Ok(false);
    };

    let user = user_repo
        .create(CreateUserParams {
            username: admin.username.clone(),
            email: admin.email.clone(),
            is_admin: true,
        })
        .await?;

    tracing::info!("Created admin user {} ({})", user.username, user.id);

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::config::AdminBootstrap;
    use chrono::Duration;
    use test_utils::{builder::TestBuilder, factory};

    fn config_with_admin(admin: Option<AdminBootstrap>) -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            bind_addr: "127.0.0.1:0".to_string(),
            admin,
            report_schedule: "0 0 0 1 * *".to_string(),
            reminder_schedule: "0 0 19 * * *".to_string(),
            reminder_overdue_after: Duration::hours(24),
        }
    }

    #[tokio::test]
    async fn creates_configured_admin_once() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let config = config_with_admin(Some(AdminBootstrap {
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
        }));

        assert!(ensure_admin(db, &config).await?);
        assert!(!ensure_admin(db, &config).await?);

        let admins = UserRepository::new(db).get_all_admins().await?;
        assert_eq!(admins.len(), 1);
        assert_eq!(admins[0].username, "admin");

        Ok(())
    }

    #[tokio::test]
    async fn skips_bootstrap_when_admin_already_exists() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        factory::user::create_admin(db).await?;

        let config = config_with_admin(Some(AdminBootstrap {
            username: "second-admin".to_string(),
            email: "second@example.com".to_string(),
        }));

        assert!(!ensure_admin(db, &config).await?);

        Ok(())
    }

    #[tokio::test]
    async fn does_nothing_without_bootstrap_config() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        assert!(!ensure_admin(db, &config_with_admin(None)).await?);
        assert!(!UserRepository::new(db).admin_exists().await?);

        Ok(())
    }
}
