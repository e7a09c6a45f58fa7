use chrono::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_REPORT_SCHEDULE: &str = "0 0 0 1 * *";
const DEFAULT_REMINDER_SCHEDULE: &str = "0 0 19 * * *";
const DEFAULT_REMINDER_OVERDUE_HOURS: i64 = 24;

/// Bootstrap admin account created on first start when no admin exists.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminBootstrap {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    pub admin: Option<AdminBootstrap>,

    /// Cron expression (with seconds) for the monthly report job.
    pub report_schedule: String,
    /// Cron expression (with seconds) for the reminder scan.
    pub reminder_schedule: String,
    /// How long a booking may stay active before a reminder is sent.
    pub reminder_overdue_after: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let database_url = var("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let admin = match (var("ADMIN_USERNAME"), var("ADMIN_EMAIL")) {
            (Some(username), Some(email)) => Some(AdminBootstrap { username, email }),
            _ => None,
        };

        let reminder_overdue_hours = match var("REMINDER_OVERDUE_HOURS") {
            Some(value) => value
                .parse::<i64>()
                .ok()
                .filter(|hours| *hours > 0)
                .ok_or(ConfigError::InvalidEnvVar {
                    name: "REMINDER_OVERDUE_HOURS".to_string(),
                    value,
                })?,
            None => DEFAULT_REMINDER_OVERDUE_HOURS,
        };

        Ok(Self {
            database_url,
            bind_addr: var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            admin,
            report_schedule: var("REPORT_SCHEDULE")
                .unwrap_or_else(|| DEFAULT_REPORT_SCHEDULE.to_string()),
            reminder_schedule: var("REMINDER_SCHEDULE")
                .unwrap_or_else(|| DEFAULT_REMINDER_SCHEDULE.to_string()),
            reminder_overdue_after: Duration::hours(reminder_overdue_hours),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn applies_defaults_when_only_database_url_is_set() {
        let config = Config::from_lookup(lookup(&[("DATABASE_URL", "sqlite::memory:")])).unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.report_schedule, DEFAULT_REPORT_SCHEDULE);
        assert_eq!(config.reminder_schedule, DEFAULT_REMINDER_SCHEDULE);
        assert_eq!(config.reminder_overdue_after, Duration::hours(24));
        assert!(config.admin.is_none());
    }

    #[test]
    fn fails_without_database_url() {
        let result = Config::from_lookup(lookup(&[("BIND_ADDR", "127.0.0.1:3000")]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) if name == "DATABASE_URL"
        ));
    }

    #[test]
    fn reads_admin_bootstrap_only_when_both_values_are_set() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("ADMIN_USERNAME", "admin"),
            ("ADMIN_EMAIL", "admin@example.com"),
        ]))
        .unwrap();
        assert_eq!(
            config.admin,
            Some(AdminBootstrap {
                username: "admin".to_string(),
                email: "admin@example.com".to_string(),
            })
        );

        let partial = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("ADMIN_USERNAME", "admin"),
        ]))
        .unwrap();
        assert!(partial.admin.is_none());
    }

    #[test]
    fn rejects_non_positive_overdue_hours() {
        let result = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("REMINDER_OVERDUE_HOURS", "0"),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }
}
