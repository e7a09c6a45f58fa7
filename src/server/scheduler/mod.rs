//! Cron jobs for the monthly activity report and overdue booking reminders.

pub mod reports;
