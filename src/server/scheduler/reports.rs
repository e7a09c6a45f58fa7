use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    config::Config,
    error::AppError,
    service::{
        notification::{Notification, Notifier},
        reminder::ReminderService,
        report::{previous_month_period, ReportService},
    },
};

/// Starts the report and reminder scheduler
///
/// Registers two jobs:
/// - Monthly report over the previous calendar month (`config.report_schedule`)
/// - Reminder scan for bookings active longer than `config.reminder_overdue_after`
///   (`config.reminder_schedule`)
///
/// # Arguments
/// - `db`: Database connection
/// - `notifier`: Delivery collaborator for reports and reminders
/// - `config`: Cron expressions and reminder threshold
pub async fn start_scheduler(
    db: DatabaseConnection,
    notifier: Arc<dyn Notifier>,
    config: &Config,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let report_db = db.clone();
    let report_notifier = notifier.clone();
    let report_job = Job::new_async(config.report_schedule.as_str(), move |_uuid, _lock| {
        let db = report_db.clone();
        let notifier = report_notifier.clone();

        Box::pin(async move {
            if let Err(e) = process_monthly_report(&db, notifier.as_ref(), Utc::now()).await {
                tracing::error!("Error generating monthly report: {}", e);
            }
        })
    })?;

    let overdue_after = config.reminder_overdue_after;
    let reminder_job = Job::new_async(config.reminder_schedule.as_str(), move |_uuid, _lock| {
        let db = db.clone();
        let notifier = notifier.clone();

        Box::pin(async move {
            if let Err(e) =
                process_reminders(&db, notifier.as_ref(), Utc::now(), overdue_after).await
            {
                tracing::error!("Error processing booking reminders: {}", e);
            }
        })
    })?;

    scheduler.add(report_job).await?;
    scheduler.add(reminder_job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Report scheduler started (reports: {}, reminders: {})",
        config.report_schedule,
        config.reminder_schedule
    );

    Ok(scheduler)
}

/// Builds the report for the calendar month before `now` and hands it to the notifier.
pub async fn process_monthly_report(
    db: &DatabaseConnection,
    notifier: &dyn Notifier,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    let (start, end) = previous_month_period(now).ok_or_else(|| {
        AppError::InternalError(format!("No previous month for {}", now.to_rfc3339()))
    })?;

    let report = ReportService::new(db).summarize(start, end).await?;

    tracing::info!(
        "Monthly report for {} to {}: {} bookings, {} cents",
        start,
        end,
        report.total_booking_count,
        report.total_revenue_cents
    );

    notifier
        .notify(Notification::MonthlyReport(report.into_dto()))
        .await
}

/// Sends reminders for bookings active longer than `overdue_after`.
pub async fn process_reminders(
    db: &DatabaseConnection,
    notifier: &dyn Notifier,
    now: DateTime<Utc>,
    overdue_after: Duration,
) -> Result<usize, AppError> {
    let sent = ReminderService::new(db)
        .send_overdue_reminders(notifier, now, overdue_after)
        .await?;

    if sent > 0 {
        tracing::info!("Sent {} booking reminders", sent);
    }

    Ok(sent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::service::notification::MemoryNotifier;
    use chrono::TimeZone;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests the monthly job reports the previous calendar month.
    ///
    /// Verifies that a booking completed in February is included when the job runs
    /// on the 1st of March, and one completed in March is not.
    ///
    /// Expected: Ok with one MonthlyReport covering February
    #[tokio::test]
    async fn monthly_report_covers_previous_month() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::user::create_user(db).await?;
        let (_lot, spots) = factory::lot::create_lot(db, 2).await?;
        let feb_start = Utc.with_ymd_and_hms(2025, 2, 10, 9, 0, 0).unwrap();
        let mar_start = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        factory::booking::BookingFactory::new(db, user.id, &spots[0])
            .start_time(feb_start)
            .completed(feb_start + Duration::hours(2), 2000)
            .build()
            .await?;
        factory::booking::BookingFactory::new(db, user.id, &spots[1])
            .start_time(mar_start)
            .completed(mar_start + Duration::minutes(30), 1000)
            .build()
            .await?;

        let notifier = MemoryNotifier::default();
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 5).unwrap();
        process_monthly_report(db, &notifier, now).await?;

        let sent = notifier.sent();
        assert_eq!(sent.len(), 1);
        match &sent[0] {
            Notification::MonthlyReport(report) => {
                assert_eq!(report.total_booking_count, 1);
                assert_eq!(report.total_revenue_cents, 2000);
                assert_eq!(
                    report.period_start,
                    Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap()
                );
            }
            other => panic!("Expected monthly report, got: {:?}", other),
        }

        Ok(())
    }

    /// Tests the reminder job only picks bookings past the threshold.
    ///
    /// Expected: Ok(1) with one Reminder for the old booking
    #[tokio::test]
    async fn reminders_only_for_overdue_bookings() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let now = Utc.with_ymd_and_hms(2025, 6, 2, 19, 0, 0).unwrap();
        let user = factory::user::create_user(db).await?;
        let (_lot, spots) = factory::lot::create_lot(db, 2).await?;
        let old = factory::booking::BookingFactory::new(db, user.id, &spots[0])
            .start_time(now - Duration::hours(30))
            .build()
            .await?;
        factory::booking::BookingFactory::new(db, user.id, &spots[1])
            .start_time(now - Duration::hours(2))
            .build()
            .await?;

        let notifier = MemoryNotifier::default();
        let sent = process_reminders(db, &notifier, now, Duration::hours(24)).await?;

        assert_eq!(sent, 1);
        match &notifier.sent()[0] {
            Notification::Reminder { booking_id, .. } => assert_eq!(*booking_id, old.id),
            other => panic!("Expected reminder, got: {:?}", other),
        }

        Ok(())
    }
}
