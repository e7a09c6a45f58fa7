use chrono::{Duration, TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{error::AppError, service::export::ExportService};

/// Tests the CSV layout of a booking history.
///
/// Expected: header row, newest booking first, blank checkout and cost for the
/// active booking, cost formatted with two decimals
#[tokio::test]
async fn renders_history_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (_lot, spots) = factory::lot::LotFactory::new(db)
        .name("Riverside")
        .capacity(2)
        .build()
        .await?;
    let start = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();

    let completed = factory::booking::create_completed_booking(
        db,
        user.id,
        &spots[0],
        start,
        start + Duration::minutes(90),
        2000,
    )
    .await?;
    let active = factory::booking::BookingFactory::new(db, user.id, &spots[1])
        .start_time(start + Duration::days(1))
        .build()
        .await?;

    let generated_at = Utc.with_ymd_and_hms(2026, 3, 5, 12, 30, 0).unwrap();
    let export = ExportService::new(db)
        .booking_history_csv(user.id, generated_at)
        .await?
        .unwrap();

    assert_eq!(
        export.filename,
        format!("booking_history_{}_20260305_123000.csv", user.id)
    );
    assert_eq!(export.row_count, 2);

    let lines: Vec<&str> = export.csv.lines().collect();
    assert_eq!(
        lines[0],
        "Booking ID,Lot Name,Spot Number,Check-In Time,Check-Out Time,Total Cost"
    );
    assert_eq!(
        lines[1],
        format!("{},Riverside,2,2026-03-02 09:00:00,,", active.id)
    );
    assert_eq!(
        lines[2],
        format!(
            "{},Riverside,1,2026-03-01 09:00:00,2026-03-01 10:30:00,20.00",
            completed.id
        )
    );

    Ok(())
}

/// Tests exporting for a user without bookings.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let export = ExportService::new(db)
        .booking_history_csv(user.id, Utc::now())
        .await?;

    assert!(export.is_none());

    Ok(())
}
