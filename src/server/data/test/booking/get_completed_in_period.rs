use super::*;

/// Tests the half-open period boundaries.
///
/// Verifies that a booking ending exactly at the period start is counted, one ending
/// exactly at the period end is not, and Active bookings are ignored.
///
/// Expected: only the in-period completed booking
#[tokio::test]
async fn includes_start_and_excludes_end_boundary() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (_lot, spots) = factory::lot::create_lot(db, 3).await?;
    let period_start = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    let period_end = Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap();

    let at_start = factory::booking::create_completed_booking(
        db,
        user.id,
        &spots[0],
        period_start - Duration::hours(1),
        period_start,
        1000,
    )
    .await?;
    factory::booking::create_completed_booking(
        db,
        user.id,
        &spots[1],
        period_end - Duration::hours(1),
        period_end,
        1000,
    )
    .await?;
    factory::booking::BookingFactory::new(db, user.id, &spots[2])
        .start_time(period_start + Duration::days(2))
        .build()
        .await?;

    let bookings = BookingRepository::new(db)
        .get_completed_in_period(period_start, period_end)
        .await?;

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, at_start.id);

    Ok(())
}
