use super::*;

/// Tests per-user counters and spend.
///
/// Expected: Active bookings counted but not billed
#[tokio::test]
async fn summarizes_user_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (_lot, spots) = factory::lot::create_lot(db, 3).await?;
    let start = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();

    factory::booking::create_completed_booking(
        db,
        user.id,
        &spots[0],
        start,
        start + Duration::hours(2),
        2000,
    )
    .await?;
    factory::booking::create_completed_booking(
        db,
        user.id,
        &spots[1],
        start,
        start + Duration::minutes(30),
        1500,
    )
    .await?;
    factory::booking::create_active_booking(db, user.id, &spots[2]).await?;

    let repo = BookingRepository::new(db);

    assert_eq!(repo.count_by_user(user.id).await?, 3);
    assert_eq!(repo.count_active_by_user(user.id).await?, 1);
    assert_eq!(repo.total_spent_by_user(user.id).await?, 3500);
    assert_eq!(repo.total_revenue().await?, 3500);

    Ok(())
}

/// Tests the reminder scan query.
///
/// Expected: only Active bookings started before the cutoff, with their user
#[tokio::test]
async fn finds_active_bookings_started_before_cutoff() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (_lot, spots) = factory::lot::create_lot(db, 2).await?;
    let now = Utc.with_ymd_and_hms(2026, 3, 10, 19, 0, 0).unwrap();

    let overdue = factory::booking::BookingFactory::new(db, user.id, &spots[0])
        .start_time(now - Duration::hours(30))
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, user.id, &spots[1])
        .start_time(now - Duration::hours(2))
        .build()
        .await?;

    let rows = BookingRepository::new(db)
        .get_active_started_before(now - Duration::hours(24))
        .await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0.id, overdue.id);
    assert_eq!(rows[0].1.as_ref().map(|u| u.id), Some(user.id));

    Ok(())
}
