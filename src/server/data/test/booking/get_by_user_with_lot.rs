use super::*;

/// Tests history ordering and lot name enrichment.
///
/// Expected: newest booking first, only the requested user's bookings
#[tokio::test]
async fn returns_user_bookings_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let (lot, spots) = factory::lot::LotFactory::new(db)
        .name("Riverside")
        .capacity(2)
        .build()
        .await?;
    let start = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();

    let older = factory::booking::create_completed_booking(
        db,
        user.id,
        &spots[0],
        start,
        start + Duration::hours(1),
        1000,
    )
    .await?;
    let newer = factory::booking::BookingFactory::new(db, user.id, &spots[1])
        .start_time(start + Duration::days(1))
        .build()
        .await?;
    factory::booking::create_completed_booking(
        db,
        other.id,
        &spots[0],
        start,
        start + Duration::hours(2),
        2000,
    )
    .await?;

    let bookings = BookingRepository::new(db)
        .get_by_user_with_lot(user.id)
        .await?;

    assert_eq!(
        bookings.iter().map(|b| b.booking.id).collect::<Vec<_>>(),
        vec![newer.id, older.id]
    );
    assert!(bookings.iter().all(|b| b.lot_name == "Riverside"));
    assert!(bookings.iter().all(|b| b.booking.lot_id == lot.id));

    Ok(())
}
