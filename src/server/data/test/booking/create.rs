use super::*;

/// Tests inserting an Active booking.
///
/// Expected: Ok with no end time and no cost
#[tokio::test]
async fn creates_active_booking_without_cost() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (lot, spots) = factory::lot::create_lot(db, 1).await?;
    let start = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();

    let booking = BookingRepository::new(db)
        .create(CreateBookingParams {
            user_id: user.id,
            lot_id: lot.id,
            spot_id: spots[0].id,
            spot_number: spots[0].spot_number,
            start_time: start,
        })
        .await?;

    assert_eq!(booking.status, BookingStatus::Active);
    assert_eq!(booking.spot_id, Some(spots[0].id));
    assert_eq!(booking.spot_number, 1);
    assert_eq!(booking.start_time, start);
    assert!(booking.end_time.is_none());
    assert!(booking.cost_cents.is_none());

    Ok(())
}
