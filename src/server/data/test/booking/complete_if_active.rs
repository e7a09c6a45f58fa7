use super::*;

/// Tests completing an Active booking.
///
/// Expected: Ok(true) and end time, cost and status written
#[tokio::test]
async fn completes_active_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _lot, _spot, booking) =
        factory::helpers::create_active_booking_with_dependencies(db).await?;
    let end = booking.start_time + Duration::minutes(90);

    let repo = BookingRepository::new(db);
    assert!(repo.complete_if_active(booking.id, end, 2000).await?);

    let stored = repo.find_by_id(booking.id).await?.unwrap();
    assert_eq!(stored.status, BookingStatus::Completed);
    assert_eq!(stored.end_time, Some(end));
    assert_eq!(stored.cost_cents, Some(2000));

    Ok(())
}

/// Tests that cost is written exactly once.
///
/// Verifies that a second completion attempt is rejected and leaves the first
/// cost in place.
///
/// Expected: Ok(false) on the second call, first cost kept
#[tokio::test]
async fn refuses_to_complete_twice() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _lot, _spot, booking) =
        factory::helpers::create_active_booking_with_dependencies(db).await?;
    let end = booking.start_time + Duration::hours(1);

    let repo = BookingRepository::new(db);
    assert!(repo.complete_if_active(booking.id, end, 1000).await?);
    assert!(
        !repo
            .complete_if_active(booking.id, end + Duration::hours(5), 9999)
            .await?
    );

    let stored = repo.find_by_id(booking.id).await?.unwrap();
    assert_eq!(stored.cost_cents, Some(1000));

    Ok(())
}
