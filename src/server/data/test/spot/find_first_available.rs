use super::*;

/// Tests that the lowest-ID Available spot is returned.
///
/// Expected: Ok(Some) with the second spot once the first is occupied
#[tokio::test]
async fn returns_lowest_available_spot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (lot, spots) = factory::lot::create_lot(db, 3).await?;
    factory::booking::create_active_booking(db, user.id, &spots[0]).await?;

    let spot = SpotRepository::new(db)
        .find_first_available(lot.id)
        .await?
        .unwrap();

    assert_eq!(spot.id, spots[1].id);
    assert_eq!(spot.spot_number, 2);

    Ok(())
}

/// Tests that a fully occupied lot has no Available spot.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_lot_is_full() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, lot, _spot, _booking) =
        factory::helpers::create_active_booking_with_dependencies(db).await?;

    let result = SpotRepository::new(db).find_first_available(lot.id).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that spots of other lots are never returned.
///
/// Expected: Ok(None) for an empty lot even when another lot has free spots
#[tokio::test]
async fn ignores_other_lots() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (empty, _) = factory::lot::create_lot(db, 0).await?;
    factory::lot::create_lot(db, 2).await?;

    let result = SpotRepository::new(db).find_first_available(empty.id).await?;

    assert!(result.is_none());

    Ok(())
}
