use super::*;

/// Tests that Occupied spots survive a delete request.
///
/// Expected: only the Available spot is deleted
#[tokio::test]
async fn skips_occupied_spots() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (lot, spots) = factory::lot::create_lot(db, 2).await?;
    factory::booking::create_active_booking(db, user.id, &spots[0]).await?;

    let repo = SpotRepository::new(db);
    let deleted = repo
        .delete_available(&[spots[0].id, spots[1].id])
        .await?;

    assert_eq!(deleted, 1);
    let remaining = repo.get_by_lot(lot.id).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, spots[0].id);

    Ok(())
}

/// Tests the highest-numbered selection used when shrinking a lot.
///
/// Expected: spots 4 and 3, in that order
#[tokio::test]
async fn highest_available_are_returned_in_descending_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (lot, _) = factory::lot::create_lot(db, 4).await?;

    let spots = SpotRepository::new(db)
        .get_highest_available(lot.id, 2)
        .await?;

    assert_eq!(
        spots.iter().map(|s| s.spot_number).collect::<Vec<_>>(),
        vec![4, 3]
    );

    Ok(())
}
