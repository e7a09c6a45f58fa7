use super::*;

/// Tests the Available to Occupied transition.
///
/// Expected: Ok(true) on the first call, Ok(false) on the second
#[tokio::test]
async fn occupies_available_spot_exactly_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_lot, spots) = factory::lot::create_lot(db, 1).await?;
    let repo = SpotRepository::new(db);

    assert!(repo.occupy(spots[0].id).await?);
    assert!(!repo.occupy(spots[0].id).await?);

    let spot = repo.find_by_id(spots[0].id).await?.unwrap();
    assert_eq!(spot.status, SpotStatus::Occupied);

    Ok(())
}

/// Tests occupying a spot that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_spot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!SpotRepository::new(db).occupy(404).await?);

    Ok(())
}
