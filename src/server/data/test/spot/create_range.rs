use super::*;

/// Tests inserting a range larger than one insert batch.
///
/// Expected: Ok with 1200 Available spots numbered 1..=1200 in order
#[tokio::test]
async fn inserts_range_across_batches() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (lot, _) = factory::lot::create_lot(db, 0).await?;

    let spots = SpotRepository::new(db).create_range(lot.id, 1, 1200).await?;

    assert_eq!(spots.len(), 1200);
    assert_eq!(spots[0].spot_number, 1);
    assert_eq!(spots[1199].spot_number, 1200);
    assert!(spots.iter().all(|s| s.status == SpotStatus::Available));

    Ok(())
}

/// Tests that only the new range is returned when the lot already has spots.
///
/// Expected: Ok with spots 4 and 5 only
#[tokio::test]
async fn returns_only_inserted_numbers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (lot, _) = factory::lot::create_lot(db, 3).await?;

    let spots = SpotRepository::new(db).create_range(lot.id, 4, 5).await?;

    assert_eq!(
        spots.iter().map(|s| s.spot_number).collect::<Vec<_>>(),
        vec![4, 5]
    );

    Ok(())
}

/// Tests an empty range.
///
/// Expected: Ok(empty) and nothing inserted
#[tokio::test]
async fn empty_range_inserts_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (lot, _) = factory::lot::create_lot(db, 0).await?;

    let spots = SpotRepository::new(db).create_range(lot.id, 1, 0).await?;

    assert!(spots.is_empty());
    assert!(SpotRepository::new(db).get_by_lot(lot.id).await?.is_empty());

    Ok(())
}
