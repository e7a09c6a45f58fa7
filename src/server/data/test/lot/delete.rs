use super::*;

/// Tests that deleting a lot cascades to its spots.
///
/// Expected: Ok(true) and no spot rows remain
#[tokio::test]
async fn deletes_lot_and_cascades_to_spots() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (lot, _) = factory::lot::create_lot(db, 3).await?;
    let (other, _) = factory::lot::create_lot(db, 1).await?;

    let repo = LotRepository::new(db);
    assert!(repo.delete(lot.id).await?);

    assert!(repo.find_by_id(lot.id).await?.is_none());
    let remaining = entity::prelude::Spot::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].lot_id, other.id);

    Ok(())
}

/// Tests deleting a lot that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_lot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!LotRepository::new(db).delete(42).await?);

    Ok(())
}
