use super::*;

/// Tests that only provided fields are changed.
///
/// Expected: Ok(Some) with name and rate updated, address and capacity untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (lot, _) = factory::lot::create_lot(db, 2).await?;

    let updated = LotRepository::new(db)
        .update_details(&UpdateLotParams {
            id: lot.id,
            name: Some("Renamed".to_string()),
            hourly_rate_cents: Some(2500),
            capacity: Some(10),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.hourly_rate_cents, 2500);
    assert_eq!(updated.address, lot.address);
    assert_eq!(updated.capacity, 2);

    Ok(())
}

/// Tests updating a lot that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_lot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = LotRepository::new(db)
        .update_details(&UpdateLotParams {
            id: 999,
            name: Some("Ghost".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
