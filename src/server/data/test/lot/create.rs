use super::*;

/// Tests creating a lot row.
///
/// Verifies that the repository stores every field and that no spot rows are
/// created as a side effect.
///
/// Expected: Ok with lot created
#[tokio::test]
async fn creates_lot_without_spots() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LotRepository::new(db);
    let lot = repo
        .create(CreateLotParams {
            name: "Harbour Front".to_string(),
            address: "1 Quay Road".to_string(),
            pincode: "400001".to_string(),
            capacity: 3,
            hourly_rate_cents: 1500,
        })
        .await?;

    assert_eq!(lot.name, "Harbour Front");
    assert_eq!(lot.capacity, 3);
    assert_eq!(lot.hourly_rate_cents, 1500);

    let stored = repo.find_by_id(lot.id).await?;
    assert_eq!(stored, Some(lot));

    let spots = entity::prelude::Spot::find().all(db).await?;
    assert!(spots.is_empty());

    Ok(())
}
