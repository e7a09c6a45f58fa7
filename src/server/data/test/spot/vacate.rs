use super::*;

/// Tests the Occupied to Available transition.
///
/// Expected: Ok(true) for an occupied spot, Ok(false) once it is Available again
#[tokio::test]
async fn vacates_occupied_spot_exactly_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _lot, spot, _booking) =
        factory::helpers::create_active_booking_with_dependencies(db).await?;
    let repo = SpotRepository::new(db);

    assert!(repo.vacate(spot.id).await?);
    assert!(!repo.vacate(spot.id).await?);

    let stored = repo.find_by_id(spot.id).await?.unwrap();
    assert!(stored.is_available());

    Ok(())
}
