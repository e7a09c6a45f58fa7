use super::*;

/// Tests per-lot aggregation of spot states.
///
/// Expected: counts keyed by lot, lots without spots absent
#[tokio::test]
async fn counts_available_and_occupied_per_lot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (first, first_spots) = factory::lot::create_lot(db, 3).await?;
    let (second, _) = factory::lot::create_lot(db, 2).await?;
    let (empty, _) = factory::lot::create_lot(db, 0).await?;
    factory::booking::create_active_booking(db, user.id, &first_spots[2]).await?;

    let counts = SpotRepository::new(db).counts_by_lot().await?;

    assert_eq!(
        counts.get(&first.id),
        Some(&SpotCounts {
            available: 2,
            occupied: 1
        })
    );
    assert_eq!(
        counts.get(&second.id),
        Some(&SpotCounts {
            available: 2,
            occupied: 0
        })
    );
    assert!(!counts.contains_key(&empty.id));
    assert_eq!(counts[&first.id].total(), 3);

    Ok(())
}
