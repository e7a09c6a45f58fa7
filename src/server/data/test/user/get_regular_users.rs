use super::*;

/// Tests that admin users are excluded from the regular user listing.
///
/// Expected: Ok with only Regular users, ordered by username
#[tokio::test]
async fn lists_only_regular_users_in_username_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("zoe")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .username("bob")
        .build()
        .await?;
    factory::user::create_admin(db).await?;

    let repo = UserRepository::new(db);
    let users = repo.get_regular_users().await?;

    assert_eq!(
        users.iter().map(|u| u.username.as_str()).collect::<Vec<_>>(),
        vec!["bob", "zoe"]
    );
    assert_eq!(repo.count_regular().await?, 2);

    Ok(())
}
