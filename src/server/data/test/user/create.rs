use super::*;

/// Tests creating a regular user.
///
/// Verifies that the repository stores the username and email and assigns the
/// Regular role when `is_admin` is false.
///
/// Expected: Ok with Regular user created
#[tokio::test]
async fn creates_regular_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            is_admin: false,
        })
        .await?;

    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");
    assert!(!user.is_admin());

    let stored = repo.find_by_id(user.id).await?;
    assert_eq!(stored, Some(user));

    Ok(())
}

/// Tests creating an admin user.
///
/// Expected: Ok with Admin role
#[tokio::test]
async fn creates_admin_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(CreateUserParams {
            username: "root".to_string(),
            email: "root@example.com".to_string(),
            is_admin: true,
        })
        .await?;

    assert!(user.is_admin());

    Ok(())
}

/// Tests that a duplicate username is rejected by the unique constraint.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(CreateUserParams {
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        is_admin: false,
    })
    .await?;

    let result = repo
        .create(CreateUserParams {
            username: "alice".to_string(),
            email: "other@example.com".to_string(),
            is_admin: false,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
