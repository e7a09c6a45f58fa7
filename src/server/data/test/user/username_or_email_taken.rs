use super::*;

/// Tests duplicate detection on either username or email.
///
/// Expected: true when either field matches, false otherwise
#[tokio::test]
async fn detects_taken_username_or_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("alice")
        .email("alice@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.username_or_email_taken("alice", "new@example.com").await?);
    assert!(repo.username_or_email_taken("new", "alice@example.com").await?);
    assert!(!repo.username_or_email_taken("new", "new@example.com").await?);

    Ok(())
}
