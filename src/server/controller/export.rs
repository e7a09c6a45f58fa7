use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Identity},
        service::{
            export::ExportService,
            notification::{Notification, Notifier},
        },
        state::AppState,
    },
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Tag for grouping export endpoints in OpenAPI documentation
pub static EXPORT_TAG: &str = "export";

/// Request a CSV export of the caller's booking history.
///
/// The export runs in the background and is handed to the notification
/// collaborator addressed to the caller's email.
///
/// # Returns
/// - `202 Accepted` - Export started
/// - `401 Unauthorized` - Missing or unknown identity
#[utoipa::path(
    post,
    path = "/api/export-csv",
    tag = EXPORT_TAG,
    responses(
        (status = 202, description = "Export started", body = MessageDto),
        (status = 401, description = "Missing or unknown identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_csv(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &identity).require(&[]).await?;

    let db = state.db.clone();
    let notifier = state.notifier.clone();
    tokio::spawn(async move {
        if let Err(e) = send_booking_history(&db, notifier, user.id, user.email).await {
            tracing::error!("Booking history export for user {} failed: {}", user.id, e);
        }
    });

    Ok((
        StatusCode::ACCEPTED,
        Json(MessageDto {
            message: "CSV export started. You'll receive it shortly.".to_string(),
        }),
    ))
}

/// Builds the export and hands it to the notifier.
///
/// # Returns
/// - `Ok(true)` - Export sent
/// - `Ok(false)` - The user has no bookings, nothing sent
pub async fn send_booking_history(
    db: &DatabaseConnection,
    notifier: Arc<dyn Notifier>,
    user_id: i32,
    recipient: String,
) -> Result<bool, AppError> {
    let Some(export) = ExportService::new(db)
        .booking_history_csv(user_id, Utc::now())
        .await?
    else {
        tracing::info!("User {} has no bookings to export", user_id);
        return Ok(false);
    };

    tracing::info!(
        "Exported {} bookings for user {} as {}",
        export.row_count,
        user_id,
        export.filename
    );

    notifier
        .notify(Notification::BookingHistory {
            recipient,
            filename: export.filename,
            csv: export.csv,
        })
        .await?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::service::notification::MemoryNotifier;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn sends_history_to_user_email() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (user, _lot, _spot, _booking) =
            factory::helpers::create_active_booking_with_dependencies(db).await?;
        let notifier = Arc::new(MemoryNotifier::default());

        let sent = send_booking_history(db, notifier.clone(), user.id, user.email.clone()).await?;

        assert!(sent);
        let notifications = notifier.sent();
        assert_eq!(notifications.len(), 1);
        match &notifications[0] {
            Notification::BookingHistory {
                recipient, csv, ..
            } => {
                assert_eq!(recipient, &user.email);
                assert!(csv.starts_with("Booking ID,"));
            }
            other => panic!("Expected booking history, got: {:?}", other),
        }

        Ok(())
    }

    #[tokio::test]
    async fn sends_nothing_without_bookings() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::user::create_user(db).await?;
        let notifier = Arc::new(MemoryNotifier::default());

        let sent = send_booking_history(db, notifier.clone(), user.id, user.email).await?;

        assert!(!sent);
        assert!(notifier.sent().is_empty());

        Ok(())
    }
}
