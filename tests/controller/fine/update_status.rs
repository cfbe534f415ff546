//! Tests for the update_fine_status endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::sea_orm_active_enums::FineStatus;
use gavel::model::fine::UpdateFineStatusDto;
use gavel::server::controller::fine::update_fine_status;
use gavel_test_utils::prelude::*;

use crate::controller::{app_state, body_json};

fn dto(fine_id: i32, status: &str) -> UpdateFineStatusDto {
    UpdateFineStatusDto {
        fine_id: Some(fine_id),
        status: Some(status.to_string()),
    }
}

/// Expect 200 with the status overwritten
#[tokio::test]
async fn overrides_status() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_gavel_tables().build().await?;
    let user_model = test.user().insert_default_user().await?;
    let fine_model = test
        .fine()
        .insert_mock_fine(user_model.id, FineStatus::Disputed)
        .await?;

    let result =
        update_fine_status(State(app_state(&test)), Json(dto(fine_model.id, "paid"))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["status"], "paid");

    Ok(())
}

/// Expect 400 for a status outside the enum
#[tokio::test]
async fn bad_request_for_invalid_status() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_gavel_tables().build().await?;
    let user_model = test.user().insert_default_user().await?;
    let fine_model = test
        .fine()
        .insert_mock_fine(user_model.id, FineStatus::Pending)
        .await?;

    let result =
        update_fine_status(State(app_state(&test)), Json(dto(fine_model.id, "refunded"))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 when the fine does not exist
#[tokio::test]
async fn not_found_for_nonexistent_fine() -> Result<(), TestError> {
    let test = TestBuilder::new().with_gavel_tables().build().await?;

    let result = update_fine_status(State(app_state(&test)), Json(dto(1, "paid"))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
