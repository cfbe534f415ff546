//! Tests for the dispute_fine endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::sea_orm_active_enums::FineStatus;
use gavel::model::fine::DisputeFineDto;
use gavel::server::controller::fine::dispute_fine;
use gavel_test_utils::prelude::*;

use crate::controller::{app_state, body_json};

fn dto(fine_id: i32) -> DisputeFineDto {
    DisputeFineDto {
        fine_id: Some(fine_id),
        dispute_reason: Some("Not my vehicle".to_string()),
    }
}

/// Expect 200 with the fine disputed and the reason stored
#[tokio::test]
async fn disputes_pending_fine() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_gavel_tables().build().await?;
    let user_model = test.user().insert_default_user().await?;
    let fine_model = test
        .fine()
        .insert_mock_fine(user_model.id, FineStatus::Pending)
        .await?;

    let result = dispute_fine(State(app_state(&test)), Json(dto(fine_model.id))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["status"], "disputed");
    assert_eq!(body["disputeReason"], "Not my vehicle");

    Ok(())
}

/// Expect 404 when the fine does not exist
#[tokio::test]
async fn not_found_for_nonexistent_fine() -> Result<(), TestError> {
    let test = TestBuilder::new().with_gavel_tables().build().await?;

    let result = dispute_fine(State(app_state(&test)), Json(dto(1))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 when the fine is not pending
#[tokio::test]
async fn bad_request_for_paid_fine() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_gavel_tables().build().await?;
    let user_model = test.user().insert_default_user().await?;
    let fine_model = test
        .fine()
        .insert_mock_fine(user_model.id, FineStatus::Paid)
        .await?;

    let result = dispute_fine(State(app_state(&test)), Json(dto(fine_model.id))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
