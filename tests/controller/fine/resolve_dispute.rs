//! Tests for the resolve_dispute endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::sea_orm_active_enums::FineStatus;
use gavel::model::fine::ResolveDisputeDto;
use gavel::server::controller::fine::resolve_dispute;
use gavel_test_utils::prelude::*;

use crate::controller::{app_state, body_json};

fn dto(fine_id: i32, action: &str) -> ResolveDisputeDto {
    ResolveDisputeDto {
        fine_id: Some(fine_id),
        action: Some(action.to_string()),
    }
}

/// Expect 200 with the fine reinstated as pending
#[tokio::test]
async fn keep_reinstates_fine() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_gavel_tables().build().await?;
    let user_model = test.user().insert_default_user().await?;
    let fine_model = test
        .fine()
        .insert_mock_disputed_fine(user_model.id, "Not my vehicle")
        .await?;

    let result = resolve_dispute(State(app_state(&test)), Json(dto(fine_model.id, "keep"))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["status"], "pending");
    assert!(!body["disputeResolutionDate"].is_null());

    Ok(())
}

/// Expect 200 with the fine cancelled
#[tokio::test]
async fn remove_cancels_fine() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_gavel_tables().build().await?;
    let user_model = test.user().insert_default_user().await?;
    let fine_model = test
        .fine()
        .insert_mock_disputed_fine(user_model.id, "Not my vehicle")
        .await?;

    let result =
        resolve_dispute(State(app_state(&test)), Json(dto(fine_model.id, "remove"))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["status"], "cancelled");

    Ok(())
}

/// Expect 400 when the fine is not currently disputed
#[tokio::test]
async fn bad_request_for_undisputed_fine() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_gavel_tables().build().await?;
    let user_model = test.user().insert_default_user().await?;
    let fine_model = test
        .fine()
        .insert_mock_fine(user_model.id, FineStatus::Pending)
        .await?;

    let result = resolve_dispute(State(app_state(&test)), Json(dto(fine_model.id, "keep"))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 when the fine does not exist
#[tokio::test]
async fn not_found_for_nonexistent_fine() -> Result<(), TestError> {
    let test = TestBuilder::new().with_gavel_tables().build().await?;

    let result = resolve_dispute(State(app_state(&test)), Json(dto(1, "remove"))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
