//! Tests for the create_fine endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use gavel::model::fine::CreateFineDto;
use gavel::server::controller::fine::create_fine;
use gavel_test_utils::constant::TEST_LICENSE_NUMBER;
use gavel_test_utils::prelude::*;

use crate::controller::{app_state, body_json};

fn dto(license_number: &str) -> CreateFineDto {
    CreateFineDto {
        license_number: Some(license_number.to_string()),
        violation_type: Some("Speeding".to_string()),
        amount: Some(5000.0),
        status: None,
        email: None,
    }
}

/// Expect 201 with a pending fine owned by the license holder
#[tokio::test]
async fn created_with_pending_status() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_gavel_tables().build().await?;
    let user_model = test.user().insert_default_user().await?;

    let result = create_fine(State(app_state(&test)), Json(dto(TEST_LICENSE_NUMBER))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = body_json(resp).await;
    assert_eq!(body["status"], "pending");
    assert_eq!(body["userId"], user_model.id);
    assert_eq!(body["licenseNumber"], TEST_LICENSE_NUMBER);

    Ok(())
}

/// Expect 404 when no user matches and no email was given
#[tokio::test]
async fn not_found_without_resolvable_owner() -> Result<(), TestError> {
    let test = TestBuilder::new().with_gavel_tables().build().await?;

    let result = create_fine(State(app_state(&test)), Json(dto("GHOST99"))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 when a required field is missing
#[tokio::test]
async fn bad_request_for_missing_field() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_gavel_tables().build().await?;
    test.user().insert_default_user().await?;

    let mut create = dto(TEST_LICENSE_NUMBER);
    create.violation_type = None;

    let result = create_fine(State(app_state(&test)), Json(create)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 500 when required database tables are not present
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = create_fine(State(app_state(&test)), Json(dto(TEST_LICENSE_NUMBER))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
