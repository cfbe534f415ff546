//! Tests for the get_user_fines endpoint.
//!
//! Verifies bearer-token authentication and that the caller can only ever see
//! their own fine records.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use entity::sea_orm_active_enums::FineStatus;
use gavel::server::controller::fine::get_user_fines;
use gavel_test_utils::constant::{TEST_EMAIL, TEST_FIREBASE_UID};
use gavel_test_utils::prelude::*;

use crate::controller::{app_state, bearer_headers, body_json};

/// Expect 200 with only the caller's own fines
#[tokio::test]
async fn returns_only_callers_fines() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_gavel_tables()
        .with_jwks_endpoint(1)
        .build()
        .await?;
    let caller = test.user().insert_default_user().await?;
    let other = test
        .user()
        .insert_mock_user("firebase-uid-0002", "other@example.com", None)
        .await?;
    let owned = test
        .fine()
        .insert_mock_fine(caller.id, FineStatus::Pending)
        .await?;
    test.fine()
        .insert_mock_fine(other.id, FineStatus::Pending)
        .await?;

    let token = factory::mint_id_token(&factory::mock_identity_claims(
        TEST_FIREBASE_UID,
        Some(TEST_EMAIL),
    ));

    let result = get_user_fines(State(app_state(&test)), bearer_headers(&token)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let fines = body.as_array().unwrap();
    assert_eq!(fines.len(), 1);
    assert_eq!(fines[0]["id"], owned.id);
    test.assert_mocks();

    Ok(())
}

/// Expect 200 with an empty array for a verified caller with no user record
#[tokio::test]
async fn returns_empty_for_unknown_subject() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_gavel_tables()
        .with_jwks_endpoint(1)
        .build()
        .await?;

    let token = factory::mint_id_token(&factory::mock_identity_claims("never-signed-in", None));

    let result = get_user_fines(State(app_state(&test)), bearer_headers(&token)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert!(body.as_array().unwrap().is_empty());

    Ok(())
}

/// Expect 401 when the Authorization header is absent
#[tokio::test]
async fn unauthorized_without_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_gavel_tables()
        .with_jwks_endpoint(0)
        .build()
        .await?;

    let result = get_user_fines(State(app_state(&test)), axum::http::HeaderMap::new()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    test.assert_mocks();

    Ok(())
}

/// Expect 401 for an expired token
#[tokio::test]
async fn unauthorized_for_expired_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_gavel_tables()
        .with_jwks_endpoint(1)
        .build()
        .await?;

    let mut claims = factory::mock_identity_claims(TEST_FIREBASE_UID, None);
    claims.exp = claims.iat - 3600;
    let token = factory::mint_id_token(&claims);

    let result = get_user_fines(State(app_state(&test)), bearer_headers(&token)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
