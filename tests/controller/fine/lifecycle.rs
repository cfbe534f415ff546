//! End-to-end lifecycle test walking a fine from issuance through dispute,
//! reinstatement, payment, and the recorded gateway outcome.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use gavel::model::{
    fine::{CreateFineDto, DisputeFineDto, PayFineDto, ResolveDisputeDto},
    payment::RecordPaymentDto,
};
use gavel::server::controller::{
    fine::{create_fine, dispute_fine, pay_fine, resolve_dispute},
    payment::record_payment,
};
use gavel_test_utils::constant::{TEST_EMAIL, TEST_FIREBASE_UID, TEST_LICENSE_NUMBER};
use gavel_test_utils::prelude::*;

use crate::controller::{app_state, bearer_headers, body_json};

/// Issue, dispute, reinstate, pay, and record the gateway outcome for one fine
#[tokio::test]
async fn fine_runs_full_lifecycle() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_gavel_tables()
        .with_jwks_endpoint(1)
        .build()
        .await?;
    test.user().insert_default_user().await?;
    let state = app_state(&test);

    let result = create_fine(
        State(state.clone()),
        Json(CreateFineDto {
            license_number: Some(TEST_LICENSE_NUMBER.to_string()),
            violation_type: Some("Speeding".to_string()),
            amount: Some(5000.0),
            status: None,
            email: None,
        }),
    )
    .await;
    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let fine = body_json(resp).await;
    assert_eq!(fine["status"], "pending");
    let fine_id = fine["id"].as_i64().unwrap() as i32;

    let result = dispute_fine(
        State(state.clone()),
        Json(DisputeFineDto {
            fine_id: Some(fine_id),
            dispute_reason: Some("Not my vehicle".to_string()),
        }),
    )
    .await;
    assert!(result.is_ok());
    let disputed = body_json(result.unwrap().into_response()).await;
    assert_eq!(disputed["status"], "disputed");
    assert_eq!(disputed["disputeReason"], "Not my vehicle");

    let result = resolve_dispute(
        State(state.clone()),
        Json(ResolveDisputeDto {
            fine_id: Some(fine_id),
            action: Some("keep".to_string()),
        }),
    )
    .await;
    assert!(result.is_ok());
    let reinstated = body_json(result.unwrap().into_response()).await;
    assert_eq!(reinstated["status"], "pending");
    assert!(!reinstated["disputeResolutionDate"].is_null());

    let token = factory::mint_id_token(&factory::mock_identity_claims(
        TEST_FIREBASE_UID,
        Some(TEST_EMAIL),
    ));
    let result = pay_fine(
        State(state.clone()),
        bearer_headers(&token),
        Json(PayFineDto {
            fine_id: Some(fine_id),
        }),
    )
    .await;
    assert!(result.is_ok());
    let paid = body_json(result.unwrap().into_response()).await;
    assert_eq!(paid["status"], "paid");

    let result = record_payment(
        State(state),
        Json(RecordPaymentDto {
            fine_id: Some(fine_id),
            user_id: None,
            email: None,
            license_number: Some(TEST_LICENSE_NUMBER.to_string()),
            amount: Some(5000.0),
            stripe_payment_intent_id: Some("pi_lifecycle_0001".to_string()),
            status: None,
            paid_at: None,
        }),
    )
    .await;
    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let payment = body_json(resp).await;
    assert_eq!(payment["fineId"], fine_id);
    assert_eq!(payment["amount"], 5000.0);
    assert_eq!(payment["status"], "succeeded");
    test.assert_mocks();

    Ok(())
}
