use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDto {
    pub id: i32,
    pub fine_id: i32,
    pub user_id: i32,
    pub amount: f64,
    /// External payment gateway transaction id
    pub stripe_payment_intent_id: String,
    pub status: String,
    pub paid_at: NaiveDateTime,
}

/// A payment joined with its payer's identity for administrative listings
#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentWithUserDto {
    pub id: i32,
    pub fine_id: i32,
    pub user_id: i32,
    pub email: Option<String>,
    pub license_number: Option<String>,
    pub amount: f64,
    pub stripe_payment_intent_id: String,
    pub status: String,
    pub paid_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RecordPaymentDto {
    pub fine_id: Option<i32>,
    /// Explicit payer id; mutually exclusive with email/license lookup
    pub user_id: Option<i32>,
    pub email: Option<String>,
    pub license_number: Option<String>,
    pub amount: Option<f64>,
    pub stripe_payment_intent_id: Option<String>,
    /// Gateway outcome, defaults to `succeeded`
    pub status: Option<String>,
    /// Defaults to the time of recording
    pub paid_at: Option<NaiveDateTime>,
}

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PaymentListQuery {
    /// Earliest payment day to include (YYYY-MM-DD)
    pub from: Option<NaiveDate>,
    /// Latest payment day to include (YYYY-MM-DD)
    pub to: Option<NaiveDate>,
}

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct UserPaymentsQuery {
    pub email: Option<String>,
    pub license_number: Option<String>,
}
