use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FineDto {
    pub id: i32,
    /// Human-facing fine reference, e.g. `FN-1A2B3C4D`
    pub reference: String,
    pub user_id: i32,
    pub license_number: String,
    pub violation_type: String,
    pub amount: f64,
    pub status: String,
    pub issued_date: NaiveDateTime,
    pub dispute_reason: Option<String>,
    pub dispute_resolution_date: Option<NaiveDateTime>,
}

/// A fine joined with its owner's email for administrative listings
#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FineWithOwnerDto {
    pub id: i32,
    pub reference: String,
    pub user_id: i32,
    /// Owner email, `Unknown` when the user row is missing
    pub email: String,
    pub license_number: String,
    pub violation_type: String,
    pub amount: f64,
    pub status: String,
    pub issued_date: NaiveDateTime,
    pub dispute_reason: Option<String>,
    pub dispute_resolution_date: Option<NaiveDateTime>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateFineDto {
    pub license_number: Option<String>,
    pub violation_type: Option<String>,
    pub amount: Option<f64>,
    /// Initial status, defaults to `pending`
    pub status: Option<String>,
    /// Fallback owner lookup when no user holds the license number
    pub email: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DisputeFineDto {
    pub fine_id: Option<i32>,
    pub dispute_reason: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ResolveDisputeDto {
    pub fine_id: Option<i32>,
    /// `keep` reinstates the fine, `remove` cancels it
    pub action: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateFineStatusDto {
    pub fine_id: Option<i32>,
    pub status: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PayFineDto {
    pub fine_id: Option<i32>,
}

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct FineListQuery {
    /// Filter by fine status
    pub status: Option<String>,
    /// Filter by license number
    pub license_number: Option<String>,
    /// Restrict to fines issued on this day (YYYY-MM-DD)
    pub date: Option<NaiveDate>,
}
