use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    /// Identity-provider subject, or `manual:<email>` for placeholder accounts
    pub firebase_uid: String,
    pub email: String,
    pub name: Option<String>,
    pub license_number: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegisterUserDto {
    pub firebase_uid: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub license_number: Option<String>,
}
