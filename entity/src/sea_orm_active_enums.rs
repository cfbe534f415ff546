use sea_orm::entity::prelude::*;

/// Lifecycle status of a fine.
///
/// A fine starts out `pending`, becomes `disputed` when the license holder
/// contests it, and ends in one of the terminal states `paid` or `cancelled`.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum FineStatus {
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
    #[sea_orm(string_value = "disputed")]
    Disputed,
    #[sea_orm(string_value = "paid")]
    Paid,
    #[sea_orm(string_value = "pending")]
    Pending,
}

/// Outcome of a payment attempt as reported by the payment gateway.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum PaymentStatus {
    #[sea_orm(string_value = "failed")]
    Failed,
    #[sea_orm(string_value = "succeeded")]
    Succeeded,
}
