use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::FineStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "gavel_fine")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Human-facing fine reference of the form `FN-XXXXXXXX`, generated at
    /// creation and never derived from the row id.
    #[sea_orm(unique)]
    pub reference: String,
    pub user_id: i32,
    pub license_number: String,
    pub violation_type: String,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    pub status: FineStatus,
    pub issued_date: DateTime,
    #[sea_orm(column_type = "Text", nullable)]
    pub dispute_reason: Option<String>,
    pub dispute_resolution_date: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::gavel_user::Entity",
        from = "Column::UserId",
        to = "super::gavel_user::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    GavelUser,
    #[sea_orm(has_many = "super::gavel_payment::Entity")]
    GavelPayment,
}

impl Related<super::gavel_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GavelUser.def()
    }
}

impl Related<super::gavel_payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GavelPayment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
