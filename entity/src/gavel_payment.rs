use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::PaymentStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "gavel_payment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub fine_id: i32,
    pub user_id: i32,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    /// Transaction identifier assigned by the external payment gateway.
    #[sea_orm(unique)]
    pub stripe_payment_intent_id: String,
    pub status: PaymentStatus,
    pub paid_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::gavel_fine::Entity",
        from = "Column::FineId",
        to = "super::gavel_fine::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    GavelFine,
    #[sea_orm(
        belongs_to = "super::gavel_user::Entity",
        from = "Column::UserId",
        to = "super::gavel_user::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    GavelUser,
}

impl Related<super::gavel_fine::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GavelFine.def()
    }
}

impl Related<super::gavel_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GavelUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
