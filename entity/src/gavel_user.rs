use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "gavel_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Identity provider subject, or `manual:<email>` for accounts synthesized
    /// by admin tooling before the person ever signed in.
    #[sea_orm(unique)]
    pub firebase_uid: String,
    pub email: String,
    pub name: Option<String>,
    pub license_number: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::gavel_fine::Entity")]
    GavelFine,
    #[sea_orm(has_many = "super::gavel_payment::Entity")]
    GavelPayment,
}

impl Related<super::gavel_fine::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GavelFine.def()
    }
}

impl Related<super::gavel_payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GavelPayment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
