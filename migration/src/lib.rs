pub use sea_orm_migration::prelude::*;

mod m20260824_000001_gavel_user;
mod m20260824_000002_gavel_fine;
mod m20260824_000003_gavel_payment;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260824_000001_gavel_user::Migration),
            Box::new(m20260824_000002_gavel_fine::Migration),
            Box::new(m20260824_000003_gavel_payment::Migration),
        ]
    }
}
