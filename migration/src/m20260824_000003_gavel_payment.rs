use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260824_000001_gavel_user::GavelUser;
use crate::m20260824_000002_gavel_fine::GavelFine;

static IDX_GAVEL_PAYMENT_FINE_ID: &str = "idx-gavel_payment-fine_id";
static IDX_GAVEL_PAYMENT_USER_ID: &str = "idx-gavel_payment-user_id";
static IDX_GAVEL_PAYMENT_PAID_AT: &str = "idx-gavel_payment-paid_at";
static FK_GAVEL_PAYMENT_FINE_ID: &str = "fk-gavel_payment-fine_id";
static FK_GAVEL_PAYMENT_USER_ID: &str = "fk-gavel_payment-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GavelPayment::Table)
                    .if_not_exists()
                    .col(pk_auto(GavelPayment::Id))
                    .col(integer(GavelPayment::FineId))
                    .col(integer(GavelPayment::UserId))
                    .col(double(GavelPayment::Amount))
                    .col(string_uniq(GavelPayment::StripePaymentIntentId))
                    .col(string_len(GavelPayment::Status, 16))
                    .col(timestamp(GavelPayment::PaidAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GAVEL_PAYMENT_FINE_ID)
                    .table(GavelPayment::Table)
                    .col(GavelPayment::FineId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GAVEL_PAYMENT_USER_ID)
                    .table(GavelPayment::Table)
                    .col(GavelPayment::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GAVEL_PAYMENT_PAID_AT)
                    .table(GavelPayment::Table)
                    .col(GavelPayment::PaidAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_GAVEL_PAYMENT_FINE_ID)
                    .from_tbl(GavelPayment::Table)
                    .from_col(GavelPayment::FineId)
                    .to_tbl(GavelFine::Table)
                    .to_col(GavelFine::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_GAVEL_PAYMENT_USER_ID)
                    .from_tbl(GavelPayment::Table)
                    .from_col(GavelPayment::UserId)
                    .to_tbl(GavelUser::Table)
                    .to_col(GavelUser::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_GAVEL_PAYMENT_USER_ID)
                    .table(GavelPayment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_GAVEL_PAYMENT_FINE_ID)
                    .table(GavelPayment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GAVEL_PAYMENT_PAID_AT)
                    .table(GavelPayment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GAVEL_PAYMENT_USER_ID)
                    .table(GavelPayment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GAVEL_PAYMENT_FINE_ID)
                    .table(GavelPayment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GavelPayment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum GavelPayment {
    Table,
    Id,
    FineId,
    UserId,
    Amount,
    StripePaymentIntentId,
    Status,
    PaidAt,
}
