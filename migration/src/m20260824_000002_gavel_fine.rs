use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260824_000001_gavel_user::GavelUser;

static IDX_GAVEL_FINE_USER_ID: &str = "idx-gavel_fine-user_id";
static IDX_GAVEL_FINE_STATUS: &str = "idx-gavel_fine-status";
static IDX_GAVEL_FINE_LICENSE_NUMBER: &str = "idx-gavel_fine-license_number";
static FK_GAVEL_FINE_USER_ID: &str = "fk-gavel_fine-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GavelFine::Table)
                    .if_not_exists()
                    .col(pk_auto(GavelFine::Id))
                    .col(string_uniq(GavelFine::Reference))
                    .col(integer(GavelFine::UserId))
                    .col(string(GavelFine::LicenseNumber))
                    .col(string(GavelFine::ViolationType))
                    .col(double(GavelFine::Amount))
                    .col(string_len(GavelFine::Status, 16))
                    .col(timestamp(GavelFine::IssuedDate))
                    .col(text_null(GavelFine::DisputeReason))
                    .col(timestamp_null(GavelFine::DisputeResolutionDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GAVEL_FINE_USER_ID)
                    .table(GavelFine::Table)
                    .col(GavelFine::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GAVEL_FINE_STATUS)
                    .table(GavelFine::Table)
                    .col(GavelFine::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GAVEL_FINE_LICENSE_NUMBER)
                    .table(GavelFine::Table)
                    .col(GavelFine::LicenseNumber)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_GAVEL_FINE_USER_ID)
                    .from_tbl(GavelFine::Table)
                    .from_col(GavelFine::UserId)
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
                    .name(FK_GAVEL_FINE_USER_ID)
                    .table(GavelFine::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GAVEL_FINE_LICENSE_NUMBER)
                    .table(GavelFine::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GAVEL_FINE_STATUS)
                    .table(GavelFine::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GAVEL_FINE_USER_ID)
                    .table(GavelFine::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GavelFine::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum GavelFine {
    Table,
    Id,
    Reference,
    UserId,
    LicenseNumber,
    ViolationType,
    Amount,
    Status,
    IssuedDate,
    DisputeReason,
    DisputeResolutionDate,
}
