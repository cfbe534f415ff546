use sea_orm_migration::{prelude::*, schema::*};

static IDX_GAVEL_USER_EMAIL: &str = "idx-gavel_user-email";
static IDX_GAVEL_USER_LICENSE_NUMBER: &str = "idx-gavel_user-license_number";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GavelUser::Table)
                    .if_not_exists()
                    .col(pk_auto(GavelUser::Id))
                    .col(string_uniq(GavelUser::FirebaseUid))
                    .col(string(GavelUser::Email))
                    .col(string_null(GavelUser::Name))
                    .col(string_null(GavelUser::LicenseNumber))
                    .col(timestamp(GavelUser::CreatedAt))
                    .col(timestamp(GavelUser::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GAVEL_USER_EMAIL)
                    .table(GavelUser::Table)
                    .col(GavelUser::Email)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GAVEL_USER_LICENSE_NUMBER)
                    .table(GavelUser::Table)
                    .col(GavelUser::LicenseNumber)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GAVEL_USER_LICENSE_NUMBER)
                    .table(GavelUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GAVEL_USER_EMAIL)
                    .table(GavelUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GavelUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum GavelUser {
    Table,
    Id,
    FirebaseUid,
    Email,
    Name,
    LicenseNumber,
    CreatedAt,
    UpdatedAt,
}
