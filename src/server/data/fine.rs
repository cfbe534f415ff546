use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::FineStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::util::reference::generate_fine_reference;

pub struct FineRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FineRepository<'a, C> {
    /// Creates a new instance of [`FineRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new fine with a freshly generated reference, stamping the
    /// issue date
    pub async fn create(
        &self,
        user_id: i32,
        license_number: &str,
        violation_type: &str,
        amount: f64,
        status: FineStatus,
    ) -> Result<entity::gavel_fine::Model, DbErr> {
        let fine = entity::gavel_fine::ActiveModel {
            reference: ActiveValue::Set(generate_fine_reference()),
            user_id: ActiveValue::Set(user_id),
            license_number: ActiveValue::Set(license_number.to_string()),
            violation_type: ActiveValue::Set(violation_type.to_string()),
            amount: ActiveValue::Set(amount),
            status: ActiveValue::Set(status),
            issued_date: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        fine.insert(self.db).await
    }

    pub async fn get(&self, fine_id: i32) -> Result<Option<entity::gavel_fine::Model>, DbErr> {
        entity::prelude::GavelFine::find_by_id(fine_id)
            .one(self.db)
            .await
    }

    /// Lists fines newest-first with each owner row, applying any provided
    /// filters
    ///
    /// `issued_between` is a half-open `[start, end)` window on `issued_date`.
    pub async fn list(
        &self,
        status: Option<FineStatus>,
        license_number: Option<&str>,
        issued_between: Option<(NaiveDateTime, NaiveDateTime)>,
    ) -> Result<Vec<(entity::gavel_fine::Model, Option<entity::gavel_user::Model>)>, DbErr> {
        let mut query =
            entity::prelude::GavelFine::find().find_also_related(entity::gavel_user::Entity);

        if let Some(status) = status {
            query = query.filter(entity::gavel_fine::Column::Status.eq(status));
        }
        if let Some(license_number) = license_number {
            query = query.filter(entity::gavel_fine::Column::LicenseNumber.eq(license_number));
        }
        if let Some((start, end)) = issued_between {
            query = query
                .filter(entity::gavel_fine::Column::IssuedDate.gte(start))
                .filter(entity::gavel_fine::Column::IssuedDate.lt(end));
        }

        query
            .order_by_desc(entity::gavel_fine::Column::IssuedDate)
            .all(self.db)
            .await
    }

    /// Gets all fines owned by the provided user ID, newest-first
    pub async fn list_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::gavel_fine::Model>, DbErr> {
        entity::prelude::GavelFine::find()
            .filter(entity::gavel_fine::Column::UserId.eq(user_id))
            .order_by_desc(entity::gavel_fine::Column::IssuedDate)
            .all(self.db)
            .await
    }

    /// Marks a fine disputed and stores the motorist's reason
    pub async fn set_disputed(
        &self,
        fine: entity::gavel_fine::Model,
        dispute_reason: &str,
    ) -> Result<entity::gavel_fine::Model, DbErr> {
        let mut fine_am = fine.into_active_model();
        fine_am.status = ActiveValue::Set(FineStatus::Disputed);
        fine_am.dispute_reason = ActiveValue::Set(Some(dispute_reason.to_string()));

        fine_am.update(self.db).await
    }

    /// Moves a disputed fine to its post-resolution status and stamps the
    /// resolution date
    pub async fn set_dispute_resolved(
        &self,
        fine: entity::gavel_fine::Model,
        status: FineStatus,
    ) -> Result<entity::gavel_fine::Model, DbErr> {
        let mut fine_am = fine.into_active_model();
        fine_am.status = ActiveValue::Set(status);
        fine_am.dispute_resolution_date = ActiveValue::Set(Some(Utc::now().naive_utc()));

        fine_am.update(self.db).await
    }

    pub async fn set_paid(
        &self,
        fine: entity::gavel_fine::Model,
    ) -> Result<entity::gavel_fine::Model, DbErr> {
        let mut fine_am = fine.into_active_model();
        fine_am.status = ActiveValue::Set(FineStatus::Paid);

        fine_am.update(self.db).await
    }

    /// Overrides a fine's status without state machine checks
    ///
    /// Moving to `disputed` clears the resolution date, moving to `paid` or
    /// `cancelled` stamps it, and moving to `pending` leaves it untouched.
    pub async fn override_status(
        &self,
        fine: entity::gavel_fine::Model,
        status: FineStatus,
    ) -> Result<entity::gavel_fine::Model, DbErr> {
        let mut fine_am = fine.into_active_model();
        match status {
            FineStatus::Disputed => {
                fine_am.dispute_resolution_date = ActiveValue::Set(None);
            }
            FineStatus::Paid | FineStatus::Cancelled => {
                fine_am.dispute_resolution_date = ActiveValue::Set(Some(Utc::now().naive_utc()));
            }
            FineStatus::Pending => {}
        }
        fine_am.status = ActiveValue::Set(status);

        fine_am.update(self.db).await
    }

    /// Deletes a fine
    ///
    /// Returns OK regardless of the fine existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, fine_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::GavelFine::delete_by_id(fine_id)
            .exec(self.db)
            .await
    }
}
