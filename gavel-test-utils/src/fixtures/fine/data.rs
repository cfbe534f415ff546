//! Fine database insertion utilities.
//!
//! This module provides methods for inserting traffic fine records into the test
//! database. Each inserted fine carries a freshly generated unique reference so
//! multiple fixtures never collide on the unique column.

use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::FineStatus;
use rand::Rng;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::TEST_LICENSE_NUMBER, error::TestError, fixtures::fine::FineFixtures,
    model::FineModel,
};

fn mock_reference() -> String {
    format!("FN-{:08X}", rand::rng().random::<u32>())
}

impl<'a> FineFixtures<'a> {
    /// Insert a mock fine into the database.
    ///
    /// Creates a GavelFine record owned by the given user with the given status and
    /// standard test values (license `TEST_LICENSE_NUMBER`, violation `Speeding`,
    /// amount 5000.0, issued now).
    ///
    /// # Arguments
    /// - `user_id` - The owning user's id
    /// - `status` - Lifecycle status for the fine
    ///
    /// # Returns
    /// - `Ok(FineModel)` - The created fine record
    /// - `Err(TestError::DbErr)` - Database insert operation failed
    pub async fn insert_mock_fine(
        &self,
        user_id: i32,
        status: FineStatus,
    ) -> Result<FineModel, TestError> {
        Ok(
            entity::prelude::GavelFine::insert(entity::gavel_fine::ActiveModel {
                reference: ActiveValue::Set(mock_reference()),
                user_id: ActiveValue::Set(user_id),
                license_number: ActiveValue::Set(TEST_LICENSE_NUMBER.to_string()),
                violation_type: ActiveValue::Set("Speeding".to_string()),
                amount: ActiveValue::Set(5000.0),
                status: ActiveValue::Set(status),
                issued_date: ActiveValue::Set(Utc::now().naive_utc()),
                dispute_reason: ActiveValue::Set(None),
                dispute_resolution_date: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a mock fine issued against a specific license number.
    ///
    /// Used by listing tests that filter on license number.
    ///
    /// # Arguments
    /// - `user_id` - The owning user's id
    /// - `license_number` - License number to issue the fine against
    /// - `status` - Lifecycle status for the fine
    ///
    /// # Returns
    /// - `Ok(FineModel)` - The created fine record
    /// - `Err(TestError::DbErr)` - Database insert operation failed
    pub async fn insert_mock_fine_for_license(
        &self,
        user_id: i32,
        license_number: &str,
        status: FineStatus,
    ) -> Result<FineModel, TestError> {
        Ok(
            entity::prelude::GavelFine::insert(entity::gavel_fine::ActiveModel {
                reference: ActiveValue::Set(mock_reference()),
                user_id: ActiveValue::Set(user_id),
                license_number: ActiveValue::Set(license_number.to_string()),
                violation_type: ActiveValue::Set("Speeding".to_string()),
                amount: ActiveValue::Set(5000.0),
                status: ActiveValue::Set(status),
                issued_date: ActiveValue::Set(Utc::now().naive_utc()),
                dispute_reason: ActiveValue::Set(None),
                dispute_resolution_date: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a mock pending fine issued at a specific time.
    ///
    /// Used by listing tests that filter on issue date or assert ordering.
    ///
    /// # Arguments
    /// - `user_id` - The owning user's id
    /// - `issued_date` - Issue timestamp for the fine
    ///
    /// # Returns
    /// - `Ok(FineModel)` - The created fine record
    /// - `Err(TestError::DbErr)` - Database insert operation failed
    pub async fn insert_mock_fine_issued_at(
        &self,
        user_id: i32,
        issued_date: NaiveDateTime,
    ) -> Result<FineModel, TestError> {
        Ok(
            entity::prelude::GavelFine::insert(entity::gavel_fine::ActiveModel {
                reference: ActiveValue::Set(mock_reference()),
                user_id: ActiveValue::Set(user_id),
                license_number: ActiveValue::Set(TEST_LICENSE_NUMBER.to_string()),
                violation_type: ActiveValue::Set("Speeding".to_string()),
                amount: ActiveValue::Set(5000.0),
                status: ActiveValue::Set(FineStatus::Pending),
                issued_date: ActiveValue::Set(issued_date),
                dispute_reason: ActiveValue::Set(None),
                dispute_resolution_date: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a mock disputed fine with the given dispute reason.
    ///
    /// Creates a GavelFine record already in `disputed` status, as left behind by a
    /// successful dispute filing.
    ///
    /// # Arguments
    /// - `user_id` - The owning user's id
    /// - `dispute_reason` - Reason recorded for the dispute
    ///
    /// # Returns
    /// - `Ok(FineModel)` - The created fine record
    /// - `Err(TestError::DbErr)` - Database insert operation failed
    pub async fn insert_mock_disputed_fine(
        &self,
        user_id: i32,
        dispute_reason: &str,
    ) -> Result<FineModel, TestError> {
        Ok(
            entity::prelude::GavelFine::insert(entity::gavel_fine::ActiveModel {
                reference: ActiveValue::Set(mock_reference()),
                user_id: ActiveValue::Set(user_id),
                license_number: ActiveValue::Set(TEST_LICENSE_NUMBER.to_string()),
                violation_type: ActiveValue::Set("Speeding".to_string()),
                amount: ActiveValue::Set(5000.0),
                status: ActiveValue::Set(FineStatus::Disputed),
                issued_date: ActiveValue::Set(Utc::now().naive_utc()),
                dispute_reason: ActiveValue::Set(Some(dispute_reason.to_string())),
                dispute_resolution_date: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
