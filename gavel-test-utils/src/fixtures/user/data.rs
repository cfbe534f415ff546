//! User database insertion utilities.
//!
//! This module provides methods for inserting motorist account records into the test
//! database with standard test values.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_EMAIL, TEST_FIREBASE_UID, TEST_LICENSE_NUMBER},
    error::TestError,
    fixtures::user::UserFixtures,
    model::UserModel,
};

impl<'a> UserFixtures<'a> {
    /// Insert a mock user into the database.
    ///
    /// Creates a GavelUser record with the given identity fields and standard test
    /// values for the rest.
    ///
    /// # Arguments
    /// - `firebase_uid` - Identity-provider subject for the account
    /// - `email` - Account email address
    /// - `license_number` - Optional driver's license number
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The created user record
    /// - `Err(TestError::DbErr)` - Database insert operation failed
    pub async fn insert_mock_user(
        &self,
        firebase_uid: &str,
        email: &str,
        license_number: Option<&str>,
    ) -> Result<UserModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::GavelUser::insert(entity::gavel_user::ActiveModel {
                firebase_uid: ActiveValue::Set(firebase_uid.to_string()),
                email: ActiveValue::Set(email.to_string()),
                name: ActiveValue::Set(Some("Test Motorist".to_string())),
                license_number: ActiveValue::Set(license_number.map(str::to_string)),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert the default test motorist into the database.
    ///
    /// Creates a GavelUser record using the standard test constants
    /// (`TEST_FIREBASE_UID`, `TEST_EMAIL`, `TEST_LICENSE_NUMBER`).
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The created user record
    /// - `Err(TestError::DbErr)` - Database insert operation failed
    pub async fn insert_default_user(&self) -> Result<UserModel, TestError> {
        self.insert_mock_user(TEST_FIREBASE_UID, TEST_EMAIL, Some(TEST_LICENSE_NUMBER))
            .await
    }
}
