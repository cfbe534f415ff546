//! Payment database insertion utilities.
//!
//! This module provides methods for inserting payment records into the test database.
//! Each inserted payment carries a freshly generated unique gateway intent id.

use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::PaymentStatus;
use rand::Rng;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::payment::PaymentFixtures, model::PaymentModel};

fn mock_intent_id() -> String {
    format!("pi_{:08x}", rand::rng().random::<u32>())
}

impl<'a> PaymentFixtures<'a> {
    /// Insert a mock payment into the database.
    ///
    /// Creates a GavelPayment record linking the given fine and user with standard
    /// test values (amount 5000.0, status `succeeded`, paid now).
    ///
    /// # Arguments
    /// - `fine_id` - The fine the payment settles
    /// - `user_id` - The paying user's id
    ///
    /// # Returns
    /// - `Ok(PaymentModel)` - The created payment record
    /// - `Err(TestError::DbErr)` - Database insert operation failed
    pub async fn insert_mock_payment(
        &self,
        fine_id: i32,
        user_id: i32,
    ) -> Result<PaymentModel, TestError> {
        Ok(
            entity::prelude::GavelPayment::insert(entity::gavel_payment::ActiveModel {
                fine_id: ActiveValue::Set(fine_id),
                user_id: ActiveValue::Set(user_id),
                amount: ActiveValue::Set(5000.0),
                stripe_payment_intent_id: ActiveValue::Set(mock_intent_id()),
                status: ActiveValue::Set(PaymentStatus::Succeeded),
                paid_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a mock payment recorded at a specific time.
    ///
    /// Used by listing tests that filter on payment date or assert ordering.
    ///
    /// # Arguments
    /// - `fine_id` - The fine the payment settles
    /// - `user_id` - The paying user's id
    /// - `paid_at` - Payment timestamp
    ///
    /// # Returns
    /// - `Ok(PaymentModel)` - The created payment record
    /// - `Err(TestError::DbErr)` - Database insert operation failed
    pub async fn insert_mock_payment_paid_at(
        &self,
        fine_id: i32,
        user_id: i32,
        paid_at: NaiveDateTime,
    ) -> Result<PaymentModel, TestError> {
        Ok(
            entity::prelude::GavelPayment::insert(entity::gavel_payment::ActiveModel {
                fine_id: ActiveValue::Set(fine_id),
                user_id: ActiveValue::Set(user_id),
                amount: ActiveValue::Set(5000.0),
                stripe_payment_intent_id: ActiveValue::Set(mock_intent_id()),
                status: ActiveValue::Set(PaymentStatus::Succeeded),
                paid_at: ActiveValue::Set(paid_at),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
