use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::PaymentStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct PaymentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    /// Creates a new instance of [`PaymentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a payment against a fine
    pub async fn create(
        &self,
        fine_id: i32,
        user_id: i32,
        amount: f64,
        stripe_payment_intent_id: &str,
        status: PaymentStatus,
        paid_at: NaiveDateTime,
    ) -> Result<entity::gavel_payment::Model, DbErr> {
        let payment = entity::gavel_payment::ActiveModel {
            fine_id: ActiveValue::Set(fine_id),
            user_id: ActiveValue::Set(user_id),
            amount: ActiveValue::Set(amount),
            stripe_payment_intent_id: ActiveValue::Set(stripe_payment_intent_id.to_string()),
            status: ActiveValue::Set(status),
            paid_at: ActiveValue::Set(paid_at),
            ..Default::default()
        };

        payment.insert(self.db).await
    }

    /// Gets a payment using the gateway's payment intent id
    pub async fn get_by_intent_id(
        &self,
        stripe_payment_intent_id: &str,
    ) -> Result<Option<entity::gavel_payment::Model>, DbErr> {
        entity::prelude::GavelPayment::find()
            .filter(
                entity::gavel_payment::Column::StripePaymentIntentId.eq(stripe_payment_intent_id),
            )
            .one(self.db)
            .await
    }

    /// Lists payments newest-first with each payer row
    ///
    /// `paid_after` and `paid_before` bound `paid_at` to the half-open window
    /// `[paid_after, paid_before)` when provided.
    pub async fn list(
        &self,
        paid_after: Option<NaiveDateTime>,
        paid_before: Option<NaiveDateTime>,
    ) -> Result<Vec<(entity::gavel_payment::Model, Option<entity::gavel_user::Model>)>, DbErr>
    {
        let mut query =
            entity::prelude::GavelPayment::find().find_also_related(entity::gavel_user::Entity);

        if let Some(start) = paid_after {
            query = query.filter(entity::gavel_payment::Column::PaidAt.gte(start));
        }
        if let Some(end) = paid_before {
            query = query.filter(entity::gavel_payment::Column::PaidAt.lt(end));
        }

        query
            .order_by_desc(entity::gavel_payment::Column::PaidAt)
            .all(self.db)
            .await
    }

    /// Gets all payments made by the provided user ID, newest-first
    pub async fn list_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::gavel_payment::Model>, DbErr> {
        entity::prelude::GavelPayment::find()
            .filter(entity::gavel_payment::Column::UserId.eq(user_id))
            .order_by_desc(entity::gavel_payment::Column::PaidAt)
            .all(self.db)
            .await
    }
}
