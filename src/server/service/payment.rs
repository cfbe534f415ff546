use chrono::Utc;
use entity::sea_orm_active_enums::PaymentStatus;
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::{
    model::payment::{
        PaymentDto, PaymentListQuery, PaymentWithUserDto, RecordPaymentDto, UserPaymentsQuery,
    },
    server::{
        data::{fine::FineRepository, payment::PaymentRepository, user::UserRepository},
        error::{payment::PaymentError, Error},
        model::db::{PaymentModel, UserModel},
        service::user::UserService,
        util::time::day_bounds,
    },
};

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    /// Creates a new instance of [`PaymentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a payment gateway outcome against a fine
    ///
    /// Writes exactly one payment row and never touches the fine itself; the
    /// fine's transition to `paid` is a separate call the caller follows up
    /// with.
    pub async fn record(&self, dto: RecordPaymentDto) -> Result<PaymentDto, Error> {
        let fine_id = dto.fine_id.ok_or(PaymentError::MissingField("fineId"))?;
        let amount = dto.amount.ok_or(PaymentError::MissingField("amount"))?;
        if amount <= 0.0 {
            return Err(PaymentError::InvalidAmount.into());
        }
        let stripe_payment_intent_id = require_field(
            dto.stripe_payment_intent_id.as_deref(),
            "stripePaymentIntentId",
        )?;
        let status = match dto.status.as_deref() {
            Some(value) => parse_status(value)?,
            None => PaymentStatus::Succeeded,
        };

        let fine_repository = FineRepository::new(self.db);
        if fine_repository.get(fine_id).await?.is_none() {
            return Err(PaymentError::FineNotFound(fine_id).into());
        }

        let payer = self.resolve_payer(&dto).await?;
        let paid_at = dto.paid_at.unwrap_or_else(|| Utc::now().naive_utc());

        let payment_repository = PaymentRepository::new(self.db);
        let payment = payment_repository
            .create(
                fine_id,
                payer.id,
                amount,
                stripe_payment_intent_id,
                status,
                paid_at,
            )
            .await?;

        Ok(to_payment_dto(payment))
    }

    /// Finds the user a payment should attach to
    ///
    /// An explicit `userId` must exist. Otherwise the payer is resolved by
    /// license number or email; when neither matches, a placeholder account is
    /// synthesized from the email.
    async fn resolve_payer(&self, dto: &RecordPaymentDto) -> Result<UserModel, Error> {
        if let Some(user_id) = dto.user_id {
            let user_repository = UserRepository::new(self.db);
            return user_repository
                .get(user_id)
                .await?
                .ok_or_else(|| Error::from(PaymentError::UserNotFound(user_id)));
        }

        let user_service = UserService::new(self.db);
        if let Some(user) = user_service
            .resolve_owner(dto.license_number.as_deref(), dto.email.as_deref())
            .await?
        {
            return Ok(user);
        }

        match dto.email.as_deref() {
            Some(email) => {
                user_service
                    .get_or_create_placeholder(email, dto.license_number.as_deref())
                    .await
            }
            None => Err(PaymentError::PayerNotResolved.into()),
        }
    }

    /// Lists payments newest-first with each payer's identity
    ///
    /// `from` and `to` bound the listing to whole days, both inclusive.
    pub async fn list(&self, query: PaymentListQuery) -> Result<Vec<PaymentWithUserDto>, Error> {
        let paid_after = match query.from {
            Some(date) => Some(day_bounds(date)?.0),
            None => None,
        };
        let paid_before = match query.to {
            Some(date) => Some(day_bounds(date)?.1),
            None => None,
        };

        let payment_repository = PaymentRepository::new(self.db);
        let payments = payment_repository.list(paid_after, paid_before).await?;

        Ok(payments
            .into_iter()
            .map(|(payment, payer)| to_payment_with_user_dto(payment, payer))
            .collect())
    }

    /// Gets the payment recorded for a gateway payment intent
    pub async fn get_by_intent_id(
        &self,
        stripe_payment_intent_id: &str,
    ) -> Result<PaymentDto, Error> {
        let payment_repository = PaymentRepository::new(self.db);
        let payment = payment_repository
            .get_by_intent_id(stripe_payment_intent_id)
            .await?
            .ok_or_else(|| {
                PaymentError::IntentNotFound(stripe_payment_intent_id.to_string())
            })?;

        Ok(to_payment_dto(payment))
    }

    /// Lists a user's payment history newest-first
    ///
    /// The user is resolved by license number or email; an unknown user yields
    /// an empty list rather than an error.
    pub async fn list_for_user(&self, query: UserPaymentsQuery) -> Result<Vec<PaymentDto>, Error> {
        if query.email.is_none() && query.license_number.is_none() {
            return Err(PaymentError::MissingSearchCriteria.into());
        }

        let user_service = UserService::new(self.db);
        let user = match user_service
            .resolve_owner(query.license_number.as_deref(), query.email.as_deref())
            .await?
        {
            Some(user) => user,
            None => return Ok(Vec::new()),
        };

        let payment_repository = PaymentRepository::new(self.db);
        let payments = payment_repository.list_by_user(user.id).await?;

        Ok(payments.into_iter().map(to_payment_dto).collect())
    }
}

fn parse_status(value: &str) -> Result<PaymentStatus, PaymentError> {
    match value {
        "succeeded" => Ok(PaymentStatus::Succeeded),
        "failed" => Ok(PaymentStatus::Failed),
        other => Err(PaymentError::InvalidStatus(other.to_string())),
    }
}

pub(crate) fn to_payment_dto(payment: PaymentModel) -> PaymentDto {
    PaymentDto {
        id: payment.id,
        fine_id: payment.fine_id,
        user_id: payment.user_id,
        amount: payment.amount,
        stripe_payment_intent_id: payment.stripe_payment_intent_id,
        status: payment.status.to_value(),
        paid_at: payment.paid_at,
    }
}

fn to_payment_with_user_dto(payment: PaymentModel, payer: Option<UserModel>) -> PaymentWithUserDto {
    let (email, license_number) = match payer {
        Some(user) => (Some(user.email), user.license_number),
        None => (None, None),
    };

    PaymentWithUserDto {
        id: payment.id,
        fine_id: payment.fine_id,
        user_id: payment.user_id,
        email,
        license_number,
        amount: payment.amount,
        stripe_payment_intent_id: payment.stripe_payment_intent_id,
        status: payment.status.to_value(),
        paid_at: payment.paid_at,
    }
}

fn require_field<'b>(value: Option<&'b str>, name: &'static str) -> Result<&'b str, PaymentError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(PaymentError::MissingField(name)),
    }
}
