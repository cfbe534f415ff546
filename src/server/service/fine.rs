use entity::sea_orm_active_enums::FineStatus;
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::{
    model::fine::{
        CreateFineDto, DisputeFineDto, FineDto, FineListQuery, FineWithOwnerDto, PayFineDto,
        ResolveDisputeDto, UpdateFineStatusDto,
    },
    server::{
        data::{fine::FineRepository, user::UserRepository},
        error::{auth::AuthError, fine::FineError, Error},
        model::db::{FineModel, UserModel},
        service::user::UserService,
        util::time::day_bounds,
    },
};

pub struct FineService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FineService<'a> {
    /// Creates a new instance of [`FineService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Issues a new fine against a license holder
    ///
    /// The owner is resolved by license number, then by email; when neither
    /// matches, a placeholder user is synthesized from the email. Without an
    /// email the fine is refused rather than left unowned.
    pub async fn create(&self, dto: CreateFineDto) -> Result<FineDto, Error> {
        let license_number = require_field(dto.license_number.as_deref(), "licenseNumber")?;
        let violation_type = require_field(dto.violation_type.as_deref(), "violationType")?;
        let amount = dto.amount.ok_or(FineError::MissingField("amount"))?;
        if amount <= 0.0 {
            return Err(FineError::InvalidAmount.into());
        }
        let status = match dto.status.as_deref() {
            Some(value) => parse_status(value)?,
            None => FineStatus::Pending,
        };

        let user_service = UserService::new(self.db);
        let owner = match user_service
            .resolve_owner(Some(license_number), dto.email.as_deref())
            .await?
        {
            Some(user) => user,
            None => match dto.email.as_deref() {
                Some(email) => {
                    user_service
                        .get_or_create_placeholder(email, Some(license_number))
                        .await?
                }
                None => {
                    return Err(FineError::OwnerNotFound {
                        license_number: license_number.to_string(),
                    }
                    .into())
                }
            },
        };

        let fine_repository = FineRepository::new(self.db);
        let fine = fine_repository
            .create(owner.id, license_number, violation_type, amount, status)
            .await?;

        Ok(to_fine_dto(fine))
    }

    /// Files a dispute against a pending fine
    pub async fn dispute(&self, dto: DisputeFineDto) -> Result<FineDto, Error> {
        let fine_id = dto.fine_id.ok_or(FineError::MissingField("fineId"))?;
        let dispute_reason = require_field(dto.dispute_reason.as_deref(), "disputeReason")?;

        let fine_repository = FineRepository::new(self.db);
        let fine = fine_repository
            .get(fine_id)
            .await?
            .ok_or(FineError::NotFound(fine_id))?;

        if fine.status != FineStatus::Pending {
            return Err(FineError::NotDisputable {
                fine_id,
                status: fine.status.to_value(),
            }
            .into());
        }

        let fine = fine_repository.set_disputed(fine, dispute_reason).await?;

        Ok(to_fine_dto(fine))
    }

    /// Resolves a disputed fine
    ///
    /// `keep` rejects the dispute and reinstates the fine as `pending`;
    /// `remove` accepts it and cancels the fine. Both stamp the resolution
    /// date.
    pub async fn resolve_dispute(&self, dto: ResolveDisputeDto) -> Result<FineDto, Error> {
        let fine_id = dto.fine_id.ok_or(FineError::MissingField("fineId"))?;
        let action = require_field(dto.action.as_deref(), "action")?;
        let target = match action {
            "keep" => FineStatus::Pending,
            "remove" => FineStatus::Cancelled,
            other => return Err(FineError::InvalidAction(other.to_string()).into()),
        };

        let fine_repository = FineRepository::new(self.db);
        let fine = fine_repository
            .get(fine_id)
            .await?
            .ok_or(FineError::NotFound(fine_id))?;

        if fine.status != FineStatus::Disputed {
            return Err(FineError::NotDisputed { fine_id }.into());
        }

        let fine = fine_repository.set_dispute_resolved(fine, target).await?;

        Ok(to_fine_dto(fine))
    }

    /// Overrides a fine's status without state machine checks
    ///
    /// Every override is logged with the old and new status.
    pub async fn update_status(&self, dto: UpdateFineStatusDto) -> Result<FineDto, Error> {
        let fine_id = dto.fine_id.ok_or(FineError::MissingField("fineId"))?;
        let status = parse_status(require_field(dto.status.as_deref(), "status")?)?;

        let fine_repository = FineRepository::new(self.db);
        let fine = fine_repository
            .get(fine_id)
            .await?
            .ok_or(FineError::NotFound(fine_id))?;

        let old_status = fine.status.to_value();
        let fine = fine_repository.override_status(fine, status).await?;

        tracing::info!(
            "Fine {} status overridden: {} -> {}",
            fine.id,
            old_status,
            fine.status.to_value()
        );

        Ok(to_fine_dto(fine))
    }

    /// Marks a pending fine as paid on behalf of its owner
    ///
    /// The caller's identity subject must resolve to the user owning the fine.
    pub async fn pay(&self, firebase_uid: &str, dto: PayFineDto) -> Result<FineDto, Error> {
        let fine_id = dto.fine_id.ok_or(FineError::MissingField("fineId"))?;

        let fine_repository = FineRepository::new(self.db);
        let fine = fine_repository
            .get(fine_id)
            .await?
            .ok_or(FineError::NotFound(fine_id))?;

        let user_repository = UserRepository::new(self.db);
        let caller = user_repository.find_by_firebase_uid(firebase_uid).await?;
        if caller.map(|user| user.id) != Some(fine.user_id) {
            return Err(AuthError::FineNotOwned { fine_id }.into());
        }

        if fine.status != FineStatus::Pending {
            return Err(FineError::NotPayable {
                fine_id,
                status: fine.status.to_value(),
            }
            .into());
        }

        let fine = fine_repository.set_paid(fine).await?;

        Ok(to_fine_dto(fine))
    }

    /// Lists fines newest-first with each owner's email
    pub async fn list(&self, query: FineListQuery) -> Result<Vec<FineWithOwnerDto>, Error> {
        let status = match query.status.as_deref() {
            Some(value) => Some(parse_status(value)?),
            None => None,
        };
        let issued_between = match query.date {
            Some(date) => Some(day_bounds(date)?),
            None => None,
        };

        let fine_repository = FineRepository::new(self.db);
        let fines = fine_repository
            .list(status, query.license_number.as_deref(), issued_between)
            .await?;

        Ok(fines
            .into_iter()
            .map(|(fine, owner)| to_fine_with_owner_dto(fine, owner))
            .collect())
    }

    /// Lists the authenticated caller's fines newest-first
    ///
    /// A verified caller with no user record gets an empty list.
    pub async fn list_for_caller(&self, firebase_uid: &str) -> Result<Vec<FineDto>, Error> {
        let user_repository = UserRepository::new(self.db);
        let user = match user_repository.find_by_firebase_uid(firebase_uid).await? {
            Some(user) => user,
            None => return Ok(Vec::new()),
        };

        let fine_repository = FineRepository::new(self.db);
        let fines = fine_repository.list_by_user(user.id).await?;

        Ok(fines.into_iter().map(to_fine_dto).collect())
    }

    /// Deletes a fine permanently
    pub async fn delete(&self, fine_id: i32) -> Result<(), Error> {
        let fine_repository = FineRepository::new(self.db);
        let result = fine_repository.delete(fine_id).await?;

        if result.rows_affected == 0 {
            return Err(FineError::NotFound(fine_id).into());
        }

        Ok(())
    }
}

fn parse_status(value: &str) -> Result<FineStatus, FineError> {
    match value {
        "pending" => Ok(FineStatus::Pending),
        "paid" => Ok(FineStatus::Paid),
        "disputed" => Ok(FineStatus::Disputed),
        "cancelled" => Ok(FineStatus::Cancelled),
        other => Err(FineError::InvalidStatus(other.to_string())),
    }
}

pub(crate) fn to_fine_dto(fine: FineModel) -> FineDto {
    FineDto {
        id: fine.id,
        reference: fine.reference,
        user_id: fine.user_id,
        license_number: fine.license_number,
        violation_type: fine.violation_type,
        amount: fine.amount,
        status: fine.status.to_value(),
        issued_date: fine.issued_date,
        dispute_reason: fine.dispute_reason,
        dispute_resolution_date: fine.dispute_resolution_date,
    }
}

fn to_fine_with_owner_dto(fine: FineModel, owner: Option<UserModel>) -> FineWithOwnerDto {
    FineWithOwnerDto {
        id: fine.id,
        reference: fine.reference,
        user_id: fine.user_id,
        email: owner
            .map(|user| user.email)
            .unwrap_or_else(|| "Unknown".to_string()),
        license_number: fine.license_number,
        violation_type: fine.violation_type,
        amount: fine.amount,
        status: fine.status.to_value(),
        issued_date: fine.issued_date,
        dispute_reason: fine.dispute_reason,
        dispute_resolution_date: fine.dispute_resolution_date,
    }
}

fn require_field<'b>(value: Option<&'b str>, name: &'static str) -> Result<&'b str, FineError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(FineError::MissingField(name)),
    }
}
