use sea_orm::DatabaseConnection;

use crate::{
    model::user::{RegisterUserDto, UserDto},
    server::{
        data::user::UserRepository,
        error::{user::UserError, Error},
        model::db::UserModel,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers an identity provider account as a user
    ///
    /// Fails with [`UserError::AlreadyRegistered`] when a user already exists
    /// for the identity subject.
    pub async fn register(&self, dto: RegisterUserDto) -> Result<UserDto, Error> {
        let firebase_uid = require_field(dto.firebase_uid.as_deref(), "firebaseUid")?;
        let email = require_field(dto.email.as_deref(), "email")?;

        let user_repository = UserRepository::new(self.db);

        if user_repository
            .find_by_firebase_uid(firebase_uid)
            .await?
            .is_some()
        {
            return Err(UserError::AlreadyRegistered(firebase_uid.to_string()).into());
        }

        let user = user_repository
            .create(
                firebase_uid,
                email,
                dto.name.as_deref(),
                dto.license_number.as_deref(),
            )
            .await?;

        Ok(to_user_dto(user))
    }

    /// Finds the user a fine or payment should attach to
    ///
    /// Looks up by license number first, then by email.
    pub async fn resolve_owner(
        &self,
        license_number: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<UserModel>, Error> {
        let user_repository = UserRepository::new(self.db);

        if let Some(license_number) = license_number {
            if let Some(user) = user_repository
                .find_by_license_number(license_number)
                .await?
            {
                return Ok(Some(user));
            }
        }
        if let Some(email) = email {
            if let Some(user) = user_repository.find_by_email(email).await? {
                return Ok(Some(user));
            }
        }

        Ok(None)
    }

    /// Gets or creates the placeholder account for an email
    ///
    /// Placeholder identities are deterministic (`manual:` + lowercase email),
    /// so repeated admin actions for the same email reuse one account.
    pub async fn get_or_create_placeholder(
        &self,
        email: &str,
        license_number: Option<&str>,
    ) -> Result<UserModel, Error> {
        let user_repository = UserRepository::new(self.db);

        let firebase_uid = format!("manual:{}", email.to_lowercase());
        if let Some(user) = user_repository.find_by_firebase_uid(&firebase_uid).await? {
            return Ok(user);
        }

        let user = user_repository
            .create(&firebase_uid, email, None, license_number)
            .await?;

        tracing::info!("Created placeholder user {} for email {}", user.id, user.email);

        Ok(user)
    }
}

pub(crate) fn to_user_dto(user: UserModel) -> UserDto {
    UserDto {
        id: user.id,
        firebase_uid: user.firebase_uid,
        email: user.email,
        name: user.name,
        license_number: user.license_number,
        created_at: user.created_at,
        updated_at: user.updated_at,
    }
}

fn require_field<'b>(value: Option<&'b str>, name: &'static str) -> Result<&'b str, UserError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(UserError::MissingField(name)),
    }
}
