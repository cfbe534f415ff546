use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    ///
    /// Emails are stored lowercase so lookups stay case-insensitive.
    pub async fn create(
        &self,
        firebase_uid: &str,
        email: &str,
        name: Option<&str>,
        license_number: Option<&str>,
    ) -> Result<entity::gavel_user::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let user = entity::gavel_user::ActiveModel {
            firebase_uid: ActiveValue::Set(firebase_uid.to_string()),
            email: ActiveValue::Set(email.to_lowercase()),
            name: ActiveValue::Set(name.map(str::to_string)),
            license_number: ActiveValue::Set(license_number.map(str::to_string)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::gavel_user::Model>, DbErr> {
        entity::prelude::GavelUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Gets a user using their identity provider subject
    pub async fn find_by_firebase_uid(
        &self,
        firebase_uid: &str,
    ) -> Result<Option<entity::gavel_user::Model>, DbErr> {
        entity::prelude::GavelUser::find()
            .filter(entity::gavel_user::Column::FirebaseUid.eq(firebase_uid))
            .one(self.db)
            .await
    }

    /// Gets a user by email, matching case-insensitively against the stored
    /// lowercase form
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::gavel_user::Model>, DbErr> {
        entity::prelude::GavelUser::find()
            .filter(entity::gavel_user::Column::Email.eq(email.to_lowercase()))
            .one(self.db)
            .await
    }

    pub async fn find_by_license_number(
        &self,
        license_number: &str,
    ) -> Result<Option<entity::gavel_user::Model>, DbErr> {
        entity::prelude::GavelUser::find()
            .filter(entity::gavel_user::Column::LicenseNumber.eq(license_number))
            .one(self.db)
            .await
    }
}
