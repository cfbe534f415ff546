use sea_orm::DatabaseConnection;

use crate::server::{auth::TokenVerifier, config::Config, error::Error};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the verifier for bearer tokens issued by the identity provider
pub fn build_token_verifier(config: &Config) -> TokenVerifier {
    TokenVerifier::new(
        &config.identity_issuer,
        &config.identity_audience,
        &config.identity_jwks_url,
    )
}
