use sea_orm::DatabaseConnection;

use crate::server::auth::TokenVerifier;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub verifier: TokenVerifier,
}
