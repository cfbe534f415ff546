//! Bearer token verification against the external identity provider.
//!
//! Citizen-facing routes authenticate with RS256-signed ID tokens issued by the
//! identity provider. The [`TokenVerifier`] validates signature, expiry, issuer,
//! and audience against the provider's published JWKS document, caching keys
//! in-process and refetching once when an unknown key id appears so provider key
//! rotation is picked up without a restart.

use std::{collections::HashMap, sync::Arc};

use axum::http::{header::AUTHORIZATION, HeaderMap};
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::server::error::{auth::AuthError, Error};

/// Claims decoded from a verified ID token.
#[derive(Deserialize)]
pub struct IdentityClaims {
    /// Provider-assigned subject, stored as `firebase_uid` on user records.
    pub sub: String,
    pub email: Option<String>,
}

#[derive(Deserialize)]
struct JwksDocument {
    keys: Vec<JwksKey>,
}

#[derive(Deserialize)]
struct JwksKey {
    kid: String,
    kty: String,
    #[serde(default)]
    n: Option<String>,
    #[serde(default)]
    e: Option<String>,
}

/// Verifies provider-issued bearer tokens for authenticated routes.
#[derive(Clone)]
pub struct TokenVerifier {
    issuer: String,
    audience: String,
    jwks_url: String,
    http: reqwest::Client,
    keys: Arc<RwLock<HashMap<String, DecodingKey>>>,
}

impl TokenVerifier {
    /// Creates a new instance of [`TokenVerifier`]
    pub fn new(issuer: &str, audience: &str, jwks_url: &str) -> Self {
        Self {
            issuer: issuer.to_string(),
            audience: audience.to_string(),
            jwks_url: jwks_url.to_string(),
            http: reqwest::Client::new(),
            keys: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Verifies an ID token and returns its decoded claims.
    ///
    /// The token's `kid` header selects the RS256 key from the provider's JWKS.
    /// When the key id is not cached the key set is refetched once; a key id the
    /// provider does not publish fails with [`AuthError::UnknownKeyId`].
    pub async fn verify(&self, token: &str) -> Result<IdentityClaims, Error> {
        let header = decode_header(token).map_err(AuthError::TokenRejected)?;
        let kid = header.kid.ok_or(AuthError::MissingKeyId)?;

        let key = match self.cached_key(&kid).await {
            Some(key) => key,
            None => {
                self.refresh_keys().await?;
                self.cached_key(&kid)
                    .await
                    .ok_or(AuthError::UnknownKeyId(kid))?
            }
        };

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        let token_data =
            decode::<IdentityClaims>(token, &key, &validation).map_err(AuthError::TokenRejected)?;

        Ok(token_data.claims)
    }

    async fn cached_key(&self, kid: &str) -> Option<DecodingKey> {
        self.keys.read().await.get(kid).cloned()
    }

    /// Replaces the cached key set with the provider's current JWKS document.
    ///
    /// Non-RSA entries are skipped; providers commonly publish EC keys alongside
    /// the RS256 signing keys.
    async fn refresh_keys(&self) -> Result<(), Error> {
        let document: JwksDocument = self
            .http
            .get(&self.jwks_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let mut keys = self.keys.write().await;
        keys.clear();

        for key in document.keys {
            if key.kty != "RSA" {
                continue;
            }
            let (Some(n), Some(e)) = (&key.n, &key.e) else {
                continue;
            };

            match DecodingKey::from_rsa_components(n, e) {
                Ok(decoding_key) => {
                    keys.insert(key.kid, decoding_key);
                }
                Err(err) => {
                    tracing::warn!(kid = %key.kid, "Skipping malformed JWKS key: {}", err);
                }
            }
        }

        Ok(())
    }
}

/// Extracts the bearer token from an `Authorization` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(AuthError::MissingBearerToken)
}
