//! Factory functions for minting identity provider test tokens.
//!
//! Provides pure functions for creating RS256-signed ID tokens and the JWKS document
//! that verifies them. Tokens are signed with an embedded RSA test keypair; the JWKS
//! modulus and exponent are derived from the public half at runtime.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use openssl::rsa::Rsa;
use serde::Serialize;

use crate::constant::{TEST_IDENTITY_AUDIENCE, TEST_IDENTITY_ISSUER, TEST_RSA_KEY_ID};

/// Claims minted into test ID tokens.
///
/// Field layout mirrors the provider-issued tokens the server verifies: issuer,
/// audience, subject, optional email, and the usual time claims. Fields are public
/// so tests can tamper with individual claims before minting.
#[derive(Serialize)]
pub struct IdentityTestClaims {
    pub iss: String,
    pub aud: String,
    pub sub: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub iat: i64,
    pub exp: i64,
}

/// Create mock ID token claims with default test values.
///
/// Returns claims with the standard test issuer and audience, issued now and
/// expiring in 15 minutes.
///
/// # Arguments
/// - `sub` - Identity provider subject to mint into the token
/// - `email` - Optional email claim
///
/// # Returns
/// - `IdentityTestClaims` - Claims object ready for `mint_id_token`
pub fn mock_identity_claims(sub: &str, email: Option<&str>) -> IdentityTestClaims {
    let now = Utc::now();
    IdentityTestClaims {
        iss: TEST_IDENTITY_ISSUER.to_string(),
        aud: TEST_IDENTITY_AUDIENCE.to_string(),
        sub: sub.to_string(),
        email: email.map(str::to_string),
        iat: now.timestamp(),
        exp: (now + chrono::Duration::seconds(900)).timestamp(),
    }
}

/// Mint an RS256-signed ID token for the given claims.
///
/// Signs with the embedded test private key and stamps `TEST_RSA_KEY_ID` into the
/// token header so verification matches the JWKS document.
pub fn mint_id_token(claims: &IdentityTestClaims) -> String {
    mint_id_token_with_kid(claims, TEST_RSA_KEY_ID)
}

/// Mint an RS256-signed ID token with an explicit key ID header.
///
/// Useful for exercising unknown-key and key-rotation paths.
pub fn mint_id_token_with_kid(claims: &IdentityTestClaims, kid: &str) -> String {
    let private_key = include_bytes!("./private_test_rsa_key.pem");
    let encoding_key =
        EncodingKey::from_rsa_pem(private_key).expect("Failed to create encoding key");

    let mut header = Header::new(Algorithm::RS256);
    header.kid = Some(kid.to_string());

    encode(&header, claims, &encoding_key).expect("Failed to encode token")
}

/// Mint an RS256-signed ID token whose header carries no key ID at all.
pub fn mint_id_token_without_kid(claims: &IdentityTestClaims) -> String {
    let private_key = include_bytes!("./private_test_rsa_key.pem");
    let encoding_key =
        EncodingKey::from_rsa_pem(private_key).expect("Failed to create encoding key");

    let header = Header::new(Algorithm::RS256);

    encode(&header, claims, &encoding_key).expect("Failed to encode token")
}

/// Build the JWKS document covering the embedded test keypair.
///
/// Derives the modulus and exponent from the public test key and encodes them the
/// way provider JWKS endpoints do.
pub fn mock_jwks_document() -> serde_json::Value {
    let public_key = include_bytes!("./public_test_rsa_key.pem");
    let rsa = Rsa::public_key_from_pem(public_key).unwrap();

    // Get the modulus and exponent as raw bytes which are used for the validation
    let n_bytes = rsa.n().to_vec();
    let e_bytes = rsa.e().to_vec();

    // Base64URL encode the modulus & exponent
    let n = URL_SAFE_NO_PAD.encode(n_bytes);
    let e = URL_SAFE_NO_PAD.encode(e_bytes);

    serde_json::json!({
        "keys": [
            {
                "kty": "RSA",
                "alg": "RS256",
                "use": "sig",
                "kid": TEST_RSA_KEY_ID,
                "n": n,
                "e": e,
            }
        ]
    })
}
