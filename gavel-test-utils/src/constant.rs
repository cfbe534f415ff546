//! Test configuration constants for identity provider setup.
//!
//! This module defines standard constant values used across all tests for token
//! verification configuration. These values are not real credentials but placeholder
//! values for testing purposes.

/// Issuer claim expected on test ID tokens.
///
/// Placeholder issuer URL matching the value minted into test tokens. Not a real provider.
pub static TEST_IDENTITY_ISSUER: &str = "https://identity.example.com/gavel-test";

/// Audience claim expected on test ID tokens.
///
/// Placeholder audience (project identifier) matching the value minted into test tokens.
pub static TEST_IDENTITY_AUDIENCE: &str = "gavel-test";

/// Key ID published in the test JWKS document and stamped on minted tokens.
pub static TEST_RSA_KEY_ID: &str = "test-signing-key-1";

/// Identity-provider subject used for the default test motorist.
pub static TEST_FIREBASE_UID: &str = "firebase-uid-0001";

/// Email address used for the default test motorist.
pub static TEST_EMAIL: &str = "motorist@example.com";

/// License number used for the default test motorist.
pub static TEST_LICENSE_NUMBER: &str = "ABC1234";
