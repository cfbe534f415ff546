//! Identity provider HTTP mock endpoint creation utilities.
//!
//! This module provides methods for creating mock HTTP endpoints that simulate the
//! identity provider's JWKS endpoint, registered with the mockito server so token
//! verification during tests resolves keys against the embedded test keypair.

use mockito::Mock;

use crate::fixtures::auth::{factory, AuthFixtures};

impl<'a> AuthFixtures<'a> {
    /// Create a mock JWKS endpoint on the test server.
    ///
    /// Serves the embedded test public key at GET `/jwks` in JWKS format. The mock
    /// verifies it was called exactly `expected_requests` times.
    ///
    /// # Arguments
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint that will be automatically verified
    pub fn create_jwks_endpoint(&mut self, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", "/jwks")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(factory::mock_jwks_document().to_string())
            .expect(expected_requests)
            .create()
    }
}
