//! Identity provider fixture utilities.
//!
//! This module provides ID token minting and mock JWKS endpoint creation for
//! exercising bearer-token verification against the test server.

pub mod factory;
pub mod mockito;

use crate::TestContext;

impl TestContext {
    pub fn auth<'a>(&'a mut self) -> AuthFixtures<'a> {
        AuthFixtures { setup: self }
    }
}

pub struct AuthFixtures<'a> {
    pub setup: &'a mut TestContext,
}
