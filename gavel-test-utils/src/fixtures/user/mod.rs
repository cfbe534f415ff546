//! User fixture utilities.
//!
//! This module provides methods for inserting motorist account records into the
//! test database, covering both registered and placeholder accounts.

pub mod data;

use crate::TestContext;

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    pub setup: &'a mut TestContext,
}
