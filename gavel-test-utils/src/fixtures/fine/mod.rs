//! Fine fixture utilities.
//!
//! This module provides methods for inserting traffic fine records into the test
//! database in any lifecycle state.

pub mod data;

use crate::TestContext;

impl TestContext {
    pub fn fine<'a>(&'a mut self) -> FineFixtures<'a> {
        FineFixtures { setup: self }
    }
}

pub struct FineFixtures<'a> {
    pub setup: &'a mut TestContext,
}
