//! Payment fixture utilities.
//!
//! This module provides methods for inserting recorded payment outcomes into the
//! test database.

pub mod data;

use crate::TestContext;

impl TestContext {
    pub fn payment<'a>(&'a mut self) -> PaymentFixtures<'a> {
        PaymentFixtures { setup: self }
    }
}

pub struct PaymentFixtures<'a> {
    pub setup: &'a mut TestContext,
}
