//! Database model type aliases for test utilities.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the test utilities. These aliases match those in the main gavel crate
//! to ensure consistency across tests.

/// Type alias for the traffic fine database model.
pub type FineModel = entity::gavel_fine::Model;

/// Type alias for the payment database model.
pub type PaymentModel = entity::gavel_payment::Model;

/// Type alias for the user database model.
pub type UserModel = entity::gavel_user::Model;
