//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application. These aliases simplify type signatures and provide a single
//! point of reference for database model types, making it easier to work with entities
//! without importing from the generated `entity` crate directly.

/// Type alias for the traffic fine database model.
///
/// Represents a single issued fine, its lifecycle status, and any dispute attached to it.
/// Each fine belongs to exactly one user; payments reference fines through
/// `PaymentModel::fine_id`.
///
/// # Fields (from `entity::gavel_fine::Model`)
/// - `id` - Primary key, unique fine identifier
/// - `reference` - Human-facing fine reference (unique, `FN-XXXXXXXX`)
/// - `user_id` - Foreign key to the owning user
/// - `license_number` - License number the fine was issued against
/// - `violation_type` - Description of the violation
/// - `amount` - Fine amount
/// - `status` - Lifecycle status (pending, paid, disputed, cancelled)
/// - `issued_date` - Timestamp when the fine was issued
/// - `dispute_reason` - Motorist's dispute reason (nullable)
/// - `dispute_resolution_date` - Timestamp when a dispute was resolved (nullable)
pub type FineModel = entity::gavel_fine::Model;

/// Type alias for the payment database model.
///
/// Represents a recorded payment gateway outcome for a fine. Recording a payment never
/// changes the fine itself; marking a fine paid is a separate operation.
///
/// # Fields (from `entity::gavel_payment::Model`)
/// - `id` - Primary key, unique payment identifier
/// - `fine_id` - Foreign key to the fine being paid
/// - `user_id` - Foreign key to the paying user
/// - `amount` - Amount paid
/// - `stripe_payment_intent_id` - External gateway transaction id (unique)
/// - `status` - Gateway outcome (succeeded, failed)
/// - `paid_at` - Timestamp of the payment
pub type PaymentModel = entity::gavel_payment::Model;

/// Type alias for the user database model.
///
/// Represents a motorist account. Accounts are either registered through the identity
/// provider or synthesized as placeholders when an administrator records a fine or
/// payment for someone without an account.
///
/// # Fields (from `entity::gavel_user::Model`)
/// - `id` - Primary key, unique user identifier
/// - `firebase_uid` - Identity-provider subject, or `manual:<email>` for placeholders (unique)
/// - `email` - Contact email (stored lowercase)
/// - `name` - Display name (nullable)
/// - `license_number` - Driver's license number (nullable)
/// - `created_at` - Timestamp when the account was created
/// - `updated_at` - Timestamp of the last account update
pub type UserModel = entity::gavel_user::Model;
