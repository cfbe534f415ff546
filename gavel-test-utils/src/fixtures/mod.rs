//! Test fixture modules for database and HTTP mock creation.
//!
//! This module contains fixture utilities for creating test data and mock HTTP endpoints
//! during test execution (Phase 2 of the test architecture). Each submodule provides
//! specialized fixtures for different aspects of the system:
//!
//! - `auth` - ID tokens and identity provider JWKS endpoints
//! - `fine` - Traffic fine records in various lifecycle states
//! - `payment` - Recorded payment gateway outcomes
//! - `user` - Motorist accounts, registered and placeholder

pub mod auth;
pub mod fine;
pub mod payment;
pub mod user;
