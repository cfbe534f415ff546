//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that implements business logic and
//! coordinates between repositories. Services include fine lifecycle management,
//! payment recording, and user registration.

pub mod fine;
pub mod payment;
pub mod user;
