//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories provide an abstraction layer over database operations, organizing
//! data access by domain (users, fines, and payments).

pub mod fine;
pub mod payment;
pub mod user;
