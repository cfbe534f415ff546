//! Server application core modules.
//!
//! This module contains all server-side functionality for the Gavel application,
//! including HTTP routing, bearer token verification, database operations, and the
//! fine, payment, and user services. It provides the complete backend for issuing
//! fines, handling disputes, and recording payments.

pub mod auth;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
