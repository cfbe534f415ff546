//! Server-side model types.
//!
//! Contains the shared application state passed to every handler and type aliases
//! for the SeaORM entity models backing the service.

pub mod app;
pub mod db;
