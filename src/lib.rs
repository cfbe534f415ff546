//! Gavel is a traffic fine management service for municipal traffic
//! departments. It exposes an HTTP API for issuing fines, handling disputes,
//! collecting payments, and registering motorists.

pub mod model;
pub mod server;
