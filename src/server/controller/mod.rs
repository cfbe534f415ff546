//! HTTP controller endpoints for the Gavel web API.
//!
//! This module contains Axum handlers for fine lifecycle management, payment
//! recording, and user registration. Controllers handle HTTP requests, hand the
//! parsed inputs to services, and map results to HTTP responses. Authenticated
//! routes verify provider-issued bearer tokens before touching any data. Every
//! handler carries a utoipa annotation for the OpenAPI document.

pub mod fine;
pub mod payment;
pub mod user;
