//! Utility functions and helpers for server operations.
//!
//! This module provides reusable utility functions for common server tasks, including
//! fine reference generation and time/date calculations used by day-level query
//! filters. These utilities are used across services and data repositories.

pub mod reference;
pub mod time;
