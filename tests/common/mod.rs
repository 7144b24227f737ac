//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Test configuration and servers backed by in-memory databases
//! - Authentication test helpers
//! - Response assertions

pub mod assertions;
pub mod auth_helpers;
pub mod database;

// Re-export commonly used utilities
pub use assertions::*;
pub use auth_helpers::*;
pub use database::*;
