//! Test utilities for Bizova services.
//!
//! Import from tests only, never from production code.

pub mod auth;
