//! Session types shared across Bizova crates.
//!
//! Provides session cookie builders and access-token validation.

pub mod cookie;
pub mod token;
