//! Domain types shared across Bizova crates.
//!
//! Pure types only, no framework dependencies. Import from `usecase/` and
//! `domain/` layers; never reach for sea-orm or axum from here.

pub mod account;
pub mod content;
pub mod id;
pub mod pagination;
