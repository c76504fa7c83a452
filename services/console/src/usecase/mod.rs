pub mod account;
pub mod appointment;
pub mod blog;
pub mod notification;
pub mod onboarding;
pub mod portfolio;
pub mod provision;
pub mod saga;
pub mod session;
pub mod stats;
