//! sea-orm entities for the tables the console service owns.

pub mod appointments;
pub mod blog_posts;
pub mod businesses;
pub mod notifications;
pub mod portfolio_items;
pub mod profiles;
