use sea_orm_migration::prelude::*;

mod m20251101_000001_create_businesses;
mod m20251101_000002_create_profiles;
mod m20251101_000003_create_notifications;
mod m20251101_000004_create_blog_posts;
mod m20251101_000005_create_appointments;
mod m20251101_000006_create_portfolio_items;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_create_businesses::Migration),
            Box::new(m20251101_000002_create_profiles::Migration),
            Box::new(m20251101_000003_create_notifications::Migration),
            Box::new(m20251101_000004_create_blog_posts::Migration),
            Box::new(m20251101_000005_create_appointments::Migration),
            Box::new(m20251101_000006_create_portfolio_items::Migration),
        ]
    }
}
