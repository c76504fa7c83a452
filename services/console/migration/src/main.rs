use sea_orm_migration::prelude::*;

use bizova_console_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
