use anyhow::Context as _;
use sea_orm::Database;
use tracing::info;

use bizova_core::config::Config as _;
use bizova_core::tracing::init_tracing;

use bizova_console::config::ConsoleConfig;
use bizova_console::infra::gate::HttpSessionGate;
use bizova_console::infra::revalidate::HttpRevalidator;
use bizova_console::router::build_router;
use bizova_console::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ConsoleConfig::try_from_env()?;

    let db = Database::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .context("failed to build HTTP client")?;

    let state = AppState {
        db,
        gate: HttpSessionGate {
            client: client.clone(),
            base_url: config.gate_url,
            anon_key: config.gate_anon_key,
            service_key: config.gate_service_key,
            jwt_secret: config.jwt_secret,
        },
        revalidator: HttpRevalidator {
            client,
            url: config.revalidate_url,
            secret: config.revalidate_secret,
        },
        site_url: config.site_url,
        cookie_domain: config.cookie_domain,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.console_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("console service listening on {addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
