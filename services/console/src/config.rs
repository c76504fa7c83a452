use serde::Deserialize;

/// Console service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct ConsoleConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3000). Env var: `CONSOLE_PORT`.
    #[serde(default = "default_console_port")]
    pub console_port: u16,
    /// Public origin of the dashboard; confirmation emails link back to
    /// `{site_url}/dashboard`.
    #[serde(default = "default_site_url")]
    pub site_url: String,
    /// Base URL of the auth backend.
    pub gate_url: String,
    pub gate_anon_key: String,
    /// Admin key, only used to delete identities when sign-up fails midway.
    pub gate_service_key: String,
    /// HS256 secret the gate signs access tokens with.
    pub jwt_secret: String,
    pub cookie_domain: String,
    /// Cache revalidation webhook. Signals are dropped when unset.
    #[serde(default)]
    pub revalidate_url: Option<String>,
    #[serde(default)]
    pub revalidate_secret: Option<String>,
}

impl bizova_core::config::Config for ConsoleConfig {}

fn default_console_port() -> u16 {
    3000
}

fn default_site_url() -> String {
    "http://localhost:3000".to_owned()
}
