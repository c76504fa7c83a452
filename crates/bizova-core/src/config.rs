/// Loads service configuration from environment variables.
///
/// Implementors derive `serde::Deserialize`; field names map to upper-cased
/// env vars (`database_url` → `DATABASE_URL`). Use `#[serde(default = ..)]` for
/// optional settings.
pub trait Config: Sized + serde::de::DeserializeOwned {
    /// Load from the process environment, reporting the first missing or
    /// malformed variable.
    fn try_from_env() -> anyhow::Result<Self> {
        envy::from_env().map_err(|e| anyhow::anyhow!("invalid configuration: {e}"))
    }

    /// Load from an explicit list of pairs. Handy in tests.
    fn from_pairs<I>(pairs: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(pairs).map_err(|e| anyhow::anyhow!("invalid configuration: {e}"))
    }
}
