//! Injected configuration: credential, endpoints, and search tuning.
//!
//! Loaded once at startup from an optional `helmer.toml` overlaid with
//! `HELMER_*` environment variables. The TMDB credential is never
//! hard-coded and never printed.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::providers::{TMDB_API_BASE, TMDB_IMAGE_BASE};

pub use config::ConfigError;

/// The TMDB credential. `Debug` output is redacted so the key cannot leak
/// into logs.
#[derive(Clone, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(raw: impl Into<String>) -> Self {
        ApiKey(raw.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// How the credential is attached to outbound requests. Both forms are
/// accepted by the upstream service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// `api_key` query-string parameter (v3 key).
    #[default]
    Query,
    /// `Authorization: Bearer` header (v4 read token).
    Bearer,
}

/// Tuning for the incremental search controller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before a lookup fires.
    pub debounce_ms: u64,
    /// Trimmed queries shorter than this never hit the network.
    pub min_query_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            min_query_chars: 2,
        }
    }
}

impl SearchConfig {
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Process-wide configuration, read once at startup and injected where
/// needed.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api_key: ApiKey,
    pub auth_mode: AuthMode,
    pub api_base: Url,
    pub image_base: Url,
    pub language: String,
    pub search: SearchConfig,
}

impl Config {
    /// Load configuration from `helmer.toml` (optional) overlaid with
    /// `HELMER_*` environment variables (e.g. `HELMER_API_KEY`,
    /// `HELMER_SEARCH__DEBOUNCE_MS`).
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(config::File::with_name("helmer").required(false))
    }

    /// Load with an explicit file source; the environment still wins.
    pub fn load_from(
        file: config::File<config::FileSourceFile, config::FileFormat>,
    ) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .set_default("auth_mode", "query")?
            .set_default("api_base", TMDB_API_BASE)?
            .set_default("image_base", TMDB_IMAGE_BASE)?
            .set_default("language", "en-US")?
            .set_default("search.debounce_ms", 300)?
            .set_default("search.min_query_chars", 2)?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("HELMER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::new("super-secret-credential");
        let printed = format!("{key:?}");
        assert!(!printed.contains("super-secret-credential"));
        assert_eq!(key.expose(), "super-secret-credential");
    }

    #[test]
    fn search_defaults_match_contract() {
        let search = SearchConfig::default();
        assert_eq!(search.debounce(), Duration::from_millis(300));
        assert_eq!(search.min_query_chars, 2);
    }

    // Exercises both env forms in one test: a top-level key with a single
    // underscore after the prefix and a nested key with the double-underscore
    // separator. One test so the process-global variables are not touched
    // concurrently.
    #[test]
    fn environment_variables_supply_and_override_values() {
        unsafe {
            std::env::set_var("HELMER_API_KEY", "env-credential");
            std::env::set_var("HELMER_SEARCH__DEBOUNCE_MS", "450");
        }

        let loaded = Config::load();

        unsafe {
            std::env::remove_var("HELMER_API_KEY");
            std::env::remove_var("HELMER_SEARCH__DEBOUNCE_MS");
        }

        let config = loaded.unwrap();
        assert_eq!(config.api_key.expose(), "env-credential");
        assert_eq!(config.search.debounce(), Duration::from_millis(450));
        // Untouched keys keep their defaults.
        assert_eq!(config.auth_mode, AuthMode::Query);
        assert_eq!(config.search.min_query_chars, 2);
    }
}
