//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env
//! vars. Provides typed accessors for the handful of knobs the locator has
//! (catalog data directory, search shortlist limits) and helpers to expand
//! `~` and `${VAR}` in user-supplied paths.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::env;
use std::path::{Path, PathBuf};

/// Default shortlist length for the sidebar search box.
pub const DEFAULT_SEARCH_LIMIT: usize = 8;
/// Shortlist length for the travel-endpoint picker.
pub const TRAVEL_ENDPOINT_SEARCH_LIMIT: usize = 12;

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file("config.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_"));

        Ok(Self { figment })
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    /// Directory holding the GeoJSON catalog files.
    pub fn data_dir(&self) -> PathBuf {
        self.get::<String>("catalog.data_dir")
            .map(expand_path)
            .unwrap_or_else(|_| PathBuf::from("data"))
    }

    /// Search shortlist length; falls back to the sidebar default.
    pub fn search_limit(&self) -> usize {
        self.get("search.limit").unwrap_or(DEFAULT_SEARCH_LIMIT)
    }

    /// Shortlist length when searching for travel endpoints. Wider than the
    /// sidebar default so nearby alternatives stay visible in the picker.
    pub fn travel_search_limit(&self) -> usize {
        self.get("search.travel_limit")
            .unwrap_or(TRAVEL_ENDPOINT_SEARCH_LIMIT)
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after
/// expansion. Absolute paths are returned as-is.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() {
        p
    } else {
        base.join(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::providers::Serialized;

    fn config_from(figment: Figment) -> Config {
        Config { figment }
    }

    #[test]
    fn search_limits_fall_back_to_defaults() {
        let config = config_from(Figment::new());
        assert_eq!(config.search_limit(), DEFAULT_SEARCH_LIMIT);
        assert_eq!(config.travel_search_limit(), TRAVEL_ENDPOINT_SEARCH_LIMIT);
    }

    #[test]
    fn search_limits_read_configured_values() {
        let figment = Figment::new()
            .merge(Serialized::default("search.limit", 5usize))
            .merge(Serialized::default("search.travel_limit", 20usize));
        let config = config_from(figment);
        assert_eq!(config.search_limit(), 5);
        assert_eq!(config.travel_search_limit(), 20);
    }
}
