use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

use crate::desk::DEFAULT_RECENT_LIMIT;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 7860;

const APP_DIR: &str = "regulatory-summarizer";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub recent_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Try to load .env from multiple locations
        Self::try_load_dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source. Unset variables
    /// fall back to defaults; set but unparseable ones are an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let host = lookup("REGSUM_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(defaults.host);
        let port = parse_var(&lookup, "REGSUM_PORT")?.unwrap_or(defaults.port);
        let recent_limit =
            parse_var(&lookup, "REGSUM_RECENT_LIMIT")?.unwrap_or(defaults.recent_limit);

        Ok(Self {
            host,
            port,
            recent_limit,
        })
    }

    /// Address in `host:port` form, suitable for binding a listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn try_load_dotenv() {
        // 1. Current directory (for development)
        if dotenvy::dotenv().is_ok() {
            return;
        }

        // 2. ~/.config/regulatory-summarizer/.env
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join(APP_DIR).join(".env");
            if config_path.exists() && dotenvy::from_path(&config_path).is_ok() {
                return;
            }
        }

        // 3. ~/.env
        if let Some(home_dir) = dirs::home_dir() {
            let home_path = home_dir.join(".env");
            if home_path.exists() {
                let _ = dotenvy::from_path(&home_path);
            }
        }
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{} has an invalid value: {:?}", key, raw)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.bind_address(), "0.0.0.0:7860");
        assert_eq!(config.recent_limit, 5);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("REGSUM_HOST", "127.0.0.1"),
            ("REGSUM_PORT", "8080"),
            ("REGSUM_RECENT_LIMIT", " 10 "),
        ]))
        .unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.recent_limit, 10);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config =
            Config::from_lookup(lookup_from(&[("REGSUM_HOST", " "), ("REGSUM_PORT", "")]))
                .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn invalid_port_names_the_variable() {
        let err = Config::from_lookup(lookup_from(&[("REGSUM_PORT", "seventy")])).unwrap_err();
        assert!(err.to_string().contains("REGSUM_PORT"));
    }
}
