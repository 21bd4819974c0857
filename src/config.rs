//! Server configuration loaded from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATA_FILE: &str = "todos.json";

/// Runtime settings for the HTTP server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Address to bind (from TODO_API_HOST)
    pub host: IpAddr,
    /// Port to bind (from TODO_API_PORT)
    pub port: u16,
    /// Backing JSON file (from TODO_API_DATA_FILE)
    pub data_file: PathBuf,
    /// Allowed CORS origins (from TODO_API_CORS_ORIGINS, comma-separated).
    /// `None` allows any origin.
    pub cors_origins: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            cors_origins: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults for
    /// anything unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = lookup("TODO_API_HOST")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.host);

        let port = lookup("TODO_API_PORT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.port);

        let data_file = lookup("TODO_API_DATA_FILE")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_file);

        let cors_origins = lookup("TODO_API_CORS_ORIGINS").map(|s| {
            s.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        Self {
            host,
            port,
            data_file,
            cors_origins,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.addr().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn reads_all_variables() {
        let config = Config::from_lookup(lookup_from(&[
            ("TODO_API_HOST", "0.0.0.0"),
            ("TODO_API_PORT", "8080"),
            ("TODO_API_DATA_FILE", "/var/lib/todo/todos.json"),
            ("TODO_API_CORS_ORIGINS", "http://localhost:5173, https://example.com"),
        ]));

        assert_eq!(config.addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.data_file, PathBuf::from("/var/lib/todo/todos.json"));
        assert_eq!(
            config.cors_origins,
            Some(vec![
                "http://localhost:5173".to_string(),
                "https://example.com".to_string()
            ])
        );
    }

    #[test]
    fn unparsable_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("TODO_API_HOST", "not-an-ip"),
            ("TODO_API_PORT", "99999"),
            ("TODO_API_DATA_FILE", "  "),
        ]));

        assert_eq!(config, Config::default());
    }
}
