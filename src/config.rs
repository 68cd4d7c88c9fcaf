use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Clinic";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const ENV_DB_PATH: &str = "CLINIC_DB_PATH";
pub const ENV_BIND_ADDR: &str = "CLINIC_BIND_ADDR";
pub const ENV_STATIC_DIR: &str = "CLINIC_STATIC_DIR";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_STATIC_DIR: &str = "static";
const DB_FILE_NAME: &str = "clinic.db";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid bind address '{value}': {reason}")]
    InvalidBindAddr { value: String, reason: String },
    #[error("{name} must not be empty")]
    Empty { name: &'static str },
}

/// Runtime configuration read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from `CLINIC_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let db_path = match lookup(ENV_DB_PATH) {
            Some(v) => PathBuf::from(non_empty(ENV_DB_PATH, v)?),
            None => default_db_path(),
        };

        let bind_raw = lookup(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidBindAddr {
                value: bind_raw.clone(),
                reason: e.to_string(),
            })?;

        let static_dir = match lookup(ENV_STATIC_DIR) {
            Some(v) => PathBuf::from(non_empty(ENV_STATIC_DIR, v)?),
            None => PathBuf::from(DEFAULT_STATIC_DIR),
        };

        Ok(Self {
            db_path,
            bind_addr,
            static_dir,
        })
    }
}

fn non_empty(name: &'static str, value: String) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        Err(ConfigError::Empty { name })
    } else {
        Ok(value)
    }
}

/// Get the application data directory
/// ~/Clinic/ when a home directory is known, the working directory otherwise.
pub fn app_data_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(APP_NAME),
        None => PathBuf::from("."),
    }
}

/// Default database file inside the application data directory.
pub fn default_db_path() -> PathBuf {
    app_data_dir().join(DB_FILE_NAME)
}

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "clinic_lib=info,clinic=info,tower_http=warn"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_without_variables() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:5000");
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert!(config.db_path.ends_with("clinic.db"));
    }

    #[test]
    fn variables_override_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_DB_PATH, "/tmp/test.db"),
            (ENV_BIND_ADDR, "0.0.0.0:8080"),
            (ENV_STATIC_DIR, "/srv/clinic"),
        ]))
        .unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/test.db"));
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.static_dir, PathBuf::from("/srv/clinic"));
    }

    #[test]
    fn invalid_bind_addr_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[(ENV_BIND_ADDR, "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
    }

    #[test]
    fn empty_db_path_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[(ENV_DB_PATH, "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Empty { name: ENV_DB_PATH }));
    }

    #[test]
    fn app_data_dir_ends_with_app_name() {
        if dirs::home_dir().is_some() {
            assert!(app_data_dir().ends_with("Clinic"));
        }
    }
}
