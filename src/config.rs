//! Runtime configuration, read from the environment (and `.env`).

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use crate::reservations::storage::is_valid_key;
use crate::reservations::{
    FileStorage, MemoryStorage, ReservationStore, StorageError, DEFAULT_STORAGE_KEY,
};

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value:?}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} must be \"memory\" or \"file\", got {value:?}")]
    InvalidBackend { var: &'static str, value: String },

    #[error("{var} must be non-empty and only contain [A-Za-z0-9_-], got {value:?}")]
    InvalidKey { var: &'static str, value: String },
}

/// Where reservations are kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    File { data_dir: PathBuf },
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `HOTEL_BIND_ADDR`, default `0.0.0.0:3000`
    pub bind_addr: SocketAddr,
    /// `HOTEL_STORAGE` (`memory` | `file`, default `file`) and `HOTEL_DATA_DIR` (default `data`)
    pub storage: StorageBackend,
    /// `HOTEL_STORAGE_KEY`, default `reservations`
    pub storage_key: String,
    /// `HOTEL_STATIC_DIR`, default `static`
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            storage: StorageBackend::File {
                data_dir: PathBuf::from("data"),
            },
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            static_dir: PathBuf::from("static"),
        }
    }
}

impl Config {
    /// Load from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load from an arbitrary variable lookup. Unset or empty variables take
    /// their defaults; set ones are validated here, not on use.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let defaults = Config::default();

        let bind_addr = match get("HOTEL_BIND_ADDR") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidAddr {
                var: "HOTEL_BIND_ADDR",
                value,
            })?,
            None => defaults.bind_addr,
        };

        let data_dir = get("HOTEL_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data"));
        let storage = match get("HOTEL_STORAGE").as_deref().map(str::trim) {
            None | Some("file") => StorageBackend::File { data_dir },
            Some("memory") => StorageBackend::Memory,
            Some(other) => {
                return Err(ConfigError::InvalidBackend {
                    var: "HOTEL_STORAGE",
                    value: other.to_string(),
                })
            }
        };

        let storage_key = get("HOTEL_STORAGE_KEY").unwrap_or(defaults.storage_key);
        if !is_valid_key(&storage_key) {
            return Err(ConfigError::InvalidKey {
                var: "HOTEL_STORAGE_KEY",
                value: storage_key,
            });
        }

        let static_dir = get("HOTEL_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        Ok(Self {
            bind_addr,
            storage,
            storage_key,
            static_dir,
        })
    }

    /// Build the reservation store this configuration describes.
    pub fn open_store(&self) -> Result<ReservationStore, StorageError> {
        let store = match &self.storage {
            StorageBackend::Memory => {
                ReservationStore::new(Arc::new(MemoryStorage::new()), self.storage_key.clone())
            }
            StorageBackend::File { data_dir } => ReservationStore::new(
                Arc::new(FileStorage::open(data_dir)?),
                self.storage_key.clone(),
            ),
        };
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.storage_key, "reservations");
        assert_eq!(
            config.storage,
            StorageBackend::File {
                data_dir: PathBuf::from("data")
            }
        );
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("HOTEL_BIND_ADDR", "127.0.0.1:8080"),
            ("HOTEL_STORAGE", "memory"),
            ("HOTEL_STORAGE_KEY", "desk-2"),
            ("HOTEL_STATIC_DIR", "public"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(config.storage_key, "desk-2");
        assert_eq!(config.static_dir, PathBuf::from("public"));
    }

    #[test]
    fn test_file_backend_data_dir() {
        let config = load(&[("HOTEL_STORAGE", "file"), ("HOTEL_DATA_DIR", "/var/lib/hotel")]).unwrap();
        assert_eq!(
            config.storage,
            StorageBackend::File {
                data_dir: PathBuf::from("/var/lib/hotel")
            }
        );
    }

    #[test]
    fn test_empty_values_take_defaults() {
        let config = load(&[("HOTEL_BIND_ADDR", ""), ("HOTEL_STORAGE_KEY", "  ")]).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            load(&[("HOTEL_BIND_ADDR", "localhost")]),
            Err(ConfigError::InvalidAddr { .. })
        ));
        assert!(matches!(
            load(&[("HOTEL_STORAGE", "redis")]),
            Err(ConfigError::InvalidBackend { .. })
        ));
        assert!(matches!(
            load(&[("HOTEL_STORAGE_KEY", "../../etc")]),
            Err(ConfigError::InvalidKey { .. })
        ));
    }

    #[test]
    fn test_open_memory_store() {
        let config = load(&[("HOTEL_STORAGE", "memory")]).unwrap();
        let store = config.open_store().unwrap();
        assert_eq!(store.key(), "reservations");
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_open_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            storage: StorageBackend::File {
                data_dir: dir.path().join("data"),
            },
            ..Config::default()
        };
        let store = config.open_store().unwrap();
        store.add(serde_json::Map::new()).unwrap();
        assert!(dir.path().join("data").join("reservations.json").exists());
    }
}
