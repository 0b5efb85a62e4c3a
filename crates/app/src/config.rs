//! Runtime configuration, resolved by the binary from flags and environment.

use std::path::PathBuf;
use std::sync::Arc;

use catalog::Catalog;
use tracing::info;

use crate::network::{DEFAULT_FAILURE_RATE, NetworkPolicy, SimulatedNetwork};
use crate::persistence::FileStore;

pub const DEFAULT_DATA_DIR: &str = ".moodreel";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory holding the persisted watchlist and theme
    pub data_dir: PathBuf,
    /// JSON catalog to use instead of the built-in movies
    pub catalog_path: Option<PathBuf>,
    /// Probability that a recommendation call fails
    pub failure_rate: f64,
    pub simulate_latency: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            catalog_path: None,
            failure_rate: DEFAULT_FAILURE_RATE,
            simulate_latency: true,
        }
    }
}

impl AppConfig {
    pub fn load_catalog(&self) -> catalog::Result<Catalog> {
        match &self.catalog_path {
            Some(path) => {
                let catalog = Catalog::load_from_file(path)?;
                info!("Loaded {} movies from {}", catalog.len(), path.display());
                Ok(catalog)
            }
            None => Ok(Catalog::builtin()),
        }
    }

    pub fn network(&self) -> Arc<dyn NetworkPolicy> {
        Arc::new(
            SimulatedNetwork::new()
                .with_failure_rate(self.failure_rate)
                .with_delays(self.simulate_latency),
        )
    }

    pub fn storage(&self) -> FileStore {
        FileStore::new(&self.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Endpoint;
    use std::time::Duration;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.data_dir, PathBuf::from(".moodreel"));
        assert_eq!(config.failure_rate, 0.1);
        assert!(config.simulate_latency);
        assert_eq!(config.load_catalog().unwrap().len(), Catalog::builtin().len());
    }

    #[test]
    fn test_network_honours_settings() {
        let config = AppConfig {
            failure_rate: 1.0,
            simulate_latency: false,
            ..AppConfig::default()
        };
        let network = config.network();

        assert_eq!(network.latency(Endpoint::Recommendations), Duration::ZERO);
        assert!(network.should_fail(Endpoint::Recommendations));
    }

    #[test]
    fn test_missing_catalog_file_is_an_error() {
        let config = AppConfig {
            catalog_path: Some(PathBuf::from("/definitely/not/here.json")),
            ..AppConfig::default()
        };
        assert!(config.load_catalog().is_err());
    }
}
