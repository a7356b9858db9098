//! Node configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use mint_types::EngineParams;

use crate::NodeError;

/// Configuration for a Micro Mint node.
///
/// Can be loaded from a TOML file via [`NodeConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Where to persist the in-memory store between runs. `None` disables
    /// snapshots entirely.
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,

    /// Whether the faucet (demo balance seeding) is allowed.
    #[serde(default)]
    pub enable_faucet: bool,

    /// Buffer size of the broadcast event channel.
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,

    /// Engine parameters; any field can be overridden from TOML.
    #[serde(default)]
    pub params: EngineParams,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_event_capacity() -> usize {
    256
}

// ── Impl ───────────────────────────────────────────────────────────────

impl NodeConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, NodeError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| NodeError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, NodeError> {
        toml::from_str(s).map_err(|e| NodeError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("NodeConfig is always serializable to TOML")
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
            snapshot_path: None,
            enable_faucet: false,
            event_capacity: default_event_capacity(),
            params: EngineParams::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = NodeConfig::default();
        let toml_str = config.to_toml_string();
        let parsed = NodeConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed.log_level, config.log_level);
        assert_eq!(parsed.event_capacity, config.event_capacity);
        assert_eq!(
            parsed.params.verification_threshold,
            config.params.verification_threshold
        );
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = NodeConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, "human");
        assert_eq!(config.event_capacity, 256);
        assert!(config.snapshot_path.is_none());
        assert!(!config.enable_faucet);
        assert_eq!(config.params.parents_per_tx, 2);
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            log_level = "debug"
            enable_faucet = true

            [params]
            verification_threshold = 5
        "#;
        let config = NodeConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.log_level, "debug");
        assert!(config.enable_faucet);
        assert_eq!(config.params.verification_threshold, 5);
        assert_eq!(config.params.parents_per_tx, 2); // default
        assert_eq!(config.log_format, "human"); // default
    }

    #[test]
    fn missing_file_returns_config_error() {
        let result = NodeConfig::from_toml_file("/nonexistent/mint.toml");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, NodeError::Config(_)));
    }

    #[test]
    fn config_file_round_trips_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mint.toml");
        let mut config = NodeConfig::default();
        config.snapshot_path = Some(dir.path().join("snapshot.json"));
        std::fs::write(&path, config.to_toml_string()).unwrap();

        let loaded = NodeConfig::from_toml_file(path.to_str().unwrap()).expect("should load");
        assert_eq!(loaded.snapshot_path, config.snapshot_path);
    }
}
