//! Engine parameters — the tunables of the tangle protocol.

use crate::amount::Amount;
use serde::{Deserialize, Serialize};

/// Parameters governing transaction creation, verification and graph queries.
///
/// Every field has a serde default so a TOML config file can override any
/// subset and leave the rest at their defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineParams {
    /// How many tips a new transaction references as parents (at most).
    #[serde(default = "default_parents_per_tx")]
    pub parents_per_tx: usize,

    /// Verifications required before a transaction flips to Completed.
    #[serde(default = "default_verification_threshold")]
    pub verification_threshold: u32,

    /// Flat MM reward (minor units) credited per individual verification call.
    #[serde(default = "default_verification_reward")]
    pub verification_reward: Amount,

    /// How many recent transactions seed a wallet-rooted graph query.
    #[serde(default = "default_graph_seed_limit")]
    pub graph_seed_limit: usize,

    /// Hard cap on nodes returned by a graph query.
    #[serde(default = "default_max_graph_nodes")]
    pub max_graph_nodes: usize,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_parents_per_tx() -> usize {
    2
}

fn default_verification_threshold() -> u32 {
    3
}

fn default_verification_reward() -> Amount {
    // 0.25 MM per verification call.
    Amount::new(25)
}

fn default_graph_seed_limit() -> usize {
    5
}

fn default_max_graph_nodes() -> usize {
    256
}

impl EngineParams {
    /// The configuration used by the demo scenario and most tests.
    pub fn demo_defaults() -> Self {
        Self::default()
    }
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            parents_per_tx: default_parents_per_tx(),
            verification_threshold: default_verification_threshold(),
            verification_reward: default_verification_reward(),
            graph_seed_limit: default_graph_seed_limit(),
            max_graph_nodes: default_max_graph_nodes(),
        }
    }
}
