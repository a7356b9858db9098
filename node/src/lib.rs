//! Micro Mint node — wires the engines together behind one facade.
//!
//! The node owns the store, the tip pool, the transaction and verification
//! engines, the graph query service, the broadcast event sink and the
//! Prometheus metrics. Callers (the daemon, tests) go through [`MintNode`]
//! and never touch the engines directly.

pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod node;

pub use config::NodeConfig;
pub use error::NodeError;
pub use logging::{init_logging, LogFormat};
pub use metrics::MintMetrics;
pub use node::{MintNode, NodeSummary};
