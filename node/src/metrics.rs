//! Prometheus metrics for the Micro Mint node.
//!
//! The [`MintMetrics`] struct owns a dedicated [`Registry`] so tests can
//! hold independent metric sets; [`MintMetrics::gather`] encodes it into
//! the Prometheus text exposition format.

use prometheus::{
    register_int_counter_with_registry, register_int_gauge_with_registry, Encoder, IntCounter,
    IntGauge, Opts, Registry, TextEncoder,
};

/// Central collection of all node-level Prometheus metrics.
pub struct MintMetrics {
    /// The Prometheus registry that owns every metric below.
    pub registry: Registry,

    // ── Counters ────────────────────────────────────────────────────────
    /// Total number of transactions created.
    pub transactions_created: IntCounter,
    /// Total number of verification calls that added a verifier.
    pub verifications: IntCounter,
    /// Total number of transactions that reached Completed.
    pub transactions_completed: IntCounter,
    /// Total number of verification rewards issued.
    pub rewards_issued: IntCounter,

    // ── Gauges ──────────────────────────────────────────────────────────
    /// Current number of tips eligible as parents.
    pub tip_pool_size: IntGauge,
    /// Current number of transactions in the store.
    pub transaction_count: IntGauge,
    /// Current number of registered wallets.
    pub wallet_count: IntGauge,
}

impl MintMetrics {
    /// Create a fresh set of metrics, all registered under a new
    /// [`Registry`].
    pub fn new() -> Self {
        let registry = Registry::new();

        // Counters
        let transactions_created = register_int_counter_with_registry!(
            Opts::new(
                "mint_transactions_created_total",
                "Total transactions created"
            ),
            registry
        )
        .expect("failed to register transactions_created counter");

        let verifications = register_int_counter_with_registry!(
            Opts::new(
                "mint_verifications_total",
                "Total verifications that added a verifier"
            ),
            registry
        )
        .expect("failed to register verifications counter");

        let transactions_completed = register_int_counter_with_registry!(
            Opts::new(
                "mint_transactions_completed_total",
                "Total transactions that reached Completed"
            ),
            registry
        )
        .expect("failed to register transactions_completed counter");

        let rewards_issued = register_int_counter_with_registry!(
            Opts::new("mint_rewards_issued_total", "Total verification rewards"),
            registry
        )
        .expect("failed to register rewards_issued counter");

        // Gauges
        let tip_pool_size = register_int_gauge_with_registry!(
            Opts::new("mint_tip_pool_size", "Current number of tips"),
            registry
        )
        .expect("failed to register tip_pool_size gauge");

        let transaction_count = register_int_gauge_with_registry!(
            Opts::new(
                "mint_transaction_count",
                "Current number of stored transactions"
            ),
            registry
        )
        .expect("failed to register transaction_count gauge");

        let wallet_count = register_int_gauge_with_registry!(
            Opts::new("mint_wallet_count", "Current number of registered wallets"),
            registry
        )
        .expect("failed to register wallet_count gauge");

        Self {
            registry,
            transactions_created,
            verifications,
            transactions_completed,
            rewards_issued,
            tip_pool_size,
            transaction_count,
            wallet_count,
        }
    }

    /// Encode the registry into the Prometheus text exposition format.
    pub fn gather(&self) -> String {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        let encoder = TextEncoder::new();
        encoder
            .encode(&metric_families, &mut buffer)
            .expect("metrics are always encodable");
        String::from_utf8(buffer).expect("text exposition format is UTF-8")
    }
}

impl Default for MintMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_show_up_in_exposition() {
        let metrics = MintMetrics::new();
        metrics.transactions_created.inc();
        metrics.tip_pool_size.set(3);

        let text = metrics.gather();
        assert!(text.contains("mint_transactions_created_total 1"));
        assert!(text.contains("mint_tip_pool_size 3"));
    }

    #[test]
    fn registries_are_independent() {
        let a = MintMetrics::new();
        let b = MintMetrics::new();
        a.rewards_issued.inc();
        assert!(b.gather().contains("mint_rewards_issued_total 0"));
    }
}
