//! The main Micro Mint node struct — wires the engines together.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::broadcast;

use mint_crypto::{derive_wallet_id, Ed25519Verifier, SignatureVerifier};
use mint_engine::{CreateRequest, TipPool, TransactionEngine};
use mint_events::{BroadcastSink, Envelope};
use mint_graph::{GraphQuery, GraphSeed, GraphView};
use mint_store::{BalanceDelta, LedgerStore, TransactionStore, WalletStore};
use mint_store_memory::MemoryStore;
use mint_types::{
    Amount, Currency, PublicKey, Timestamp, TransactionRecord, TxId, WalletId, WalletRecord,
};
use mint_verification::{VerificationEngine, VerifyOutcome};

use crate::config::NodeConfig;
use crate::error::NodeError;
use crate::metrics::MintMetrics;

/// Counts reported by [`MintNode::summary`].
#[derive(Clone, Debug, Serialize)]
pub struct NodeSummary {
    pub wallets: u64,
    pub transactions: u64,
    pub pending: u64,
    pub tips: u64,
    pub balances: u64,
}

/// A running Micro Mint node.
pub struct MintNode<S> {
    config: NodeConfig,
    store: Arc<S>,
    tips: Arc<TipPool>,
    engine: TransactionEngine<S>,
    verification: VerificationEngine<S>,
    graph: GraphQuery<S>,
    sink: Arc<BroadcastSink>,
    metrics: MintMetrics,
}

impl<S> MintNode<S>
where
    S: WalletStore + LedgerStore + TransactionStore + Send + Sync + 'static,
{
    /// Assemble a node around an existing store.
    ///
    /// The tip pool is rebuilt from the store's pending transactions so a
    /// snapshot-restored node resumes with the same tips it shut down with.
    pub fn new(
        config: NodeConfig,
        store: Arc<S>,
        verifier: Arc<dyn SignatureVerifier>,
    ) -> Result<Self, NodeError> {
        let tips = Arc::new(TipPool::new());
        let pending = store.query_pending(usize::MAX)?;
        tips.rebuild(&pending);

        let sink = Arc::new(BroadcastSink::new(config.event_capacity));
        let engine = TransactionEngine::new(
            Arc::clone(&store),
            Arc::clone(&tips),
            verifier,
            sink.clone(),
            config.params.clone(),
        );
        let verification = VerificationEngine::new(
            Arc::clone(&store),
            Arc::clone(&tips),
            sink.clone(),
            config.params.clone(),
        );
        let graph = GraphQuery::new(Arc::clone(&store), config.params.graph_seed_limit);

        let metrics = MintMetrics::new();
        let node = Self {
            config,
            store,
            tips,
            engine,
            verification,
            graph,
            sink,
            metrics,
        };
        node.refresh_gauges()?;
        Ok(node)
    }

    /// Create a payment transaction and record it as a new tip.
    pub fn create_transaction(
        &self,
        request: CreateRequest,
    ) -> Result<TransactionRecord, NodeError> {
        let record = self.engine.create(request)?;
        self.metrics.transactions_created.inc();
        self.refresh_gauges()?;
        Ok(record)
    }

    /// Verify a pending transaction on behalf of `verifier`, stamped with
    /// the current wall clock.
    pub fn verify_transaction(
        &self,
        verifier: &WalletId,
        id: &TxId,
    ) -> Result<VerifyOutcome, NodeError> {
        let outcome = self.verification.verify(verifier, id, Timestamp::now())?;
        if outcome.newly_verified {
            self.metrics.verifications.inc();
            if !outcome.reward.is_zero() {
                self.metrics.rewards_issued.inc();
            }
            if outcome.status.is_completed() {
                self.metrics.transactions_completed.inc();
            }
        }
        self.refresh_gauges()?;
        Ok(outcome)
    }

    /// Register a wallet; the id is derived from the public key.
    pub fn register_wallet(
        &self,
        owner: impl Into<String>,
        public_key: &PublicKey,
    ) -> Result<WalletRecord, NodeError> {
        let record = WalletRecord {
            id: derive_wallet_id(public_key),
            owner: owner.into(),
            public_key: public_key.clone(),
            created_at: Timestamp::now(),
        };
        self.store.put_wallet(&record)?;
        self.refresh_gauges()?;
        tracing::info!(wallet = %record.id, owner = %record.owner, "wallet registered");
        Ok(record)
    }

    /// Seed a wallet balance out of thin air. Demo only; refused unless
    /// the config enables the faucet.
    pub fn faucet_credit(
        &self,
        wallet: &WalletId,
        currency: &Currency,
        amount: Amount,
    ) -> Result<Amount, NodeError> {
        if !self.config.enable_faucet {
            return Err(NodeError::FaucetDisabled);
        }
        let new_balance = self
            .store
            .adjust(wallet, currency, BalanceDelta::Credit(amount))?;
        tracing::info!(%wallet, %currency, %amount, "faucet credit");
        Ok(new_balance)
    }

    pub fn balance(&self, wallet: &WalletId, currency: &Currency) -> Result<Amount, NodeError> {
        Ok(self.store.get_balance(wallet, currency)?)
    }

    pub fn transaction(&self, id: &TxId) -> Result<Option<TransactionRecord>, NodeError> {
        Ok(self.store.get(id)?)
    }

    /// Bounded DAG view rooted at a wallet's recent transactions.
    pub fn wallet_graph(
        &self,
        wallet: &WalletId,
        max_depth: usize,
    ) -> Result<GraphView, NodeError> {
        Ok(self.graph.build(
            &GraphSeed::Wallet(wallet.clone()),
            max_depth,
            self.config.params.max_graph_nodes,
        )?)
    }

    /// Bounded DAG view rooted at one transaction.
    pub fn transaction_graph(&self, id: &TxId, max_depth: usize) -> Result<GraphView, NodeError> {
        Ok(self.graph.build(
            &GraphSeed::Transaction(*id),
            max_depth,
            self.config.params.max_graph_nodes,
        )?)
    }

    pub fn summary(&self) -> Result<NodeSummary, NodeError> {
        Ok(NodeSummary {
            wallets: self.store.wallet_count()?,
            transactions: self.store.transaction_count()?,
            pending: self.store.query_pending(usize::MAX)?.len() as u64,
            tips: self.tips.len() as u64,
            balances: self.store.balance_count()?,
        })
    }

    /// Subscribe to the node's event stream.
    pub fn subscribe(&self) -> broadcast::Receiver<Envelope> {
        self.sink.subscribe()
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    pub fn metrics(&self) -> &MintMetrics {
        &self.metrics
    }

    fn refresh_gauges(&self) -> Result<(), NodeError> {
        self.metrics.tip_pool_size.set(self.tips.len() as i64);
        self.metrics
            .transaction_count
            .set(self.store.transaction_count()? as i64);
        self.metrics
            .wallet_count
            .set(self.store.wallet_count()? as i64);
        Ok(())
    }
}

impl MintNode<MemoryStore> {
    /// Build an in-memory node, restoring the configured snapshot when one
    /// exists on disk.
    pub fn in_memory(config: NodeConfig) -> Result<Self, NodeError> {
        let store = match &config.snapshot_path {
            Some(path) if path.exists() => {
                tracing::info!(path = %path.display(), "loading snapshot");
                MemoryStore::load_snapshot(path)?
            }
            _ => MemoryStore::new(),
        };
        Self::new(config, Arc::new(store), Arc::new(Ed25519Verifier))
    }
}
