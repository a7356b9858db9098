//! Graph queries — bounded views of the tangle for visualization.
//!
//! [`GraphQuery::build`] walks the parent-reference relation breadth-first
//! from a seed (a wallet's recent transactions or one specific transaction)
//! and returns nodes plus child-to-parent edges. Traversal always
//! terminates: a visited set guards against revisits, `max_depth` caps the
//! hop count and `max_nodes` caps the result size. Smaller-than-requested
//! results are valid results, not errors.

use mint_store::{StoreError, TransactionStore};
use mint_types::{Amount, Currency, Timestamp, TransactionRecord, TxId, TxStatus, WalletId};
use serde::Serialize;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

/// Where a graph query starts.
#[derive(Clone, Debug)]
pub enum GraphSeed {
    /// The wallet's most recent transactions (sender or recipient).
    Wallet(WalletId),
    /// One specific transaction.
    Transaction(TxId),
}

/// One transaction as shown in a graph view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: TxId,
    pub amount: Amount,
    pub currency: Currency,
    pub status: TxStatus,
    pub timestamp: Timestamp,
}

/// A parent reference: `child` verified `parent` at creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub child: TxId,
    pub parent: TxId,
}

/// The result of a graph query.
#[derive(Clone, Debug, Default, Serialize)]
pub struct GraphView {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphView {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Builds bounded DAG views over a transaction store.
pub struct GraphQuery<S> {
    store: Arc<S>,
    /// How many recent transactions seed a wallet-rooted query.
    seed_limit: usize,
}

impl<S: TransactionStore> GraphQuery<S> {
    pub fn new(store: Arc<S>, seed_limit: usize) -> Self {
        Self { store, seed_limit }
    }

    /// Build a view of at most `max_nodes` transactions within `max_depth`
    /// hops of the seed.
    ///
    /// Unknown seeds yield an empty view. A parent id whose record is
    /// missing is skipped silently; an edge appears only when both
    /// endpoints made it into the node set.
    pub fn build(
        &self,
        seed: &GraphSeed,
        max_depth: usize,
        max_nodes: usize,
    ) -> Result<GraphView, StoreError> {
        let seeds: Vec<TransactionRecord> = match seed {
            GraphSeed::Wallet(wallet) => {
                self.store.recent_for_wallet(wallet, self.seed_limit)?
            }
            GraphSeed::Transaction(id) => self.store.get(id)?.into_iter().collect(),
        };

        let mut visited: HashSet<TxId> = HashSet::new();
        let mut records: HashMap<TxId, TransactionRecord> = HashMap::new();
        let mut order: Vec<TxId> = Vec::new();
        let mut queue: VecDeque<(TxId, usize)> = VecDeque::new();

        for record in seeds {
            if records.len() >= max_nodes {
                break;
            }
            if visited.insert(record.id) {
                order.push(record.id);
                queue.push_back((record.id, 0));
                records.insert(record.id, record);
            }
        }

        while let Some((id, depth)) = queue.pop_front() {
            if depth >= max_depth {
                continue;
            }
            let parents = records
                .get(&id)
                .map(|r| r.parents.clone())
                .unwrap_or_default();
            for parent in parents {
                if records.len() >= max_nodes {
                    break;
                }
                if !visited.insert(parent) {
                    continue;
                }
                // Missing parents (pruned or foreign) are not an error.
                if let Some(record) = self.store.get(&parent)? {
                    order.push(parent);
                    queue.push_back((parent, depth + 1));
                    records.insert(parent, record);
                }
            }
        }

        let mut edges = Vec::new();
        for id in &order {
            let record = &records[id];
            for parent in &record.parents {
                if records.contains_key(parent) {
                    edges.push(GraphEdge {
                        child: *id,
                        parent: *parent,
                    });
                }
            }
        }
        let nodes = order
            .iter()
            .map(|id| {
                let record = &records[id];
                GraphNode {
                    id: record.id,
                    amount: record.amount,
                    currency: record.currency.clone(),
                    status: record.status,
                    timestamp: record.timestamp,
                }
            })
            .collect();

        Ok(GraphView { nodes, edges })
    }
}
