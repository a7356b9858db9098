//! End-to-end scenarios through the [`MintNode`] facade.

use mint_crypto::{canonical_transfer_payload, sign_message};
use mint_engine::CreateRequest;
use mint_node::{MintNode, NodeConfig, NodeError};
use mint_types::{Amount, Currency, KeyPair, Timestamp, TxStatus, WalletId, WalletRecord};

fn demo_config() -> NodeConfig {
    let mut config = NodeConfig::default();
    config.enable_faucet = true;
    config
}

fn signed_request(
    keypair: &KeyPair,
    sender: &WalletId,
    recipient: &WalletId,
    amount: Amount,
    note: Option<&str>,
    timestamp: Timestamp,
) -> CreateRequest {
    let payload =
        canonical_transfer_payload(amount, &Currency::usd(), recipient, note, timestamp);
    CreateRequest {
        sender: sender.clone(),
        recipient: recipient.clone(),
        amount,
        currency: Currency::usd(),
        note: note.map(str::to_string),
        timestamp,
        signature: sign_message(&payload, &keypair.private),
    }
}

fn register(node: &MintNode<mint_store_memory::MemoryStore>, owner: &str) -> (KeyPair, WalletRecord) {
    let keypair = mint_crypto::generate_keypair();
    let record = node.register_wallet(owner, &keypair.public).unwrap();
    (keypair, record)
}

#[test]
fn worked_example_end_to_end() {
    let node = MintNode::in_memory(demo_config()).unwrap();
    let usd = Currency::usd();
    let mm = Currency::mm();

    let (alice_keys, alice) = register(&node, "alice");
    let (_, bob) = register(&node, "bob");
    let (_, carol) = register(&node, "carol");
    let (_, dave) = register(&node, "dave");
    let (_, erin) = register(&node, "erin");

    node.faucet_credit(&alice.id, &usd, Amount::from_units(100))
        .unwrap();
    node.faucet_credit(&bob.id, &usd, Amount::from_units(100))
        .unwrap();

    let mut events = node.subscribe();

    let tx = node
        .create_transaction(signed_request(
            &alice_keys,
            &alice.id,
            &bob.id,
            Amount::from_units(40),
            Some("lunch"),
            Timestamp::now(),
        ))
        .unwrap();

    // Balances move at creation, not completion.
    assert_eq!(
        node.balance(&alice.id, &usd).unwrap(),
        Amount::from_units(60)
    );
    assert_eq!(node.balance(&bob.id, &usd).unwrap(), Amount::from_units(140));
    assert_eq!(tx.status, TxStatus::Pending);

    let summary = node.summary().unwrap();
    assert_eq!(summary.pending, 1);
    assert_eq!(summary.tips, 1);
    assert_eq!(summary.wallets, 5);

    // Three distinct verifiers complete the transaction.
    for verifier in [&carol.id, &dave.id, &erin.id] {
        let outcome = node.verify_transaction(verifier, &tx.id).unwrap();
        assert!(outcome.newly_verified);
        assert_eq!(outcome.reward, Amount::new(25));
    }

    let stored = node.transaction(&tx.id).unwrap().unwrap();
    assert_eq!(stored.status, TxStatus::Completed);
    assert_eq!(stored.verifications, 3);

    // Each verifier earned exactly one flat MM reward.
    for verifier in [&carol.id, &dave.id, &erin.id] {
        assert_eq!(node.balance(verifier, &mm).unwrap(), Amount::new(25));
    }

    // Completed transactions leave the tip pool.
    let summary = node.summary().unwrap();
    assert_eq!(summary.pending, 0);
    assert_eq!(summary.tips, 0);

    // The subscriber saw the creation before anything else.
    let envelope = events.try_recv().unwrap();
    assert_eq!(envelope.event.kind(), "transaction-created");
}

#[test]
fn repeat_verification_is_idempotent_through_the_facade() {
    let node = MintNode::in_memory(demo_config()).unwrap();
    let usd = Currency::usd();

    let (alice_keys, alice) = register(&node, "alice");
    let (_, bob) = register(&node, "bob");
    let (_, carol) = register(&node, "carol");

    node.faucet_credit(&alice.id, &usd, Amount::from_units(10))
        .unwrap();

    let tx = node
        .create_transaction(signed_request(
            &alice_keys,
            &alice.id,
            &bob.id,
            Amount::from_units(5),
            None,
            Timestamp::now(),
        ))
        .unwrap();

    let first = node.verify_transaction(&carol.id, &tx.id).unwrap();
    let second = node.verify_transaction(&carol.id, &tx.id).unwrap();
    assert!(first.newly_verified);
    assert!(!second.newly_verified);
    assert!(second.reward.is_zero());
    assert_eq!(
        node.balance(&carol.id, &Currency::mm()).unwrap(),
        Amount::new(25)
    );
}

#[test]
fn faucet_is_rejected_when_disabled() {
    let node = MintNode::in_memory(NodeConfig::default()).unwrap();
    let (_, alice) = register(&node, "alice");

    let result = node.faucet_credit(&alice.id, &Currency::usd(), Amount::from_units(1));
    assert!(matches!(result, Err(NodeError::FaucetDisabled)));
}

#[test]
fn insufficient_balance_surfaces_and_leaves_no_trace() {
    let node = MintNode::in_memory(demo_config()).unwrap();
    let usd = Currency::usd();

    let (alice_keys, alice) = register(&node, "alice");
    let (_, bob) = register(&node, "bob");
    node.faucet_credit(&alice.id, &usd, Amount::from_units(1))
        .unwrap();

    let result = node.create_transaction(signed_request(
        &alice_keys,
        &alice.id,
        &bob.id,
        Amount::from_units(50),
        None,
        Timestamp::now(),
    ));
    assert!(result.is_err());
    assert_eq!(node.balance(&alice.id, &usd).unwrap(), Amount::from_units(1));
    assert_eq!(node.summary().unwrap().transactions, 0);
}

#[test]
fn snapshot_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = dir.path().join("mint-snapshot.json");
    let mut config = demo_config();
    config.snapshot_path = Some(snapshot.clone());

    let usd = Currency::usd();
    let (alice_id, bob_id, tx_id) = {
        let node = MintNode::in_memory(config.clone()).unwrap();
        let (alice_keys, alice) = register(&node, "alice");
        let (_, bob) = register(&node, "bob");
        node.faucet_credit(&alice.id, &usd, Amount::from_units(100))
            .unwrap();
        let tx = node
            .create_transaction(signed_request(
                &alice_keys,
                &alice.id,
                &bob.id,
                Amount::from_units(40),
                None,
                Timestamp::now(),
            ))
            .unwrap();
        node.store().save_snapshot(&snapshot).unwrap();
        (alice.id, bob.id, tx.id)
    };

    let node = MintNode::in_memory(config).unwrap();
    assert_eq!(node.balance(&alice_id, &usd).unwrap(), Amount::from_units(60));
    assert_eq!(node.balance(&bob_id, &usd).unwrap(), Amount::from_units(40));
    let restored = node.transaction(&tx_id).unwrap().unwrap();
    assert_eq!(restored.status, TxStatus::Pending);

    // The tip pool was rebuilt from the restored pending set.
    assert_eq!(node.summary().unwrap().tips, 1);
}

#[test]
fn graph_views_through_the_facade() {
    let node = MintNode::in_memory(demo_config()).unwrap();
    let usd = Currency::usd();

    let (alice_keys, alice) = register(&node, "alice");
    let (bob_keys, bob) = register(&node, "bob");
    node.faucet_credit(&alice.id, &usd, Amount::from_units(100))
        .unwrap();
    node.faucet_credit(&bob.id, &usd, Amount::from_units(100))
        .unwrap();

    let first = node
        .create_transaction(signed_request(
            &alice_keys,
            &alice.id,
            &bob.id,
            Amount::from_units(10),
            None,
            Timestamp::now(),
        ))
        .unwrap();
    // Bob's transaction can pick Alice's as a parent.
    let second = node
        .create_transaction(signed_request(
            &bob_keys,
            &bob.id,
            &alice.id,
            Amount::from_units(5),
            None,
            Timestamp::now(),
        ))
        .unwrap();
    assert_eq!(second.parents, vec![first.id]);

    let view = node.transaction_graph(&second.id, 4).unwrap();
    assert_eq!(view.len(), 2);
    assert_eq!(view.edges.len(), 1);

    let view = node.wallet_graph(&alice.id, 4).unwrap();
    assert!(!view.is_empty());
}

#[test]
fn metrics_track_node_activity() {
    let node = MintNode::in_memory(demo_config()).unwrap();
    let usd = Currency::usd();

    let (alice_keys, alice) = register(&node, "alice");
    let (_, bob) = register(&node, "bob");
    let (_, carol) = register(&node, "carol");
    node.faucet_credit(&alice.id, &usd, Amount::from_units(10))
        .unwrap();

    let tx = node
        .create_transaction(signed_request(
            &alice_keys,
            &alice.id,
            &bob.id,
            Amount::from_units(2),
            None,
            Timestamp::now(),
        ))
        .unwrap();
    node.verify_transaction(&carol.id, &tx.id).unwrap();

    let text = node.metrics().gather();
    assert!(text.contains("mint_transactions_created_total 1"));
    assert!(text.contains("mint_verifications_total 1"));
    assert!(text.contains("mint_rewards_issued_total 1"));
    assert!(text.contains("mint_wallet_count 3"));
    assert!(text.contains("mint_tip_pool_size 1"));
}
