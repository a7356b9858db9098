use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;

use mint_engine::{CreateRequest, TipPool, TransactionEngine};
use mint_nullables::AcceptAllVerifier;
use mint_store_memory::MemoryStore;
use mint_store::{BalanceDelta, LedgerStore, WalletStore};
use mint_types::{
    Amount, Currency, EngineParams, PublicKey, Signature, Timestamp, TxId, WalletId, WalletRecord,
};

fn wallet(n: u32) -> WalletId {
    WalletId::new(format!("mint_wallet_{n:04}"))
}

fn setup_engine(num_wallets: u32) -> TransactionEngine<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    for n in 0..num_wallets {
        store
            .put_wallet(&WalletRecord {
                id: wallet(n),
                owner: format!("wallet {n}"),
                public_key: PublicKey([0u8; 32]),
                created_at: Timestamp::new(0),
            })
            .unwrap();
        store
            .adjust(
                &wallet(n),
                &Currency::usd(),
                BalanceDelta::Credit(Amount::new(u32::MAX as u64)),
            )
            .unwrap();
    }
    TransactionEngine::new(
        store,
        Arc::new(TipPool::new()),
        Arc::new(AcceptAllVerifier),
        Arc::new(mint_events::NullSink),
        EngineParams::demo_defaults(),
    )
}

fn bench_create(c: &mut Criterion) {
    let engine = setup_engine(8);
    let mut timestamp = 0u64;

    c.bench_function("engine_create", |b| {
        b.iter(|| {
            timestamp += 1;
            let request = CreateRequest {
                sender: wallet((timestamp % 8) as u32),
                recipient: wallet(((timestamp + 1) % 8) as u32),
                amount: Amount::new(1),
                currency: Currency::usd(),
                note: None,
                timestamp: Timestamp::new(timestamp),
                signature: Signature::ZERO,
            };
            black_box(engine.create(request)).unwrap();
        });
    });
}

fn bench_tip_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("tip_sample");

    for pool_size in [10u64, 100, 1_000, 10_000] {
        let pool = TipPool::new();
        for n in 0..pool_size {
            let mut bytes = [0u8; 32];
            bytes[..8].copy_from_slice(&n.to_le_bytes());
            pool.add(TxId::new(bytes), wallet((n % 16) as u32));
        }
        let excluded = wallet(0);

        group.bench_with_input(
            BenchmarkId::new("sample_2", pool_size),
            &pool_size,
            |b, _| {
                b.iter(|| black_box(pool.sample(2, black_box(&excluded), &[])));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_create, bench_tip_sample);
criterion_main!(benches);
