//! Micro Mint daemon — entry point for the demo payment node.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use mint_crypto::{canonical_transfer_payload, generate_keypair, sign_message};
use mint_engine::CreateRequest;
use mint_node::{init_logging, LogFormat, MintNode, NodeConfig};
use mint_store_memory::MemoryStore;
use mint_types::{amount::MINOR_PER_UNIT, rates, Amount, Currency, KeyPair, Timestamp, TxId, WalletId};

#[derive(Parser)]
#[command(name = "mint-daemon", about = "Micro Mint demo payment node")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "MINT_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "MINT_LOG_FORMAT")]
    log_format: Option<String>,

    /// Snapshot file, overriding the config file's `snapshot_path`.
    #[arg(long)]
    snapshot: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Run the worked payment example end to end, printing every step.
    Demo,
    /// Print a bounded graph view as pretty JSON.
    Graph {
        /// Seed the view at a wallet id.
        #[arg(long, conflicts_with = "tx")]
        wallet: Option<String>,
        /// Seed the view at a transaction id (64 hex chars).
        #[arg(long)]
        tx: Option<String>,
        /// Maximum traversal depth.
        #[arg(long, default_value_t = 4)]
        depth: usize,
        /// Maximum number of nodes in the view.
        #[arg(long)]
        max_nodes: Option<usize>,
    },
    /// Print store counts and tip pool size.
    Summary,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => NodeConfig::from_toml_file(&path.to_string_lossy())?,
        None => NodeConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    if let Some(snapshot) = cli.snapshot {
        config.snapshot_path = Some(snapshot);
    }

    let format: LogFormat = config.log_format.parse().map_err(anyhow::Error::msg)?;
    init_logging(format, &config.log_level);

    match cli.command {
        Command::Demo => run_demo(config).await?,
        Command::Graph {
            wallet,
            tx,
            depth,
            max_nodes,
        } => {
            if let Some(n) = max_nodes {
                config.params.max_graph_nodes = n;
            }
            let node = MintNode::in_memory(config)?;
            let view = match (wallet, tx) {
                (Some(wallet), _) => node.wallet_graph(&WalletId::new(wallet), depth)?,
                (None, Some(tx)) => {
                    let id = TxId::from_hex(&tx)
                        .ok_or_else(|| anyhow::anyhow!("invalid transaction id: {tx}"))?;
                    node.transaction_graph(&id, depth)?
                }
                (None, None) => anyhow::bail!("pass --wallet or --tx"),
            };
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        Command::Summary => {
            let node = MintNode::in_memory(config)?;
            println!("{}", serde_json::to_string_pretty(&node.summary()?)?);
        }
    }

    Ok(())
}

fn signed_request(
    keypair: &KeyPair,
    sender: &WalletId,
    recipient: &WalletId,
    amount: Amount,
    note: Option<&str>,
) -> CreateRequest {
    let timestamp = Timestamp::now();
    let payload = canonical_transfer_payload(amount, &Currency::usd(), recipient, note, timestamp);
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

/// The worked example: Alice pays Bob 40.00 USD, three verifiers endorse
/// the payment, the transaction completes and each verifier earns a flat
/// MM reward.
async fn run_demo(mut config: NodeConfig) -> anyhow::Result<()> {
    config.enable_faucet = true;
    let node = MintNode::in_memory(config)?;
    let usd = Currency::usd();
    let mm = Currency::mm();

    let mut events = node.subscribe();
    let printer = tokio::spawn(async move {
        while let Ok(envelope) = events.recv().await {
            let json =
                serde_json::to_string(&envelope).expect("envelopes are always serializable");
            println!("event [{}] {json}", envelope.event.kind());
        }
    });

    let register = |owner: &str| -> anyhow::Result<(KeyPair, WalletId)> {
        let keypair = generate_keypair();
        let record = node.register_wallet(owner, &keypair.public)?;
        println!("registered {owner}: {}", record.id);
        Ok((keypair, record.id))
    };
    let (alice_keys, alice) = register("alice")?;
    let (_, bob) = register("bob")?;
    let (_, carol) = register("carol")?;
    let (_, dave) = register("dave")?;
    let (_, erin) = register("erin")?;

    node.faucet_credit(&alice, &usd, Amount::from_units(100))?;
    node.faucet_credit(&bob, &usd, Amount::from_units(100))?;
    println!("seeded alice and bob with 100.00 USD each");

    let tx = node.create_transaction(signed_request(
        &alice_keys,
        &alice,
        &bob,
        Amount::from_units(40),
        Some("lunch"),
    ))?;
    println!("created transaction {} ({:?})", tx.id, tx.status);
    println!(
        "alice: {} USD, bob: {} USD",
        node.balance(&alice, &usd)?,
        node.balance(&bob, &usd)?
    );

    for verifier in [&carol, &dave, &erin] {
        let outcome = node.verify_transaction(verifier, &tx.id)?;
        println!(
            "verified by {verifier}: reward {} MM, status {:?}",
            outcome.reward, outcome.status
        );
    }
    for verifier in [&carol, &dave, &erin] {
        let balance = node.balance(verifier, &mm)?;
        match rates::display_rate(&mm, &usd) {
            Some(rate) => {
                let approx = balance.raw() as f64 / MINOR_PER_UNIT as f64 * rate;
                println!("{verifier}: {balance} MM (~{approx:.2} USD)");
            }
            None => println!("{verifier}: {balance} MM"),
        }
    }

    println!("graph around {}:", tx.id);
    let view = node.transaction_graph(&tx.id, 4)?;
    println!("{}", serde_json::to_string_pretty(&view)?);
    println!("{}", serde_json::to_string_pretty(&node.summary()?)?);

    if let Some(path) = node.config().snapshot_path.clone() {
        save_snapshot(&node, &path)?;
    }

    // Give the printer a moment to drain before tearing it down.
    tokio::time::sleep(Duration::from_millis(50)).await;
    printer.abort();
    Ok(())
}

fn save_snapshot(node: &MintNode<MemoryStore>, path: &std::path::Path) -> anyhow::Result<()> {
    node.store().save_snapshot(path)?;
    tracing::info!(path = %path.display(), "snapshot saved");
    Ok(())
}
