//! SENTINEL — Autonomous DEX New-Pair Screener
//!
//! Entry point. Loads configuration, initialises structured logging,
//! loads the denylists, opens the token ledger, and runs the main
//! fetch→evaluate→record loop with graceful shutdown.

use anyhow::{Context, Result};
use secrecy::SecretString;
use std::path::Path;
use std::time::Duration;
use tracing::{error, info};

use sentinel::config::AppConfig;
use sentinel::denylist::Denylist;
use sentinel::engine::monitor::RugMonitor;
use sentinel::engine::pipeline::Evaluator;
use sentinel::engine::CycleStats;
use sentinel::feed::dexscreener::DexScreenerClient;
use sentinel::feed::MarketFeed;
use sentinel::ledger::SqliteLedger;
use sentinel::notify::telegram::TelegramNotifier;
use sentinel::risk::pocker::PockerClient;
use sentinel::risk::rugcheck::RugcheckClient;

const BANNER: &str = r#"
 ____  _____ _   _ _____ ___ _   _ _____ _
/ ___|| ____| \ | |_   _|_ _| \ | | ____| |
\___ \|  _| |  \| | | |  | ||  \| |  _| | |
 ___) | |___| |\  | | |  | || |\  | |___| |___
|____/|_____|_| \_| |_| |___|_| \_|_____|_____|

  New-pair screener — v0.1.0
"#;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    // Load configuration from TOML
    let cfg = AppConfig::load("config.toml")?;

    // Initialise structured logging
    init_logging();

    // Print startup banner
    println!("{BANNER}");
    info!(
        agent_name = %cfg.agent.name,
        poll_interval_secs = cfg.agent.poll_interval_secs,
        feed = %cfg.feed.endpoint,
        "SENTINEL starting up"
    );

    // -- Initialise collaborators ----------------------------------------

    let denylist = Denylist::load(
        Path::new(&cfg.files.token_denylist),
        Path::new(&cfg.files.creator_denylist),
    )?;

    let ledger = SqliteLedger::open(&cfg.database.path).await?;

    let bot_token = AppConfig::resolve_env(&cfg.telegram.bot_token_env)
        .context("Telegram bot token is required")?;
    let notifier = TelegramNotifier::new(
        SecretString::new(bot_token),
        cfg.telegram.chat_id.clone(),
        cfg.telegram.alert_chat_id.clone(),
    )?;

    let feed = DexScreenerClient::new(cfg.feed.endpoint.clone())?;
    let volume_check = PockerClient::new(cfg.risk.pocker_api_url.clone())?;
    let auth_check = RugcheckClient::new(cfg.risk.rugcheck_url.clone())?;

    let mut evaluator = Evaluator::new(
        cfg.filters.clone(),
        denylist,
        Box::new(volume_check),
        Box::new(auth_check),
        Box::new(ledger),
        Box::new(notifier),
    );

    let monitor = RugMonitor::new();

    // -- Main loop -------------------------------------------------------

    let poll_interval = Duration::from_secs(cfg.agent.poll_interval_secs);
    let mut interval = tokio::time::interval(poll_interval);
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    info!(
        interval_secs = cfg.agent.poll_interval_secs,
        "Entering main loop. Press Ctrl+C to stop."
    );

    let mut cycle: u64 = 0;
    loop {
        tokio::select! {
            _ = interval.tick() => {
                cycle += 1;
                match run_cycle(&feed, &mut evaluator, cfg.feed.batch_limit).await {
                    Ok(stats) => log_cycle_stats(cycle, &stats),
                    Err(e) => error!(cycle, error = %e, "Cycle failed — continuing to next"),
                }

                // Future work: flag rugs/pumps on recorded tokens.
                if let Err(e) = monitor.scan().await {
                    error!(error = %e, "Rug monitor failed");
                }
            }
            _ = &mut shutdown => {
                info!("Shutdown signal received.");
                break;
            }
        }
    }

    info!(cycles = cycle, "SENTINEL shut down cleanly.");
    Ok(())
}

/// Run a single fetch→evaluate cycle over one feed batch.
///
/// Candidates are evaluated sequentially in feed order, so a denylist
/// entry added for one candidate applies to every later candidate in the
/// same batch. A per-candidate failure (ledger write) is logged and does
/// not stop the batch.
async fn run_cycle(
    feed: &dyn MarketFeed,
    evaluator: &mut Evaluator,
    batch_limit: u32,
) -> Result<CycleStats> {
    let pairs = feed.fetch_new_pairs(batch_limit).await?;

    let mut stats = CycleStats {
        fetched: pairs.len(),
        ..Default::default()
    };

    for pair in &pairs {
        match evaluator.evaluate(pair).await {
            Ok(decision) => stats.record(&decision),
            Err(e) => {
                stats.errors += 1;
                error!(address = %pair.address, error = %e, "Candidate evaluation failed");
            }
        }
    }

    Ok(stats)
}

/// Log a human-readable cycle summary.
fn log_cycle_stats(cycle: u64, stats: &CycleStats) {
    info!(
        cycle,
        fetched = stats.fetched,
        filtered = stats.filtered,
        denylisted = stats.denylisted,
        untrusted = stats.untrusted,
        accepted = stats.accepted,
        errors = stats.errors,
        "Cycle complete"
    );
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sentinel=info"));

    let json_logging = std::env::var("SENTINEL_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    } else {
        fmt().with_env_filter(env_filter).with_target(true).init();
    }
}
