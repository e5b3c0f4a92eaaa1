use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use broker::Broker;
use engine::{shared, Engine, LoggerObserver, MarketDataSubject, SimConfig};
use risk::RiskObserver;
use strategy::StrategyObserver;

/// Machine-readable run summary printed to stdout after the simulation.
#[derive(Debug, Serialize)]
struct RunSummary {
    final_equity: f64,
    trades: usize,
    ticks_observed: usize,
    limit_breached: bool,
}

fn main() -> anyhow::Result<()> {
    // ── Logging ──────────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    // ── Config ───────────────────────────────────────────────────────────────
    let _ = dotenvy::dotenv(); // ignore error if .env not present
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SIM_CONFIG_PATH").ok())
        .unwrap_or_else(|| "config/simulation.toml".to_string());
    let config = SimConfig::load(&config_path)?;
    info!(path = %config_path, "config loaded");

    let prices = config.data.resolve_prices()?;
    info!(ticks = prices.len(), "price data resolved");

    // ── Components ───────────────────────────────────────────────────────────
    let strategy = shared(StrategyObserver::new(&config.strategy)?);
    let risk = shared(RiskObserver::new(&config.risk)?);
    let logger = shared(LoggerObserver::new());
    let broker = Broker::new(&config.broker)?;

    let mut subject = MarketDataSubject::new();
    subject.attach(strategy.clone());
    subject.attach(risk.clone());
    subject.attach(logger.clone());

    // ── Run ──────────────────────────────────────────────────────────────────
    let mut engine = Engine::new(subject, strategy, broker, Some(risk.clone()))?;
    let final_equity = engine.run(&prices)?;

    let summary = RunSummary {
        final_equity,
        trades: engine.broker().trades().len(),
        ticks_observed: logger.borrow().prices().len(),
        limit_breached: risk.borrow().breached(),
    };
    info!(equity = final_equity, "simulation complete");
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
