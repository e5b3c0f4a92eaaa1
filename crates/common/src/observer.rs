use crate::Result;

/// Push-based receiver of market-data updates.
///
/// `StrategyObserver`, `RiskObserver` and `LoggerObserver` implement this.
/// The `MarketDataSubject` in `crates/engine` is the only caller of
/// `update`; observers never poll for prices.
pub trait MarketObserver {
    /// Short identifier used in logs and failure reports.
    fn name(&self) -> &str;

    /// Receive one price update. Observers may mutate their own state but
    /// must not assume anything about other observers or call order.
    fn update(&mut self, price: f64) -> Result<()>;
}
