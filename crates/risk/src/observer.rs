use serde::{Deserialize, Serialize};
use tracing::warn;

use common::{Error, MarketObserver, Result};

/// User-configurable risk parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Maximum absolute notional exposure (|position * price|) before the
    /// breach flag trips.
    pub position_limit: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            position_limit: 10_000.0,
        }
    }
}

impl RiskConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.position_limit.is_finite() || self.position_limit <= 0.0 {
            return Err(Error::Config(format!(
                "position limit must be positive and finite, got {}",
                self.position_limit
            )));
        }
        Ok(())
    }
}

/// Observes prices for context and checks exposure limits on demand.
///
/// Price updates never evaluate risk; the engine calls `check` after each
/// trade, because the breach condition needs the post-trade position that is
/// not available during pure price notification.
pub struct RiskObserver {
    position_limit: f64,
    breached: bool,
    last_price: Option<f64>,
}

impl RiskObserver {
    pub fn new(config: &RiskConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            position_limit: config.position_limit,
            breached: false,
            last_price: None,
        })
    }

    /// Evaluate the post-trade exposure. Sets and returns the breach flag.
    /// The flag is recomputed on every call, so a later in-limit check
    /// clears an earlier breach.
    pub fn check(&mut self, position: f64, price: f64) -> bool {
        let exposure = (position * price).abs();
        self.breached = exposure > self.position_limit;
        if self.breached {
            warn!(
                exposure = exposure,
                limit = self.position_limit,
                "position limit breached"
            );
        }
        self.breached
    }

    pub fn breached(&self) -> bool {
        self.breached
    }

    /// Last valid price seen via `update`, kept for post-hoc context.
    pub fn last_price(&self) -> Option<f64> {
        self.last_price
    }
}

impl MarketObserver for RiskObserver {
    fn name(&self) -> &str {
        "risk-monitor"
    }

    fn update(&mut self, price: f64) -> Result<()> {
        if price.is_finite() && price > 0.0 {
            self.last_price = Some(price);
        }
        Ok(())
    }
}
