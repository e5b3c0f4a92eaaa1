use serde::{Deserialize, Serialize};
use tracing::debug;

use common::{Error, OrderSide, Result, Signal, Trade};

/// Broker parameters, normally loaded from the `[broker]` section of the
/// simulation config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrokerConfig {
    /// Starting cash balance.
    pub cash: f64,
    /// Position size held per directional signal (LONG holds `+order_size`
    /// units, SHORT holds `-order_size`, FLAT holds zero).
    pub order_size: f64,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            cash: 1_000_000.0,
            order_size: 1.0,
        }
    }
}

impl BrokerConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.cash.is_finite() || self.cash < 0.0 {
            return Err(Error::Config(format!(
                "initial cash cannot be negative, got {}",
                self.cash
            )));
        }
        if !self.order_size.is_finite() || self.order_size <= 0.0 {
            return Err(Error::Config(format!(
                "order size must be positive, got {}",
                self.order_size
            )));
        }
        Ok(())
    }
}

/// In-memory cash and position ledger.
///
/// `execute` maps a signal to a target position and trades the difference.
/// Trades that would drive cash negative are rejected outright — cash and
/// position are never mutated by a failed execution. Short positions are
/// allowed; the position is a signed quantity.
pub struct Broker {
    cash: f64,
    position: f64,
    order_size: f64,
    trades: Vec<Trade>,
}

impl Broker {
    pub fn new(config: &BrokerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            cash: config.cash,
            position: 0.0,
            order_size: config.order_size,
            trades: Vec::new(),
        })
    }

    pub fn cash(&self) -> f64 {
        self.cash
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    /// Journal of executed trades, oldest first.
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    /// Trade towards the position the signal demands.
    ///
    /// Returns `Ok(None)` when the ledger is already at the target and
    /// nothing needs to trade.
    pub fn execute(&mut self, signal: Signal, price: f64) -> Result<Option<Trade>> {
        if !price.is_finite() || price <= 0.0 {
            return Err(Error::InvalidPrice(price));
        }

        let target = signal.direction() * self.order_size;
        let quantity = target - self.position;
        if quantity == 0.0 {
            return Ok(None);
        }

        let cost = quantity * price;
        if self.cash - cost < 0.0 {
            return Err(Error::InsufficientFunds {
                needed: cost,
                available: self.cash,
            });
        }

        self.cash -= cost;
        self.position += quantity;

        let side = if quantity > 0.0 {
            OrderSide::Buy
        } else {
            OrderSide::Sell
        };
        let trade = Trade::new(side, quantity.abs(), price);
        debug!(
            side = %trade.side,
            qty = trade.quantity,
            price = price,
            cash = self.cash,
            position = self.position,
            "trade executed"
        );
        self.trades.push(trade.clone());
        Ok(Some(trade))
    }

    /// Value the ledger at the given price. Pure; never mutates state.
    pub fn mark_to_market(&self, price: f64) -> f64 {
        self.cash + self.position * price
    }
}
