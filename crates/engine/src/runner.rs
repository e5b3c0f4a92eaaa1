use std::cell::RefCell;
use std::rc::Rc;

use tracing::{info, warn};

use broker::Broker;
use common::{Error, Result};
use risk::RiskObserver;
use strategy::StrategyObserver;

use crate::subject::{MarketDataSubject, SharedObserver};

/// Per-tick orchestration of signal generation, order execution and risk
/// evaluation.
///
/// The strategy handle MUST alias one of the observers attached to the
/// subject — the engine reads the signal that `notify` mutates. `new`
/// validates this and refuses to build an engine whose strategy would never
/// see a price.
///
/// Tick ordering (strict no-look-ahead):
/// 1. read the strategy's signal, computed from ticks before this one;
/// 2. broadcast the current price (updates the signal for the *next* tick);
/// 3. trade on the signal from step 1;
/// 4. risk-check the post-trade position.
pub struct Engine {
    subject: MarketDataSubject,
    strategy: Rc<RefCell<StrategyObserver>>,
    broker: Broker,
    risk: Option<Rc<RefCell<RiskObserver>>>,
}

impl Engine {
    pub fn new(
        subject: MarketDataSubject,
        strategy: Rc<RefCell<StrategyObserver>>,
        broker: Broker,
        risk: Option<Rc<RefCell<RiskObserver>>>,
    ) -> Result<Self> {
        let handle: SharedObserver = strategy.clone();
        if !subject.is_attached(&handle) {
            return Err(Error::Config(
                "strategy observer is not attached to the subject".to_string(),
            ));
        }
        Ok(Self {
            subject,
            strategy,
            broker,
            risk,
        })
    }

    pub fn broker(&self) -> &Broker {
        &self.broker
    }

    /// Run the simulation over a price sequence and return the final equity.
    ///
    /// Observer failures during broadcast are logged and never halt the run.
    /// Broker errors are fatal and propagate to the caller. Non-finite or
    /// non-positive input prices are skipped with a warning.
    pub fn run(&mut self, prices: &[f64]) -> Result<f64> {
        info!(ticks = prices.len(), "simulation starting");

        let mut last_price: Option<f64> = None;
        for (tick, &price) in prices.iter().enumerate() {
            if !price.is_finite() || price <= 0.0 {
                warn!(tick = tick, price = price, "skipping invalid price");
                continue;
            }

            // Signal computed from ticks up to and including t-1.
            let signal = self.strategy.borrow().current_signal();

            if let Err(e) = self.subject.notify(price) {
                warn!(tick = tick, error = %e, "observer notification failed, continuing");
            }

            self.broker.execute(signal, price)?;

            if let Some(risk) = &self.risk {
                risk.borrow_mut().check(self.broker.position(), price);
            }

            last_price = Some(price);
        }

        let equity = match last_price {
            Some(price) => self.broker.mark_to_market(price),
            None => self.broker.cash(),
        };
        info!(
            equity = equity,
            trades = self.broker.trades().len(),
            "simulation finished"
        );
        Ok(equity)
    }
}
