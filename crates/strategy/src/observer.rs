use tracing::debug;

use common::{Error, MarketObserver, Result, Signal};

use crate::config::StrategyConfig;
use crate::indicators::VolatilityBreakout;

/// Signal-generating observer.
///
/// Keeps a rolling window of prices and recomputes `current_signal` on every
/// update. The engine reads `current_signal` *before* broadcasting the
/// current tick, so the signal driving the trade at tick `t` was computed
/// from prices up to and including tick `t - 1`.
pub struct StrategyObserver {
    window: usize,
    indicator: VolatilityBreakout,
    history: Vec<f64>,
    current_signal: Signal,
}

impl StrategyObserver {
    pub fn new(config: &StrategyConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            window: config.window,
            indicator: VolatilityBreakout::new(config.window),
            history: Vec::with_capacity(config.window),
            current_signal: Signal::Flat,
        })
    }

    /// The signal computed from all prices seen so far. `Flat` until the
    /// rolling window has filled.
    pub fn current_signal(&self) -> Signal {
        self.current_signal
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Clear the price history and signal.
    pub fn reset(&mut self) {
        self.history.clear();
        self.current_signal = Signal::Flat;
    }
}

impl MarketObserver for StrategyObserver {
    fn name(&self) -> &str {
        "volatility-breakout"
    }

    fn update(&mut self, price: f64) -> Result<()> {
        if !price.is_finite() || price <= 0.0 {
            // Bad data invalidates the signal but leaves the history intact.
            self.current_signal = Signal::Flat;
            return Err(Error::InvalidPrice(price));
        }

        self.history.push(price);
        if self.history.len() > self.window {
            self.history.remove(0);
        }

        let signal = self
            .indicator
            .compute(&self.history)
            .unwrap_or(Signal::Flat);
        if signal != self.current_signal {
            debug!(signal = %signal, price = price, "signal changed");
        }
        self.current_signal = signal;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn observer(window: usize) -> StrategyObserver {
        StrategyObserver::new(&StrategyConfig { window }).unwrap()
    }

    #[test]
    fn initial_signal_is_flat() {
        assert_eq!(observer(5).current_signal(), Signal::Flat);
    }

    #[test]
    fn zero_window_rejected_at_construction() {
        assert!(StrategyObserver::new(&StrategyConfig { window: 0 }).is_err());
    }

    #[test]
    fn signal_stays_flat_until_window_fills() {
        let mut obs = observer(5);
        for price in [100.0, 101.0, 102.0, 103.0] {
            obs.update(price).unwrap();
            assert_eq!(obs.current_signal(), Signal::Flat);
        }
    }

    #[test]
    fn history_is_bounded_by_window() {
        let mut obs = observer(3);
        for i in 0..10 {
            obs.update(100.0 + i as f64).unwrap();
        }
        assert_eq!(obs.history_len(), 3);
    }

    #[test]
    fn breakout_produces_long_signal() {
        let mut obs = observer(4);
        for price in [100.0, 101.0, 100.0, 120.0] {
            obs.update(price).unwrap();
        }
        assert_eq!(obs.current_signal(), Signal::Long);
    }

    #[test]
    fn invalid_price_resets_signal_and_reports_failure() {
        let mut obs = observer(4);
        for price in [100.0, 101.0, 100.0, 120.0] {
            obs.update(price).unwrap();
        }
        assert_eq!(obs.current_signal(), Signal::Long);

        let err = obs.update(f64::NAN);
        assert!(err.is_err());
        assert_eq!(obs.current_signal(), Signal::Flat);
        // History is untouched by the bad tick.
        assert_eq!(obs.history_len(), 4);
    }

    #[test]
    fn reset_clears_state() {
        let mut obs = observer(4);
        for price in [100.0, 101.0, 100.0, 120.0] {
            obs.update(price).unwrap();
        }
        obs.reset();
        assert_eq!(obs.current_signal(), Signal::Flat);
        assert_eq!(obs.history_len(), 0);
    }

    proptest! {
        /// Any sequence of valid prices must update without error and leave
        /// the signal in one of the three defined states.
        #[test]
        fn valid_price_streams_never_fail(
            prices in proptest::collection::vec(0.01f64..1_000_000.0, 1..100),
            window in 1usize..50,
        ) {
            let mut obs = observer(window);
            for price in prices {
                obs.update(price).unwrap();
                prop_assert!(matches!(
                    obs.current_signal(),
                    Signal::Long | Signal::Short | Signal::Flat
                ));
                prop_assert!(obs.history_len() <= window);
            }
        }
    }
}
