use common::{MarketObserver, Result};

/// Observer that records every broadcast price for post-hoc inspection.
#[derive(Debug, Default)]
pub struct LoggerObserver {
    prices: Vec<f64>,
}

impl LoggerObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// All prices observed so far, in arrival order.
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// Clear the price log.
    pub fn reset(&mut self) {
        self.prices.clear();
    }
}

impl MarketObserver for LoggerObserver {
    fn name(&self) -> &str {
        "price-logger"
    }

    fn update(&mut self, price: f64) -> Result<()> {
        self.prices.push(price);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_all_prices_in_order() {
        let mut logger = LoggerObserver::new();
        for price in [100.0, 101.0, 99.5] {
            logger.update(price).unwrap();
        }
        assert_eq!(logger.prices(), &[100.0, 101.0, 99.5]);
    }

    #[test]
    fn reset_clears_the_log() {
        let mut logger = LoggerObserver::new();
        logger.update(100.0).unwrap();
        logger.reset();
        assert!(logger.prices().is_empty());
    }
}
