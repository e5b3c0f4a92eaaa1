use common::Signal;

/// Volatility-breakout rule over a rolling price window.
///
/// Computes simple returns over the last `window` closes and compares the
/// latest return against the population standard deviation of those returns.
/// A move beyond one standard deviation in either direction is a breakout.
#[derive(Debug, Clone)]
pub struct VolatilityBreakout {
    pub window: usize,
}

impl VolatilityBreakout {
    pub fn new(window: usize) -> Self {
        Self { window }
    }

    /// Compute a signal from a slice of close prices (oldest first).
    /// Returns `None` until a full window of prices is available.
    pub fn compute(&self, closes: &[f64]) -> Option<Signal> {
        // One return needs two prices, so a window of 1 can never signal.
        if self.window < 2 || closes.len() < self.window {
            return None;
        }

        let recent = &closes[closes.len() - self.window..];
        let returns: Vec<f64> = recent
            .windows(2)
            .map(|pair| (pair[1] - pair[0]) / pair[0])
            .collect();

        let latest = returns[returns.len() - 1];
        let band = population_std(&returns);

        if band > 0.0 {
            if latest > band {
                Some(Signal::Long)
            } else if latest < -band {
                Some(Signal::Short)
            } else {
                Some(Signal::Flat)
            }
        } else {
            Some(Signal::Flat)
        }
    }
}

/// Population standard deviation (divides by n, matching the rolling
/// volatility definition used for the band).
fn population_std(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    let variance = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}
