use serde::{Deserialize, Serialize};

use broker::BrokerConfig;
use common::{Error, Result};
use risk::RiskConfig;
use strategy::StrategyConfig;

/// Price input for a simulation run: inline values, a file with one price
/// per line, or both (inline wins).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default)]
    pub prices: Option<Vec<f64>>,
    #[serde(default)]
    pub prices_file: Option<String>,
}

impl DataConfig {
    /// Materialise the price sequence this run should process.
    pub fn resolve_prices(&self) -> Result<Vec<f64>> {
        if let Some(prices) = &self.prices {
            return Ok(prices.clone());
        }
        if let Some(path) = &self.prices_file {
            let content = std::fs::read_to_string(path)?;
            let mut prices = Vec::new();
            for (line_no, line) in content.lines().enumerate() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                let price: f64 = line.parse().map_err(|_| {
                    Error::Config(format!(
                        "{path}:{}: not a number: '{line}'",
                        line_no + 1
                    ))
                })?;
                prices.push(price);
            }
            return Ok(prices);
        }
        Err(Error::Config(
            "data section needs either 'prices' or 'prices_file'".to_string(),
        ))
    }
}

/// Top-level simulation config file (TOML).
///
/// Example `config/simulation.toml`:
/// ```toml
/// [strategy]
/// window = 20
///
/// [risk]
/// position_limit = 10000.0
///
/// [broker]
/// cash = 1000000.0
/// order_size = 100.0
///
/// [data]
/// prices = [100.0, 101.0, 99.0, 105.0]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    #[serde(default)]
    pub strategy: StrategyConfig,
    #[serde(default)]
    pub risk: RiskConfig,
    #[serde(default)]
    pub broker: BrokerConfig,
    #[serde(default)]
    pub data: DataConfig,
}

impl SimConfig {
    /// Load and validate a config file. All validation happens here, before
    /// any component is built.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SimConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.strategy.validate()?;
        self.risk.validate()?;
        self.broker.validate()?;
        Ok(())
    }
}
