use serde::{Deserialize, Serialize};

use common::{Error, Result};

/// Strategy parameters, normally loaded from the `[strategy]` section of the
/// simulation config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// Size of the rolling price window used for signal computation.
    pub window: usize,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self { window: 20 }
    }
}

impl StrategyConfig {
    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(Error::Config(
                "strategy window must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
