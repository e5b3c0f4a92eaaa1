pub mod config;
pub mod indicators;
pub mod observer;

pub use config::StrategyConfig;
pub use indicators::VolatilityBreakout;
pub use observer::StrategyObserver;
