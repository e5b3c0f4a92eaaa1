pub mod config;
pub mod logger;
pub mod runner;
pub mod subject;

pub use config::{DataConfig, SimConfig};
pub use logger::LoggerObserver;
pub use runner::Engine;
pub use subject::{shared, MarketDataSubject, SharedObserver};
