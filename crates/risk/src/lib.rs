pub mod observer;

pub use observer::{RiskConfig, RiskObserver};
