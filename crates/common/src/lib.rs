pub mod error;
pub mod observer;
pub mod types;

pub use error::{Error, Result};
pub use observer::MarketObserver;
pub use types::*;
