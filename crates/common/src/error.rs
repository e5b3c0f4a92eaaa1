use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Observer '{observer}' failed: {message}")]
    Observer { observer: String, message: String },

    #[error("Insufficient funds: need {needed:.2}, have {available:.2}")]
    InsufficientFunds { needed: f64, available: f64 },

    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
