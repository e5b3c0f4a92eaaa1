use serde::{Deserialize, Serialize};

/// Discrete trading decision derived from recent price history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Long,
    Short,
    #[default]
    Flat,
}

impl Signal {
    /// Target position direction: +1 for long, -1 for short, 0 for flat.
    pub fn direction(self) -> f64 {
        match self {
            Signal::Long => 1.0,
            Signal::Short => -1.0,
            Signal::Flat => 0.0,
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Signal::Long => write!(f, "LONG"),
            Signal::Short => write!(f, "SHORT"),
            Signal::Flat => write!(f, "FLAT"),
        }
    }
}

/// Side of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "BUY"),
            OrderSide::Sell => write!(f, "SELL"),
        }
    }
}

/// A trade executed by the broker, recorded in its journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    pub id: String,
    pub side: OrderSide,
    /// Unsigned quantity; the side carries the direction.
    pub quantity: f64,
    pub price: f64,
}

impl Trade {
    pub fn new(side: OrderSide, quantity: f64, price: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            side,
            quantity,
            price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_defaults_to_flat() {
        assert_eq!(Signal::default(), Signal::Flat);
    }

    #[test]
    fn signal_directions() {
        assert_eq!(Signal::Long.direction(), 1.0);
        assert_eq!(Signal::Short.direction(), -1.0);
        assert_eq!(Signal::Flat.direction(), 0.0);
    }

    #[test]
    fn trades_get_unique_ids() {
        let a = Trade::new(OrderSide::Buy, 1.0, 100.0);
        let b = Trade::new(OrderSide::Buy, 1.0, 100.0);
        assert_ne!(a.id, b.id);
    }
}
