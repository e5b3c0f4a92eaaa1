mod breakout;

pub use breakout::VolatilityBreakout;
