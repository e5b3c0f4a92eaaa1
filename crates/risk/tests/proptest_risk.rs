use proptest::prelude::*;

use risk::{RiskConfig, RiskObserver};

proptest! {
    /// Risk checks on randomized inputs must never panic and must match the
    /// exposure rule exactly.
    #[test]
    fn check_matches_exposure_rule(
        position in -1_000_000.0f64..1_000_000.0,
        price in 0.0001f64..1_000_000.0,
        limit in 0.0001f64..1_000_000_000.0,
    ) {
        let mut observer = RiskObserver::new(&RiskConfig { position_limit: limit }).unwrap();
        let breached = observer.check(position, price);
        prop_assert_eq!(breached, (position * price).abs() > limit);
        prop_assert_eq!(observer.breached(), breached);
    }

    /// Price updates alone never flip the breach flag.
    #[test]
    fn updates_never_breach(
        prices in proptest::collection::vec(0.0001f64..1_000_000.0, 1..50),
    ) {
        use common::MarketObserver;

        let mut observer = RiskObserver::new(&RiskConfig::default()).unwrap();
        for price in prices {
            observer.update(price).unwrap();
            prop_assert!(!observer.breached());
        }
    }
}
