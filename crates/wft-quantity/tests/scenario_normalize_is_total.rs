//! Property checks: normalization is total and stable under re-rendering.

use proptest::prelude::*;
use wft_quantity::*;

proptest! {
    #[test]
    fn any_text_yields_a_finite_number(s in any::<String>()) {
        prop_assert!(normalize_str(&s).is_finite());
    }

    #[test]
    fn quantity_like_text_yields_a_finite_number(s in "[-+0-9., a-zA-Zçã/]{0,24}") {
        prop_assert!(normalize(&QuantityInput::Text(s)).is_finite());
    }

    #[test]
    fn any_number_yields_a_finite_number(n in any::<f64>()) {
        prop_assert!(normalize(&QuantityInput::Number(n)).is_finite());
    }

    #[test]
    fn rendering_the_result_is_idempotent(s in "[-0-9.,]{0,16}( ?(un|kg|pçs))?") {
        let once = normalize_str(&s);
        let twice = normalize_str(&once.to_string());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn finite_numbers_round_trip_through_text(n in -1.0e12f64..1.0e12f64) {
        prop_assert_eq!(normalize_str(&n.to_string()), n);
    }
}
