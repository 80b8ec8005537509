//! Round-trip properties for the numeric writers.

use num_bigint::{BigInt, BigUint, Sign};
use proptest::prelude::*;

use textbuf::Builder;

fn rendered<F>(f: F) -> String
where
    F: FnOnce(Builder) -> Builder,
{
    Builder::run(f).into_string()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn decimal_round_trips_u128(v in any::<u128>()) {
        let s = rendered(|b| b.append_dec(v));
        prop_assert_eq!(s.parse::<u128>().unwrap(), v);
    }

    #[test]
    fn decimal_round_trips_isize(v in any::<isize>()) {
        let s = rendered(|b| b.append_dec(v));
        prop_assert_eq!(s.parse::<isize>().unwrap(), v);
    }

    #[test]
    fn decimal_round_trips_small_widths(a in any::<i8>(), b in any::<u16>(), c in any::<i32>()) {
        prop_assert_eq!(rendered(|x| x.append_dec(a)).parse::<i8>().unwrap(), a);
        prop_assert_eq!(rendered(|x| x.append_dec(b)).parse::<u16>().unwrap(), b);
        prop_assert_eq!(rendered(|x| x.append_dec(c)).parse::<i32>().unwrap(), c);
    }

    #[test]
    fn hex_round_trips_u128(v in any::<u128>()) {
        let s = rendered(|b| b.append_hex(v));
        prop_assert_eq!(u128::from_str_radix(&s, 16).unwrap(), v);
    }

    #[test]
    fn hex_is_entirely_lower_case(v in any::<u64>()) {
        let s = rendered(|b| b.append_hex(v));
        prop_assert!(!s.chars().any(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn big_integers_round_trip(words in prop::collection::vec(any::<u32>(), 0..20), negative in any::<bool>()) {
        let magnitude = BigUint::new(words);
        let value = if negative {
            BigInt::from_biguint(Sign::Minus, magnitude)
        } else {
            BigInt::from_biguint(Sign::Plus, magnitude)
        };
        let s = rendered(|b| b.append_big(&value));
        prop_assert_eq!(s.parse::<BigInt>().unwrap(), value);
    }

    #[test]
    fn doubles_round_trip_bit_exactly(v in any::<f64>()) {
        prop_assume!(v.is_finite());
        let s = rendered(|b| b.append_f64(v));
        let parsed: f64 = s.parse().unwrap();
        prop_assert_eq!(parsed.to_bits(), v.to_bits());
    }

    #[test]
    fn numbers_compose_with_text_on_both_sides(v in any::<i64>(), h in any::<u32>()) {
        let s = rendered(|b| {
            b.append_str("[")
                .append_dec(v)
                .append_str("/")
                .append_hex(h)
                .append_str("]")
                .prepend_dec(v)
        });
        prop_assert_eq!(s, format!("{v}[{v}/{h:x}]"));
    }
}
