//! Algebraic laws: concatenation, duplication, slicing, erasure.

use proptest::prelude::*;

use textbuf::Builder;

/// Applies a mix of appends and prepends, mirroring them onto `expected`.
fn materialize(
    parts: &[(bool, String)],
    mut b: Builder,
    mut expected: String,
) -> (Builder, String) {
    for (prepend, s) in parts {
        if *prepend {
            expected.insert_str(0, s);
            b = b.prepend_str(s);
        } else {
            expected.push_str(s);
            b = b.append_str(s);
        }
    }
    (b, expected)
}

fn parts_strategy() -> impl Strategy<Value = Vec<(bool, String)>> {
    prop::collection::vec((any::<bool>(), ".{0,10}"), 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn concat_is_associative(
        xs in parts_strategy(),
        ys in parts_strategy(),
        zs in parts_strategy(),
    ) {
        let left = Builder::run(|b| {
            let (a, _) = materialize(&xs, Builder::new(), String::new());
            let (c, _) = materialize(&ys, Builder::new(), String::new());
            let (d, _) = materialize(&zs, Builder::new(), String::new());
            b.concat(a.concat(c).concat(d))
        });
        let right = Builder::run(|b| {
            let (a, _) = materialize(&xs, Builder::new(), String::new());
            let (c, _) = materialize(&ys, Builder::new(), String::new());
            let (d, _) = materialize(&zs, Builder::new(), String::new());
            b.concat(a.concat(c.concat(d)))
        });
        prop_assert_eq!(left.as_str(), right.as_str());
    }

    #[test]
    fn concat_matches_string_concatenation(
        xs in parts_strategy(),
        ys in parts_strategy(),
    ) {
        let mut expected = String::new();
        let text = Builder::run(|b| {
            let (a, ea) = materialize(&xs, Builder::new(), String::new());
            let (c, ec) = materialize(&ys, Builder::new(), String::new());
            expected = format!("{ea}{ec}");
            b.concat(a).concat(c)
        });
        prop_assert_eq!(text.as_str(), expected.as_str());
    }

    #[test]
    fn duplicate_branches_do_not_interfere(
        base in parts_strategy(),
        left in parts_strategy(),
        right in parts_strategy(),
    ) {
        let mut expected = String::new();
        let text = Builder::run(|b| {
            let (b, shared) = materialize(&base, b, String::new());
            let (b1, b2) = b.duplicate();
            let (b1, e1) = materialize(&left, b1, shared.clone());
            let (b2, e2) = materialize(&right, b2, shared);
            // If the branches shared storage, either side's edits would
            // corrupt the other; equality of the joined text rules that out.
            expected = format!("{e1}{e2}");
            b1.concat(b2)
        });
        prop_assert_eq!(text.as_str(), expected.as_str());
    }

    #[test]
    fn take_plus_drop_is_identity(parts in parts_strategy(), n in 0usize..30) {
        let mut expected = String::new();
        let text = Builder::run(|b| {
            let (b, e) = materialize(&parts, b, String::new());
            expected = e;
            let (b1, b2) = b.duplicate();
            b1.take_chars(n).concat(b2.drop_chars(n))
        });
        prop_assert_eq!(text.as_str(), expected.as_str());
    }

    #[test]
    fn take_zero_is_empty_and_drop_zero_is_identity(parts in parts_strategy()) {
        let mut expected = String::new();
        let text = Builder::run(|b| {
            let (b, e) = materialize(&parts, b, String::new());
            expected = e;
            let (b1, b2) = b.duplicate();
            let b1 = b1.take_chars(0);
            assert_eq!(b1.size_bytes(), 0);
            b1.concat(b2.drop_chars(0))
        });
        prop_assert_eq!(text.as_str(), expected.as_str());
    }

    #[test]
    fn erase_is_idempotent(parts in parts_strategy(), again in parts_strategy()) {
        let once = Builder::run(|b| {
            let (b, _) = materialize(&parts, b, String::new());
            let (b, _) = materialize(&again, b.erase(), String::new());
            b
        });
        let twice = Builder::run(|b| {
            let (b, _) = materialize(&parts, b, String::new());
            let (b, _) = materialize(&again, b.erase().erase(), String::new());
            b
        });
        prop_assert_eq!(once.as_str(), twice.as_str());
    }
}
