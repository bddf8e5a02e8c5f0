use proptest::prelude::*;

use slices::Sequence;

fn arb_sequence() -> impl Strategy<Value = Sequence<i32>> {
    prop_oneof![
        1 => Just(Sequence::<i32>::Absent),
        4 => proptest::collection::vec(-5..5i32, 0..20).prop_map(Sequence::Present),
    ]
}

proptest! {
    #[test]
    fn clone_is_equal(s in arb_sequence()) {
        let copy = s.clone_sequence();
        prop_assert!(copy.equal(&s));
        if let (Some(a), Some(b)) = (s.as_slice(), copy.as_slice()) {
            if !a.is_empty() {
                prop_assert_ne!(a.as_ptr(), b.as_ptr());
            }
        }
    }

    #[test]
    fn reverse_twice_is_identity(s in arb_sequence()) {
        prop_assert_eq!(s.reverse().reverse(), s);
    }

    #[test]
    fn index_of_agrees_with_contains(s in arb_sequence(), x in -6..6i32) {
        prop_assert_eq!(s.index_of(&x) != -1, s.contains(&x));
        prop_assert_eq!(s.last_index_of(&x) != -1, s.contains(&x));
    }

    #[test]
    fn count_matches_positions(s in arb_sequence(), x in -5..5i32) {
        let count = s.count(&x);
        prop_assert_eq!(count == 0, s.position(&x).is_none());
        if count > 0 {
            prop_assert!(s.position(&x) <= s.last_position(&x));
        }
    }

    #[test]
    fn repeat_zero_is_present_empty(s in arb_sequence()) {
        prop_assert_eq!(s.repeat(0), Ok(Sequence::empty()));
    }

    #[test]
    fn repeat_length(s in arb_sequence(), count in 1..5isize) {
        let repeated = s.repeat(count).unwrap();
        prop_assert_eq!(repeated.is_absent(), s.is_absent());
        prop_assert_eq!(repeated.len(), s.len() * count as usize);
    }

    #[test]
    fn replace_unlimited_is_replace_all(s in arb_sequence(), old in -5..5i32, new in -5..5i32) {
        prop_assert_eq!(s.replace(&old, &new, -1), s.replace_all(&old, &new));
    }

    #[test]
    fn replace_limit(s in arb_sequence(), old in -5..5i32, n in 0..4isize) {
        let before = s.count(&old);
        let replaced = s.replace(&old, &(old + 100), n);
        prop_assert_eq!(replaced.count(&old), before - before.min(n as usize));
    }

    #[test]
    fn join_length(a in arb_sequence(), b in arb_sequence()) {
        let joined = a.join(&b);
        prop_assert_eq!(joined.len(), a.len() + b.len());
        prop_assert_eq!(joined.is_absent(), a.is_absent() && b.is_absent());
    }

    #[test]
    fn map_keeps_shape(s in arb_sequence()) {
        let mapped = s.map_with(|x| i64::from(*x) * 2);
        prop_assert_eq!(mapped.is_absent(), s.is_absent());
        prop_assert_eq!(mapped.len(), s.len());
    }

    #[test]
    fn sum_matches_iterator(s in arb_sequence()) {
        prop_assert_eq!(s.sum(), s.iter().sum::<i32>());
        prop_assert_eq!(s.checked_sum(), Ok(s.sum()));
    }
}
