use proptest::prelude::*;
use std::collections::BTreeSet;
use vecgraph::OrderedUniqueSet;

#[derive(Debug, Clone)]
enum Operation {
    Insert(u8),
    Remove(u8),
    Contains(u8),
}

proptest! {
    #[test]
    fn test_set_matches_std_btree_set(ops in proptest::collection::vec(
        prop_oneof![
            any::<u8>().prop_map(Operation::Insert),
            any::<u8>().prop_map(Operation::Remove),
            any::<u8>().prop_map(Operation::Contains),
        ],
        1..200
    )) {
        let mut std_set = BTreeSet::new();
        let mut set = OrderedUniqueSet::new();

        for op in ops {
            match op {
                Operation::Insert(v) => {
                    assert_eq!(std_set.insert(v), set.insert(v), "Insert result mismatch for {}", v);
                }
                Operation::Remove(v) => {
                    assert_eq!(std_set.remove(&v), set.remove(&v), "Remove result mismatch for {}", v);
                }
                Operation::Contains(v) => {
                    assert_eq!(std_set.contains(&v), set.contains(&v), "Contains mismatch for {}", v);
                }
            }
        }

        // Final consistency check: same elements, same ascending order.
        assert_eq!(set.len(), std_set.len());
        assert!(set.iter().eq(std_set.iter()));
    }

    #[test]
    fn test_construction_order_is_irrelevant(
        (values, shuffled) in proptest::collection::vec(any::<u8>(), 0..64)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let a: OrderedUniqueSet<u8> = values.iter().copied().collect();
        let b: OrderedUniqueSet<u8> = shuffled.into();
        prop_assert_eq!(&a, &b);

        // Duplicates collapse.
        let doubled: OrderedUniqueSet<u8> = values.iter().chain(values.iter()).copied().collect();
        prop_assert_eq!(&a, &doubled);
        prop_assert!(a.as_slice().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_insert_is_idempotent(values in proptest::collection::vec(any::<u16>(), 1..64), pick in any::<prop::sample::Index>()) {
        let mut set: OrderedUniqueSet<u16> = values.iter().copied().collect();
        let present = values[pick.index(values.len())];
        let before = set.clone();

        prop_assert!(!set.insert(present));
        prop_assert_eq!(set, before);
    }

    #[test]
    fn test_set_algebra_matches_std(
        a in proptest::collection::btree_set(0u8..64, 0..32),
        b in proptest::collection::btree_set(0u8..64, 0..32),
    ) {
        let sa: OrderedUniqueSet<u8> = a.iter().copied().collect();
        let sb: OrderedUniqueSet<u8> = b.iter().copied().collect();

        prop_assert!(sa.union(&sb).iter().eq(a.union(&b)));
        prop_assert!(sa.intersection(&sb).iter().eq(a.intersection(&b)));
        prop_assert!(sa.difference(&sb).iter().eq(a.difference(&b)));
        prop_assert_eq!(sa.is_subset(&sb), a.is_subset(&b));
        prop_assert_eq!(sa.is_disjoint(&sb), a.is_disjoint(&b));
    }
}
