//! Identity properties that hold for any collection of referents:
//!
//! 1. Two wrappers are equal exactly when they refer to the same element.
//! 2. Equal wrappers hash equally.
//! 3. Ordering agrees with the order of the elements in memory.
//! 4. `Optional` agrees with `Required` on engaged references, and the absent
//!    reference is below all of them.

use indirect::{Optional, Required};
use proptest::prelude::*;
use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

fn hash<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn values_and_indices() -> impl Strategy<Value = (Vec<u8>, usize, usize)> {
    prop::collection::vec(any::<u8>(), 1..64).prop_flat_map(|values| {
        let len = values.len();
        (Just(values), 0..len, 0..len)
    })
}

proptest! {
    #[test]
    fn equality_is_identity((values, i, j) in values_and_indices()) {
        let a = Required::new(&values[i]);
        let b = Required::new(&values[j]);
        prop_assert_eq!(a == b, i == j);
        prop_assert_eq!(Optional::new(&values[i]) == b, i == j);
    }

    #[test]
    fn equal_wrappers_hash_equally((values, i, j) in values_and_indices()) {
        let a = Required::new(&values[i]);
        let b = Required::new(&values[j]);
        if a == b {
            prop_assert_eq!(hash(&a), hash(&b));
        }
        prop_assert_eq!(hash(&a), hash(&Optional::new(&values[i])));
    }

    #[test]
    fn ordering_follows_memory((values, i, j) in values_and_indices()) {
        let a = Required::new(&values[i]);
        let b = Required::new(&values[j]);
        prop_assert_eq!(a.cmp(&b), i.cmp(&j));
        prop_assert_eq!(
            Optional::new(&values[i]).cmp(&Optional::new(&values[j])),
            i.cmp(&j)
        );
    }

    #[test]
    fn absent_is_least((values, i, _j) in values_and_indices()) {
        let none = Optional::<u8>::none();
        let some = Optional::new(&values[i]);
        prop_assert!(none < some);
        prop_assert_ne!(none, some);
        prop_assert_eq!(none.max(some), some);
    }
}
