//! `NestedMap` / `NestedLookup` implementations for std maps.
//!
//! One key is the base case. Every deeper level is generated by the
//! `btree_level!` and `hash_level!` macros, each delegating the tail of the
//! key tuple to the inner map.

use super::{NestedLookup, NestedMap};
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

impl<K, V> NestedMap<(K,)> for BTreeMap<K, V>
where
    K: Ord,
{
    type Value = V;

    #[inline]
    fn put_nested(&mut self, (key,): (K,), value: V) -> Option<V> {
        self.insert(key, value)
    }
}

impl<'q, Q, K, V> NestedLookup<(&'q Q,)> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Value = V;

    #[inline]
    fn get_nested(&self, (key,): (&'q Q,)) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, S> NestedMap<(K,)> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Value = V;

    #[inline]
    fn put_nested(&mut self, (key,): (K,), value: V) -> Option<V> {
        self.insert(key, value)
    }
}

impl<'q, Q, K, V, S> NestedLookup<(&'q Q,)> for HashMap<K, V, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    type Value = V;

    #[inline]
    fn get_nested(&self, (key,): (&'q Q,)) -> Option<&V> {
        self.get(key)
    }
}

macro_rules! btree_level {
    ($($K:ident $Q:ident $k:ident),+) => {
        impl<K0, V, $($K),+> NestedMap<(K0, $($K),+)> for BTreeMap<K0, V>
        where
            K0: Ord,
            V: NestedMap<($($K,)+)> + Default,
        {
            type Value = <V as NestedMap<($($K,)+)>>::Value;

            fn put_nested(
                &mut self,
                (head, $($k),+): (K0, $($K),+),
                value: Self::Value,
            ) -> Option<Self::Value> {
                self.entry(head).or_default().put_nested(($($k,)+), value)
            }
        }

        impl<'q, Q0, K0, V, $($Q),+> NestedLookup<(&'q Q0, $(&'q $Q),+)> for BTreeMap<K0, V>
        where
            K0: Borrow<Q0> + Ord,
            Q0: Ord + ?Sized,
            $($Q: ?Sized,)+
            V: NestedLookup<($(&'q $Q,)+)>,
        {
            type Value = <V as NestedLookup<($(&'q $Q,)+)>>::Value;

            fn get_nested(
                &self,
                (head, $($k),+): (&'q Q0, $(&'q $Q),+),
            ) -> Option<&Self::Value> {
                self.get(head)?.get_nested(($($k,)+))
            }
        }
    };
}

macro_rules! hash_level {
    ($($K:ident $Q:ident $k:ident),+) => {
        impl<K0, V, S, $($K),+> NestedMap<(K0, $($K),+)> for HashMap<K0, V, S>
        where
            K0: Eq + Hash,
            S: BuildHasher,
            V: NestedMap<($($K,)+)> + Default,
        {
            type Value = <V as NestedMap<($($K,)+)>>::Value;

            fn put_nested(
                &mut self,
                (head, $($k),+): (K0, $($K),+),
                value: Self::Value,
            ) -> Option<Self::Value> {
                self.entry(head).or_default().put_nested(($($k,)+), value)
            }
        }

        impl<'q, Q0, K0, V, S, $($Q),+> NestedLookup<(&'q Q0, $(&'q $Q),+)> for HashMap<K0, V, S>
        where
            K0: Borrow<Q0> + Eq + Hash,
            Q0: Eq + Hash + ?Sized,
            S: BuildHasher,
            $($Q: ?Sized,)+
            V: NestedLookup<($(&'q $Q,)+)>,
        {
            type Value = <V as NestedLookup<($(&'q $Q,)+)>>::Value;

            fn get_nested(
                &self,
                (head, $($k),+): (&'q Q0, $(&'q $Q),+),
            ) -> Option<&Self::Value> {
                self.get(head)?.get_nested(($($k,)+))
            }
        }
    };
}

macro_rules! levels {
    ($(($($K:ident $Q:ident $k:ident),+)),+ $(,)?) => {
        $(
            btree_level!($($K $Q $k),+);
            hash_level!($($K $Q $k),+);
        )+
    };
}

levels! {
    (K1 Q1 k1),
    (K1 Q1 k1, K2 Q2 k2),
    (K1 Q1 k1, K2 Q2 k2, K3 Q3 k3),
    (K1 Q1 k1, K2 Q2 k2, K3 Q3 k3, K4 Q4 k4),
    (K1 Q1 k1, K2 Q2 k2, K3 Q3 k3, K4 Q4 k4, K5 Q5 k5),
}

#[cfg(test)]
mod tests {
    use super::*;

    type Table = BTreeMap<String, BTreeMap<String, i32>>;

    fn keys(a: &str, b: &str) -> (String, String) {
        (a.to_owned(), b.to_owned())
    }

    #[test]
    fn put_creates_levels_and_get_reads_them() {
        let mut table = Table::new();
        assert_eq!(table.put_nested(keys("x", "y"), 5), None);
        assert_eq!(table.put_nested(keys("x", "z"), 9), None);
        assert_eq!(table.get_nested(("x", "y")), Some(&5));
        assert_eq!(table.get_nested(("x", "z")), Some(&9));
        assert_eq!(table.len(), 1);
        assert_eq!(table["x"].len(), 2);
    }

    #[test]
    fn put_returns_previous_value() {
        let mut table = Table::new();
        table.put_nested(keys("a", "b"), 1);
        assert_eq!(table.put_nested(keys("a", "b"), 2), Some(1));
        assert_eq!(table.get_nested(("a", "b")), Some(&2));
    }

    #[test]
    fn get_never_creates_levels() {
        let table = Table::new();
        assert_eq!(table.get_nested(("x", "y")), None);
        assert!(table.is_empty());

        let mut table = Table::new();
        table.put_nested(keys("x", "y"), 1);
        assert_eq!(table.get_nested(("x", "nope")), None);
        assert_eq!(table.get_nested(("nope", "y")), None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn three_levels_on_hash_maps() {
        let mut grid: HashMap<u8, HashMap<u8, HashMap<u8, char>>> = HashMap::new();
        assert_eq!(grid.put_nested((1, 2, 3), 'a'), None);
        assert_eq!(grid.put_nested((1, 2, 4), 'b'), None);
        assert_eq!(grid.put_nested((1, 2, 3), 'c'), Some('a'));
        assert_eq!(grid.get_nested((&1u8, &2u8, &3u8)), Some(&'c'));
        assert_eq!(grid.get_nested((&1u8, &9u8, &3u8)), None);
        assert_eq!(grid[&1u8][&2u8].len(), 2);
    }

    #[test]
    fn six_levels_mixed_map_kinds() {
        type Leaf = BTreeMap<u8, HashMap<u8, &'static str>>;
        type Deep = BTreeMap<u8, HashMap<u8, BTreeMap<u8, HashMap<u8, Leaf>>>>;
        let mut deep = Deep::new();
        assert_eq!(deep.put_nested((1, 2, 3, 4, 5, 6), "leaf"), None);
        assert_eq!(deep.get_nested((&1u8, &2u8, &3u8, &4u8, &5u8, &6u8)), Some(&"leaf"));
        assert_eq!(deep.get_nested((&1u8, &2u8, &3u8, &4u8, &5u8, &7u8)), None);
    }

    #[test]
    fn single_key_is_plain_insert() {
        let mut flat: BTreeMap<&str, u32> = BTreeMap::new();
        assert_eq!(flat.put_nested(("k",), 1), None);
        assert_eq!(flat.put_nested(("k",), 2), Some(1));
        assert_eq!(flat.get_nested(("k",)), Some(&2));
    }
}
