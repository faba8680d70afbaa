//! Collection conversions.

use crate::seen::SeenSet;
use std::hash::Hash;

/// Counts the elements of `items` equal to `value`.
pub fn occurrences<'a, T, I>(value: &T, items: I) -> usize
where
    T: PartialEq + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().filter(|item| *item == value).count()
}

/// Collects `items` keeping only the first occurrence of each element, in
/// encounter order.
pub fn to_ordered_set<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = SeenSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_equal_elements() {
        let items = vec!["a", "b", "a", "c", "a"];
        assert_eq!(occurrences(&"a", &items), 3);
        assert_eq!(occurrences(&"z", &items), 0);
        assert_eq!(occurrences(&1, &Vec::<i32>::new()), 0);
    }

    #[test]
    fn ordered_set_keeps_first_occurrence() {
        assert_eq!(to_ordered_set([3, 1, 3, 2, 1]), vec![3, 1, 2]);
        assert_eq!(to_ordered_set(Vec::<u8>::new()), Vec::<u8>::new());
    }
}
