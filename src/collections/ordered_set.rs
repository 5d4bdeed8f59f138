//! `OrderedUniqueSet`: a deduplicating set stored as a sorted `Vec`.
//!
//! Elements live in one contiguous, ascending, duplicate-free buffer. Lookups
//! are binary searches and iteration is a plain slice walk, so the iteration
//! order is canonical: two sets holding the same elements iterate identically
//! no matter how they were built.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `insert` | \(O(n)\) | Binary search, then a shift of the tail |
//! | `contains` | \(O(\log n)\) | Binary search |
//! | `remove` | \(O(n)\) | Binary search, then a shift of the tail |
//! | `from_iter` / `extend` | \(O(n \log n)\) | One sort + dedup pass |
//! | `union` / `intersection` / `difference` | \(O(n + m)\) | Linear merge |
//!
//! ```rust
//! use vecgraph::OrderedUniqueSet;
//!
//! let a: OrderedUniqueSet<u32> = [1, 2, 1].into();
//! let b: OrderedUniqueSet<u32> = [2, 2, 1].into();
//! assert_eq!(a, b);
//! assert_eq!(a.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
//! ```

use core::cmp::Ordering;
use core::fmt;

/// A set with sorted, duplicate-free storage and deterministic iteration.
///
/// Equality, ordering and hashing all operate on the sorted contents, so two
/// sets compare equal exactly when they hold the same elements.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderedUniqueSet<T> {
    data: Vec<T>,
}

impl<T> OrderedUniqueSet<T> {
    /// Creates an empty set.
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty set with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Reserves room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Removes every element, keeping the allocation.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterates the elements in ascending order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns the sorted elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the element at `index` in ascending order.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Returns the smallest element.
    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the largest element.
    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }

    /// Consumes the set, returning the sorted elements.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Ord> OrderedUniqueSet<T> {
    /// Inserts `value`, keeping the storage sorted.
    ///
    /// Returns `false` and leaves the set untouched if an equal value is
    /// already present.
    pub fn insert(&mut self, value: T) -> bool {
        match self.data.binary_search(&value) {
            Ok(_) => false,
            Err(pos) => {
                self.data.insert(pos, value);
                true
            }
        }
    }

    /// Returns `true` if the set holds a value equal to `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.data.binary_search(value).is_ok()
    }

    /// Removes `value`, returning whether it was present.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.data.binary_search(value) {
            Ok(pos) => {
                self.data.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    /// Returns `true` if every element of `self` is in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        if self.len() > other.len() {
            return false;
        }
        // Both sides are sorted, so one forward pass over `other` suffices.
        let mut rest = other.data.iter();
        self.data.iter().all(|x| rest.any(|y| y == x))
    }

    /// Returns `true` if `self` and `other` share no element.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (mut i, mut j) = (0usize, 0usize);
        while let (Some(a), Some(b)) = (self.data.get(i), other.data.get(j)) {
            match a.cmp(b) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => return false,
            }
        }
        true
    }

    fn from_unsorted(mut data: Vec<T>) -> Self {
        data.sort_unstable();
        data.dedup();
        Self { data }
    }
}

/// Which sides of a linear merge end up in the output.
#[derive(Clone, Copy)]
struct Keep {
    left: bool,
    both: bool,
    right: bool,
}

impl<T: Ord + Clone> OrderedUniqueSet<T> {
    /// Returns the elements present in either set.
    pub fn union(&self, other: &Self) -> Self {
        self.merge(other, Keep { left: true, both: true, right: true })
    }

    /// Returns the elements present in both sets.
    pub fn intersection(&self, other: &Self) -> Self {
        self.merge(other, Keep { left: false, both: true, right: false })
    }

    /// Returns the elements of `self` missing from `other`.
    pub fn difference(&self, other: &Self) -> Self {
        self.merge(other, Keep { left: true, both: false, right: false })
    }

    fn merge(&self, other: &Self, keep: Keep) -> Self {
        let mut data = Vec::with_capacity(self.len().max(other.len()));
        let (mut i, mut j) = (0usize, 0usize);
        while let (Some(a), Some(b)) = (self.data.get(i), other.data.get(j)) {
            match a.cmp(b) {
                Ordering::Less => {
                    if keep.left {
                        data.push(a.clone());
                    }
                    i += 1;
                }
                Ordering::Greater => {
                    if keep.right {
                        data.push(b.clone());
                    }
                    j += 1;
                }
                Ordering::Equal => {
                    if keep.both {
                        data.push(a.clone());
                    }
                    i += 1;
                    j += 1;
                }
            }
        }
        if keep.left {
            data.extend(self.data.iter().skip(i).cloned());
        }
        if keep.right {
            data.extend(other.data.iter().skip(j).cloned());
        }
        Self { data }
    }
}

impl<T> Default for OrderedUniqueSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedUniqueSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.data.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for OrderedUniqueSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_unsorted(iter.into_iter().collect())
    }
}

impl<T: Ord> From<Vec<T>> for OrderedUniqueSet<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_unsorted(data)
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for OrderedUniqueSet<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_unsorted(Vec::from(values))
    }
}

impl<T: Ord> Extend<T> for OrderedUniqueSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let before = self.data.len();
        self.data.extend(iter);
        if self.data.len() != before {
            self.data.sort_unstable();
            self.data.dedup();
        }
    }
}

impl<T> IntoIterator for OrderedUniqueSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedUniqueSet<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
