//! The [`Array`] wrapper and its operations.
use crate::{Bounds, Error, Result, String, ToString, Vec};
use core::fmt;

/// Separator used by [`Array::join`].
pub const DEFAULT_SEPARATOR: &str = ",";

/// An ordered, growable sequence with scripting-style array operations.
///
/// Operations that produce a new array (`map`, `filter`, `slice`, `concat`)
/// return an `Array` that owns its own storage, so mutating one never shows
/// through another.
///
/// # Examples
///
/// ```
/// use arrayish::array;
///
/// let mut arr = array![23, 24, 2, 5, 10];
/// assert_eq!(arr.join(), "23,24,2,5,10");
/// assert_eq!(arr.index_of(&5), Some(3));
///
/// let doubled = arr.map(|x, _| x * 2);
/// assert_eq!(doubled.values(), &[46, 48, 4, 10, 20]);
///
/// arr.push(7);
/// assert_eq!(arr.to_string(), "Array [23 24 2 5 10 7]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Array<T> {
    items: Vec<T>,
}

// Array<T> - Same size as Vec<T>
static_assertions::assert_eq_size!(Array<u8>, Vec<u8>);

impl<T> Array<T> {
    /// Wraps an existing list. The array takes ownership of it.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `index >= self.len()`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.items.get(index).ok_or_else(|| {
            tracing::debug!(index, len = self.len(), "Array.Get out of range");
            Error::out_of_range(index, self.len())
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read-only view of the backing list.
    pub fn values(&self) -> &[T] {
        &self.items
    }

    /// Snapshot copy of the backing list.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    // ========================================================================
    // Higher-Order Functions
    // ========================================================================

    /// Builds a new array by calling `f(element, index)` on every element.
    ///
    /// The result always has the same length as `self`.
    pub fn map<U, F>(&self, mut f: F) -> Array<U>
    where
        F: FnMut(&T, usize) -> U,
    {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| f(item, index))
            .collect()
    }

    /// Builds a new array with the elements for which `f(element, index)`
    /// returns `true`, in their original order.
    pub fn filter<F>(&self, mut f: F) -> Self
    where
        T: Clone,
        F: FnMut(&T, usize) -> bool,
    {
        self.items
            .iter()
            .enumerate()
            .filter(|&(index, item)| f(item, index))
            .map(|(_, item)| item.clone())
            .collect()
    }

    /// Calls `f(element, index)` for every element, in index order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T, usize),
    {
        for (index, item) in self.items.iter().enumerate() {
            f(item, index);
        }
    }

    /// Returns `true` if `f` holds for at least one element.
    ///
    /// Stops at the first match. Always `false` for an empty array.
    pub fn some<F>(&self, mut f: F) -> bool
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.items
            .iter()
            .enumerate()
            .any(|(index, item)| f(item, index))
    }

    /// Returns `true` if `f` holds for every element.
    ///
    /// Stops at the first failure. Always `true` for an empty array.
    pub fn every<F>(&self, mut f: F) -> bool
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.items
            .iter()
            .enumerate()
            .all(|(index, item)| f(item, index))
    }

    /// First element satisfying `f`, or `None`.
    pub fn find<F>(&self, mut f: F) -> Option<&T>
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.items
            .iter()
            .enumerate()
            .find(|&(index, item)| f(item, index))
            .map(|(_, item)| item)
    }

    /// Index of the first element satisfying `f`, or `None`.
    pub fn find_index<F>(&self, mut f: F) -> Option<usize>
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.items
            .iter()
            .enumerate()
            .find(|&(index, item)| f(item, index))
            .map(|(index, _)| index)
    }

    // ========================================================================
    // Stack / Queue Functions
    // ========================================================================

    /// Appends `value` and returns the new length.
    pub fn push(&mut self, value: T) -> usize {
        self.items.push(value);
        self.len()
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptySequence`] if the array is empty.
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or_else(|| {
            tracing::debug!("Array.Pop on empty array");
            Error::empty("pop")
        })
    }

    /// Removes and returns the first element. O(n).
    ///
    /// # Errors
    ///
    /// [`Error::EmptySequence`] if the array is empty.
    pub fn shift(&mut self) -> Result<T> {
        if self.items.is_empty() {
            tracing::debug!("Array.Shift on empty array");
            return Err(Error::empty("shift"));
        }
        Ok(self.items.remove(0))
    }

    /// Prepends `value` and returns the new length. O(n).
    pub fn unshift(&mut self, value: T) -> usize {
        self.items.insert(0, value);
        self.len()
    }

    // ========================================================================
    // Search Functions
    // ========================================================================

    /// Index of the first element equal to `value`, or `None`.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|item| item == value)
    }

    pub fn includes(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    // ========================================================================
    // Slice Functions
    // ========================================================================

    /// Returns a new array holding `self` followed by `other`.
    ///
    /// Neither input is modified.
    pub fn concat(&self, other: &Array<T>) -> Self
    where
        T: Clone,
    {
        let mut items = Vec::with_capacity(self.len() + other.len());
        items.extend_from_slice(&self.items);
        items.extend_from_slice(&other.items);
        Self::new(items)
    }

    /// Copies part of the array into a new one.
    ///
    /// # Edge Cases
    ///
    /// - No bounds (`..`): copies the whole array
    /// - `start` only: copies `[start, len)`
    /// - `start >= len`: returns an empty array
    /// - `end > len`: `end` is clamped to `len`
    /// - `end < start`: returns an empty array
    ///
    /// # Examples
    ///
    /// ```
    /// use arrayish::array;
    ///
    /// let arr = array![23, 24, 2, 5, 10];
    /// assert_eq!(arr.slice(2..3).values(), &[2]);
    /// assert_eq!(arr.slice(3..).values(), &[5, 10]);
    /// assert_eq!(arr.slice(1..100).len(), 4);
    /// assert!(arr.slice(20..).is_empty());
    /// assert_eq!(arr.slice(..), arr);
    /// ```
    pub fn slice(&self, bounds: impl Into<Bounds>) -> Self
    where
        T: Clone,
    {
        match bounds.into().resolve(self.len()) {
            None => self.clone(),
            Some(range) => Self::new(self.items[range].to_vec()),
        }
    }

    /// Overwrites part of the array with `value`, in place, and returns
    /// `self` for chaining.
    ///
    /// # Edge Cases
    ///
    /// - No bounds (`..`): nothing is changed
    /// - `start >= len`: nothing is changed
    /// - `end > len`: `end` is clamped to `len`
    ///
    /// # Examples
    ///
    /// ```
    /// use arrayish::array;
    ///
    /// let mut arr = array![1, 2, 3, 4];
    /// arr.fill(0, 1..3);
    /// assert_eq!(arr.values(), &[1, 0, 0, 4]);
    ///
    /// arr.fill(9, ..);
    /// assert_eq!(arr.values(), &[1, 0, 0, 4]);
    /// ```
    pub fn fill(&mut self, value: T, bounds: impl Into<Bounds>) -> &mut Self
    where
        T: Clone,
    {
        if let Some(range) = bounds.into().resolve(self.len()) {
            self.items[range].fill(value);
        }
        self
    }

    // ========================================================================
    // String Functions
    // ========================================================================

    /// Joins the elements with [`DEFAULT_SEPARATOR`].
    pub fn join(&self) -> String
    where
        T: fmt::Display,
    {
        self.join_with(DEFAULT_SEPARATOR)
    }

    /// Joins the string form of every element with `separator`.
    ///
    /// An empty array gives an empty string. The separator only ever appears
    /// between elements.
    pub fn join_with(&self, separator: &str) -> String
    where
        T: fmt::Display,
    {
        let mut out = String::new();
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                out.push_str(separator);
            }
            out.push_str(&item.to_string());
        }
        out
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

/// Renders as `Array [a b c]`.
impl<T: fmt::Display> fmt::Display for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Array [")?;
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

impl<T> AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl<T> From<Vec<T>> for Array<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    fn from(items: [T; N]) -> Self {
        Self::new(Vec::from(items))
    }
}

impl<T> From<Array<T>> for Vec<T> {
    fn from(array: Array<T>) -> Self {
        array.items
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for Array<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
#[path = "array_test.rs"]
mod array_test;
