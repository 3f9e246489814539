use core::{
    hash::{Hash, Hasher},
    ops::{Index, IndexMut},
    slice,
};

use crate::error::OutOfRangeError;

/// An inline array of exactly `N` elements.
///
/// Comparisons are lexicographic and only defined between arrays of the same
/// `N`. Hashing folds in `N` before the elements, so arrays of different sizes
/// hash apart even when one is a prefix of the other.
///
/// ```rust
/// use fixedkit::FixedArray;
///
/// let mut a = FixedArray::new([1, 2, 3]);
/// assert!(a < FixedArray::new([1, 2, 4]));
///
/// a.fill(&7);
/// assert!(a.iter().all(|&x| x == 7));
/// assert!(a.at(3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FixedArray<T, const N: usize> {
    data: [T; N],
}

impl<T, const N: usize> FixedArray<T, N> {
    /// Number of elements, available at compile time.
    pub const SIZE: usize = N;

    /// Wrap an existing array.
    #[must_use]
    pub const fn new(data: [T; N]) -> Self {
        Self { data }
    }

    /// Build each element from its index.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self {
            data: core::array::from_fn(f),
        }
    }

    /// Unwrap into the backing array.
    #[must_use]
    pub fn into_inner(self) -> [T; N] {
        self.data
    }

    /// Number of elements, always `N`.
    #[must_use]
    pub const fn size(&self) -> usize {
        N
    }

    /// Same as [`size`](Self::size).
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Always `N`: the array can neither grow nor shrink.
    #[must_use]
    pub const fn max_size(&self) -> usize {
        N
    }

    /// Whether `N == 0`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Bounds-checked access.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] when `index >= N`.
    pub fn at(&self, index: usize) -> Result<&T, OutOfRangeError> {
        self.data
            .get(index)
            .ok_or(OutOfRangeError { index, size: N })
    }

    /// Bounds-checked mutable access.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] when `index >= N`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRangeError> {
        self.data
            .get_mut(index)
            .ok_or(OutOfRangeError { index, size: N })
    }

    /// Element `I`, checked when the call is compiled.
    #[must_use]
    pub const fn get<const I: usize>(&self) -> &T {
        const { assert!(I < N, "index out of range") };
        &self.data[I]
    }

    /// Mutable element `I`, checked when the call is compiled.
    pub fn get_mut<const I: usize>(&mut self) -> &mut T {
        const { assert!(I < N, "index out of range") };
        &mut self.data[I]
    }

    /// First element.
    ///
    /// # Panics
    ///
    /// When `N == 0`. Calling this on an empty array is a caller bug.
    #[must_use]
    pub fn front(&self) -> &T {
        debug_assert!(N > 0, "front() on an empty FixedArray");
        &self.as_slice()[0]
    }

    /// Mutable first element. Panics like [`front`](Self::front).
    pub fn front_mut(&mut self) -> &mut T {
        debug_assert!(N > 0, "front_mut() on an empty FixedArray");
        &mut self.as_mut_slice()[0]
    }

    /// Last element.
    ///
    /// # Panics
    ///
    /// When `N == 0`. Calling this on an empty array is a caller bug.
    #[must_use]
    pub fn back(&self) -> &T {
        debug_assert!(N > 0, "back() on an empty FixedArray");
        &self.as_slice()[N.wrapping_sub(1)]
    }

    /// Mutable last element. Panics like [`back`](Self::back).
    pub fn back_mut(&mut self) -> &mut T {
        debug_assert!(N > 0, "back_mut() on an empty FixedArray");
        &mut self.as_mut_slice()[N.wrapping_sub(1)]
    }

    /// All elements as a slice.
    #[must_use]
    pub const fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// All elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Pointer to the first element. Dangling, but aligned, when `N == 0`.
    #[must_use]
    pub const fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Mutable pointer to the first element.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    /// Forward iterator. Use `.rev()` to walk backwards.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Forward iterator over mutable references.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Exchange contents with `other`, one element at a time.
    pub fn swap(&mut self, other: &mut Self) {
        for (a, b) in self.data.iter_mut().zip(other.data.iter_mut()) {
            core::mem::swap(a, b);
        }
    }

    /// Overwrite every element with a clone of `value`.
    pub fn fill(&mut self, value: &T)
    where
        T: Clone,
    {
        for slot in &mut self.data {
            slot.clone_from(value);
        }
    }
}

impl<T: Default, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T: Hash, const N: usize> Hash for FixedArray<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(N);
        for element in &self.data {
            element.hash(state);
        }
    }
}

impl<T, const N: usize> Index<usize> for FixedArray<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedArray<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T, N> {
    fn from(data: [T; N]) -> Self {
        Self { data }
    }
}

impl<T, const N: usize> From<FixedArray<T, N>> for [T; N] {
    fn from(array: FixedArray<T, N>) -> Self {
        array.data
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedArray<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T, const N: usize> AsMut<[T]> for FixedArray<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T, const N: usize> IntoIterator for FixedArray<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedArray<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedArray<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}
