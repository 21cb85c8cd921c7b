use std::borrow::{Borrow, BorrowMut};
use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use super::{Cursor, Describe, IndexOutOfRange, sort};
use crate::collections::contiguous::Array;
use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// The capacity of a DynamicArray created with [`DynamicArray::new`].
pub const DEFAULT_CAP: usize = 10;

const MIN_CAP: usize = 1;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, based on [`Array<T>`].
///
/// Positional methods take an [`isize`] index, so that a negative index is reported rather than
/// wrapped. Each of them comes in two flavours: a `try_*` method returning an [`IndexOutOfRange`]
/// error and a method that panics with that error's message.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynamicArray.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `set` | `O(1)` |
/// | `remove_value` | `O(n)` |
/// | `sort_by` | `O(n log n)`**, `O(n^2)` |
/// | `reserve` | `O(n)`***, `O(1)` |
///
/// \* If the DynamicArray doesn't have enough capacity for the new element, `push` will take
/// `O(n)`.
///
/// \** The pivot is always the last element of a range, so already ordered input hits the
/// quadratic case.
///
/// \*** If the DynamicArray has enough capacity for the additional items already, `reserve` is
/// `O(1)`.
pub struct DynamicArray<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
}

impl<T> DynamicArray<T> {
    /// Creates a new, empty DynamicArray with capacity [`DEFAULT_CAP`].
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<u8> = DynamicArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 10);
    /// ```
    pub fn new() -> DynamicArray<T> {
        DynamicArray::with_cap(DEFAULT_CAP)
    }

    /// Creates a new DynamicArray with capacity exactly equal to the provided value, allowing
    /// values to be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<u8> = DynamicArray::with_cap(3);
    /// arr.extend([1, 2, 3]);
    /// assert_eq!(arr.cap(), 3);
    /// arr.push(4);
    /// assert_eq!(arr.cap(), 6);
    /// ```
    pub fn with_cap(cap: usize) -> DynamicArray<T> {
        DynamicArray {
            arr: Array::new_uninit(cap),
            len: 0,
        }
    }

    /// Returns the number of elements in the DynamicArray.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DynamicArray contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots. The capacity only ever changes by doubling.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Push the provided value onto the end of the DynamicArray, doubling the capacity if it is
    /// full.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::new();
    /// for i in 0..=10 {
    ///     arr.push(i);
    /// }
    /// assert_eq!(&*arr, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    /// assert_eq!(arr.cap(), 20);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
    }

    /// Push the provided value onto the end of the DynamicArray, assuming that there is enough
    /// capacity to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that `len() < cap()`, using [`reserve`](Self::reserve) or
    /// [`with_cap`](Self::with_cap). Using this method on a DynamicArray without enough capacity is
    /// undefined behavior.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that there is a free slot at len, leading to
        // the pointer write being in bounds of the allocation.
        unsafe { self.arr.ptr.add(self.len).write(MaybeUninit::new(value)); }
        self.len += 1;
    }

    /// Pops the last value off the end of the DynamicArray, returning it if there was one.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::from([1, 2]);
    /// assert_eq!(arr.pop(), Some(2));
    /// assert_eq!(arr.pop(), Some(1));
    /// assert_eq!(arr.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before reading.
            self.len -= 1;

            // SAFETY: The value at the old last index is initialized and, with len already
            // decremented, no longer reachable through self. Reading it moves it out.
            let value = unsafe {
                self.arr.ptr.add(self.len).read().assume_init()
            };
            Some(value)
        }
    }

    /// Inserts the provided value at `index`, shifting every following element one position to
    /// the right. `index` may equal [`len`](Self::len), which appends the value.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index` is negative or greater than the length. The
    /// DynamicArray is left untouched and `value` is dropped.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::from([0, 1, 2]);
    /// arr.try_insert(1, 100).unwrap();
    /// arr.try_insert(4, 200).unwrap();
    /// assert_eq!(&*arr, &[0, 100, 1, 2, 200]);
    /// assert_eq!(arr.try_insert(-1, 5).unwrap_err().to_string(), "Index: -1, Size: 5");
    /// ```
    pub fn try_insert(&mut self, index: isize, value: T) -> Result<(), IndexOutOfRange> {
        let index = self.check_bounds(index, self.len + 1)?;

        if self.len == self.cap() {
            self.grow();
        }

        let mut prev = MaybeUninit::new(value);
        for i in index..=self.len {
            prev = mem::replace(&mut self.arr[i], prev);
        }

        self.len += 1;
        Ok(())
    }

    /// Inserts the provided value at `index`, moving items and growing as necessary.
    ///
    /// # Panics
    /// Panics if `index` is out of range, with the message of the [`IndexOutOfRange`] error.
    #[track_caller]
    pub fn insert(&mut self, index: isize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index` is negative or not less than the length.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let arr = DynamicArray::from(["item1", "item2"]);
    /// assert_eq!(arr.try_at(1), Ok(&"item2"));
    /// assert_eq!(arr.try_at(2).unwrap_err().to_string(), "Index: 2, Size: 2");
    /// ```
    pub fn try_at(&self, index: isize) -> Result<&T, IndexOutOfRange> {
        let index = self.check_bounds(index, self.len)?;
        Ok(&self[index])
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    #[track_caller]
    pub fn at(&self, index: isize) -> &T {
        self.try_at(index).throw()
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index` is negative or not less than the length.
    pub fn try_at_mut(&mut self, index: isize) -> Result<&mut T, IndexOutOfRange> {
        let index = self.check_bounds(index, self.len)?;
        Ok(&mut self[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    #[track_caller]
    pub fn at_mut(&mut self, index: isize) -> &mut T {
        self.try_at_mut(index).throw()
    }

    /// Replaces the element at `index` with `value`, returning the old value.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index` is negative or not less than the length.
    pub fn try_replace(&mut self, index: isize, value: T) -> Result<T, IndexOutOfRange> {
        let slot = self.try_at_mut(index)?;
        Ok(mem::replace(slot, value))
    }

    /// Replaces the element at `index` with `value`, returning the old value.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    #[track_caller]
    pub fn replace(&mut self, index: isize, value: T) -> T {
        self.try_replace(index, value).throw()
    }

    /// Overwrites the element at `index` with `value`, dropping the old value. The length and
    /// capacity don't change.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index` is negative or not less than the length.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::from(["item1"]);
    /// arr.try_set(0, "newItem2").unwrap();
    /// assert_eq!(arr.at(0), &"newItem2");
    /// ```
    pub fn try_set(&mut self, index: isize, value: T) -> Result<(), IndexOutOfRange> {
        self.try_replace(index, value).map(drop)
    }

    /// Overwrites the element at `index` with `value`, dropping the old value.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    #[track_caller]
    pub fn set(&mut self, index: isize, value: T) {
        self.try_set(index, value).throw()
    }

    /// Removes the element at `index`, shifting all following values left to fill in the gap. The
    /// capacity is never reduced.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index` is negative or not less than the length.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<_> = "Hello world!".chars().collect();
    /// assert_eq!(arr.try_remove(1), Ok('e'));
    /// assert_eq!(arr.try_remove(4), Ok(' '));
    /// assert_eq!(arr, "Hlloworld!".chars().collect());
    /// ```
    pub fn try_remove(&mut self, index: isize) -> Result<T, IndexOutOfRange> {
        let index = self.check_bounds(index, self.len)?;

        let mut next = MaybeUninit::uninit();
        // Iterate backwards to index.
        for i in (index..self.len).rev() {
            next = mem::replace(&mut self.arr[i], next);
        }

        self.len -= 1;
        // SAFETY: next contains the value which was previously located at index, which we've
        // already checked to be less than len and therefore initialized.
        Ok(unsafe { next.assume_init() })
    }

    /// Removes and returns the element at `index`, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    #[track_caller]
    pub fn remove(&mut self, index: isize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes every element equal to `value`, keeping the order of the elements that remain.
    /// Returns true if anything was removed.
    ///
    /// Unlike most `remove`-style methods, this removes all occurrences rather than just the
    /// first one.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::from(["a", "b", "a", "c", "a"]);
    /// assert!(arr.remove_value(&"a"));
    /// assert_eq!(&*arr, &["b", "c"]);
    /// assert!(!arr.remove_value(&"a"));
    /// ```
    pub fn remove_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        // Everything before kept is a survivor, in its original order.
        let mut kept = 0;
        for i in 0..self.len {
            if self[i] != *value {
                self.swap(kept, i);
                kept += 1;
            }
        }

        let removed = kept < self.len;
        self.truncate(kept);
        removed
    }

    /// Drops every element from `len` onwards. Does nothing if `len` is not less than the current
    /// length. The capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }

        let tail = self.len - len;
        // Shorten first, so that a panicking destructor can't lead to a double drop.
        self.len = len;

        // SAFETY: The tail values are initialized, contained within the allocation and no longer
        // reachable through self.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.arr.ptr.add(len).as_ptr().cast::<T>(),
                tail,
            ));
        }
    }

    /// Drops all elements, leaving the capacity as it was.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::from(["item1", "item2"]);
    /// arr.clear();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 10);
    /// ```
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Sorts the elements in place with `compare`, using a quicksort with the last element of each
    /// range as its pivot. The sort is not stable: equal elements may be reordered.
    ///
    /// This shadows [`slice::sort_by`], which is stable.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::from(["banana", "apple", "cherry"]);
    /// arr.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(&*arr, &["cherry", "banana", "apple"]);
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        sort::quicksort(&mut self[..], &mut compare);
    }

    /// Sorts the elements in ascending order. See [`sort_by`](Self::sort_by).
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp);
    }

    /// Returns a fresh [`Cursor`] positioned before the first element.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let arr = DynamicArray::from(["item1"]);
    /// let mut cursor = arr.cursor();
    /// assert!(cursor.has_next());
    /// assert_eq!(cursor.try_next(), Ok(&"item1"));
    /// assert!(!cursor.has_next());
    /// ```
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    /// Renders the elements as `[e0, e1, ..., en-1]`, the same as the [`Display`] implementation.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<Option<&str>> = DynamicArray::new();
    /// assert_eq!(arr.describe(), "[]");
    /// arr.push(Some("item1"));
    /// arr.push(None);
    /// assert_eq!(arr.describe(), "[item1, null]");
    /// ```
    pub fn describe(&self) -> String
    where
        T: Describe,
    {
        self.to_string()
    }

    /// Ensures that the DynamicArray can hold an additional `extra` elements without reallocating.
    /// The capacity is doubled as many times as needed, so it stays on the same growth sequence.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<u8> = DynamicArray::new();
    /// arr.reserve(25);
    /// assert_eq!(arr.cap(), 40);
    /// ```
    pub fn reserve(&mut self, extra: usize) {
        let required = self.len.checked_add(extra).ok_or(CapacityOverflow).throw();

        let mut new_cap = self.cap();
        while new_cap < required {
            new_cap = Self::grown_cap(new_cap);
        }

        self.arr.realloc(new_cap);
    }

    /// Grows the internal Array to allow for the insertion of additional elements. After calling
    /// this, the DynamicArray can take at least one more element.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        self.arr.realloc(Self::grown_cap(self.cap()));
    }

    pub(crate) fn grown_cap(cap: usize) -> usize {
        let doubled = cap.checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw();
        cmp::max(doubled, MIN_CAP)
    }

    /// Checks that `index` lies within `0..end`, converting it to a [`usize`].
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`], reporting the current length, if it doesn't.
    pub(crate) fn check_bounds(&self, index: isize, end: usize) -> Result<usize, IndexOutOfRange> {
        usize::try_from(index)
            .ok()
            .filter(|i| *i < end)
            .ok_or(IndexOutOfRange {
                index,
                size: self.len,
            })
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut arr = DynamicArray::new();
        arr.extend(value);
        arr
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(value: Vec<T>) -> Self {
        value.into_iter().collect()
    }
}

impl<T> From<DynamicArray<T>> for Vec<T> {
    fn from(value: DynamicArray<T>) -> Self {
        let mut vec = Vec::with_capacity(value.len());
        vec.extend(value);
        vec
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        // Drop all initialized values in place. self.arr only holds MaybeUninit values, which have
        // a no-op drop, so dropping it afterwards just deallocates the owned memory.
        self.clear();
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: DynamicArray is valid as a slice for len values, which are all initialized. The
        // pointer is nonnull, properly aligned and the range entirely contained within the
        // allocation. The total size is < isize::MAX as the result of being a valid Array.
        unsafe {
            slice::from_raw_parts(
                // Reinterpret *mut MaybeUninit<T> as *mut T for all values < len.
                self.arr.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref. The mutable borrow of self prevents any other access while the
        // slice is alive.
        unsafe {
            slice::from_raw_parts_mut(
                self.arr.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for DynamicArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for DynamicArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: DynamicArrays uniquely own their allocation and are therefore safe for Send when T: Send.
unsafe impl<T: Send> Send for DynamicArray<T> {}
// SAFETY: DynamicArray's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that DynamicArray<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for DynamicArray<T> {}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut arr = Self::with_cap(self.cap());

        for value in self.iter() {
            // SAFETY: arr has the same capacity as self, which holds at least len values.
            unsafe { arr.push_unchecked(value.clone()); }
        }

        arr
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Describe> Display for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.describe_into(f)?;
        }
        f.write_str("]")
    }
}

impl<T: Describe> Describe for DynamicArray<T> {
    fn describe_into(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}
