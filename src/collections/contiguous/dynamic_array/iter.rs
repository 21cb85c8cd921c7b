use std::iter::FusedIterator;
use std::mem::{self, ManuallyDrop, MaybeUninit};
use std::ptr;
use std::slice;

use super::{DynamicArray, IndexOutOfRange};
use crate::collections::contiguous::Array;

/// A forward cursor over a [`DynamicArray`], created by [`DynamicArray::cursor`].
///
/// The cursor only holds a position and a shared borrow of the DynamicArray. Every step re-reads
/// the current length through that borrow, and reading goes through
/// [`try_at`](DynamicArray::try_at).
#[derive(Debug)]
pub struct Cursor<'a, T> {
    pub(crate) arr: &'a DynamicArray<T>,
    pub(crate) position: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) const fn new(arr: &'a DynamicArray<T>) -> Cursor<'a, T> {
        Cursor {
            arr,
            position: 0,
        }
    }

    /// Returns true if a call to [`try_next`](Self::try_next) would yield an element.
    pub const fn has_next(&self) -> bool {
        self.position < self.arr.len()
    }

    /// Returns the next element and advances the cursor.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] with the cursor's position once the cursor is exhausted.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<&str> = DynamicArray::new();
    /// let mut cursor = arr.cursor();
    /// assert!(!cursor.has_next());
    /// assert_eq!(cursor.try_next().unwrap_err().to_string(), "Index: 0, Size: 0");
    /// ```
    pub fn try_next(&mut self) -> Result<&'a T, IndexOutOfRange> {
        let arr: &'a DynamicArray<T> = self.arr;
        let value = arr.try_at(self.position as isize)?;
        self.position += 1;
        Ok(value)
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Cursor {
            arr: self.arr,
            position: self.position,
        }
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.arr.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {}

impl<T> FusedIterator for Cursor<'_, T> {}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;

    type IntoIter = Cursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        // The DynamicArray is left with an empty Array that owns nothing, so not dropping it
        // doesn't leak.
        let mut arr = ManuallyDrop::new(self);
        IntoIter {
            slots: mem::take(&mut arr.arr),
            start: 0,
            end: arr.len,
        }
    }
}

/// An owned iterator over the elements of a [`DynamicArray`]. See [`DynamicArray::into_iter`].
///
/// Elements that haven't been yielded are dropped along with the iterator.
pub struct IntoIter<T> {
    pub(crate) slots: Array<MaybeUninit<T>>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> IntoIter<T> {
    /// Returns the elements that haven't been yielded yet as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: All slots in start..end are initialized and contained within the allocation.
        unsafe {
            slice::from_raw_parts(
                self.slots.ptr.add(self.start).as_ptr().cast(),
                self.end - self.start,
            )
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: The slot at start is initialized. Advancing start afterwards means it is
            // never read or dropped again, so the value is moved out.
            let value = unsafe { self.slots[self.start].assume_init_read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: The slot at the newly decremented end is initialized and will not be
            // visited again.
            let value = unsafe { self.slots[self.end].assume_init_read() };
            Some(value)
        } else {
            None
        }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: The slots in start..end are initialized and haven't been yielded. The Array
        // only deallocates afterwards, because dropping MaybeUninit values is a no-op.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.slots.ptr.add(self.start).as_ptr().cast::<T>(),
                self.end - self.start,
            ));
        }
    }
}
