//! A module containing [`Array`], the fixed-size block of slots that backs
//! [`DynamicArray`](super::DynamicArray).
//!
//! Borrowed iteration uses [`Iter`](std::slice::Iter) and [`IterMut`](std::slice::IterMut) from
//! [`std::slice`] through [`Deref<Target = [T]>`](std::ops::Deref).
//!
//! [`Array`] is also re-exported under the parent module.

mod array;
mod tests;

pub use array::*;
