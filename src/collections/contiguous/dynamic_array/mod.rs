//! A module containing [`DynamicArray`] and associated types.
//!
//! - [`Cursor`] for borrowed, forward iteration that reports exhaustion as an error.
//! - [`IntoIter`] for owned iteration.
//! - [`Describe`] for the element rendering used by [`DynamicArray`]'s
//!   [`Display`](std::fmt::Display) implementation.
//! - [`IndexOutOfRange`], the error returned by every positional method.
//!
//! [`IterMut`](std::slice::IterMut) and [`Iter`](std::slice::Iter) from [`std::slice`] are also
//! available through [`Deref<Target = [T]>`](std::ops::Deref).
//!
//! [`DynamicArray`] is also re-exported under the parent module.

mod describe;
mod dynamic_array;
mod error;
mod iter;
mod sort;

pub use describe::*;
pub use dynamic_array::*;
pub use error::*;
pub use iter::*;
