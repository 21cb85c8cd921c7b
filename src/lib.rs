//! A growable, randomly indexable list, [`DynamicArray`](collections::contiguous::DynamicArray),
//! written on top of its own raw allocation rather than [`Vec`].
//!
//! # Method
//! The storage is an [`Array`](collections::contiguous::Array) of
//! [`MaybeUninit<T>`](std::mem::MaybeUninit) slots allocated through [`std::alloc`]. The list
//! starts with space for 10 elements and doubles its capacity whenever an insertion finds it full.
//! The capacity never shrinks.
//!
//! Slices are handed out through [`Deref<Target = [T]>`](std::ops::Deref), so everything that a
//! slice can do (iteration, `contains`, `windows`, `to_vec`, ...) is available on a DynamicArray
//! without being written again.
//!
//! # Error Handling
//! Positional methods come in pairs. `try_*` methods return a strongly typed
//! [`IndexOutOfRange`](collections::contiguous::dynamic_array::IndexOutOfRange) error, while their
//! plain counterparts panic with that error's message, `"Index: <index>, Size: <len>"`. Indices are
//! signed, so a negative index is reported as it was given. Capacity overflow always panics,
//! because nobody wants to handle an error every time they push.
//!
//! Errors are structs implementing [`Error`](std::error::Error) through `derive_more`.
//!
//! # Absent Elements
//! There is no null. An element that may be absent is an [`Option`], which renders as `null` when
//! the list is displayed and compares like any other value.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
