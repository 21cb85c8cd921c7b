//! General-purpose collection types.
//!
//! # Purpose
//! The types here own their memory directly, rather than wrapping [`Vec`], and hand out slices
//! through [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which saves writing a lot of
//! the more repetitive functionality.

#[cfg(feature = "contiguous")]
pub mod contiguous;
