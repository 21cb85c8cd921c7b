//! Contiguous collection types. Namely [`Array`] for a block of slots sized at runtime and
//! [`DynamicArray`] for a growable list built on top of it.
#![warn(missing_docs)]

pub mod array;
pub mod dynamic_array;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use dynamic_array::DynamicArray;
