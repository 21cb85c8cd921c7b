use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use std::rc::Rc;
use std::sync::Arc;

/// The textual form of an element inside a rendered
/// [`DynamicArray`](super::DynamicArray), as in `[e0, e1, ..., en-1]`.
///
/// Types with a [`Display`] form render with it, and an absent element (`None`) renders as `null`.
/// Implement this for your own types to put them in a rendered DynamicArray, usually by forwarding
/// to their [`Display`] implementation.
///
/// # Examples
/// ```
/// # use dynamic_array::collections::contiguous::DynamicArray;
/// let arr = DynamicArray::from([Some(1), None, Some(3)]);
/// assert_eq!(arr.to_string(), "[1, null, 3]");
/// ```
pub trait Describe {
    /// Writes the description of self into `f`.
    fn describe_into(&self, f: &mut Formatter<'_>) -> fmt::Result;
}

macro_rules! describe_with_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Describe for $ty {
                fn describe_into(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    Display::fmt(self, f)
                }
            }
        )*
    };
}

describe_with_display!(
    bool, char, str, String,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
);

impl<T: Describe> Describe for Option<T> {
    fn describe_into(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => value.describe_into(f),
            None => f.write_str("null"),
        }
    }
}

impl<T: Describe + ?Sized> Describe for &T {
    fn describe_into(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (**self).describe_into(f)
    }
}

impl<T: Describe + ?Sized> Describe for &mut T {
    fn describe_into(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (**self).describe_into(f)
    }
}

impl<T: Describe + ?Sized> Describe for Box<T> {
    fn describe_into(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (**self).describe_into(f)
    }
}

impl<T: Describe + ?Sized> Describe for Rc<T> {
    fn describe_into(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (**self).describe_into(f)
    }
}

impl<T: Describe + ?Sized> Describe for Arc<T> {
    fn describe_into(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (**self).describe_into(f)
    }
}

impl<B: Describe + ToOwned + ?Sized> Describe for Cow<'_, B> {
    fn describe_into(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (**self).describe_into(f)
    }
}
