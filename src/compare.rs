//! Comparison strategies a scalar type can be registered with.

use crate::traits::{Magnitude, TypeTraits};

/// Strategy deciding whether two values of `T` are equal.
///
/// Implementors are never instantiated; they only carry behavior. A type picks
/// its strategy via [`Equals::Compare`](crate::Equals::Compare).
pub trait Compare<T> {
    fn equals(a: T, b: T) -> bool;
}

/// Plain `==`.
pub enum Exact {}

impl<T: PartialEq> Compare<T> for Exact {
    #[inline(always)]
    fn equals(a: T, b: T) -> bool {
        a == b
    }
}

/// `|a - b| < epsilon` using the type's own epsilon.
///
/// This is an absolute test. It equates anything closer than epsilon
/// regardless of magnitude, so it's too lax for tiny values and too strict for
/// huge ones. Infinities and NaN are not special cased: `inf - inf` is NaN and
/// NaN is never less than anything, so neither compares equal to anything.
pub enum AbsoluteEpsilon {}

impl<T> Compare<T> for AbsoluteEpsilon
where
    T: TypeTraits + Magnitude,
{
    #[inline]
    fn equals(a: T, b: T) -> bool {
        (a - b).abs() < T::FUZZY_EPSILON
    }
}
