//! The per-type records: which counterpart, which epsilon, which compare.

use core::fmt::Debug;
use core::ops::Sub;

use crate::compare::{Compare, Exact};
use crate::policy::Policy;

/// Equality under a type's registered policy.
///
/// Implementing only this trait gives a type the default policy: pick
/// [`Exact`] as `Compare` and it can be compared by generic code, but it has
/// no epsilon and no floating-point counterpart.
///
/// ```
/// use scalar_traits::{Equals, Exact, Policy};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Tick(u32);
///
/// impl Equals for Tick {
///     type Compare = Exact;
/// }
///
/// assert!(Tick::equals(Tick(3), Tick(3)));
/// assert_eq!(Tick::POLICY, Policy::Default);
/// ```
pub trait Equals: Copy {
    /// How two values are compared. Swapping this changes the algorithm
    /// without touching callers of [`Equals::equals`].
    type Compare: Compare<Self>;

    const POLICY: Policy = Policy::Default;

    #[inline]
    fn equals(a: Self, b: Self) -> bool {
        <Self::Compare as Compare<Self>>::equals(a, b)
    }
}

/// Numeric traits of a scalar type.
///
/// Implemented for the integer types `u8` through `i64`, `f32`, `f64` and
/// [`Extended`](crate::Extended). Other types don't resolve, which makes
/// generic code using them fail to compile until they're registered.
pub trait TypeTraits: Equals {
    /// Floating-point type to use when the value must be treated as a real
    /// number, i.e. normalization. Floats are their own counterpart, integers
    /// get the smallest float that keeps typical values intact.
    type FloatingPoint: Float;

    /// Minimal difference for two values to be considered inequal. `1` for
    /// integers, a small tunable value for floats (see [`crate::precision`]).
    ///
    /// Not to be confused with the inherent `f32::EPSILON`/`f64::EPSILON`,
    /// which are machine epsilons.
    const FUZZY_EPSILON: Self;

    #[inline(always)]
    fn epsilon() -> Self {
        Self::FUZZY_EPSILON
    }

    /// Converts into the floating-point counterpart.
    fn to_floating_point(self) -> Self::FloatingPoint;
}

/// Arithmetic needed for the absolute epsilon compare.
pub trait Magnitude: Copy + Debug + PartialOrd + Sub<Output = Self> {
    fn abs(self) -> Self;
}

/// Integer scalars: exact equality, epsilon `1`.
pub trait Integral: TypeTraits + Equals<Compare = Exact> + Eq + Ord {}

/// Floating-point scalars: their own counterpart, compared with a tolerance.
///
/// The built-in floats use [`AbsoluteEpsilon`](crate::AbsoluteEpsilon), but
/// the bound doesn't name a strategy so a float can switch to another one
/// without touching this trait. Implementors must register with
/// [`Policy::FloatingPoint`].
pub trait Float: TypeTraits<FloatingPoint = Self> + Magnitude {}

macro_rules! integral {
    ($($t:ty => $fp:ty),* $(,)?) => {
        $(
            impl Equals for $t {
                type Compare = Exact;

                const POLICY: Policy = Policy::Integral;
            }

            impl TypeTraits for $t {
                type FloatingPoint = $fp;

                const FUZZY_EPSILON: Self = 1;

                #[inline]
                fn to_floating_point(self) -> $fp {
                    <$fp>::from(self)
                }
            }

            impl Integral for $t {}

            const _: () = assert!(matches!(<$fp as Equals>::POLICY, Policy::FloatingPoint));
        )*
    };
}

integral! {
    u8 => f32,
    i8 => f32,
    u16 => f32,
    i16 => f32,
    u32 => f64,
    i32 => f64,
    u64 => crate::Extended,
    i64 => crate::Extended,
}
