//! Numeric traits for scalar types.
//!
//! Lets generic numeric code ask, per scalar type, which floating-point type
//! to normalize into, what epsilon applies and whether two values are equal.
//! Integers compare exactly, floats with an absolute epsilon. Everything
//! resolves at compile time.
//!
//! ```
//! use scalar_traits::{equals, epsilon, FloatingPoint};
//!
//! assert!(equals(5_i32, 5));
//! assert!(!equals(5_i32, 6));
//! assert!(equals(1.0_f64, 1.0 + 0.5e-12));
//! assert!(!equals(1.0_f32, 1.001));
//!
//! assert_eq!(epsilon::<u16>(), 1);
//!
//! let normalized: FloatingPoint<u8> = 0.5_f32;
//! # let _ = normalized;
//! ```
//!
//! The absolute compare is weak for very large or very small magnitudes and
//! does not special case infinities or NaN. The strategy can be swapped per
//! type via [`Equals::Compare`].

// For tests we use std.
#![cfg_attr(not(test), no_std)]

mod compare;
mod extended;
mod float;
mod policy;
pub mod precision;
mod traits;

pub use compare::{AbsoluteEpsilon, Compare, Exact};
pub use extended::Extended;
pub use float::{equals_extended, equals_f32, equals_f64};
pub use policy::Policy;
pub use traits::{Equals, Float, Integral, Magnitude, TypeTraits};

/// The floating-point counterpart of `T`.
pub type FloatingPoint<T> = <T as TypeTraits>::FloatingPoint;

/// Whether `a` and `b` are equal under the policy of `T`.
#[inline]
pub fn equals<T: Equals>(a: T, b: T) -> bool {
    T::equals(a, b)
}

/// The fuzzy compare epsilon of `T`. In `const` context use
/// `<T as TypeTraits>::FUZZY_EPSILON`.
#[inline(always)]
pub fn epsilon<T: TypeTraits>() -> T {
    T::FUZZY_EPSILON
}

/// Converts `v` into its floating-point counterpart.
#[inline]
pub fn to_floating_point<T: TypeTraits>(v: T) -> FloatingPoint<T> {
    v.to_floating_point()
}

#[cfg(test)]
mod test {
    use super::*;
    use core::any::TypeId;
    use proptest::prelude::*;

    const DOUBLE_EPSILON: f64 = <f64 as TypeTraits>::FUZZY_EPSILON;
    const HALF_DOUBLE_EPSILON: f64 = DOUBLE_EPSILON / 2.0;

    // Fails the build if the epsilon isn't usable in a constant.
    const _: () = assert!(DOUBLE_EPSILON > 0.0);

    #[test]
    fn scenarios() {
        assert!(equals(5_i32, 5_i32));
        assert!(!equals(5_i32, 6_i32));
        assert!(equals(1.0_f64, 1.0 + 0.5e-12));
        assert!(!equals(1.0_f32, 1.0 + 1e-3));
        assert_eq!(TypeId::of::<FloatingPoint<u8>>(), TypeId::of::<f32>());
        assert_eq!(HALF_DOUBLE_EPSILON, epsilon::<f64>() / 2.0);
    }

    #[test]
    fn double_boundary_around_one() {
        assert!(equals(1.0_f64, 1.0 + DOUBLE_EPSILON / 2.0));
        assert!(!equals(1.0_f64, 1.0 + DOUBLE_EPSILON * 2.0));
    }

    fn counterpart<T: TypeTraits>() -> TypeId
    where
        FloatingPoint<T>: 'static,
    {
        TypeId::of::<FloatingPoint<T>>()
    }

    #[test]
    fn counterparts() {
        let single = TypeId::of::<f32>();
        let double = TypeId::of::<f64>();
        let extended = TypeId::of::<Extended>();

        assert_eq!(counterpart::<u8>(), single);
        assert_eq!(counterpart::<i8>(), single);
        assert_eq!(counterpart::<u16>(), single);
        assert_eq!(counterpart::<i16>(), single);
        assert_eq!(counterpart::<u32>(), double);
        assert_eq!(counterpart::<i32>(), double);
        assert_eq!(counterpart::<u64>(), extended);
        assert_eq!(counterpart::<i64>(), extended);
        assert_eq!(counterpart::<f32>(), single);
        assert_eq!(counterpart::<f64>(), double);
        assert_eq!(counterpart::<Extended>(), extended);
    }

    fn counterpart_is_fuzzy<T: Integral>() -> bool {
        <FloatingPoint<T> as Equals>::POLICY == Policy::FloatingPoint
    }

    #[test]
    fn counterpart_closure() {
        assert!(counterpart_is_fuzzy::<u8>());
        assert!(counterpart_is_fuzzy::<i8>());
        assert!(counterpart_is_fuzzy::<u16>());
        assert!(counterpart_is_fuzzy::<i16>());
        assert!(counterpart_is_fuzzy::<u32>());
        assert!(counterpart_is_fuzzy::<i32>());
        assert!(counterpart_is_fuzzy::<u64>());
        assert!(counterpart_is_fuzzy::<i64>());
    }

    #[test]
    fn normalize_through_counterpart() {
        let v: FloatingPoint<u8> = to_floating_point(128_u8) / to_floating_point(255_u8);
        assert!(equals(v, 128.0 / 255.0));

        let w: FloatingPoint<i64> = to_floating_point(-1_i64) / to_floating_point(4_i64);
        assert!(equals(w, Extended(-0.25)));
    }

    // What a vector type built on top would do.
    fn all_equal<T: Equals>(a: &[T], b: &[T]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| equals(*x, *y))
    }

    #[test]
    fn generic_consumer() {
        assert!(all_equal(&[1_u16, 2, 3], &[1, 2, 3]));
        assert!(!all_equal(&[1_u16, 2, 3], &[1, 2, 4]));
        assert!(all_equal(&[0.1_f64 + 0.2, 1.0], &[0.3, 1.0]));
        assert!(!all_equal(&[0.1_f32], &[0.2]));
    }

    #[test]
    fn non_finite() {
        assert!(!equals(f32::NAN, f32::NAN));
        assert!(!equals(f64::INFINITY, f64::INFINITY));
        assert!(!equals(f64::INFINITY, f64::NEG_INFINITY));
        assert!(!equals(Extended(f64::INFINITY), Extended(f64::INFINITY)));
    }

    macro_rules! integral_props {
        ($($name:ident: $t:ty),*) => {
            proptest! {
                $(
                    #[test]
                    fn $name(a: $t, b: $t) {
                        prop_assert_eq!(equals(a, b), a == b);
                        prop_assert!(equals(a, a));
                        prop_assert_eq!(equals(a, b), equals(b, a));
                    }
                )*
            }
        };
    }

    integral_props!(
        exact_u8: u8,
        exact_i8: i8,
        exact_u16: u16,
        exact_i16: i16,
        exact_u32: u32,
        exact_i32: i32,
        exact_u64: u64,
        exact_i64: i64
    );

    proptest! {
        #[test]
        fn single_rule(a in -1.0e3_f32..1.0e3, d in -1.0e-5_f32..1.0e-5) {
            let b = a + d;
            prop_assert_eq!(equals(a, b), (a - b).abs() < epsilon::<f32>());
            prop_assert_eq!(equals(a, b), equals(b, a));
            prop_assert!(equals(a, a));
        }

        #[test]
        fn double_rule(a in proptest::num::f64::NORMAL, b in proptest::num::f64::NORMAL) {
            prop_assert_eq!(equals(a, b), (a - b).abs() < epsilon::<f64>());
            prop_assert_eq!(equals(a, b), equals(b, a));
            prop_assert!(equals(a, a));
        }

        #[test]
        fn double_near(a in -1.0_f64..1.0, d in -1.0e-11_f64..1.0e-11) {
            let b = a + d;
            prop_assert_eq!(equals(a, b), (a - b).abs() < epsilon::<f64>());
            prop_assert_eq!(equals(a, b), equals(b, a));
        }

        #[test]
        fn extended_rule(a in proptest::num::f64::NORMAL, b in proptest::num::f64::NORMAL) {
            let (x, y) = (Extended(a), Extended(b));
            prop_assert_eq!(equals(x, y), (a - b).abs() < precision::EXTENDED);
            prop_assert_eq!(equals(x, y), equals(y, x));
            prop_assert!(equals(x, x));
        }

        #[test]
        fn const_fn_matches_trait(a: f64, b: f64) {
            prop_assert_eq!(equals_f64(a, b), equals(a, b));
            prop_assert_eq!(equals_f32(a as f32, b as f32), equals(a as f32, b as f32));
        }
    }
}
