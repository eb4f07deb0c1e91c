//! Floating-point registrations.

use micromath::F32Ext;

use crate::compare::AbsoluteEpsilon;
use crate::extended::Extended;
use crate::policy::Policy;
use crate::precision;
use crate::traits::{Equals, Float, Magnitude, TypeTraits};

const F64_SIGN: u64 = 1 << 63;

macro_rules! floating_point {
    ($($t:ty => $eps:expr),* $(,)?) => {
        $(
            impl Equals for $t {
                type Compare = AbsoluteEpsilon;

                const POLICY: Policy = Policy::FloatingPoint;
            }

            impl TypeTraits for $t {
                type FloatingPoint = $t;

                const FUZZY_EPSILON: Self = $eps;

                #[inline(always)]
                fn to_floating_point(self) -> $t {
                    self
                }
            }

            impl Float for $t {}

            const _: () = assert!(matches!(<$t as Equals>::POLICY, Policy::FloatingPoint));
        )*
    };
}

floating_point! {
    f32 => precision::F32,
    f64 => precision::F64,
    Extended => Extended(precision::EXTENDED),
}

impl Magnitude for f32 {
    #[inline]
    fn abs(self) -> f32 {
        F32Ext::abs(self)
    }
}

impl Magnitude for f64 {
    #[inline]
    fn abs(self) -> f64 {
        // No f64::abs in core before 1.85 and micromath only covers f32.
        f64::from_bits(self.to_bits() & !F64_SIGN)
    }
}

impl Magnitude for Extended {
    #[inline]
    fn abs(self) -> Extended {
        Extended(Magnitude::abs(self.0))
    }
}

/// `f32` fuzzy compare usable in `const` context.
///
/// Same result as `f32::equals(a, b)`.
pub const fn equals_f32(a: f32, b: f32) -> bool {
    let d = a - b;
    let d = if d < 0.0 { -d } else { d };
    d < precision::F32
}

/// `f64` fuzzy compare usable in `const` context.
pub const fn equals_f64(a: f64, b: f64) -> bool {
    let d = a - b;
    let d = if d < 0.0 { -d } else { d };
    d < precision::F64
}

/// [`Extended`] fuzzy compare usable in `const` context.
pub const fn equals_extended(a: Extended, b: Extended) -> bool {
    let d = a.0 - b.0;
    let d = if d < 0.0 { -d } else { d };
    d < precision::EXTENDED
}
