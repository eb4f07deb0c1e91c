use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Extended precision floating-point scalar.
///
/// Counterpart of the 64-bit integers. Stable Rust has no wider float than
/// `f64`, so this stores an `f64` but is a scalar type of its own with its own
/// epsilon ([`precision::EXTENDED`](crate::precision::EXTENDED)).
///
/// Having `f64` precision, converting a `u64`/`i64` loses the bits above 2^53;
/// such values round to the nearest representable `f64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Extended(pub f64);

impl Extended {
    pub const ZERO: Extended = Extended(0.0);
    pub const ONE: Extended = Extended(1.0);

    pub const fn new(v: f64) -> Self {
        Extended(v)
    }

    pub const fn into_inner(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Extended {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

macro_rules! binop {
    ($($tr:ident $f:ident $atr:ident $af:ident),*) => {
        $(
            impl $tr for Extended {
                type Output = Extended;

                #[inline]
                fn $f(self, rhs: Extended) -> Extended {
                    Extended($tr::$f(self.0, rhs.0))
                }
            }

            impl $atr for Extended {
                #[inline]
                fn $af(&mut self, rhs: Extended) {
                    $atr::$af(&mut self.0, rhs.0);
                }
            }
        )*
    };
}

binop!(
    Add add AddAssign add_assign,
    Sub sub SubAssign sub_assign,
    Mul mul MulAssign mul_assign,
    Div div DivAssign div_assign
);

impl Neg for Extended {
    type Output = Extended;

    #[inline]
    fn neg(self) -> Extended {
        Extended(-self.0)
    }
}

impl From<f64> for Extended {
    fn from(v: f64) -> Self {
        Extended(v)
    }
}

impl From<f32> for Extended {
    fn from(v: f32) -> Self {
        Extended(v as f64)
    }
}

impl From<Extended> for f64 {
    fn from(v: Extended) -> Self {
        v.0
    }
}

// 64-bit integers round to the nearest f64.
macro_rules! from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Extended {
                #[inline]
                fn from(v: $t) -> Self {
                    Extended(v as f64)
                }
            }
        )*
    };
}

from_int!(u8, i8, u16, i16, u32, i32, u64, i64);
