//! Epsilons used for fuzzy compare of the floating-point scalars.
//!
//! Each can be overridden at build time through an environment variable:
//!
//! ```text
//! SCALAR_TRAITS_EPSILON_F32=1e-5 cargo build
//! ```
//!
//! | Variable                         | Default |
//! |----------------------------------|---------|
//! | `SCALAR_TRAITS_EPSILON_F32`      | `1e-6`  |
//! | `SCALAR_TRAITS_EPSILON_F64`      | `1e-12` |
//! | `SCALAR_TRAITS_EPSILON_EXTENDED` | `1e-18` |
//!
//! The build fails if a value isn't a finite number above zero.

mod overrides {
    include!(concat!(env!("OUT_DIR"), "/precision.rs"));
}

/// Default epsilon for `f32`.
pub const DEFAULT_F32: f32 = 1.0e-6;

/// Default epsilon for `f64`.
pub const DEFAULT_F64: f64 = 1.0e-12;

/// Default epsilon for [`Extended`](crate::Extended).
///
/// This is a placeholder rather than a tuned value. With `f64` storage it is
/// below the spacing of numbers around 1.0, which makes the compare exact there.
pub const DEFAULT_EXTENDED: f64 = 1.0e-18;

/// Effective `f32` epsilon.
pub const F32: f32 = match overrides::F32_OVERRIDE {
    Some(v) => v,
    None => DEFAULT_F32,
};

/// Effective `f64` epsilon.
pub const F64: f64 = match overrides::F64_OVERRIDE {
    Some(v) => v,
    None => DEFAULT_F64,
};

/// Effective [`Extended`](crate::Extended) epsilon.
pub const EXTENDED: f64 = match overrides::EXTENDED_OVERRIDE {
    Some(v) => v,
    None => DEFAULT_EXTENDED,
};
