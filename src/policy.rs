/// Which equality policy a scalar type is registered with.
///
/// Resolved at compile time through [`Equals::POLICY`](crate::Equals::POLICY),
/// this only exists so generic code can inspect the choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Policy {
    /// Exact `==`, no epsilon. The fallback for types only implementing `Equals`.
    Default,
    /// Exact `==`, epsilon is `1`.
    Integral,
    /// `|a - b| < epsilon`.
    FloatingPoint,
}

impl Policy {
    /// Whether equality under this policy tolerates a difference.
    pub const fn is_fuzzy(self) -> bool {
        matches!(self, Policy::FloatingPoint)
    }
}
