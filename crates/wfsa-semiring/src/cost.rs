// Cost (tropical) semiring: reals with +infinity under add/min.

use crate::{AlgebraError, Semiring};

/// A path cost: a real (or `+inf`) under `(+, min)`.
///
/// Costs add up along a path and minimize across alternatives, so evaluating
/// an automaton over this algebra yields the cheapest accepting path's total.
/// [`Cost::INFINITY`] is the alternative identity and doubles as "no
/// accepting path".
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Cost(f64);

impl Cost {
    /// The unreachable cost, identity of the alternative operation.
    pub const INFINITY: Cost = Cost(f64::INFINITY);

    /// Wrap a value already known to be a number (e.g. a literal weight
    /// table). For untrusted input use [`Cost::new`].
    pub const fn raw(c: f64) -> Self {
        Cost(c)
    }

    /// Validate and wrap an externally supplied cost.
    pub fn new(c: f64) -> Result<Self, AlgebraError> {
        if c.is_nan() {
            return Err(AlgebraError::NotANumber);
        }
        Ok(Cost(c))
    }

    /// The underlying value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether this cost is finite, i.e. some accepting path exists.
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Semiring for Cost {
    #[inline]
    fn identity_seq() -> Self {
        Cost(0.0)
    }

    #[inline]
    fn identity_alt() -> Self {
        Cost::INFINITY
    }

    #[inline]
    fn combine_seq(&self, other: &Self) -> Self {
        Cost(self.0 + other.0)
    }

    #[inline]
    fn combine_alt(&self, other: &Self) -> Self {
        Cost(self.0.min(other.0))
    }
}
