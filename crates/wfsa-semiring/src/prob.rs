// Probability semiring: non-negative reals under multiply/add.

use crate::{AlgebraError, Semiring};

/// Tolerance for comparing a probability against the additive identity.
/// Sum-of-products chains accumulate rounding error, so dead-branch
/// detection uses a canonical-zero comparison instead of exact equality.
const ZERO_TOLERANCE: f64 = 1e-12;

/// A probability weight: a non-negative real under `(*, +)`.
///
/// Path weights multiply, alternative paths add, so evaluating an automaton
/// over this algebra yields the total probability mass of all accepting
/// paths.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Prob(f64);

impl Prob {
    /// Wrap a value already known to lie in the domain (e.g. a literal
    /// weight table). For untrusted input use [`Prob::new`].
    pub const fn raw(p: f64) -> Self {
        Prob(p)
    }

    /// Validate and wrap an externally supplied weight.
    pub fn new(p: f64) -> Result<Self, AlgebraError> {
        if p.is_nan() {
            return Err(AlgebraError::NotANumber);
        }
        if p < 0.0 {
            return Err(AlgebraError::NegativeWeight(p));
        }
        Ok(Prob(p))
    }

    /// The underlying value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Semiring for Prob {
    #[inline]
    fn identity_seq() -> Self {
        Prob(1.0)
    }

    #[inline]
    fn identity_alt() -> Self {
        Prob(0.0)
    }

    #[inline]
    fn combine_seq(&self, other: &Self) -> Self {
        Prob(self.0 * other.0)
    }

    #[inline]
    fn combine_alt(&self, other: &Self) -> Self {
        Prob(self.0 + other.0)
    }

    #[inline]
    fn is_identity_alt(&self) -> bool {
        self.0.abs() <= ZERO_TOLERANCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [f64; 5] = [0.0, 0.015, 0.5, 1.0, 2.5];

    fn close(a: Prob, b: Prob) -> bool {
        (a.value() - b.value()).abs() <= 1e-12
    }

    #[test]
    fn new_accepts_domain_values() {
        for p in SAMPLES {
            assert_eq!(Prob::new(p).unwrap(), Prob::raw(p));
        }
    }

    #[test]
    fn new_rejects_out_of_domain() {
        assert!(matches!(
            Prob::new(-0.1),
            Err(AlgebraError::NegativeWeight(_))
        ));
        assert!(matches!(Prob::new(f64::NAN), Err(AlgebraError::NotANumber)));
    }

    #[test]
    fn identities() {
        for p in SAMPLES {
            let x = Prob::raw(p);
            assert_eq!(x.combine_seq(&Prob::identity_seq()), x);
            assert_eq!(Prob::identity_seq().combine_seq(&x), x);
            assert_eq!(x.combine_alt(&Prob::identity_alt()), x);
            assert_eq!(Prob::identity_alt().combine_alt(&x), x);
        }
    }

    #[test]
    fn zero_detection_uses_tolerance() {
        assert!(Prob::identity_alt().is_identity_alt());
        assert!(Prob::raw(1e-15).is_identity_alt());
        assert!(!Prob::raw(0.015).is_identity_alt());
    }

    #[test]
    fn distributivity() {
        for x in SAMPLES {
            for y in SAMPLES {
                for z in SAMPLES {
                    let (x, y, z) = (Prob::raw(x), Prob::raw(y), Prob::raw(z));
                    let lhs = x.combine_seq(&y.combine_alt(&z));
                    let rhs = x.combine_seq(&y).combine_alt(&x.combine_seq(&z));
                    assert!(close(lhs, rhs), "{lhs:?} != {rhs:?}");
                }
            }
        }
    }

    #[test]
    fn associativity_and_commutativity() {
        for x in SAMPLES {
            for y in SAMPLES {
                for z in SAMPLES {
                    let (x, y, z) = (Prob::raw(x), Prob::raw(y), Prob::raw(z));
                    assert!(close(
                        x.combine_seq(&y).combine_seq(&z),
                        x.combine_seq(&y.combine_seq(&z))
                    ));
                    assert!(close(
                        x.combine_alt(&y).combine_alt(&z),
                        x.combine_alt(&y.combine_alt(&z))
                    ));
                    assert_eq!(x.combine_alt(&y), y.combine_alt(&x));
                }
            }
        }
    }
}
