//! Semiring algebras for weighted automata.
//!
//! A semiring is a value domain with two combining operations and their
//! identities: a sequential ("AND-like") operation used along a path, and an
//! alternative ("OR-like") operation used across paths. Plugging a different
//! semiring into the same automaton-evaluation code computes recognition,
//! probabilities, minimum costs, or candidate output strings.
//!
//! # Architecture
//!
//! - [`Semiring`] -- the capability set every algebra provides
//! - [`ops`] -- algebra-generic folds, dot product, and powers
//! - [`boolean`] -- recognition (`bool` under AND/OR)
//! - [`prob`] -- probabilities (`Prob` under multiply/add)
//! - [`cost`] -- minimum cost (`Cost` under add/min)
//! - [`strings`] -- transduction outputs (`StringSet` under cross-concat/union)

pub mod boolean;
pub mod cost;
pub mod ops;
pub mod prob;
pub mod strings;

pub use cost::Cost;
pub use prob::Prob;
pub use strings::StringSet;

/// Error type for algebra domain checks.
#[derive(Debug, thiserror::Error)]
pub enum AlgebraError {
    #[error("probability weight must be non-negative, got {0}")]
    NegativeWeight(f64),
    #[error("weight must not be NaN")]
    NotANumber,
}

/// The semiring capability set, implemented directly on the value type.
///
/// Required laws, for all `x`, `y`, `z` in the domain:
///
/// - `combine_seq` is associative with identity [`identity_seq`](Semiring::identity_seq)
/// - `combine_alt` is associative and commutative with identity
///   [`identity_alt`](Semiring::identity_alt)
/// - `combine_seq` distributes over `combine_alt`:
///   `x.combine_seq(y.combine_alt(z)) == x.combine_seq(y).combine_alt(x.combine_seq(z))`
///
/// Violating these laws silently breaks automaton evaluation; every instance
/// in this crate carries law-conformance tests.
pub trait Semiring: Clone + std::fmt::Debug + PartialEq {
    /// Identity of the sequential operation ("generalized true").
    fn identity_seq() -> Self;

    /// Identity of the alternative operation ("generalized false").
    fn identity_alt() -> Self;

    /// Sequential combination, applied along one path.
    fn combine_seq(&self, other: &Self) -> Self;

    /// Alternative combination, applied across paths.
    fn combine_alt(&self, other: &Self) -> Self;

    /// Whether this value is the alternative identity (a "dead" value that
    /// cannot affect any combined result).
    ///
    /// Part of the capability set rather than plain equality so that
    /// floating-point domains can compare against a canonical zero with a
    /// tolerance.
    fn is_identity_alt(&self) -> bool {
        *self == Self::identity_alt()
    }
}
