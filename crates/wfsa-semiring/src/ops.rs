// Algebra-generic operations built from the Semiring capability set alone.

use crate::Semiring;

/// Combine a sequence of values with the alternative operation.
///
/// Returns [`Semiring::identity_alt`] for an empty sequence. The fold runs
/// left to right; for conforming algebras any fold order gives the same
/// result (associativity, commutativity of the alternative operation).
pub fn fold_alt<V, I>(values: I) -> V
where
    V: Semiring,
    I: IntoIterator<Item = V>,
{
    values
        .into_iter()
        .fold(V::identity_alt(), |acc, v| acc.combine_alt(&v))
}

/// Combine a sequence of values with the sequential operation.
///
/// Returns [`Semiring::identity_seq`] for an empty sequence.
pub fn fold_seq<V, I>(values: I) -> V
where
    V: Semiring,
    I: IntoIterator<Item = V>,
{
    values
        .into_iter()
        .fold(V::identity_seq(), |acc, v| acc.combine_seq(&v))
}

/// Pairwise-combine corresponding elements with the sequential operation,
/// then fold the results with the alternative operation.
///
/// Stops as soon as either slice is exhausted: the effective length is
/// `min(xs.len(), ys.len())` and the longer tail is ignored. This truncation
/// is a deliberate policy, not an error condition.
pub fn dot_product<V: Semiring>(xs: &[V], ys: &[V]) -> V {
    fold_alt(xs.iter().zip(ys).map(|(x, y)| x.combine_seq(y)))
}

/// Sequentially combine `x` with itself `n` times.
///
/// Returns [`Semiring::identity_seq`] for `n <= 0`.
pub fn power<V: Semiring>(x: &V, n: i32) -> V {
    let mut acc = V::identity_seq();
    for _ in 0..n.max(0) {
        acc = acc.combine_seq(x);
    }
    acc
}
