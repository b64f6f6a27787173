// Boolean semiring: plain recognition.

use crate::Semiring;

/// `bool` under AND/OR: the automaton becomes an ordinary recognizer.
impl Semiring for bool {
    #[inline]
    fn identity_seq() -> Self {
        true
    }

    #[inline]
    fn identity_alt() -> Self {
        false
    }

    #[inline]
    fn combine_seq(&self, other: &Self) -> Self {
        *self && *other
    }

    #[inline]
    fn combine_alt(&self, other: &Self) -> Self {
        *self || *other
    }
}
