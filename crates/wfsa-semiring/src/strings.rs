// String-set semiring: candidate output strings under cross-concat/union.

use crate::Semiring;

/// An ordered collection of candidate output strings.
///
/// Despite the name, this is a multiset: duplicates are preserved, so a
/// string appears once per distinct accepting path that produces it.
/// Sequential combination concatenates every string of the left operand with
/// every string of the right (`|x| * |y|` results); alternative combination
/// appends the two collections without deduplication.
///
/// The empty collection is the alternative identity and signals "no
/// accepting path": callers treating the automaton as a transducer should
/// handle it as a soft failure, not an engine error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StringSet(Vec<String>);

impl StringSet {
    /// The empty collection (alternative identity).
    pub fn empty() -> Self {
        StringSet(Vec::new())
    }

    /// A one-element collection.
    pub fn singleton(s: impl Into<String>) -> Self {
        StringSet(vec![s.into()])
    }

    /// The contained strings, in combination order.
    pub fn strings(&self) -> &[String] {
        &self.0
    }

    /// The first candidate, if any.
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for StringSet {
    fn from(strings: Vec<String>) -> Self {
        StringSet(strings)
    }
}

impl FromIterator<String> for StringSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        StringSet(iter.into_iter().collect())
    }
}

impl Semiring for StringSet {
    #[inline]
    fn identity_seq() -> Self {
        StringSet::singleton("")
    }

    #[inline]
    fn identity_alt() -> Self {
        StringSet::empty()
    }

    fn combine_seq(&self, other: &Self) -> Self {
        let mut out = Vec::with_capacity(self.0.len() * other.0.len());
        for x in &self.0 {
            for y in &other.0 {
                let mut s = String::with_capacity(x.len() + y.len());
                s.push_str(x);
                s.push_str(y);
                out.push(s);
            }
        }
        StringSet(out)
    }

    fn combine_alt(&self, other: &Self) -> Self {
        let mut out = self.0.clone();
        out.extend(other.0.iter().cloned());
        StringSet(out)
    }
}
