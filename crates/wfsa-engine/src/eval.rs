// Sequence evaluation: backward and forward total values over an automaton.
//
// Both passes fill a table of (sequence position, state) cells instead of
// recursing per path: cell values are combined once with the alternative
// operation, so runtime is O(|sequence| * |transitions|) and the algebraic
// result is identical to the recursive definition.

use std::fmt::Debug;
use std::hash::Hash;

use wfsa_semiring::Semiring;

use crate::automaton::Automaton;

impl<Q, S, V> Automaton<Q, S, V>
where
    Q: Clone + Eq + Hash + Debug,
    S: Clone + Eq + Hash,
    V: Semiring,
{
    /// Total value of `sequence`, consuming it from the end (backward pass).
    ///
    /// Combines, across every start state `q0` with a live initial weight,
    /// `initial_weight(q0) (x) value_from(q0, sequence)`. For the boolean
    /// algebra this is recognition; for probabilities, the summed mass of
    /// all accepting paths; for costs, the cheapest accepting total; for
    /// string sets, one candidate per accepting path.
    pub fn accept(&self, sequence: &[S]) -> V {
        let row = self.backward_row(sequence);
        let mut total = V::identity_alt();
        for (i, q) in self.all_states().iter().enumerate() {
            let init = self.initial_weight(q);
            if init.is_identity_alt() {
                continue;
            }
            total = total.combine_alt(&init.combine_seq(&row[i]));
        }
        total
    }

    /// Total value of `sequence`, consuming it from the start (forward
    /// pass). Equal to [`accept`](Self::accept) for any law-conforming
    /// algebra.
    pub fn accept_forward(&self, sequence: &[S]) -> V {
        let row = self.forward_row(sequence);
        let mut total = V::identity_alt();
        for (i, q) in self.all_states().iter().enumerate() {
            let fin = self.final_weight(q);
            if fin.is_identity_alt() {
                continue;
            }
            total = total.combine_alt(&row[i].combine_seq(&fin));
        }
        total
    }

    /// Value of reading `remaining` starting in `state`: the final weight
    /// when `remaining` is empty, otherwise the combination over every
    /// outgoing live edge of the edge weight and the successor's value.
    ///
    /// A state the automaton never mentions yields the alternative identity.
    pub fn value_from(&self, state: &Q, remaining: &[S]) -> V {
        match self.state_index(state) {
            Some(i) => self.backward_row(remaining)[i].clone(),
            None => V::identity_alt(),
        }
    }

    /// Mirror of [`value_from`](Self::value_from): the value of having read
    /// `consumed` and arrived in `state`, peeling symbols from the end of
    /// the prefix.
    pub fn value_to(&self, state: &Q, consumed: &[S]) -> V {
        match self.state_index(state) {
            Some(i) => self.forward_row(consumed)[i].clone(),
            None => V::identity_alt(),
        }
    }

    /// Backward table, returned as its position-0 row:
    /// `row[q] = value_from(q, sequence)`.
    ///
    /// Rows are filled in decreasing position order; only the previous row
    /// is live, so one row of storage suffices for each of the two rows in
    /// flight. Edges whose merged weight is the alternative identity are
    /// skipped -- a no-op on the result, by distributivity.
    fn backward_row(&self, sequence: &[S]) -> Vec<V> {
        let n = self.state_count();
        let mut row: Vec<V> = self
            .all_states()
            .iter()
            .map(|q| self.final_weight(q))
            .collect();

        for symbol in sequence.iter().rev() {
            let mut prev = Vec::with_capacity(n);
            for from in 0..n {
                let mut cell = V::identity_alt();
                for (to, weight) in self.successors(from, symbol) {
                    if weight.is_identity_alt() {
                        continue;
                    }
                    cell = cell.combine_alt(&weight.combine_seq(&row[*to]));
                }
                prev.push(cell);
            }
            row = prev;
        }
        row
    }

    /// Forward table, returned as its final row:
    /// `row[q] = value_to(q, sequence)`.
    ///
    /// The prefix value stays on the left of every sequential combination so
    /// that algebras with a non-commutative sequential operation (string
    /// sets) agree with the backward pass.
    fn forward_row(&self, sequence: &[S]) -> Vec<V> {
        let n = self.state_count();
        let mut row: Vec<V> = self
            .all_states()
            .iter()
            .map(|q| self.initial_weight(q))
            .collect();

        for symbol in sequence {
            let mut next = Vec::with_capacity(n);
            for to in 0..n {
                let mut cell = V::identity_alt();
                for (from, weight) in self.predecessors(to, symbol) {
                    if weight.is_identity_alt() {
                        continue;
                    }
                    cell = cell.combine_alt(&row[*from].combine_seq(weight));
                }
                next.push(cell);
            }
            row = next;
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use crate::samples;
    use wfsa_semiring::{Cost, Prob, Semiring, StringSet};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn assert_prob(actual: Prob, expected: f64) {
        assert!(
            (actual.value() - expected).abs() < 1e-12,
            "got {actual:?}, expected {expected}"
        );
    }

    #[test]
    fn bigram_scorer_eta() {
        let a = samples::bigram_scorer();
        // Two accepting paths: Edge-e->Internal-t->{Edge,Internal}-a->Edge.
        let expected = 1.0 * 0.029 * (0.084 * 0.015 + 0.021 * 0.042) * 0.5;
        assert_prob(a.accept(&chars("eta")), expected);
        assert!(a.accept(&chars("eta")).value() <= 1.0);
    }

    #[test]
    fn bigram_scorer_ena() {
        let a = samples::bigram_scorer();
        let expected = 1.0 * 0.029 * (0.098 * 0.015 + 0.085 * 0.042) * 0.5;
        assert_prob(a.accept(&chars("ena")), expected);
    }

    #[test]
    fn bigram_scorer_rejects_unknown_symbol() {
        let a = samples::bigram_scorer();
        assert!(a.accept(&chars("exa")).is_identity_alt());
    }

    #[test]
    fn bigram_scorer_empty_sequence() {
        let a = samples::bigram_scorer();
        // init(Edge) * fin(Edge) with no symbols in between.
        assert_prob(a.accept(&[]), 0.5);
    }

    #[test]
    fn double_letter_classification() {
        let a = samples::double_letter_acceptor();
        // No adjacent CC or VV anywhere in CVCVCV.
        assert!(!a.accept(&chars("CVCVCV")));
        assert!(a.accept(&chars("CVCCVCV")));
        assert!(a.accept(&chars("VVC")));
        assert!(!a.accept(&chars("CV")));
        assert!(!a.accept(&[]));
    }

    #[test]
    fn toll_route_minimum_cost() {
        let a = samples::toll_route();
        // The free C-C bridge alone: cost 0.
        assert_eq!(a.accept(&chars("CC")), Cost::raw(0.0));
        // "CCC": loop once before the bridge for 5, beating 7 after it.
        assert_eq!(a.accept(&chars("CCC")), Cost::raw(5.0));
        assert_eq!(a.accept(&chars("VCC")), Cost::raw(4.0));
        assert_eq!(a.accept(&chars("CCV")), Cost::raw(8.0));
        // No adjacent double C: no accepting path at any price.
        assert_eq!(a.accept(&chars("C")), Cost::INFINITY);
        assert_eq!(a.accept(&chars("CVC")), Cost::INFINITY);
        assert_eq!(a.accept(&chars("zz")), Cost::INFINITY);
    }

    #[test]
    fn transliterator_yields_both_candidates_once() {
        let a = samples::transliterator();
        let out = a.accept(&chars("tan"));
        assert_eq!(out.len(), 2);
        assert_eq!(out.strings(), &["tan".to_string(), "Tan".to_string()]);
    }

    #[test]
    fn context_transliterator_ambiguous_after_vowel() {
        let a = samples::context_transliterator();
        // A held 't' after a vowel, resolved by a following 'a': one
        // candidate per reading of the ambiguous edge.
        let out = a.accept(&chars("atan"));
        assert_eq!(out.strings(), &["atan".to_string(), "aTan".to_string()]);
    }

    #[test]
    fn context_transliterator_single_reading_paths() {
        let a = samples::context_transliterator();
        // 't' in consonant context passes through unchanged.
        assert_eq!(a.accept(&chars("tan")).strings(), &["tan".to_string()]);
        // A held 't' at the end of input is flushed by the final output.
        assert_eq!(a.accept(&chars("at")).strings(), &["at".to_string()]);
        // Empty input: only state 0 is a live entry point.
        assert_eq!(a.accept(&[]).strings(), &["".to_string()]);
        assert!(a.accept(&chars("x")).is_empty());
    }

    #[test]
    fn transliterator_empty_result_is_soft_failure() {
        let a = samples::transliterator();
        assert_eq!(a.accept(&chars("xyz")), StringSet::empty());
        assert!(a.accept(&chars("ta")).is_empty());
    }

    #[test]
    fn value_from_and_value_to_read_single_cells() {
        let a = samples::bigram_scorer();
        // value_from at a start state, weighted by init, reproduces accept.
        let from_edge = a.value_from(&"Edge", &chars("eta"));
        assert_prob(
            a.initial_weight(&"Edge").combine_seq(&from_edge),
            a.accept(&chars("eta")).value(),
        );
        // Empty suffix reads the final weight directly.
        assert_eq!(a.value_from(&"Edge", &[]), a.final_weight(&"Edge"));
        assert_eq!(a.value_to(&"Edge", &[]), a.initial_weight(&"Edge"));
        // Unmentioned states evaluate to the alternative identity.
        assert_eq!(a.value_from(&"Nowhere", &chars("eta")), Prob::raw(0.0));
        assert_eq!(a.value_to(&"Nowhere", &[]), Prob::raw(0.0));
    }
}
