// Weighted automaton representation and weight queries.

use std::fmt::Debug;
use std::hash::Hash;

use hashbrown::HashMap;
use wfsa_semiring::{Semiring, ops};

/// One weighted, labeled edge: `from --symbol/value--> to`.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<Q, S, V> {
    pub from: Q,
    pub symbol: S,
    pub value: V,
    pub to: Q,
}

/// A nondeterministic automaton whose start, accept, and edge weights are
/// values of one semiring `V`.
///
/// States `Q` are opaque identifiers: compared and hashed, never traversed.
/// The start, end, and delta tables are multisets; entries naming the same
/// state (or the same `(from, symbol, to)` triple) are merged with the
/// algebra's alternative operation when queried.
///
/// An automaton is built once from literal tables and is immutable
/// afterwards; every query and evaluation takes `&self`, so concurrent
/// evaluations share it freely.
pub struct Automaton<Q, S, V> {
    starts: Vec<(Q, V)>,
    ends: Vec<(Q, V)>,
    transitions: Vec<Transition<Q, S, V>>,

    /// Every mentioned state, deduplicated, in first-mention order
    /// (starts, ends, then both endpoints of each transition).
    states: Vec<Q>,
    index: HashMap<Q, usize>,

    /// Per source state: symbol -> merged successor weights.
    /// Parallel edges are combined with `combine_alt` in table order.
    arcs: Vec<HashMap<S, Vec<(usize, V)>>>,
    /// Per target state: symbol -> merged predecessor weights.
    rev_arcs: Vec<HashMap<S, Vec<(usize, V)>>>,
}

fn intern<Q: Clone + Eq + Hash>(
    states: &mut Vec<Q>,
    index: &mut HashMap<Q, usize>,
    q: &Q,
) -> usize {
    match index.get(q) {
        Some(&i) => i,
        None => {
            let i = states.len();
            states.push(q.clone());
            index.insert(q.clone(), i);
            i
        }
    }
}

impl<Q, S, V> Automaton<Q, S, V>
where
    Q: Clone + Eq + Hash + Debug,
    S: Clone + Eq + Hash,
    V: Semiring,
{
    /// Build an automaton from literal weight tables.
    ///
    /// `starts` and `ends` pair states with their initial and final weights;
    /// `deltas` lists `(from, symbol, value, to)` edges. Duplicate entries
    /// are allowed and merge algebraically. No further validation is
    /// performed; the algebra itself is fixed by the type parameter `V`.
    pub fn new(starts: Vec<(Q, V)>, ends: Vec<(Q, V)>, deltas: Vec<(Q, S, V, Q)>) -> Self {
        let transitions: Vec<Transition<Q, S, V>> = deltas
            .into_iter()
            .map(|(from, symbol, value, to)| Transition {
                from,
                symbol,
                value,
                to,
            })
            .collect();

        let mut states = Vec::new();
        let mut index = HashMap::new();
        for (q, _) in &starts {
            intern(&mut states, &mut index, q);
        }
        for (q, _) in &ends {
            intern(&mut states, &mut index, q);
        }
        for t in &transitions {
            intern(&mut states, &mut index, &t.from);
            intern(&mut states, &mut index, &t.to);
        }

        let mut arcs: Vec<HashMap<S, Vec<(usize, V)>>> =
            (0..states.len()).map(|_| HashMap::new()).collect();
        let mut rev_arcs: Vec<HashMap<S, Vec<(usize, V)>>> =
            (0..states.len()).map(|_| HashMap::new()).collect();
        for t in &transitions {
            let from = index[&t.from];
            let to = index[&t.to];
            merge_arc(&mut arcs[from], &t.symbol, to, &t.value);
            merge_arc(&mut rev_arcs[to], &t.symbol, from, &t.value);
        }

        Self {
            starts,
            ends,
            transitions,
            states,
            index,
            arcs,
            rev_arcs,
        }
    }

    /// Every state mentioned in the start, end, or delta tables,
    /// deduplicated, in deterministic first-mention order.
    pub fn all_states(&self) -> &[Q] {
        &self.states
    }

    /// The literal start table.
    pub fn starts(&self) -> &[(Q, V)] {
        &self.starts
    }

    /// The literal end table.
    pub fn ends(&self) -> &[(Q, V)] {
        &self.ends
    }

    /// The literal delta table.
    pub fn transitions(&self) -> &[Transition<Q, S, V>] {
        &self.transitions
    }

    /// Combined initial weight of `q`: the alternative-fold over every start
    /// entry naming `q`, or the alternative identity if there is none.
    pub fn initial_weight(&self, q: &Q) -> V {
        ops::fold_alt(
            self.starts
                .iter()
                .filter(|(q1, _)| q1 == q)
                .map(|(_, v)| v.clone()),
        )
    }

    /// Combined final weight of `q`, analogous to
    /// [`initial_weight`](Self::initial_weight).
    pub fn final_weight(&self, q: &Q) -> V {
        ops::fold_alt(
            self.ends
                .iter()
                .filter(|(q1, _)| q1 == q)
                .map(|(_, v)| v.clone()),
        )
    }

    /// Combined weight of every edge matching `(from, symbol, to)` exactly.
    ///
    /// Parallel edges between the same ordered state pair under the same
    /// symbol merge with the alternative operation rather than being an
    /// error. Returns the alternative identity when no edge matches,
    /// including for states the automaton never mentions.
    pub fn transition_weight(&self, from: &Q, symbol: &S, to: &Q) -> V {
        let (Some(&f), Some(&t)) = (self.index.get(from), self.index.get(to)) else {
            return V::identity_alt();
        };
        self.arcs[f]
            .get(symbol)
            .and_then(|succ| succ.iter().find(|(q, _)| *q == t))
            .map(|(_, v)| v.clone())
            .unwrap_or_else(V::identity_alt)
    }

    pub(crate) fn state_index(&self, q: &Q) -> Option<usize> {
        self.index.get(q).copied()
    }

    pub(crate) fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Merged successors of state `from` under `symbol`.
    pub(crate) fn successors(&self, from: usize, symbol: &S) -> &[(usize, V)] {
        self.arcs[from].get(symbol).map_or(&[], Vec::as_slice)
    }

    /// Merged predecessors of state `to` under `symbol`.
    pub(crate) fn predecessors(&self, to: usize, symbol: &S) -> &[(usize, V)] {
        self.rev_arcs[to].get(symbol).map_or(&[], Vec::as_slice)
    }
}

/// Merge one edge into a per-state adjacency map, combining with
/// `combine_alt` when the `(symbol, other-endpoint)` slot is already taken.
fn merge_arc<S, V>(map: &mut HashMap<S, Vec<(usize, V)>>, symbol: &S, other: usize, value: &V)
where
    S: Clone + Eq + Hash,
    V: Semiring,
{
    let slots = map.entry(symbol.clone()).or_default();
    match slots.iter_mut().find(|(q, _)| *q == other) {
        Some((_, v)) => *v = v.combine_alt(value),
        None => slots.push((other, value.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wfsa_semiring::Prob;

    fn two_state() -> Automaton<&'static str, char, Prob> {
        Automaton::new(
            vec![("a", Prob::raw(1.0))],
            vec![("b", Prob::raw(0.5))],
            vec![
                ("a", 'x', Prob::raw(0.2), "b"),
                ("a", 'x', Prob::raw(0.3), "b"),
                ("a", 'y', Prob::raw(0.4), "a"),
            ],
        )
    }

    #[test]
    fn all_states_deduplicates_in_first_mention_order() {
        let a = Automaton::new(
            vec![(7, true), (7, true)],
            vec![(9, true)],
            vec![(7, 'x', true, 8), (8, 'x', true, 9), (9, 'x', true, 7)],
        );
        assert_eq!(a.all_states(), &[7, 9, 8]);
    }

    #[test]
    fn duplicate_start_entries_merge_with_alt() {
        let a: Automaton<&str, char, Prob> = Automaton::new(
            vec![("q", Prob::raw(0.25)), ("q", Prob::raw(0.5))],
            vec![],
            vec![],
        );
        assert_eq!(a.initial_weight(&"q"), Prob::raw(0.75));
    }

    #[test]
    fn absent_state_weights_are_identity_alt() {
        let a = two_state();
        assert_eq!(a.initial_weight(&"b"), Prob::raw(0.0));
        assert_eq!(a.final_weight(&"a"), Prob::raw(0.0));
        assert_eq!(a.initial_weight(&"nowhere"), Prob::raw(0.0));
        assert_eq!(a.transition_weight(&"nowhere", &'x', &"b"), Prob::raw(0.0));
    }

    #[test]
    fn parallel_edges_merge_algebraically() {
        let a = two_state();
        assert_eq!(a.transition_weight(&"a", &'x', &"b"), Prob::raw(0.5));
        assert_eq!(a.transition_weight(&"a", &'y', &"a"), Prob::raw(0.4));
        assert_eq!(a.transition_weight(&"b", &'x', &"a"), Prob::raw(0.0));
        assert_eq!(a.transition_weight(&"a", &'z', &"b"), Prob::raw(0.0));
    }

    #[test]
    fn literal_tables_are_preserved() {
        let a = two_state();
        assert_eq!(a.starts().len(), 1);
        assert_eq!(a.ends().len(), 1);
        assert_eq!(a.transitions().len(), 3);
        assert_eq!(a.transitions()[1].value, Prob::raw(0.3));
    }
}
