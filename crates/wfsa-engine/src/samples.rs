// Built-in demonstration automata, one per algebra.
//
// These are the literal tables used throughout the test suite and by the
// command-line tools; they double as worked examples of how each algebra
// changes what `accept` computes.

use wfsa_semiring::{Cost, Prob, StringSet};

use crate::automaton::Automaton;

/// Two-state letter-bigram model over `{a, e, i, n, t, s}`.
///
/// `"Edge"` stands for a word boundary, `"Internal"` for a word-internal
/// position; each edge weight is the bigram probability of the labeled
/// letter in that positional context. `accept` returns the summed
/// probability of every path generating the sequence.
pub fn bigram_scorer() -> Automaton<&'static str, char, Prob> {
    Automaton::new(
        vec![("Edge", Prob::raw(1.0))],
        vec![("Edge", Prob::raw(0.5))],
        vec![
            ("Edge", 'a', Prob::raw(0.015), "Edge"),
            ("Internal", 'a', Prob::raw(0.042), "Edge"),
            ("Edge", 'i', Prob::raw(0.015), "Edge"),
            ("Internal", 'e', Prob::raw(0.056), "Edge"),
            ("Internal", 'i', Prob::raw(0.014), "Edge"),
            ("Internal", 'n', Prob::raw(0.098), "Edge"),
            ("Internal", 't', Prob::raw(0.084), "Edge"),
            ("Internal", 's', Prob::raw(0.154), "Edge"),
            ("Edge", 'a', Prob::raw(0.103), "Internal"),
            ("Internal", 'a', Prob::raw(0.085), "Internal"),
            ("Edge", 'e', Prob::raw(0.029), "Internal"),
            ("Internal", 'e', Prob::raw(0.149), "Internal"),
            ("Edge", 'i', Prob::raw(0.088), "Internal"),
            ("Internal", 'i', Prob::raw(0.149), "Internal"),
            ("Edge", 'n', Prob::raw(0.029), "Internal"),
            ("Internal", 'n', Prob::raw(0.085), "Internal"),
            ("Edge", 't', Prob::raw(0.103), "Internal"),
            ("Internal", 't', Prob::raw(0.021), "Internal"),
            ("Edge", 's', Prob::raw(0.118), "Internal"),
            ("Internal", 's', Prob::raw(0.064), "Internal"),
        ],
    )
}

/// Boolean recognizer over `{C, V}` for strings containing an adjacent
/// double consonant or double vowel.
///
/// State 40 loops until it guesses where the doubled pair begins, 41/42
/// demand the matching second letter, and 43 absorbs the rest.
pub fn double_letter_acceptor() -> Automaton<u32, char, bool> {
    Automaton::new(
        vec![(40, true)],
        vec![(43, true)],
        vec![
            (40, 'C', true, 40),
            (41, 'C', true, 43),
            (40, 'V', true, 40),
            (42, 'V', true, 43),
            (40, 'C', true, 41),
            (43, 'C', true, 43),
            (40, 'V', true, 42),
            (43, 'V', true, 43),
        ],
    )
}

/// Three-state cost network over `{C, V}`: `accept` returns the cheapest
/// accepting path's total toll.
///
/// State 10 loops for 5 per `C` and 4 per `V`, a free `C`-`C` bridge runs
/// 10 -> 11 -> 12, and state 12 loops for 7 per `C` and 8 per `V`. The
/// accepted strings are exactly those with an adjacent double `C`; the
/// evaluator picks the cheapest placement of the bridge.
pub fn toll_route() -> Automaton<u32, char, Cost> {
    Automaton::new(
        vec![(10, Cost::raw(0.0))],
        vec![(12, Cost::raw(0.0))],
        vec![
            (10, 'C', Cost::raw(5.0), 10),
            (10, 'V', Cost::raw(4.0), 10),
            (10, 'C', Cost::raw(0.0), 11),
            (11, 'C', Cost::raw(0.0), 12),
            (12, 'C', Cost::raw(7.0), 12),
            (12, 'V', Cost::raw(8.0), 12),
        ],
    )
}

/// Ambiguous string-set transliterator.
///
/// The `'t'` edge out of state 2 exists twice with different outputs
/// (`"ta"` and a capitalized `"Ta"`), so every input starting with `t`
/// produces one candidate per reading. The following `'a'` emits nothing:
/// its vowel was already written by the `'t'` edge.
pub fn transliterator() -> Automaton<u32, char, StringSet> {
    Automaton::new(
        vec![(2, StringSet::singleton(""))],
        vec![(5, StringSet::singleton(""))],
        vec![
            (2, 't', StringSet::singleton("ta"), 3),
            (2, 't', StringSet::singleton("Ta"), 3),
            (3, 'a', StringSet::singleton(""), 4),
            (4, 'n', StringSet::singleton("n"), 5),
        ],
    )
}

/// Full context-sensitive transliterator over `{n, t, a}`.
///
/// State 0 writes consonant-context letters through unchanged; a vowel
/// moves to state 1. From there a `t` is held (state 2, nothing written
/// yet) until the next symbol decides its spelling: before `n` or `t` it
/// comes out plain, before `a` either `"ta"` or capitalized `"Ta"` -- the
/// one-to-many edge. A `t` still held at the end of input is flushed by
/// state 2's final output. Start entries for states 1 and 2 carry the
/// empty collection, so only state 0 is a live entry point.
pub fn context_transliterator() -> Automaton<u32, char, StringSet> {
    Automaton::new(
        vec![
            (0, StringSet::singleton("")),
            (1, StringSet::empty()),
            (2, StringSet::empty()),
        ],
        vec![
            (0, StringSet::singleton("")),
            (1, StringSet::singleton("")),
            (2, StringSet::singleton("t")),
        ],
        vec![
            (0, 'n', StringSet::singleton("n"), 0),
            (0, 't', StringSet::singleton("t"), 0),
            (0, 'a', StringSet::singleton("a"), 1),
            (1, 'a', StringSet::singleton("a"), 1),
            (1, 'n', StringSet::singleton("n"), 0),
            (1, 't', StringSet::singleton(""), 2),
            (2, 'n', StringSet::singleton("tn"), 0),
            (2, 't', StringSet::singleton("tt"), 0),
            (2, 'a', StringSet::from(vec!["ta".to_string(), "Ta".to_string()]), 1),
        ],
    )
}
