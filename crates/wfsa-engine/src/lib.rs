//! Semiring-weighted finite automaton evaluation engine.
//!
//! A nondeterministic, edge-labeled automaton whose start, accept, and
//! transition weights are values of an abstract algebra (a semiring, see
//! [`wfsa_semiring`]). One evaluation core computes recognition,
//! probabilities, minimum costs, or candidate output strings, depending only
//! on which algebra is plugged in.
//!
//! # Architecture
//!
//! - [`automaton`] -- immutable weighted-automaton representation and weight
//!   queries
//! - [`eval`] -- backward and forward total-value evaluation over a sequence
//!   (table-based dynamic programming)
//! - [`samples`] -- built-in demonstration automata, one per algebra
//!
//! # Example
//!
//! ```
//! use wfsa_engine::Automaton;
//!
//! // A two-state recognizer for strings ending in 'b'.
//! let a = Automaton::new(
//!     vec![(0, true)],
//!     vec![(1, true)],
//!     vec![
//!         (0, 'a', true, 0),
//!         (0, 'b', true, 0),
//!         (0, 'b', true, 1),
//!     ],
//! );
//! let word: Vec<char> = "aab".chars().collect();
//! assert!(a.accept(&word));
//! ```

pub mod automaton;
pub mod eval;
pub mod samples;

pub use automaton::{Automaton, Transition};
