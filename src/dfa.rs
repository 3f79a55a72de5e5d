use std::collections::{BTreeSet, HashMap};

use crate::alphabet::Unit;
use crate::automaton::{dense_mapping, Automaton, StateID};

/// A deterministic finite automaton.
///
/// Structurally a DFA is an [`Nfa`](crate::Nfa) whose transition table maps
/// each `(state, unit)` pair to at most one destination. Absence of an
/// entry is an implicit failure: no sink state is ever materialized, and a
/// missing transition during execution simply rejects the input.
///
/// DFAs are produced by [`Nfa::to_deterministic`](crate::Nfa) with sets of
/// NFA states as state labels, and by [`normalize`](Dfa::normalize), which
/// renames those labels onto a dense integer range.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Dfa<S: Eq + std::hash::Hash> {
    pub(crate) start: S,
    pub(crate) accept: BTreeSet<S>,
    pub(crate) trans: HashMap<S, HashMap<Unit, S>>,
}

impl<S: StateID> Dfa<S> {
    /// Create a DFA from its parts.
    pub fn new(
        start: S,
        accept: BTreeSet<S>,
        trans: HashMap<S, HashMap<Unit, S>>,
    ) -> Dfa<S> {
        Dfa { start, accept, trans }
    }

    /// Return the start state.
    pub fn start(&self) -> &S {
        &self.start
    }

    /// Return the set of accepting states.
    pub fn accept(&self) -> &BTreeSet<S> {
        &self.accept
    }

    /// Return the set of all states of this DFA.
    pub fn states(&self) -> BTreeSet<S> {
        let mut states = BTreeSet::new();
        states.insert(self.start.clone());
        states.extend(self.accept.iter().cloned());
        for (state, row) in &self.trans {
            states.insert(state.clone());
            states.extend(row.values().cloned());
        }
        states
    }

    /// Return a structurally identical DFA over a new state type, applying
    /// `map` to every occurrence of every state.
    ///
    /// The mapping must not identify states with conflicting transition
    /// rows: a DFA has a single destination per `(state, unit)` pair, so
    /// when two collapsed states disagree on a unit, the destination of the
    /// later row wins. Every mapping used by this crate is injective.
    pub fn relabel<T, F>(&self, mut map: F) -> Dfa<T>
    where
        T: StateID,
        F: FnMut(&S) -> T,
    {
        let start = map(&self.start);
        let accept = self.accept.iter().map(&mut map).collect();
        let mut trans: HashMap<T, HashMap<Unit, T>> =
            HashMap::with_capacity(self.trans.len());
        for (state, row) in &self.trans {
            let merged = trans.entry(map(state)).or_default();
            for (&unit, dest) in row {
                merged.insert(unit, map(dest));
            }
        }
        Dfa { start, accept, trans }
    }

    /// Return a new DFA in which every occurrence of `orig` has been
    /// replaced by `replacement`.
    pub fn substitute(&self, orig: &S, replacement: &S) -> Dfa<S> {
        self.relabel(|s| {
            if s == orig {
                replacement.clone()
            } else {
                s.clone()
            }
        })
    }

    /// Relabel this DFA onto the dense integer range `0..n`, with the start
    /// state becoming `0` and the remaining states numbered in sorted
    /// order.
    ///
    /// This is meant for the set-labelled DFA coming out of subset
    /// construction, whose states would otherwise be expensive to hash and
    /// compare. Normalization is idempotent: applied to an already
    /// normalized DFA it is the identity.
    pub fn normalize(&self) -> Dfa<usize> {
        let mapping = dense_mapping(&self.start, &self.states());
        self.relabel(|s| mapping[s])
    }

    /// Run this DFA on the given character sequence and report whether the
    /// whole sequence is accepted.
    ///
    /// Each character follows its own edge when one exists, falling back to
    /// the wildcard edge otherwise. A state with neither aborts the run as
    /// non-accepting.
    pub fn run<I: IntoIterator<Item = char>>(&self, seq: I) -> bool {
        let mut state = &self.start;
        for ch in seq {
            let row = match self.trans.get(state) {
                None => return false,
                Some(row) => row,
            };
            state = match row
                .get(&Unit::Char(ch))
                .or_else(|| row.get(&Unit::Any))
            {
                None => return false,
                Some(next) => next,
            };
        }
        self.accept.contains(state)
    }

    /// Convenience for running this DFA on a string slice.
    pub fn is_match(&self, haystack: &str) -> bool {
        self.run(haystack.chars())
    }
}

impl<S: StateID> Automaton for Dfa<S> {
    type State = S;

    fn start(&self) -> &S {
        &self.start
    }

    fn is_accept(&self, state: &S) -> bool {
        self.accept.contains(state)
    }

    fn states(&self) -> BTreeSet<S> {
        Dfa::states(self)
    }

    fn substitute(&self, orig: &S, replacement: &S) -> Dfa<S> {
        Dfa::substitute(self, orig, replacement)
    }

    fn run<I: IntoIterator<Item = char>>(&self, seq: I) -> bool {
        Dfa::run(self, seq)
    }
}
