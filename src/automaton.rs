use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::hash::Hash;

/// A trait describing the types usable as automaton state identifiers.
///
/// States are opaque: the automata only ever compare, hash, order and clone
/// them. During construction states are small integers; after subset
/// construction they are sets of NFA states; after normalization they are
/// dense integers again. This trait has a blanket implementation, so it is
/// never implemented by hand.
pub trait StateID: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T: Clone + Eq + Hash + Ord + fmt::Debug> StateID for T {}

/// A finite state machine that can decide acceptance of a character
/// sequence.
///
/// This is implemented by both [`Nfa`](crate::Nfa) and
/// [`Dfa`](crate::Dfa). The two differ in the shape of their transition
/// values (a set of destinations versus a single destination), which is why
/// the transition table itself is not part of this interface. Relabeling
/// changes the state type parameter of the concrete automaton and therefore
/// also stays an inherent method on each implementation.
pub trait Automaton {
    /// The state identifier type of this automaton.
    type State: StateID;

    /// Return the start state.
    fn start(&self) -> &Self::State;

    /// Returns true when the given state is an accepting state.
    fn is_accept(&self, state: &Self::State) -> bool;

    /// Return the set of all states of this automaton: the start state, the
    /// accepting states and every state appearing in the transition table as
    /// a key or a destination.
    fn states(&self) -> BTreeSet<Self::State>;

    /// Return a new automaton in which every occurrence of `orig` has been
    /// replaced by `replacement`.
    fn substitute(
        &self,
        orig: &Self::State,
        replacement: &Self::State,
    ) -> Self
    where
        Self: Sized;

    /// Run this automaton on the given character sequence and report whether
    /// the whole sequence is accepted. This never fails: a missing
    /// transition rejects the sequence.
    fn run<I: IntoIterator<Item = char>>(&self, seq: I) -> bool;

    /// Convenience for running this automaton on a string slice.
    fn is_match(&self, haystack: &str) -> bool {
        self.run(haystack.chars())
    }
}

/// Build a relabeling of `states` onto the dense range `0..n`, assigning `0`
/// to `start` and the remaining indices in sorted order. Applying this to an
/// automaton whose states already are `0..n` with start `0` produces the
/// identity, which is what makes normalization idempotent.
pub(crate) fn dense_mapping<S: StateID>(
    start: &S,
    states: &BTreeSet<S>,
) -> HashMap<S, usize> {
    let mut mapping = HashMap::with_capacity(states.len());
    mapping.insert(start.clone(), 0);
    let mut next = 1;
    for state in states {
        if state != start {
            mapping.insert(state.clone(), next);
            next += 1;
        }
    }
    mapping
}
