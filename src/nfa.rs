use std::collections::{BTreeSet, HashMap};

use crate::alphabet::Unit;
use crate::automaton::{dense_mapping, Automaton, StateID};
use crate::dfa::Dfa;
use crate::error::Result;
use crate::parser;

/// A transition table mapping a state and an input unit to a set of
/// destination states.
pub(crate) type Transitions<S> = HashMap<S, HashMap<Unit, BTreeSet<S>>>;

/// A nondeterministic finite automaton without epsilon transitions.
///
/// An NFA is a plain value: a start state, a set of accepting states and a
/// transition table mapping `(state, unit)` pairs to sets of destination
/// states. There are no epsilon edges anywhere; the combinators in
/// [`compile`](crate::compile) splice automata together by renaming states
/// instead of adding free transitions, so every NFA is directly executable
/// without a closure pass.
///
/// All operations return new automata. An NFA has no identity beyond its
/// structure: two automata with equal components are interchangeable.
///
/// # Example
///
/// ```
/// use regex_splice::Nfa;
///
/// # fn example() -> Result<(), regex_splice::Error> {
/// let nfa = Nfa::from_pattern("a+c|abc")?;
/// assert!(nfa.is_match("aaaaaaac"));
/// assert!(nfa.is_match("abc"));
/// assert!(!nfa.is_match("c"));
/// # Ok(()) }; example().unwrap()
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Nfa<S: Eq + std::hash::Hash> {
    pub(crate) start: S,
    pub(crate) accept: BTreeSet<S>,
    pub(crate) trans: Transitions<S>,
}

impl Nfa<usize> {
    /// Compile the given pattern into an NFA.
    ///
    /// This is the parsing entry point of the crate. It fails on any
    /// pattern violating the grammar: an unmatched group, a dangling
    /// operator, an unknown escape or leftover input after the top level
    /// alternation.
    pub fn from_pattern(pattern: &str) -> Result<Nfa<usize>> {
        parser::parse(pattern)
    }

    /// Return a copy of this NFA with `offset` added to every state.
    ///
    /// This is how two automata about to be spliced together are moved into
    /// disjoint state ranges.
    pub fn shift(&self, offset: usize) -> Nfa<usize> {
        self.relabel(|&s| s + offset)
    }
}

impl<S: StateID> Nfa<S> {
    /// Create an NFA from its parts.
    pub fn new(
        start: S,
        accept: BTreeSet<S>,
        trans: HashMap<S, HashMap<Unit, BTreeSet<S>>>,
    ) -> Nfa<S> {
        Nfa { start, accept, trans }
    }

    /// Embed a DFA into an NFA by wrapping every destination in a singleton
    /// set. The two automata accept exactly the same sequences.
    pub fn from_dfa(dfa: &Dfa<S>) -> Nfa<S> {
        let trans = dfa
            .trans
            .iter()
            .map(|(state, row)| {
                let row = row
                    .iter()
                    .map(|(&unit, dest)| {
                        let mut dests = BTreeSet::new();
                        dests.insert(dest.clone());
                        (unit, dests)
                    })
                    .collect();
                (state.clone(), row)
            })
            .collect();
        Nfa { start: dfa.start.clone(), accept: dfa.accept.clone(), trans }
    }

    /// Return the start state.
    pub fn start(&self) -> &S {
        &self.start
    }

    /// Return the set of accepting states.
    pub fn accept(&self) -> &BTreeSet<S> {
        &self.accept
    }

    /// Consume this NFA and return its transition table.
    pub(crate) fn into_trans(self) -> Transitions<S> {
        self.trans
    }

    /// Replace the accept set with the singleton `{state}`.
    pub(crate) fn set_accept_only(&mut self, state: S) {
        self.accept.clear();
        self.accept.insert(state);
    }

    /// Return the set of all states of this NFA.
    pub fn states(&self) -> BTreeSet<S> {
        let mut states = BTreeSet::new();
        states.insert(self.start.clone());
        states.extend(self.accept.iter().cloned());
        for (state, row) in &self.trans {
            states.insert(state.clone());
            for dests in row.values() {
                states.extend(dests.iter().cloned());
            }
        }
        states
    }

    /// Return a structurally identical NFA over a new state type, applying
    /// `map` to every occurrence of every state.
    ///
    /// The mapping may identify states. When two states collapse into one,
    /// their transition rows are merged and destination sets are unioned,
    /// which is precisely the behavior the splicing combinators rely on.
    pub fn relabel<T, F>(&self, mut map: F) -> Nfa<T>
    where
        T: StateID,
        F: FnMut(&S) -> T,
    {
        let start = map(&self.start);
        let accept = self.accept.iter().map(&mut map).collect();
        let mut trans: Transitions<T> =
            HashMap::with_capacity(self.trans.len());
        for (state, row) in &self.trans {
            let merged = trans.entry(map(state)).or_default();
            for (&unit, dests) in row {
                merged
                    .entry(unit)
                    .or_default()
                    .extend(dests.iter().map(&mut map));
            }
        }
        Nfa { start, accept, trans }
    }

    /// Return a new NFA in which every occurrence of `orig` (as the start
    /// state, in the accept set, and as any key or destination of the
    /// transition table) has been replaced by `replacement`.
    pub fn substitute(&self, orig: &S, replacement: &S) -> Nfa<S> {
        self.relabel(|s| {
            if s == orig {
                replacement.clone()
            } else {
                s.clone()
            }
        })
    }

    /// Relabel this NFA onto the dense integer range `0..n`, with the start
    /// state becoming `0` and the remaining states numbered in sorted
    /// order.
    pub fn compact(&self) -> Nfa<usize> {
        let mapping = dense_mapping(&self.start, &self.states());
        self.relabel(|s| mapping[s])
    }

    /// Convert this NFA into an equivalent DFA via subset construction.
    ///
    /// The resulting DFA's states are sets of this NFA's states; callers
    /// that want dense integer states should follow up with
    /// [`Dfa::normalize`]. Determinize once and reuse the DFA when matching
    /// repeatedly; a handful of matches is cheaper directly on the NFA.
    pub fn to_deterministic(&self) -> Dfa<BTreeSet<S>> {
        crate::determinize::Determinizer::new(self).build()
    }

    /// Run this NFA on the given character sequence and report whether the
    /// whole sequence is accepted.
    ///
    /// This simulates subset construction on the fly: a set of current
    /// states is advanced by unioning the destinations of every member for
    /// each input character. States with no matching transition simply
    /// contribute nothing.
    pub fn run<I: IntoIterator<Item = char>>(&self, seq: I) -> bool {
        let mut current = BTreeSet::new();
        current.insert(self.start.clone());
        for ch in seq {
            let mut next = BTreeSet::new();
            for state in &current {
                if let Some(row) = self.trans.get(state) {
                    if let Some(dests) = row.get(&Unit::Char(ch)) {
                        next.extend(dests.iter().cloned());
                    }
                    if let Some(dests) = row.get(&Unit::Any) {
                        next.extend(dests.iter().cloned());
                    }
                }
            }
            if next.is_empty() {
                return false;
            }
            current = next;
        }
        current.iter().any(|s| self.accept.contains(s))
    }

    /// Convenience for running this NFA on a string slice.
    pub fn is_match(&self, haystack: &str) -> bool {
        self.run(haystack.chars())
    }
}

impl<S: StateID> Automaton for Nfa<S> {
    type State = S;

    fn start(&self) -> &S {
        &self.start
    }

    fn is_accept(&self, state: &S) -> bool {
        self.accept.contains(state)
    }

    fn states(&self) -> BTreeSet<S> {
        Nfa::states(self)
    }

    fn substitute(&self, orig: &S, replacement: &S) -> Nfa<S> {
        Nfa::substitute(self, orig, replacement)
    }

    fn run<I: IntoIterator<Item = char>>(&self, seq: I) -> bool {
        Nfa::run(self, seq)
    }
}

/// Merge `from` into `into`, unioning destination sets when both tables
/// define a transition for the same `(state, unit)` pair.
pub(crate) fn merge_trans<S: StateID>(
    into: &mut Transitions<S>,
    from: Transitions<S>,
) {
    for (state, row) in from {
        let merged = into.entry(state).or_default();
        for (unit, dests) in row {
            merged.entry(unit).or_default().extend(dests);
        }
    }
}
