use std::collections::{BTreeSet, HashMap, HashSet};

use crate::alphabet::Unit;
use crate::automaton::StateID;
use crate::dfa::Dfa;
use crate::nfa::Nfa;

/// A converter from an NFA to an equivalent DFA via subset construction.
///
/// Each DFA state is the set of NFA states the input could currently be in.
/// The work stack starts with the singleton `{nfa.start}` and every newly
/// produced destination set is pushed exactly once, so construction
/// terminates: the number of distinct sets is bounded by the power set of
/// the NFA's states. Traversal order is depth first, but the resulting
/// automaton does not depend on it.
#[derive(Debug)]
pub struct Determinizer<'a, S: Eq + std::hash::Hash> {
    /// The NFA we're converting into a DFA.
    nfa: &'a Nfa<S>,
    /// The transition table being built, over set-of-NFA-state labels.
    trans: HashMap<BTreeSet<S>, HashMap<Unit, BTreeSet<S>>>,
    /// The accepting DFA states found so far: every set intersecting the
    /// NFA's accept set.
    accept: BTreeSet<BTreeSet<S>>,
    /// A stack of state sets left to process.
    stack: Vec<BTreeSet<S>>,
    /// State sets that have already been processed.
    visited: HashSet<BTreeSet<S>>,
}

impl<'a, S: StateID> Determinizer<'a, S> {
    /// Create a new determinizer for the given NFA.
    pub fn new(nfa: &'a Nfa<S>) -> Determinizer<'a, S> {
        Determinizer {
            nfa,
            trans: HashMap::new(),
            accept: BTreeSet::new(),
            stack: vec![],
            visited: HashSet::new(),
        }
    }

    /// Run subset construction and return the resulting DFA.
    pub fn build(mut self) -> Dfa<BTreeSet<S>> {
        let mut start = BTreeSet::new();
        start.insert(self.nfa.start().clone());
        self.stack.push(start.clone());

        while let Some(set) = self.stack.pop() {
            if !self.visited.insert(set.clone()) {
                continue;
            }
            let row = self.transitions_for(&set);
            trace!(
                "determinize: {:?} has {} outgoing transitions",
                set,
                row.len()
            );
            for dest in row.values() {
                if !self.visited.contains(dest) {
                    self.stack.push(dest.clone());
                }
            }
            if set.iter().any(|s| self.nfa.accept().contains(s)) {
                self.accept.insert(set.clone());
            }
            if !row.is_empty() {
                self.trans.insert(set, row);
            }
        }
        Dfa::new(start, self.accept, self.trans)
    }

    /// Compute the DFA transition row for a set of NFA states: for every
    /// unit on any outgoing transition of any member, the union of the
    /// members' destination sets for that unit.
    ///
    /// Wildcard destinations are folded into every explicit character's
    /// destination set, and the wildcard row entry itself is kept for
    /// characters with no explicit edge. This keeps the DFA's
    /// exact-then-fallback lookup equivalent to the NFA's both-edges union.
    fn transitions_for(
        &self,
        set: &BTreeSet<S>,
    ) -> HashMap<Unit, BTreeSet<S>> {
        let mut row: HashMap<Unit, BTreeSet<S>> = HashMap::new();
        for state in set {
            if let Some(units) = self.nfa.trans.get(state) {
                for (&unit, dests) in units {
                    row.entry(unit)
                        .or_default()
                        .extend(dests.iter().cloned());
                }
            }
        }
        if let Some(any) = row.get(&Unit::Any).cloned() {
            for (unit, dests) in row.iter_mut() {
                if !unit.is_any() {
                    dests.extend(any.iter().cloned());
                }
            }
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::compile;
    use crate::nfa::Nfa;

    fn set(states: &[usize]) -> BTreeSet<usize> {
        states.iter().cloned().collect()
    }

    #[test]
    fn merges_nondeterministic_branches() {
        // a+c|abc: after one 'a' the NFA is in two states at once. The DFA
        // must carry the combined set.
        let nfa = Nfa::from_pattern("a+c|abc").unwrap();
        let dfa = nfa.to_deterministic();
        for input in &["aaac", "abc", "ac", "c", "ab", "dahlk"] {
            assert_eq!(nfa.is_match(input), dfa.is_match(input), "{}", input);
        }
    }

    #[test]
    fn start_set_is_the_nfa_start_singleton() {
        let nfa = Nfa::from_pattern("ab").unwrap();
        let dfa = nfa.to_deterministic();
        assert_eq!(&set(&[0]), dfa.start());
    }

    #[test]
    fn accepting_sets_intersect_nfa_accept() {
        let nfa = Nfa::from_pattern("a*").unwrap();
        let dfa = nfa.to_deterministic();
        for state in dfa.states() {
            let accepts = state.iter().any(|s| nfa.accept().contains(s));
            assert_eq!(accepts, dfa.accept().contains(&state));
        }
    }

    #[test]
    fn wildcard_edges_fold_into_explicit_symbols() {
        // a|. : on 'a' both branches survive, on anything else only the
        // wildcard branch does.
        let nfa = compile::alternate(compile::symbol('a'), compile::wildcard());
        let dfa = nfa.to_deterministic().normalize();
        assert!(dfa.is_match("a"));
        assert!(dfa.is_match("z"));
        assert!(!dfa.is_match("az"));
        assert!(!dfa.is_match(""));
    }

    #[test]
    fn construction_terminates_on_loops() {
        let nfa = Nfa::from_pattern("(a|b)*abb").unwrap();
        let dfa = nfa.to_deterministic().normalize();
        assert!(dfa.is_match("abb"));
        assert!(dfa.is_match("aababb"));
        assert!(!dfa.is_match("ab"));
    }
}
