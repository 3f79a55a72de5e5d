/*!
Combinators for building NFAs bottom-up, in the style of Thompson's
construction but without epsilon transitions.

Where the classical construction wires sub-automata together with free
edges, these combinators splice them by *state identification*: the second
automaton is shifted into a disjoint integer range and its start state is
then substituted away, either onto the first automaton's accepting states
(concatenation) or onto its start state (alternation). Every intermediate
automaton stays directly executable; nothing ever needs an epsilon-closure
pass.

The price of that representation is a renumbering discipline. The splicing
offset is `left.states().len() - 1`, which is only collision-free when both
operands label their states with the dense range `0..n` and start at `0`.
Splicing can punch holes into a label range (an accept state in the middle
of the range is substituted away), so the binary combinators re-compact
both operands before every merge.
*/

use std::collections::BTreeSet;

use crate::alphabet::Unit;
use crate::nfa::{merge_trans, Nfa, Transitions};

/// Returns an NFA matching only the empty sequence: a single state that is
/// both start and accepting, with no transitions.
pub fn empty() -> Nfa<usize> {
    let mut accept = BTreeSet::new();
    accept.insert(0);
    Nfa::new(0, accept, Transitions::new())
}

/// Returns an NFA matching exactly the one-character sequence `[ch]`.
pub fn symbol(ch: char) -> Nfa<usize> {
    primitive(Unit::Char(ch))
}

/// Returns an NFA matching any one-character sequence.
pub fn wildcard() -> Nfa<usize> {
    primitive(Unit::Any)
}

/// Returns an NFA matching any single ASCII digit.
///
/// This is a library-level primitive only: the pattern grammar has no
/// escape for it. It exists for callers composing automata by hand.
pub fn digit() -> Nfa<usize> {
    let mut accept = BTreeSet::new();
    accept.insert(1);
    let mut trans = Transitions::new();
    let row = trans.entry(0).or_default();
    for ch in '0'..='9' {
        row.entry(Unit::Char(ch)).or_default().insert(1);
    }
    Nfa::new(0, accept, trans)
}

/// A two state automaton with a single edge from the non-accepting start
/// to the accepting end.
fn primitive(unit: Unit) -> Nfa<usize> {
    let mut accept = BTreeSet::new();
    accept.insert(1);
    let mut trans = Transitions::new();
    trans.entry(0).or_default().entry(unit).or_default().insert(1);
    Nfa::new(0, accept, trans)
}

/// Returns an NFA matching a sequence from `left` followed by a sequence
/// from `right`.
///
/// The right automaton is shifted into a disjoint range and a copy of it is
/// spliced onto every accepting state of `left` by substituting its start
/// state. The result accepts only where a spliced copy accepts: an
/// accepting state of `left` survives exactly when `right` matches the
/// empty sequence (its start is accepting, so the substitution reproduces
/// the state).
pub fn concat(left: Nfa<usize>, right: Nfa<usize>) -> Nfa<usize> {
    let left = left.compact();
    let right = right.compact();
    let offset = left.states().len() - 1;
    let shifted = right.shift(offset);

    let start = *left.start();
    let ends = left.accept().clone();
    let mut accept = BTreeSet::new();
    let mut trans = left.into_trans();
    for end in &ends {
        let spliced = shifted.substitute(shifted.start(), end);
        accept.extend(spliced.accept().iter().cloned());
        merge_trans(&mut trans, spliced.into_trans());
    }
    Nfa::new(start, accept, trans)
}

/// Returns an NFA matching a sequence from `left` or a sequence from
/// `right`, by shifting `right` into a disjoint range and identifying the
/// two start states.
pub fn alternate(left: Nfa<usize>, right: Nfa<usize>) -> Nfa<usize> {
    let left = left.compact();
    let right = right.compact();
    let offset = left.states().len() - 1;
    let shifted = right.shift(offset);
    let spliced = shifted.substitute(shifted.start(), left.start());

    let start = *left.start();
    let mut accept = left.accept().clone();
    accept.extend(spliced.accept().iter().cloned());
    let mut trans = left.into_trans();
    merge_trans(&mut trans, spliced.into_trans());
    Nfa::new(start, accept, trans)
}

/// Fold [`concat`] over a sequence of NFAs, seeded by its first element.
/// An empty sequence yields [`empty`].
pub fn concat_all<I>(nfas: I) -> Nfa<usize>
where
    I: IntoIterator<Item = Nfa<usize>>,
{
    let mut it = nfas.into_iter();
    match it.next() {
        None => empty(),
        Some(first) => it.fold(first, concat),
    }
}

/// Fold [`alternate`] over a sequence of NFAs, seeded by its first element.
/// An empty sequence yields [`empty`].
pub fn alternate_all<I>(nfas: I) -> Nfa<usize>
where
    I: IntoIterator<Item = Nfa<usize>>,
{
    let mut it = nfas.into_iter();
    match it.next() {
        None => empty(),
        Some(first) => it.fold(first, alternate),
    }
}

/// Close the loop of a repetition: map every accepting state back onto the
/// start state and make the start the only accepting state. Only meaningful
/// as the right operand of a [`concat`], which is where [`one_or_more`] and
/// [`zero_or_more`] use it.
fn star_part(nfa: &Nfa<usize>) -> Nfa<usize> {
    let start = *nfa.start();
    let accept = nfa.accept().clone();
    let mut looped =
        nfa.relabel(|s| if accept.contains(s) { start } else { *s });
    looped.set_accept_only(start);
    looped
}

/// Returns an NFA matching one or more sequences from `nfa`.
pub fn one_or_more(nfa: Nfa<usize>) -> Nfa<usize> {
    let part = star_part(&nfa);
    concat(nfa, part)
}

/// Returns an NFA matching zero or more sequences from `nfa`.
pub fn zero_or_more(nfa: Nfa<usize>) -> Nfa<usize> {
    alternate(empty(), one_or_more(nfa))
}
