/*!
A small regular expression engine built on epsilon-free finite automata.

A pattern is parsed by recursive descent directly into an NFA, using a
Thompson-style construction with one twist: sub-automata are composed by
*state identification* instead of epsilon transitions. Concatenation,
alternation and repetition shift one automaton into a fresh integer range
and then substitute its start state away, so every automaton in the
pipeline is directly executable without an epsilon-closure pass. The NFA
can be converted into a DFA by subset construction and normalized back to
dense integer states.

The engine decides whole-sequence membership only: no searching inside a
haystack, no capture groups, no anchors.

# Example: compile once, match many times

```
use regex_splice::Regex;

# fn example() -> Result<(), regex_splice::Error> {
let re = Regex::new("a+c|abc")?;
assert!(re.is_match("aaaaaaac"));
assert!(re.is_match("abc"));
assert!(!re.is_match("c"));
assert!(!re.is_match("dahlk"));
# Ok(()) }; example().unwrap()
```

# Example: explicit control over the automata

The conversion steps are separately invokable. Callers that match only a
handful of times can skip determinization and run the NFA directly; the
two forms always agree.

```
use regex_splice::Nfa;

# fn example() -> Result<(), regex_splice::Error> {
let nfa = Nfa::from_pattern("(ab)+")?;
let dfa = nfa.to_deterministic().normalize();
assert!(nfa.is_match("abab"));
assert_eq!(nfa.is_match("aba"), dfa.is_match("aba"));
# Ok(()) }; example().unwrap()
```

Automata over hand-picked alphabets can also be assembled directly from
the combinators in the [`compile`] module.
*/

#![deny(missing_docs)]

#[macro_use]
mod macros;

pub mod compile;

mod alphabet;
mod automaton;
mod determinize;
mod dfa;
mod error;
mod nfa;
mod parser;
mod regex;
mod stream;

pub use crate::alphabet::Unit;
pub use crate::automaton::{Automaton, StateID};
pub use crate::determinize::Determinizer;
pub use crate::dfa::Dfa;
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::nfa::Nfa;
pub use crate::regex::{Regex, RegexBuilder};
pub use crate::stream::Stream;
