use crate::dfa::Dfa;
use crate::error::Result;
use crate::nfa::Nfa;

/// A compiled regular expression for whole-sequence matching.
///
/// A `Regex` owns either a normalized DFA (the default) or the NFA it was
/// parsed into, and decides whether an input sequence belongs to the
/// pattern's language. There is no searching, capturing or partial
/// matching: the entire input either is or is not a member.
///
/// # Example
///
/// ```
/// use regex_splice::Regex;
///
/// # fn example() -> Result<(), regex_splice::Error> {
/// let re = Regex::new("(ab)+")?;
/// assert!(re.is_match("abab"));
/// assert!(!re.is_match("aba"));
/// # Ok(()) }; example().unwrap()
/// ```
#[derive(Clone, Debug)]
pub struct Regex {
    engine: Engine,
}

#[derive(Clone, Debug)]
enum Engine {
    /// Subset simulation per match; no determinization cost up front.
    Nfa(Nfa<usize>),
    /// A determinized and normalized automaton; cheapest per match.
    Dfa(Dfa<usize>),
}

impl Regex {
    /// Compile the given pattern with the default configuration: the NFA is
    /// determinized and normalized once, so that every subsequent match is
    /// a straight transition-table walk.
    ///
    /// This fails on any pattern violating the grammar: an unmatched group,
    /// a dangling operator, an unknown escape or leftover input.
    pub fn new(pattern: &str) -> Result<Regex> {
        RegexBuilder::new().build(pattern)
    }

    /// Returns true if and only if the whole of `haystack` matches this
    /// regex.
    pub fn is_match(&self, haystack: &str) -> bool {
        self.run(haystack.chars())
    }

    /// Run this regex on an arbitrary character sequence and report whether
    /// the whole sequence is accepted.
    pub fn run<I: IntoIterator<Item = char>>(&self, seq: I) -> bool {
        match self.engine {
            Engine::Nfa(ref nfa) => nfa.run(seq),
            Engine::Dfa(ref dfa) => dfa.run(seq),
        }
    }

    /// Return the normalized DFA backing this regex, determinizing now if
    /// the regex was built without determinization.
    pub fn to_deterministic(&self) -> Dfa<usize> {
        match self.engine {
            Engine::Nfa(ref nfa) => nfa.to_deterministic().normalize(),
            Engine::Dfa(ref dfa) => dfa.clone(),
        }
    }
}

/// A builder for configuring how a [`Regex`] is compiled.
#[derive(Clone, Debug)]
pub struct RegexBuilder {
    determinize: bool,
}

impl RegexBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> RegexBuilder {
        RegexBuilder { determinize: true }
    }

    /// Whether to convert the parsed NFA into a DFA (the default).
    ///
    /// Determinization pays off when a regex is matched repeatedly. When
    /// disabled, the regex keeps the NFA and simulates subset construction
    /// on the fly for every match, which is the better trade for a handful
    /// of matches against a large pattern.
    pub fn determinize(&mut self, yes: bool) -> &mut RegexBuilder {
        self.determinize = yes;
        self
    }

    /// Compile `pattern` with this builder's configuration.
    pub fn build(&self, pattern: &str) -> Result<Regex> {
        let nfa = Nfa::from_pattern(pattern)?;
        debug!(
            "compiled pattern {:?} into an NFA with {} states",
            pattern,
            nfa.states().len()
        );
        if !self.determinize {
            return Ok(Regex { engine: Engine::Nfa(nfa) });
        }
        let dfa = nfa.to_deterministic().normalize();
        debug!("determinized into a DFA with {} states", dfa.states().len());
        Ok(Regex { engine: Engine::Dfa(dfa) })
    }
}

impl Default for RegexBuilder {
    fn default() -> RegexBuilder {
        RegexBuilder::new()
    }
}
