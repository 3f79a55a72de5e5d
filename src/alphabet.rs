use std::fmt;

/// A single unit of input in an automaton's transition table.
///
/// A unit is almost always a concrete character, but it can also be the
/// special `Any` sentinel produced by the wildcard `.`. During execution an
/// input character `c` follows both the `Char(c)` edge and the `Any` edge of
/// a state (for an NFA), or the `Char(c)` edge with `Any` as a fallback (for
/// a DFA). Subset construction folds `Any` destinations into every explicit
/// character's destination set, which is what makes the DFA fallback lookup
/// exact.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Unit {
    /// A concrete character.
    Char(char),
    /// The wildcard sentinel, matching any character.
    Any,
}

impl Unit {
    /// Returns true when this unit is the wildcard sentinel.
    pub fn is_any(&self) -> bool {
        match *self {
            Unit::Any => true,
            Unit::Char(_) => false,
        }
    }

    /// Returns this unit's character, if it has one.
    pub fn as_char(&self) -> Option<char> {
        match *self {
            Unit::Char(ch) => Some(ch),
            Unit::Any => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Unit::Char(ch) => write!(f, "{:?}", ch),
            Unit::Any => write!(f, "<any>"),
        }
    }
}
