use std::str::Chars;

use crate::compile;
use crate::error::{Error, Result};
use crate::nfa::Nfa;
use crate::stream::Stream;

/// The characters with structural meaning in a pattern. None of them can
/// appear as a literal; only `|` and `\` can be escaped.
const OPERATORS: &str = r"|*+().\";

/// Parse a pattern into an NFA.
///
/// The grammar is LL(1) and each rule builds its automaton by folding the
/// combinators in [`compile`] over its sub-results:
///
/// ```text
/// Alternation   := Concatenation ('|' Concatenation)*
/// Concatenation := Node*                    -- stops at '|', ')' or end
/// Node          := (Group | '.' | Escape | Literal) Postfix?
/// Postfix       := '*' | '+'
/// Group         := '(' Alternation ')'
/// Escape        := '\' ('|' | '\')
/// ```
///
/// The whole pattern must be consumed; leftover input (for example an
/// unmatched `)`) is an error.
pub fn parse(pattern: &str) -> Result<Nfa<usize>> {
    let mut parser = Parser::new(pattern);
    let nfa = parser.parse_alternation()?;
    match parser.stream.peek() {
        None => Ok(nfa),
        Some(ch) => Err(Error::leftover(ch)),
    }
}

#[derive(Debug)]
struct Parser<'p> {
    stream: Stream<Chars<'p>>,
}

impl<'p> Parser<'p> {
    fn new(pattern: &'p str) -> Parser<'p> {
        Parser { stream: Stream::new(pattern.chars()) }
    }

    fn parse_alternation(&mut self) -> Result<Nfa<usize>> {
        let mut branches = vec![self.parse_concatenation()?];
        while let Some(ch) = self.stream.peek() {
            if ch == ')' {
                break;
            }
            if ch != '|' {
                return Err(Error::unexpected(ch));
            }
            self.stream.advance();
            branches.push(self.parse_concatenation()?);
        }
        Ok(compile::alternate_all(branches))
    }

    fn parse_concatenation(&mut self) -> Result<Nfa<usize>> {
        let mut nodes = vec![];
        while let Some(ch) = self.stream.peek() {
            if ch == '|' || ch == ')' {
                break;
            }
            nodes.push(self.parse_node()?);
        }
        // An empty concatenation (e.g. in "a|" or "()") matches only the
        // empty sequence.
        Ok(compile::concat_all(nodes))
    }

    fn parse_node(&mut self) -> Result<Nfa<usize>> {
        let nfa = match self.stream.peek() {
            Some('(') => {
                self.stream.advance();
                let group = self.parse_alternation()?;
                match self.stream.advance() {
                    Some(')') => group,
                    _ => return Err(Error::unclosed_group()),
                }
            }
            Some('.') => {
                self.stream.advance();
                compile::wildcard()
            }
            Some('\\') => {
                self.stream.advance();
                match self.stream.advance() {
                    Some(ch @ '|') | Some(ch @ '\\') => compile::symbol(ch),
                    other => return Err(Error::unknown_escape(other)),
                }
            }
            Some(ch) if !OPERATORS.contains(ch) => {
                self.stream.advance();
                compile::symbol(ch)
            }
            // A bare operator such as a leading '*' cannot start a node.
            Some(ch) => return Err(Error::unexpected(ch)),
            None => return Err(Error::unexpected_eof()),
        };
        Ok(self.parse_postfix(nfa))
    }

    /// Greedily consume a postfix operator for the node just built; its
    /// absence leaves the node unchanged.
    fn parse_postfix(&mut self, nfa: Nfa<usize>) -> Nfa<usize> {
        match self.stream.peek() {
            Some('*') => {
                self.stream.advance();
                compile::zero_or_more(nfa)
            }
            Some('+') => {
                self.stream.advance();
                compile::one_or_more(nfa)
            }
            _ => nfa,
        }
    }
}
