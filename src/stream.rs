use std::mem;

/// A cursor over a sequence of characters with a single unit of lookahead.
///
/// The pattern grammar is LL(1), so this is all the machinery the parser
/// needs: `peek` inspects the next character without consuming it and
/// `advance` consumes it while buffering the one after.
#[derive(Clone, Debug)]
pub struct Stream<I> {
    iter: I,
    lookahead: Option<char>,
}

impl<I: Iterator<Item = char>> Stream<I> {
    /// Create a new stream over the given character iterator.
    pub fn new(mut iter: I) -> Stream<I> {
        let lookahead = iter.next();
        Stream { iter, lookahead }
    }

    /// Return the next character without consuming it, or `None` when the
    /// stream is exhausted.
    pub fn peek(&self) -> Option<char> {
        self.lookahead
    }

    /// Consume and return the current character, or `None` when the stream
    /// is exhausted.
    pub fn advance(&mut self) -> Option<char> {
        mem::replace(&mut self.lookahead, self.iter.next())
    }
}

#[cfg(test)]
mod tests {
    use super::Stream;

    #[test]
    fn peek_does_not_consume() {
        let stream = Stream::new("ab".chars());
        assert_eq!(Some('a'), stream.peek());
        assert_eq!(Some('a'), stream.peek());
    }

    #[test]
    fn advance_buffers_the_next_character() {
        let mut stream = Stream::new("ab".chars());
        assert_eq!(Some('a'), stream.advance());
        assert_eq!(Some('b'), stream.peek());
        assert_eq!(Some('b'), stream.advance());
        assert_eq!(None, stream.peek());
        assert_eq!(None, stream.advance());
    }

    #[test]
    fn empty_stream() {
        let mut stream = Stream::new("".chars());
        assert_eq!(None, stream.peek());
        assert_eq!(None, stream.advance());
    }
}
