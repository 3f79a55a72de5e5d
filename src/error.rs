use std::error;
use std::fmt;
use std::result;

/// A type alias for dealing with errors returned by this crate.
pub type Result<T> = result::Result<T, Error>;

/// An error that occurred while compiling a pattern.
#[derive(Clone, Debug)]
pub struct Error {
    kind: ErrorKind,
}

/// The kind of error that occurred.
#[derive(Clone, Debug)]
pub enum ErrorKind {
    /// An error that occurred while parsing a pattern. The message string
    /// is intended to be end user readable on its own, but note that this
    /// crate does not report positions.
    Syntax(String),
}

impl Error {
    /// Return the kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    fn syntax(msg: String) -> Error {
        Error { kind: ErrorKind::Syntax(msg) }
    }

    pub(crate) fn unclosed_group() -> Error {
        Error::syntax("unclosed group: expected a closing ')'".to_string())
    }

    pub(crate) fn unknown_escape(ch: Option<char>) -> Error {
        match ch {
            Some(ch) => {
                Error::syntax(format!("unknown escape sequence '\\{}'", ch))
            }
            None => {
                Error::syntax("dangling escape at end of pattern".to_string())
            }
        }
    }

    pub(crate) fn unexpected(ch: char) -> Error {
        Error::syntax(format!("unexpected symbol '{}'", ch))
    }

    pub(crate) fn unexpected_eof() -> Error {
        Error::syntax("unexpected end of pattern".to_string())
    }

    pub(crate) fn leftover(ch: char) -> Error {
        Error::syntax(format!("leftover input starting at '{}'", ch))
    }
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ErrorKind::Syntax(ref msg) => write!(f, "{}", msg),
        }
    }
}
