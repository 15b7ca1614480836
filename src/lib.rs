//! A small regular expression engine built on a Thompson-style NFA.
//!
//! The supported syntax is deliberately tiny:
//!
//! * any character matches itself,
//! * `.` matches any single character,
//! * `*` after a unit matches it zero or more times,
//! * `+` after a unit matches it one or more times.
//!
//! A pattern is compiled into a chain of NFA states, where quantifiers turn
//! the state they follow into a looping one. Matching simulates the NFA over
//! a deduplicated set of active states, so every search runs in time
//! proportional to `pattern length * input length`, and a match always
//! requires the entire input to be consumed.
//!
//! ```
//! use nfa_regex::Regex;
//!
//! let re = Regex::new("a*4.+hi").unwrap();
//! assert!(re.is_match("aaaaaa4uhi"));
//! assert!(re.is_match("4uhi"));
//! assert!(!re.is_match("meow"));
//! ```

#[macro_use]
mod macros;

pub mod compiler;
pub mod matcher;
pub mod nfa;
mod sparse_set;

use std::{fmt, str::FromStr};

pub use compiler::Compiler;
pub use matcher::Matcher;
pub use nfa::{Repetition, State, StateId, StateKind, Unit, NFA};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// The result of compiling a pattern
pub type CompileResult<T> = Result<T, CompileError>;

/// Errors that can occur during compilation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// A quantifier with no literal or `.` directly before it, as in `*a`
    /// or `a*+`.
    MalformedPattern {
        /// Byte offset of the quantifier in the pattern
        offset: usize,
        /// The offending quantifier character
        quantifier: char,
    },
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::MalformedPattern { offset, quantifier } => write!(
                f,
                "malformed pattern: quantifier '{}' at offset {} has nothing to repeat",
                quantifier, offset
            ),
        }
    }
}

impl std::error::Error for CompileError {}

/// Compile a pattern into a [`Regex`].
///
/// This is the same as [`Regex::new`].
pub fn compile(pattern: &str) -> CompileResult<Regex> {
    Regex::new(pattern)
}

/// A compiled pattern.
///
/// A `Regex` owns its NFA and never mutates it after construction, so it can
/// be shared freely between threads.
#[derive(Clone, Debug)]
pub struct Regex {
    pattern: String,
    nfa: NFA,
}

impl Regex {
    /// Compile a pattern.
    ///
    /// Fails only when a quantifier has nothing to repeat.
    pub fn new(pattern: &str) -> CompileResult<Regex> {
        let nfa = Compiler::new().compile(pattern)?;
        Ok(Regex { pattern: pattern.to_string(), nfa })
    }

    /// Returns true if and only if the entire input matches this pattern.
    ///
    /// ```
    /// use nfa_regex::Regex;
    ///
    /// let re = Regex::new("ab+").unwrap();
    /// assert!(re.is_match("abbb"));
    /// assert!(!re.is_match("a"));
    /// // No partial matches.
    /// assert!(!re.is_match("xabb"));
    /// ```
    pub fn is_match(&self, input: &str) -> bool {
        Matcher::new(&self.nfa).is_match(input)
    }

    /// The pattern this regex was compiled from.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// The compiled NFA
    pub fn nfa(&self) -> &NFA {
        &self.nfa
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Regex {
    type Err = CompileError;

    fn from_str(pattern: &str) -> CompileResult<Regex> {
        Regex::new(pattern)
    }
}
