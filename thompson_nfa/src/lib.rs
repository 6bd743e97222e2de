//! Thompson NFA construction for a small regular expression grammar
//!
//! The grammar has exactly four operators over single ASCII letters:
//!
//! ```text
//! expr  := term  ('|' expr)?
//! term  := fact  (term)?
//! fact  := letter ('*')?  |  '(' expr ')' ('*')?
//! ```
//!
//! An expression is compiled into an index-based NFA whose accepting state is
//! always the last state. Matching is a subset simulation over epsilon
//! closures, so it runs in time linear in the input for a fixed automaton.

#[macro_use]
mod macros;

pub mod compiler;
pub mod dot;
pub mod matcher;
pub mod nfa;

pub use compiler::{Compiler, Config};
pub use dot::NfaDot;
pub use matcher::{Matcher, EMPTY_STRING};
pub use nfa::{Fragment, State, StateId, Symbol, NFA};

/// The result of compiling an expression into a Thompson NFA
pub type CompileResult<T> = Result<T, CompileError>;

/// Errors that can occur during compilation
///
/// Offsets count characters, not bytes, from the start of the expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// A character that cannot start or continue a factor
    UnexpectedChar { ch: char, offset: usize },
    /// The expression ended where a factor was required
    UnexpectedEnd { offset: usize },
    /// An alternation with a missing branch
    EmptyAlternative { offset: usize },
    /// A `()` group
    EmptyGroup { offset: usize },
    /// An opening parenthesis without a matching close
    UnclosedGroup { offset: usize },
    /// A closing parenthesis without a matching open
    UnopenedGroup { offset: usize },
    /// Groups nested deeper than the configured limit
    NestLimitExceeded(u32),
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::UnexpectedChar { ch, offset } => {
                write!(f, "unexpected character '{}' at offset {}", ch, offset)
            }
            CompileError::UnexpectedEnd { offset } => {
                write!(f, "unexpected end of expression at offset {}", offset)
            }
            CompileError::EmptyAlternative { offset } => {
                write!(f, "empty alternative at offset {}", offset)
            }
            CompileError::EmptyGroup { offset } => write!(f, "empty group at offset {}", offset),
            CompileError::UnclosedGroup { offset } => {
                write!(f, "unclosed group opened at offset {}", offset)
            }
            CompileError::UnopenedGroup { offset } => {
                write!(f, "unopened group closed at offset {}", offset)
            }
            CompileError::NestLimitExceeded(limit) => {
                write!(f, "groups nested deeper than the limit of {}", limit)
            }
        }
    }
}

impl std::error::Error for CompileError {}
