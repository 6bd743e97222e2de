/*!
This crate compiles regular expressions over ASCII letters into Thompson NFAs
and decides whether whole strings are accepted by them.

The supported syntax is deliberately tiny:

* `a`, `B`, ...: a single letter,
* `xy`: concatenation,
* `x|y`: alternation,
* `x*`: zero or more repetitions,
* `(x)`: grouping.

Matching always covers the whole input. The input `$` denotes the empty
string.

# Example

```
use thompson_regexp::Regex;

let re = Regex::new("(ab)*|c").unwrap();
assert!(re.is_match("abab"));
assert!(re.is_match("c"));
assert!(re.is_match("$"));
assert!(!re.is_match("aba"));
```

The free functions [`compile`], [`accepts`] and [`render`] expose the same
operations directly on a [`NFA`].
*/

#![deny(missing_docs)]

use std::fmt;
use std::str::FromStr;

pub use thompson_nfa::{CompileError, Config, EMPTY_STRING, NFA};
use thompson_nfa::{Compiler, Matcher};

/// A compiled regular expression.
///
/// A `Regex` is immutable. Replacing an expression means building a new
/// `Regex`, so it can be shared between threads and queried concurrently.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Regex {
    pattern: String,
    nfa: NFA,
}

impl Regex {
    /// Compiles an expression with the default configuration.
    ///
    /// The empty expression is valid and matches only the empty string.
    pub fn new(pattern: &str) -> Result<Regex, CompileError> {
        Regex::with_config(pattern, Config::default())
    }

    /// Compiles an expression with an explicit configuration.
    pub fn with_config(pattern: &str, config: Config) -> Result<Regex, CompileError> {
        let nfa = Compiler::with_config(config).compile(pattern)?;
        Ok(Regex {
            pattern: pattern.to_string(),
            nfa,
        })
    }

    /// Returns true if and only if the whole input is accepted.
    pub fn is_match(&self, input: &str) -> bool {
        accepts(&self.nfa, input)
    }

    /// Returns the automaton in Graphviz DOT notation.
    pub fn to_dot(&self) -> String {
        render(&self.nfa)
    }

    /// Returns the expression this regex was compiled from.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Returns the underlying automaton.
    pub fn nfa(&self) -> &NFA {
        &self.nfa
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern)
    }
}

impl FromStr for Regex {
    type Err = CompileError;

    fn from_str(pattern: &str) -> Result<Regex, CompileError> {
        Regex::new(pattern)
    }
}

/// Compiles an expression into a Thompson NFA.
pub fn compile(pattern: &str) -> Result<NFA, CompileError> {
    Compiler::new().compile(pattern)
}

/// Returns true if the NFA accepts the whole input, `$` being the empty string.
pub fn accepts(nfa: &NFA, input: &str) -> bool {
    Matcher::new(nfa).is_match(input)
}

/// Renders the NFA in Graphviz DOT notation.
pub fn render(nfa: &NFA) -> String {
    nfa.to_dot()
}
