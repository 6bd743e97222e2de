use crate::{
    nfa::{Fragment, NFA},
    CompileError, CompileResult,
};

/// Configuration for a [`Compiler`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    nest_limit: u32,
}

impl Config {
    /// Create the default configuration
    pub fn new() -> Self {
        Self { nest_limit: 250 }
    }

    /// Set how deeply groups may be nested
    ///
    /// Groups are the only construct compiled by recursion, so this bounds
    /// the stack used by a single compilation.
    pub fn nest_limit(mut self, limit: u32) -> Self {
        self.nest_limit = limit;
        self
    }

    pub fn get_nest_limit(&self) -> u32 {
        self.nest_limit
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Compiler that turns an expression into a Thompson NFA
///
/// States are appended to the NFA in the order they are allocated, so a
/// fragment's states are contiguous and its terminal placeholder is the last
/// state it added.
pub struct Compiler {
    config: Config,
    nfa: NFA,
    chars: Vec<char>,
    pos: usize,
    depth: u32,
}

impl Compiler {
    /// Create a new compiler
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a compiler with an explicit configuration
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            nfa: NFA::new(),
            chars: Vec::new(),
            pos: 0,
            depth: 0,
        }
    }

    /// Compile an expression to a Thompson NFA
    ///
    /// The empty expression compiles to the empty NFA.
    pub fn compile(mut self, pattern: &str) -> CompileResult<NFA> {
        self.chars = pattern.chars().collect();
        if self.chars.is_empty() {
            debug!("compiled empty expression");
            return Ok(self.nfa);
        }

        let fragment = self.compile_expr()?;
        if let Some(ch) = self.peek() {
            return Err(self.unexpected(ch));
        }

        self.nfa.start = fragment.start;
        debug_assert_eq!(fragment.end + 1, self.nfa.len());
        debug_assert!(
            self.nfa.has_terminal_accepting_state(),
            "the accepting state must be the last state"
        );
        debug!(
            "compiled {:?} into {} states starting at {}",
            pattern,
            self.nfa.len(),
            self.nfa.start
        );
        Ok(self.nfa)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn is_letter(ch: char) -> bool {
        ch.is_ascii_alphabetic()
    }

    /// Error for a character that cannot appear at the cursor
    fn unexpected(&self, ch: char) -> CompileError {
        let offset = self.pos;
        match ch {
            ')' if self.depth == 0 => CompileError::UnopenedGroup { offset },
            '|' => CompileError::EmptyAlternative { offset },
            _ => CompileError::UnexpectedChar { ch, offset },
        }
    }

    /// expr := term ('|' expr)?
    ///
    /// Branches are wired right to left so that `a|b|c` lays out its states
    /// exactly as the right-recursive rule would.
    fn compile_expr(&mut self) -> CompileResult<Fragment> {
        let first = self.compile_term()?;
        let mut alternatives = Vec::new();
        while self.peek() == Some('|') {
            self.bump();
            match self.peek() {
                None | Some('|') | Some(')') => {
                    return Err(CompileError::EmptyAlternative { offset: self.pos })
                }
                Some(_) => alternatives.push(self.compile_term()?),
            }
        }

        let Some(mut fragment) = alternatives.pop() else {
            return Ok(first);
        };
        while let Some(left) = alternatives.pop() {
            fragment = self.compile_alternation(left, fragment);
        }
        Ok(self.compile_alternation(first, fragment))
    }

    /// Fork into both branches and join them in a fresh placeholder
    fn compile_alternation(&mut self, left: Fragment, right: Fragment) -> Fragment {
        let join = self.nfa.next_id() + 1;
        let fork = self.nfa.split(left.start, right.start);
        let end = self.nfa.placeholder();
        debug_assert_eq!(join, end);

        self.nfa.connect(left.end, end);
        self.nfa.connect(right.end, end);

        Fragment { start: fork, end }
    }

    /// term := fact (term)?
    fn compile_term(&mut self) -> CompileResult<Fragment> {
        let first = self.compile_fact()?;
        let mut end = first.end;

        while let Some(ch) = self.peek() {
            if ch != '(' && !Self::is_letter(ch) {
                break;
            }
            let next = self.compile_fact()?;
            self.nfa.connect(end, next.start);
            end = next.end;
        }

        Ok(Fragment {
            start: first.start,
            end,
        })
    }

    /// fact := letter ('*')? | '(' expr ')' ('*')?
    fn compile_fact(&mut self) -> CompileResult<Fragment> {
        let fragment = match self.peek() {
            Some('(') => self.compile_group()?,
            Some(ch) if Self::is_letter(ch) => {
                self.bump();
                self.compile_letter(ch)
            }
            Some(ch) => return Err(self.unexpected(ch)),
            None => return Err(CompileError::UnexpectedEnd { offset: self.pos }),
        };

        if self.peek() == Some('*') {
            self.bump();
            return Ok(self.compile_star(fragment));
        }
        Ok(fragment)
    }

    /// Groups only affect precedence, the inner fragment is returned as is
    fn compile_group(&mut self) -> CompileResult<Fragment> {
        let open = self.pos;
        self.bump();

        if self.depth >= self.config.nest_limit {
            return Err(CompileError::NestLimitExceeded(self.config.nest_limit));
        }
        match self.peek() {
            None => return Err(CompileError::UnclosedGroup { offset: open }),
            Some(')') => return Err(CompileError::EmptyGroup { offset: open }),
            Some(_) => {}
        }

        self.depth += 1;
        let fragment = self.compile_expr()?;
        self.depth -= 1;

        match self.peek() {
            Some(')') => {
                self.bump();
                Ok(fragment)
            }
            Some(ch) => Err(self.unexpected(ch)),
            None => Err(CompileError::UnclosedGroup { offset: open }),
        }
    }

    /// A character state followed by its terminal placeholder
    fn compile_letter(&mut self, ch: char) -> Fragment {
        let start = self.nfa.char_state(ch, self.nfa.next_id() + 1);
        let end = self.nfa.placeholder();
        Fragment { start, end }
    }

    /// Kleene star around an existing fragment
    ///
    /// A new fork either enters the fragment or skips to a new placeholder.
    /// The fragment's old terminal offers the same two choices, which closes
    /// the loop.
    fn compile_star(&mut self, fragment: Fragment) -> Fragment {
        let end = self.nfa.next_id() + 1;
        self.nfa.connect_split(fragment.end, fragment.start, end);

        let start = self.nfa.split(fragment.start, end);
        let placeholder = self.nfa.placeholder();
        debug_assert_eq!(placeholder, end);

        Fragment { start, end }
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}
