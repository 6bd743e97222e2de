use std::collections::HashSet;

/// A state ID in the NFA
pub type StateId = usize;

/// What a state needs to see before following its first edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Only free transitions leave this state
    Epsilon,
    /// The first edge consumes exactly this character
    Char(char),
}

/// A Thompson NFA state
///
/// A character state has exactly one outgoing edge, `first`, labeled with its
/// character. An epsilon state has up to two free edges. A fresh epsilon
/// state with no edges is a placeholder: the terminal state of a fragment,
/// waiting to be wired to whatever follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub symbol: Symbol,
    pub first: Option<StateId>,
    pub second: Option<StateId>,
}

impl State {
    /// Create an epsilon state without edges
    pub fn placeholder() -> Self {
        State {
            symbol: Symbol::Epsilon,
            first: None,
            second: None,
        }
    }

    /// Create a state consuming `ch` and moving to `target`
    pub fn char(ch: char, target: StateId) -> Self {
        State {
            symbol: Symbol::Char(ch),
            first: Some(target),
            second: None,
        }
    }

    /// Create an epsilon state forking into two targets
    pub fn split(first: StateId, second: StateId) -> Self {
        State {
            symbol: Symbol::Epsilon,
            first: Some(first),
            second: Some(second),
        }
    }

    pub fn is_epsilon(&self) -> bool {
        self.symbol == Symbol::Epsilon
    }

    /// The targets of all outgoing edges, first edge first
    pub fn targets(&self) -> impl Iterator<Item = StateId> {
        self.first.into_iter().chain(self.second)
    }
}

impl Default for State {
    fn default() -> Self {
        State::placeholder()
    }
}

/// Fragment of an NFA with start and end states
///
/// `end` is always the last state the fragment allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    pub start: StateId,
    pub end: StateId,
}

/// A Thompson NFA stored as an arena of states
///
/// States refer to each other by index only. The accepting state is the last
/// state; an NFA without states accepts only the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NFA {
    /// All states in the NFA
    pub states: Vec<State>,
    /// Starting state
    pub start: StateId,
}

impl NFA {
    /// Create a new empty NFA
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            start: 0,
        }
    }

    /// The id the next added state will get
    pub fn next_id(&self) -> StateId {
        self.states.len()
    }

    /// Add a new state and return its ID
    pub fn add_state(&mut self, state: State) -> StateId {
        let id = self.next_id();
        self.states.push(state);
        id
    }

    /// Add a placeholder state
    pub fn placeholder(&mut self) -> StateId {
        self.add_state(State::placeholder())
    }

    /// Add a character state
    pub fn char_state(&mut self, ch: char, target: StateId) -> StateId {
        self.add_state(State::char(ch, target))
    }

    /// Add a fork into two targets
    pub fn split(&mut self, first: StateId, second: StateId) -> StateId {
        self.add_state(State::split(first, second))
    }

    /// Point the first edge of `from` at `to`
    pub fn connect(&mut self, from: StateId, to: StateId) {
        if let Some(state) = self.states.get_mut(from) {
            state.first = Some(to);
        }
    }

    /// Turn the placeholder `from` into a fork into `first` and `second`
    pub fn connect_split(&mut self, from: StateId, first: StateId, second: StateId) {
        if let Some(state) = self.states.get_mut(from) {
            debug_assert!(state.is_epsilon(), "only epsilon states may fork");
            state.first = Some(first);
            state.second = Some(second);
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The accepting state, absent for the empty NFA
    pub fn accepting_state(&self) -> Option<StateId> {
        self.states.len().checked_sub(1)
    }

    /// Check if any state in the set is accepting
    pub fn is_accepting(&self, states: &HashSet<StateId>) -> bool {
        self.accepting_state()
            .is_some_and(|accepting| states.contains(&accepting))
    }

    /// Whether the last state is an epsilon state without outgoing edges
    ///
    /// Construction guarantees this for every non-empty NFA, and matching
    /// relies on it.
    pub fn has_terminal_accepting_state(&self) -> bool {
        match self.states.last() {
            None => true,
            Some(state) => state.is_epsilon() && state.targets().next().is_none(),
        }
    }

    /// Get epsilon closure of a set of states
    ///
    /// Character states are kept but not expanded. Each state enters the
    /// worklist at most once, so epsilon cycles terminate.
    pub fn epsilon_closure(&self, states: &HashSet<StateId>) -> HashSet<StateId> {
        let mut closure = states.clone();
        let mut stack: Vec<StateId> = states.iter().copied().collect();

        while let Some(state_id) = stack.pop() {
            let Some(state) = self.states.get(state_id) else {
                continue;
            };
            if !state.is_epsilon() {
                continue;
            }
            for target in state.targets() {
                if closure.insert(target) {
                    stack.push(target);
                }
            }
        }

        closure
    }

    /// Follow every edge labeled `ch` out of `states`
    pub fn step(&self, states: &HashSet<StateId>, ch: char) -> HashSet<StateId> {
        states
            .iter()
            .filter_map(|&state_id| self.states.get(state_id))
            .filter(|state| state.symbol == Symbol::Char(ch))
            .filter_map(|state| state.first)
            .collect()
    }
}
