use crate::nfa::{StateId, NFA};
use std::collections::HashSet;

/// Input text standing for the empty string
pub const EMPTY_STRING: &str = "$";

/// A matcher that simulates a Thompson NFA on whole inputs
///
/// The matcher only borrows the NFA, so any number of matchers may run over
/// the same NFA at once.
pub struct Matcher<'a> {
    nfa: &'a NFA,
}

impl<'a> Matcher<'a> {
    /// Create a new matcher for the given NFA
    pub fn new(nfa: &'a NFA) -> Self {
        Self { nfa }
    }

    /// Check if the entire input is accepted
    ///
    /// The input `$` is treated as the empty string.
    pub fn is_match(&self, input: &str) -> bool {
        let input = if input == EMPTY_STRING { "" } else { input };
        self.accepts(input.chars())
    }

    /// Check if the sequence of characters is accepted
    pub fn accepts<I: IntoIterator<Item = char>>(&self, input: I) -> bool {
        let mut input = input.into_iter();
        let Some(accepting) = self.nfa.accepting_state() else {
            return input.next().is_none();
        };

        let mut current_states = self.start_states();
        for ch in input {
            if current_states.is_empty() {
                return false;
            }
            current_states = self.step_states(&current_states, ch);
            trace!("after {:?}: {} states", ch, current_states.len());
        }

        current_states.contains(&accepting)
    }

    /// Epsilon closure of the start state
    pub fn start_states(&self) -> HashSet<StateId> {
        self.nfa.epsilon_closure(&HashSet::from([self.nfa.start]))
    }

    /// Consume one character and close over the free transitions
    fn step_states(&self, current_states: &HashSet<StateId>, ch: char) -> HashSet<StateId> {
        let next_states = self.nfa.step(current_states, ch);
        self.nfa.epsilon_closure(&next_states)
    }
}
