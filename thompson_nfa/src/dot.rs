use std::fmt;

use crate::nfa::{State, StateId, Symbol, NFA};

/// Label used for free transitions
pub const EPSILON_LABEL: &str = "&epsilon;";

/// Helper to render an NFA in Graphviz DOT format
///
/// Nodes are numbered from 1 (state id + 1); node 0 is an invisible origin
/// pointing at the initial state. The output has no trailing newline.
pub struct NfaDot<'a> {
    pub nfa: &'a NFA,
}

impl<'a> NfaDot<'a> {
    /// Creates a new NfaDot Display for the given NFA.
    pub fn new(nfa: &'a NFA) -> Self {
        Self { nfa }
    }
}

impl fmt::Display for NfaDot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The empty NFA still gets an accepting node for the origin to point at.
        let accepting = self.nfa.len().max(1);

        writeln!(f, "digraph {{")?;
        writeln!(f, "\trankdir = LR")?;
        writeln!(f, "\tnode [shape = circle, style = filled, fillcolor = gray93]")?;
        writeln!(f, "\t{} [shape = doublecircle]", accepting)?;
        writeln!(f, "\t0 [style = invisible]")?;
        writeln!(f, "\t0 -> {}", self.nfa.start + 1)?;

        for (id, state) in self.nfa.states.iter().enumerate() {
            if let Some(target) = state.first {
                write_edge(f, id, target, first_label(state))?;
            }
            if let Some(target) = state.second {
                write_edge(f, id, target, EPSILON_LABEL)?;
            }
        }

        write!(f, "}}")
    }
}

fn first_label(state: &State) -> String {
    match state.symbol {
        Symbol::Char(ch) => ch.to_string(),
        Symbol::Epsilon => EPSILON_LABEL.to_string(),
    }
}

fn write_edge(
    f: &mut fmt::Formatter<'_>,
    from: StateId,
    to: StateId,
    label: impl fmt::Display,
) -> fmt::Result {
    writeln!(f, "\t{} -> {} [label=\"{}\"]", from + 1, to + 1, label)
}

impl NFA {
    /// Render this NFA in Graphviz DOT format
    pub fn to_dot(&self) -> String {
        NfaDot::new(self).to_string()
    }
}
