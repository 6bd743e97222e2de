use thompson_regexp::{accepts, compile, render, Regex};

#[test]
fn concatenation_exact_output() -> anyhow::Result<()> {
    let nfa = compile("ab")?;
    let expected = "digraph {\n\
                    \trankdir = LR\n\
                    \tnode [shape = circle, style = filled, fillcolor = gray93]\n\
                    \t4 [shape = doublecircle]\n\
                    \t0 [style = invisible]\n\
                    \t0 -> 1\n\
                    \t1 -> 2 [label=\"a\"]\n\
                    \t2 -> 3 [label=\"&epsilon;\"]\n\
                    \t3 -> 4 [label=\"b\"]\n\
                    }";
    assert_eq!(render(&nfa), expected);
    Ok(())
}

#[test]
fn alternation_exact_output() -> anyhow::Result<()> {
    let nfa = compile("a|b")?;
    let expected = "digraph {\n\
                    \trankdir = LR\n\
                    \tnode [shape = circle, style = filled, fillcolor = gray93]\n\
                    \t6 [shape = doublecircle]\n\
                    \t0 [style = invisible]\n\
                    \t0 -> 5\n\
                    \t1 -> 2 [label=\"a\"]\n\
                    \t2 -> 6 [label=\"&epsilon;\"]\n\
                    \t3 -> 4 [label=\"b\"]\n\
                    \t4 -> 6 [label=\"&epsilon;\"]\n\
                    \t5 -> 1 [label=\"&epsilon;\"]\n\
                    \t5 -> 3 [label=\"&epsilon;\"]\n\
                    }";
    assert_eq!(render(&nfa), expected);
    Ok(())
}

#[test]
fn one_edge_line_per_edge() -> anyhow::Result<()> {
    let re = Regex::new("(a|bc)*d")?;
    let edges: usize = re
        .nfa()
        .states
        .iter()
        .map(|state| state.targets().count())
        .sum();
    let dot = re.to_dot();
    assert_eq!(dot.matches("[label=").count(), edges);
    assert_eq!(dot.matches("doublecircle").count(), 1);
    assert!(dot.ends_with('}'));
    Ok(())
}

#[test]
fn render_does_not_mutate() -> anyhow::Result<()> {
    let nfa = compile("(ab)*|c")?;
    let before = nfa.clone();
    let inputs = ["$", "ab", "abab", "c", "abc", "ba"];
    let results: Vec<bool> = inputs.iter().map(|input| accepts(&nfa, input)).collect();

    let first = render(&nfa);
    let second = render(&nfa);

    assert_eq!(first, second);
    assert_eq!(nfa, before);
    let after: Vec<bool> = inputs.iter().map(|input| accepts(&nfa, input)).collect();
    assert_eq!(results, after);
    Ok(())
}
