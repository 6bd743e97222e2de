use thompson_regexp::{accepts, compile, CompileError, Config, Regex};

fn check(pattern: &str, yes: &[&str], no: &[&str]) -> anyhow::Result<()> {
    let nfa = compile(pattern)?;
    for input in yes {
        assert!(accepts(&nfa, input), "{:?} should accept {:?}", pattern, input);
    }
    for input in no {
        assert!(!accepts(&nfa, input), "{:?} should reject {:?}", pattern, input);
    }
    Ok(())
}

#[test]
fn empty_expression() -> anyhow::Result<()> {
    check("", &["$", ""], &["a", "ab", "$$"])
}

#[test]
fn concatenation() -> anyhow::Result<()> {
    check("ab", &["ab"], &["a", "ba", "b", "abb", "$"])
}

#[test]
fn alternation() -> anyhow::Result<()> {
    check("a|b", &["a", "b"], &["ab", "$", "c"])?;
    check("ab|cd|e", &["ab", "cd", "e"], &["a", "abcd", "ce"])
}

#[test]
fn star() -> anyhow::Result<()> {
    check("a*", &["$", "a", "aaaa"], &["b", "ab"])
}

#[test]
fn grouping_and_star_precedence() -> anyhow::Result<()> {
    check("(ab)*", &["$", "ab", "abab"], &["aab", "a", "aba"])?;
    check("ab*", &["a", "ab", "abbb"], &["$", "abab"])
}

#[test]
fn alternation_binds_weaker_than_concatenation() -> anyhow::Result<()> {
    check("ab|c", &["ab", "c"], &["ac", "abc"])?;
    check("a(b|c)", &["ab", "ac"], &["a", "bc"])
}

#[test]
fn nested_stars() -> anyhow::Result<()> {
    check("(a*b*)*", &["$", "abba", "bbbb"], &["abc"])?;
    check("((a|b)*c)*", &["$", "c", "abcc", "bbac"], &["ab", "cab"])
}

#[test]
fn uppercase_letters() -> anyhow::Result<()> {
    check("Ab*|C", &["A", "Abb", "C"], &["a", "c", "AC"])
}

#[test]
fn matching_is_idempotent() -> anyhow::Result<()> {
    let re = Regex::new("(a|b)*abb")?;
    for input in ["abb", "babb", "ab", "$"] {
        assert_eq!(re.is_match(input), re.is_match(input));
    }
    assert!(re.is_match("aababb"));
    Ok(())
}

#[test]
fn malformed_expressions_are_reported() {
    assert_eq!(
        compile("(ab").unwrap_err(),
        CompileError::UnclosedGroup { offset: 0 }
    );
    assert_eq!(
        compile("ab)").unwrap_err(),
        CompileError::UnopenedGroup { offset: 2 }
    );
    assert_eq!(
        compile("a|").unwrap_err(),
        CompileError::EmptyAlternative { offset: 2 }
    );
    assert_eq!(
        "a+".parse::<Regex>().unwrap_err(),
        CompileError::UnexpectedChar { ch: '+', offset: 1 }
    );
    assert_eq!(
        compile("a|").unwrap_err().to_string(),
        "empty alternative at offset 2"
    );
}

#[test]
fn nest_limit_is_configurable() {
    let deep = format!("{}a{}", "(".repeat(10), ")".repeat(10));
    assert!(Regex::new(&deep).is_ok());
    assert_eq!(
        Regex::with_config(&deep, Config::new().nest_limit(5)).unwrap_err(),
        CompileError::NestLimitExceeded(5)
    );
}

#[test]
fn regex_keeps_its_pattern() -> anyhow::Result<()> {
    let re: Regex = "a(b|c)*".parse()?;
    assert_eq!(re.as_str(), "a(b|c)*");
    assert_eq!(re.to_string(), "a(b|c)*");
    assert!(Regex::default().is_match("$"));
    assert!(!Regex::default().is_match("a"));
    Ok(())
}

#[test]
fn regex_is_shareable_between_threads() -> anyhow::Result<()> {
    let re = std::sync::Arc::new(Regex::new("(ab)*")?);
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let re = std::sync::Arc::clone(&re);
            std::thread::spawn(move || re.is_match(&"ab".repeat(i)))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().expect("matcher thread panicked"));
    }
    Ok(())
}
