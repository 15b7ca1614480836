use nfa_regex::Regex;

/// (pattern, input, expected)
const SCENARIOS: &[(&str, &str, bool)] = &[
    ("a*4.+hi", "aaaaaa4uhi", true),
    ("a*4.+hi", "4uhi", true),
    ("a*4.+hi", "meow", false),
    ("a*4.+hi", "a4/hi", true),
    ("a*4.+hi", "a4hi", false),
    ("a*b.+c", "abbxc", true),
    ("a*b.+c", "bc", false),
    ("", "", true),
    ("", "x", false),
    ("a*", "", true),
    ("a+", "", false),
    (".*", "anything at all", true),
    ("h.llo", "hello", true),
    ("h.llo", "hallo!", false),
    ("☃+", "☃☃☃", true),
    ("x.*y", "x\ny", true),
];

#[test]
fn scenarios() -> anyhow::Result<()> {
    crate::init_logger();

    for &(pattern, input, expected) in SCENARIOS {
        let re = Regex::new(pattern)?;
        assert_eq!(
            expected,
            re.is_match(input),
            "pattern {:?} on input {:?}",
            pattern,
            input
        );
    }
    Ok(())
}

#[test]
fn long_inputs_run_in_linear_time() -> anyhow::Result<()> {
    // A classic blow-up case for backtracking engines.
    let re = Regex::new(&"a*".repeat(30))?;
    let mut haystack = "a".repeat(10_000);
    assert!(re.is_match(&haystack));
    haystack.push('b');
    assert!(!re.is_match(&haystack));
    Ok(())
}
