use std::thread;

use once_cell::sync::Lazy;

use nfa_regex::Regex;

static GREETING: Lazy<Regex> = Lazy::new(|| Regex::new("h.+o*!").unwrap());

#[test]
fn one_regex_many_threads() {
    crate::init_logger();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let hit = format!("h{}oo!", "e".repeat(i + 1));
                let miss = format!("h{}", "o".repeat(i));
                (GREETING.is_match(&hit), GREETING.is_match(&miss))
            })
        })
        .collect();
    for handle in handles {
        assert_eq!((true, false), handle.join().unwrap());
    }
}
