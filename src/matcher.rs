use crate::{
    nfa::NFA,
    sparse_set::{SparseSet, SparseSets},
};

/// A matcher that simulates an NFA over an input string.
///
/// The matcher only borrows the NFA. Each call to `is_match` allocates its
/// own pair of active-state sets, so one NFA may be searched from many
/// matchers (or threads) at once.
pub struct Matcher<'a> {
    nfa: &'a NFA,
}

impl<'a> Matcher<'a> {
    /// Create a new matcher for the given NFA
    pub fn new(nfa: &'a NFA) -> Self {
        Self { nfa }
    }

    /// Check if the entire input matches.
    ///
    /// The active set holds every state that could consume the next
    /// character. It is advanced once per character and the search gives up
    /// as soon as it becomes empty. The input is accepted iff the terminal
    /// state is active once every character has been consumed.
    pub fn is_match(&self, input: &str) -> bool {
        let mut sets = SparseSets::new(self.nfa.len());

        if let Some(start) = self.nfa.state(self.nfa.start()) {
            for &target in start.transitions() {
                sets.set1.insert(target);
            }
        }
        self.epsilon_closure(&mut sets.set1);

        for ch in input.chars() {
            sets.set2.clear();
            self.step(&sets.set1, &mut sets.set2, ch);
            self.epsilon_closure(&mut sets.set2);
            sets.swap();

            trace!("after {:?}: active states {:?}", ch, sets.set1);
            if sets.set1.is_empty() {
                debug!("no active states left after {:?}, rejecting", ch);
                return false;
            }
        }

        sets.set1.contains(self.nfa.terminal())
    }

    /// Add to `next` every state reached by consuming `ch` from a state in
    /// `current`.
    ///
    /// For `Star` and `Plus` states this includes the state itself, via its
    /// self-loop.
    fn step(&self, current: &SparseSet, next: &mut SparseSet, ch: char) {
        for id in current.iter() {
            let state = match self.nfa.state(id) {
                Some(state) => state,
                None => continue,
            };
            if state.matches(ch) {
                for &target in state.transitions() {
                    next.insert(target);
                }
            }
        }
    }

    /// Extend `set` with every state reachable through epsilon edges.
    ///
    /// Newly inserted states land at the end of the set, so walking it by
    /// index until the end visits each of them exactly once and stops at the
    /// fixed point.
    fn epsilon_closure(&self, set: &mut SparseSet) {
        let mut i = 0;
        while i < set.len() {
            if let Some(state) = self.nfa.state(set.get(i)) {
                for &target in state.epsilon_targets() {
                    set.insert(target);
                }
            }
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::Compiler;

    fn is_match(pattern: &str, input: &str) -> bool {
        let nfa = Compiler::new().compile(pattern).unwrap();
        Matcher::new(&nfa).is_match(input)
    }

    #[test]
    fn simple_literals() {
        assert!(is_match("ab", "ab"));
        assert!(!is_match("ab", "ac"));
        assert!(!is_match("ab", "a"));
        assert!(!is_match("ab", "abb"));
    }

    #[test]
    fn dot_matches_one_of_anything() {
        assert!(is_match(".", "a"));
        assert!(is_match(".", "."));
        assert!(is_match(".", "\n"));
        assert!(is_match(".", "☃"));
        assert!(!is_match(".", ""));
        assert!(!is_match(".", "ab"));
    }

    #[test]
    fn empty_pattern() {
        assert!(is_match("", ""));
        assert!(!is_match("", "x"));
    }

    #[test]
    fn star_allows_zero() {
        assert!(is_match("a*", ""));
        assert!(is_match("a*", "a"));
        assert!(is_match("a*", "aaaa"));
        assert!(!is_match("a*", "ab"));
        assert!(is_match("ba*", "b"));
        assert!(is_match("a*b", "b"));
    }

    #[test]
    fn plus_requires_one() {
        assert!(!is_match("a+", ""));
        assert!(is_match("a+", "a"));
        assert!(is_match("a+", "aaa"));
        assert!(!is_match("a+b", "b"));
        assert!(is_match("a+b", "aab"));
        assert!(!is_match("xa+", "x"));
    }

    #[test]
    fn chained_optional_quantifiers() {
        assert!(is_match("a*b*c*", ""));
        assert!(is_match("a*b*c*", "c"));
        assert!(is_match("a*b*c*", "aacc"));
        assert!(!is_match("a*b*c*", "ca"));
        assert!(!is_match("a*b+c*", "ac"));
        assert!(is_match("a*b+c*", "b"));
    }

    #[test]
    fn existential_over_ambiguous_paths() {
        // The greedy '.*' path must not shadow the one that leaves room
        // for the trailing literals.
        assert!(is_match(".*ab", "abab"));
        assert!(is_match("a*a", "aaa"));
        assert!(is_match(".+.+", "xy"));
        assert!(!is_match(".+.+", "x"));
    }

    #[test]
    fn reference_scenarios() {
        assert!(is_match("a*4.+hi", "aaaaaa4uhi"));
        assert!(is_match("a*4.+hi", "4uhi"));
        assert!(!is_match("a*4.+hi", "meow"));
        assert!(is_match("a*4.+hi", "a4/hi"));
        assert!(is_match("a*b.+c", "abbxc"));
    }

    #[test]
    fn early_rejection_on_unseen_characters() {
        assert!(!is_match("abc", "zzzzzzzzzzzzzzzzzz"));
        assert!(!is_match("a*", "aaaaaaaab"));
    }

    #[test]
    fn matcher_is_reusable() {
        let nfa = Compiler::new().compile("x+y").unwrap();
        let matcher = Matcher::new(&nfa);
        assert!(matcher.is_match("xxy"));
        assert!(!matcher.is_match("y"));
        assert!(matcher.is_match("xy"));
    }
}
