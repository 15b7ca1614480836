use crate::{
    nfa::{Repetition, StateKind, NFA},
    CompileError, CompileResult,
};

/// Compiler that converts a pattern string into a chain-shaped NFA.
///
/// Every non-quantifier character becomes one state linked after the
/// previous one. A quantifier rewrites the state it follows into a `Star`
/// or `Plus` instead of adding a state of its own.
pub struct Compiler {
    nfa: NFA,
}

impl Compiler {
    /// Create a new compiler
    pub fn new() -> Self {
        Self { nfa: NFA::new() }
    }

    /// Compile a pattern into an NFA.
    ///
    /// The only way this can fail is a quantifier with nothing to repeat:
    /// either at the very start of the pattern or directly after another
    /// quantifier.
    pub fn compile(mut self, pattern: &str) -> CompileResult<NFA> {
        let mut tail = self.nfa.start();
        let mut chars = pattern.char_indices().peekable();

        while let Some((offset, ch)) = chars.next() {
            if Repetition::from_char(ch).is_some() {
                return Err(CompileError::MalformedPattern { offset, quantifier: ch });
            }

            let kind = match ch {
                '.' => StateKind::Wildcard,
                _ => StateKind::Literal(ch),
            };
            let id = self.nfa.add_state(kind);
            self.nfa.connect(tail, id);
            tail = id;

            let repetition = chars.peek().and_then(|&(_, next)| Repetition::from_char(next));
            if let Some(repetition) = repetition {
                chars.next();
                let repeated = self.nfa.repeat(id, repetition);
                debug_assert!(repeated, "fresh unit state must be repeatable");
            }
        }

        let terminal = self.nfa.terminal();
        self.nfa.connect(tail, terminal);
        debug!("compiled pattern {:?} into NFA with {} states", pattern, self.nfa.len());
        trace!("NFA for {:?}:\n{}", pattern, self.nfa);
        Ok(self.nfa)
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}
