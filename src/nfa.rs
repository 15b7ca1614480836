use std::fmt;

/// A state ID in the NFA
pub type StateId = usize;

/// The character test wrapped by a repetition state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Matches exactly this character
    Literal(char),
    /// Matches any single character (`.`)
    Any,
}

impl Unit {
    /// Return true if this unit accepts the given character.
    pub fn matches(&self, ch: char) -> bool {
        match *self {
            Unit::Literal(expected) => expected == ch,
            Unit::Any => true,
        }
    }
}

/// The kind of an NFA state, along with the test it applies to input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    /// Entry point of the graph. Never consumes input.
    Start,
    /// The accepting state. Never consumes input.
    Terminal,
    /// Consumes exactly the given character
    Literal(char),
    /// Consumes any single character
    Wildcard,
    /// Zero or more repetitions of a unit.
    ///
    /// Transitions are `[self, next]`. The forward edge doubles as an epsilon
    /// edge, so `next` is reachable without consuming anything.
    Star(Unit),
    /// One or more repetitions of a unit.
    ///
    /// Transitions are `[self, next]`, but unlike `Star` there is no epsilon
    /// edge: `next` only becomes active after this state consumes a character.
    Plus(Unit),
}

/// A single state in the NFA: its kind and its ordered outgoing transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    kind: StateKind,
    transitions: Vec<StateId>,
}

impl State {
    fn new(kind: StateKind) -> Self {
        Self {
            kind,
            transitions: Vec::new(),
        }
    }

    /// The kind of this state
    pub fn kind(&self) -> StateKind {
        self.kind
    }

    /// Outgoing transitions, in the order they were added.
    pub fn transitions(&self) -> &[StateId] {
        &self.transitions
    }

    /// Return true if this state consumes the given character.
    ///
    /// `Start` and `Terminal` never consume anything.
    pub fn matches(&self, ch: char) -> bool {
        match self.kind {
            StateKind::Start | StateKind::Terminal => false,
            StateKind::Literal(expected) => expected == ch,
            StateKind::Wildcard => true,
            StateKind::Star(unit) | StateKind::Plus(unit) => unit.matches(ch),
        }
    }

    /// Return the targets reachable from this state without consuming
    /// input.
    ///
    /// Only a `Star` has such an edge: its forward transition. The self-loop
    /// is skipped since a state is always part of its own closure.
    pub fn epsilon_targets(&self) -> &[StateId] {
        match self.kind {
            StateKind::Star(_) => self.transitions.get(1..).unwrap_or(&[]),
            _ => &[],
        }
    }
}

/// How a quantifier rewrites the state it follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repetition {
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
}

impl Repetition {
    /// Map a pattern character to the repetition it denotes, if any.
    pub fn from_char(ch: char) -> Option<Repetition> {
        match ch {
            '*' => Some(Repetition::ZeroOrMore),
            '+' => Some(Repetition::OneOrMore),
            _ => None,
        }
    }
}

/// An NFA stored as an arena of states addressed by `StateId`.
///
/// A compiled NFA is a single chain from `start` to `terminal`. The only
/// cycles are the self-loops on `Star` and `Plus` states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NFA {
    states: Vec<State>,
    start: StateId,
    terminal: StateId,
}

impl NFA {
    /// Create an NFA holding just a `Start` and a `Terminal` state, not yet
    /// connected.
    pub(crate) fn new() -> Self {
        let states = vec![State::new(StateKind::Start), State::new(StateKind::Terminal)];
        Self {
            states,
            start: 0,
            terminal: 1,
        }
    }

    /// Add a new state and return its ID
    pub(crate) fn add_state(&mut self, kind: StateKind) -> StateId {
        let id = self.states.len();
        self.states.push(State::new(kind));
        id
    }

    /// Add a transition from one state to another.
    pub(crate) fn connect(&mut self, from: StateId, to: StateId) {
        if let Some(state) = self.states.get_mut(from) {
            state.transitions.push(to);
        }
    }

    /// Rewrite a `Literal` or `Wildcard` state in place into a repetition of
    /// the same unit, and give it a self-loop.
    ///
    /// Must be called before the state gets its forward transition, so that
    /// the self-loop comes first. Returns false if the state has no unit to
    /// repeat.
    pub(crate) fn repeat(&mut self, id: StateId, repetition: Repetition) -> bool {
        let state = match self.states.get_mut(id) {
            Some(state) => state,
            None => return false,
        };
        let unit = match state.kind {
            StateKind::Literal(ch) => Unit::Literal(ch),
            StateKind::Wildcard => Unit::Any,
            _ => return false,
        };
        state.kind = match repetition {
            Repetition::ZeroOrMore => StateKind::Star(unit),
            Repetition::OneOrMore => StateKind::Plus(unit),
        };
        state.transitions.push(id);
        true
    }

    /// The `Start` state
    pub fn start(&self) -> StateId {
        self.start
    }

    /// The `Terminal` (accepting) state
    pub fn terminal(&self) -> StateId {
        self.terminal
    }

    /// Look up a state by ID.
    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(id)
    }

    /// All states, indexed by `StateId`.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// The number of states, including `Start` and `Terminal`.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false, since every NFA has at least `Start` and `Terminal`.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            StateKind::Start => write!(f, "START"),
            StateKind::Terminal => write!(f, "MATCH"),
            StateKind::Literal(ch) => write!(f, "{:?}", ch),
            StateKind::Wildcard => write!(f, "."),
            StateKind::Star(unit) => write!(f, "{}*", unit),
            StateKind::Plus(unit) => write!(f, "{}+", unit),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Unit::Literal(ch) => write!(f, "{:?}", ch),
            Unit::Any => write!(f, "."),
        }
    }
}

impl fmt::Display for NFA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, state) in self.states.iter().enumerate() {
            write!(f, "{:>3}: {}", id, state.kind)?;
            if !state.transitions.is_empty() {
                write!(f, " -> {:?}", state.transitions)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
