use super::window::Window;
use std::fmt;

/// Context test over the window at the cursor.
pub type Predicate = fn(&Window<'_>) -> bool;

/// How far the cursor moves once a rule has fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Always consume exactly this many characters.
    By(usize),
    /// Consume two characters when the next one is in the set, otherwise one.
    /// Used for doubled consonants (`BB`, `PP`/`PB`, `TT`/`TD`, ...).
    Doubled(&'static [char]),
}

impl Advance {
    #[inline(always)]
    pub fn width(self, w: &Window<'_>) -> usize {
        match self {
            Advance::By(n) => n,
            Advance::Doubled(set) => match w.char_at(1) {
                Some(c) if set.contains(&c) => 2,
                _ => 1,
            },
        }
    }
}

/// Symbols appended to the primary and alternate codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emit {
    pub primary: &'static str,
    pub alternate: &'static str,
}

impl Emit {
    pub const NONE: Emit = Emit::both("");

    /// Same symbols in both codes.
    pub const fn both(code: &'static str) -> Self {
        Self {
            primary: code,
            alternate: code,
        }
    }

    /// Primary and alternate pronunciations diverge here.
    pub const fn split(primary: &'static str, alternate: &'static str) -> Self {
        Self { primary, alternate }
    }
}

/// One entry of a per-letter rule list. Within a list the first rule whose
/// predicate holds wins, so order is significant.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub when: Predicate,
    pub advance: Advance,
    pub emit: Emit,
}

impl Rule {
    pub const fn new(name: &'static str, when: Predicate, advance: Advance, emit: Emit) -> Self {
        Self {
            name,
            when,
            advance,
            emit,
        }
    }

    #[inline(always)]
    pub fn matches(&self, w: &Window<'_>) -> bool {
        (self.when)(w)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("advance", &self.advance)
            .field("emit", &self.emit)
            .finish()
    }
}
