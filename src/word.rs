// src/word.rs
// The per-call working buffer. Built once by the normalizer, then only read.

use crate::origin::Origin;
use smallvec::SmallVec;

/// A normalized word ready for transduction.
///
/// Contains:
/// - `letters`: upper-case letters, separate words joined by a single space
/// - `origin`: whole-word flags that bias a few consonant rules
/// - `start`: first cursor position (1 when the initial letter is silent)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Word {
    letters: SmallVec<[char; 32]>,
    origin: Origin,
    start: usize,
}

/// GN, KN, PN, WR and PS lose their first letter at the start of a word.
#[inline]
fn silent_start(letters: &[char]) -> usize {
    match letters {
        ['G' | 'K' | 'P', 'N', ..] | ['W', 'R', ..] | ['P', 'S', ..] => 1,
        _ => 0,
    }
}

impl Word {
    /// Build a word from an already normalized buffer.
    pub fn new(normalized: &str) -> Self {
        let letters: SmallVec<[char; 32]> = normalized.chars().collect();
        Self {
            start: silent_start(&letters),
            origin: Origin::detect(normalized),
            letters,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline(always)]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[inline(always)]
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.letters.get(index).copied()
    }

    #[inline(always)]
    pub fn origin(&self) -> Origin {
        self.origin
    }

    #[inline(always)]
    pub fn start(&self) -> usize {
        self.start
    }
}
