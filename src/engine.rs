//! Transduction engine.
//!
//! A cursor walks the [`Word`] from [`Word::start`]. At each position the
//! letter's rule list is consulted ([`rules::dispatch`]), the first matching
//! rule appends its symbols to both codes and moves the cursor forward by its
//! width. Every rule consumes at least one character, so the scan always ends.
//!
//! Output is capped, scanning is not: once a buffer is full further symbols
//! are dropped but the cursor keeps going until the word is exhausted.

pub mod rule;
pub mod rules;
pub mod window;

use crate::word::Word;
use log::trace;
use std::iter::FusedIterator;
use window::Window;

/// One fired rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub cursor: usize,
    pub letter: char,
    pub rule: &'static str,
    pub width: usize,
    pub primary: &'static str,
    pub alternate: &'static str,
}

/// Iterator over the steps taken when encoding a word.
pub struct Steps<'w> {
    word: &'w Word,
    cursor: usize,
}

impl<'w> Steps<'w> {
    pub fn new(word: &'w Word) -> Self {
        Self {
            word,
            cursor: word.start(),
        }
    }
}

impl Iterator for Steps<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let letter = self.word.char_at(self.cursor)?;
        let window = Window::new(self.word, self.cursor);
        let rule = rules::dispatch(letter, &window);
        let width = rule.advance.width(&window).max(1);

        trace!(
            "{letter} @ {}: {} (+{width}) -> {:?}/{:?}",
            self.cursor, rule.name, rule.emit.primary, rule.emit.alternate
        );

        let step = Step {
            cursor: self.cursor,
            letter,
            rule: rule.name,
            width,
            primary: rule.emit.primary,
            alternate: rule.emit.alternate,
        };
        self.cursor += width;
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.word.len().saturating_sub(self.cursor);
        (left.min(1), Some(left))
    }
}

impl FusedIterator for Steps<'_> {}

/// Code buffer that silently drops symbols past its cap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    buf: String,
    cap: usize,
}

impl Output {
    pub fn with_cap(cap: usize, hint: usize) -> Self {
        Self {
            buf: String::with_capacity(cap.min(hint)),
            cap,
        }
    }

    /// Symbols are ASCII, so bytes and characters agree.
    #[inline]
    pub fn push(&mut self, symbols: &str) {
        let room = self.cap.saturating_sub(self.buf.len());
        if room == 0 {
            return;
        }
        let take = symbols.len().min(room);
        self.buf.push_str(&symbols[..take]);
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Run the whole word through the rule table.
pub fn transduce(word: &Word, max_length: usize) -> (Output, Output) {
    let hint = 2 * word.len();
    let mut primary = Output::with_cap(max_length, hint);
    let mut alternate = Output::with_cap(max_length, hint);

    for step in Steps::new(word) {
        primary.push(step.primary);
        alternate.push(step.alternate);
    }
    (primary, alternate)
}
