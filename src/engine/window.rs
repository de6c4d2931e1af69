use crate::{origin::Origin, word::Word};

const VOWELS: [char; 6] = ['A', 'E', 'I', 'O', 'U', 'Y'];

/// Read-only view of a [`Word`] at the cursor.
///
/// Offsets are relative to the cursor and may be negative. Anything outside
/// the word reads as "no character", which never matches a pattern and is
/// never a vowel.
#[derive(Debug, Clone, Copy)]
pub struct Window<'w> {
    word: &'w Word,
    cursor: usize,
}

impl<'w> Window<'w> {
    #[inline(always)]
    pub fn new(word: &'w Word, cursor: usize) -> Self {
        Self { word, cursor }
    }

    #[inline(always)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Length of the whole word.
    #[inline(always)]
    pub fn word_len(&self) -> usize {
        self.word.len()
    }

    #[inline(always)]
    pub fn is_first(&self) -> bool {
        self.cursor == 0
    }

    #[inline(always)]
    pub fn is_last(&self) -> bool {
        self.cursor + 1 == self.word.len()
    }

    #[inline(always)]
    pub fn origin(&self) -> Origin {
        self.word.origin()
    }

    #[inline(always)]
    pub fn char_at(&self, offset: isize) -> Option<char> {
        self.cursor
            .checked_add_signed(offset)
            .and_then(|i| self.word.char_at(i))
    }

    #[inline(always)]
    pub fn next_is(&self, c: char) -> bool {
        self.char_at(1) == Some(c)
    }

    #[inline(always)]
    pub fn prev_is(&self, c: char) -> bool {
        self.char_at(-1) == Some(c)
    }

    #[inline(always)]
    pub fn is_vowel_at(&self, offset: isize) -> bool {
        self.char_at(offset).is_some_and(|c| VOWELS.contains(&c))
    }

    /// Does any of `patterns` start at `cursor + offset`?
    #[inline]
    pub fn at(&self, offset: isize, patterns: &[&str]) -> bool {
        match self.cursor.checked_add_signed(offset) {
            Some(start) => patterns.iter().any(|p| self.matches(start, p)),
            None => false,
        }
    }

    /// Does the whole word start with any of `patterns`?
    #[inline]
    pub fn word_starts_with(&self, patterns: &[&str]) -> bool {
        patterns.iter().any(|p| self.matches(0, p))
    }

    /// Does the whole word end with any of `patterns`?
    #[inline]
    pub fn word_ends_with(&self, patterns: &[&str]) -> bool {
        let len = self.word.len();
        patterns.iter().any(|p| {
            len.checked_sub(p.chars().count())
                .is_some_and(|start| self.matches(start, p))
        })
    }

    #[inline(always)]
    fn matches(&self, start: usize, pattern: &str) -> bool {
        let letters = self.word.letters();
        let Some(tail) = letters.get(start..) else {
            return false;
        };
        let mut chars = tail.iter();
        pattern.chars().all(|p| chars.next() == Some(&p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_lookups() {
        let word = Word::new("RICHARD");
        let w = Window::new(&word, 2);
        assert_eq!(w.char_at(0), Some('C'));
        assert!(w.prev_is('I'));
        assert!(w.next_is('H'));
        assert!(w.at(0, &["CH"]));
        assert!(w.at(-2, &["XX", "RICH"]));
        assert!(!w.at(-3, &["RICH"]));
        assert_eq!(w.char_at(-3), None);
        assert_eq!(w.char_at(5), None);
    }

    #[test]
    fn patterns_do_not_run_off_the_end() {
        let word = Word::new("JOS");
        let w = Window::new(&word, 0);
        assert!(!w.at(0, &["JOSE"]));
        assert!(w.at(0, &["JOS"]));
    }

    #[test]
    fn boundaries() {
        let word = Word::new("ALLO");
        assert!(Window::new(&word, 0).is_first());
        assert!(Window::new(&word, 3).is_last());
        assert!(!Window::new(&word, 2).is_last());
    }

    #[test]
    fn whole_word_checks() {
        let word = Word::new("CABALLOS");
        let w = Window::new(&word, 4);
        assert!(w.word_starts_with(&["CAB"]));
        assert!(w.word_ends_with(&["AS", "OS"]));
        assert!(!w.word_ends_with(&["CABALLOSS"]));
    }

    #[test]
    fn vowels_include_y_but_not_space() {
        let word = Word::new("Y A");
        let w = Window::new(&word, 0);
        assert!(w.is_vowel_at(0));
        assert!(!w.is_vowel_at(1));
        assert!(w.is_vowel_at(2));
        assert!(!w.is_vowel_at(3));
    }
}
