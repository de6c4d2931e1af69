//! Whole-word origin heuristics.
//!
//! A handful of consonants (C, G, J, S, T, W, Z) are pronounced differently
//! in names of Slavic, Germanic or Spanish origin. The flags below are
//! computed once per word, before transduction starts, and are only ever
//! read afterwards.

use memchr::{memchr2, memmem};

/// Origin flags for one normalized word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Origin {
    /// W, K or CZ appears anywhere (WITZ is covered by the W).
    pub slavo_germanic: bool,
    /// Starts with SCH, or the first of several words is VAN or VON.
    pub germanic: bool,
    /// The first of several words is SAN ("San Jacinto").
    pub spanish: bool,
}

impl Origin {
    /// Scan a normalized buffer: upper-case letters, words joined by one space.
    pub fn detect(normalized: &str) -> Self {
        let bytes = normalized.as_bytes();
        Self {
            slavo_germanic: memchr2(b'W', b'K', bytes).is_some()
                || memmem::find(bytes, b"CZ").is_some(),
            germanic: ["VAN ", "VON ", "SCH"]
                .iter()
                .any(|prefix| normalized.starts_with(prefix)),
            spanish: normalized.starts_with("SAN "),
        }
    }

    #[inline(always)]
    pub const fn any(&self) -> bool {
        self.slavo_germanic || self.germanic || self.spanish
    }
}
