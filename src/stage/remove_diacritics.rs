//! src/stage/remove_diacritics.rs
//!
//! Strips Latin combining marks using NFD (Canonical Decomposition), keeping
//! `Ç` and `Ñ`, which the engine encodes as letters of their own.

use crate::{stage::Stage, testing::stage_contract::StageTestConfig};
use icu_normalizer::DecomposingNormalizerBorrowed;
use std::{borrow::Cow, sync::LazyLock};

static ICU4X_NFD: LazyLock<DecomposingNormalizerBorrowed<'static>> =
    LazyLock::new(DecomposingNormalizerBorrowed::new_nfd);

const CEDILLA: char = '\u{0327}';
const TILDE: char = '\u{0303}';

/// Removes diacritical marks from Latin letters.
///
/// # Behaviour
///
/// - Precomposed letters are decomposed one character at a time and lose
///   their marks from the Combining Diacritical Marks block (U+0300–U+036F):
///   `É` → `E`, `Ö` → `O`, `Ã` → `A`.
/// - `Ç` and `Ñ` survive untouched; a decomposed `C` + U+0327 or `N` + U+0303
///   is recomposed.
/// - Characters whose decomposition carries no such mark (Hangul, CJK, …)
///   are left as they are rather than being exploded into jamo.
pub struct RemoveDiacritics;

#[inline(always)]
fn is_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}

#[inline]
fn needs_fold(c: char) -> bool {
    if c.is_ascii() || matches!(c, 'Ç' | 'ç' | 'Ñ' | 'ñ') {
        return false;
    }
    if is_mark(c) {
        return true;
    }
    let mut buf = [0u8; 4];
    ICU4X_NFD
        .normalize(c.encode_utf8(&mut buf))
        .chars()
        .any(is_mark)
}

#[inline]
fn push_folded(out: &mut String, c: char) {
    if !is_mark(c) {
        out.push(c);
        return;
    }
    let recomposed = match (out.chars().next_back(), c) {
        (Some('C'), CEDILLA) => 'Ç',
        (Some('c'), CEDILLA) => 'ç',
        (Some('N'), TILDE) => 'Ñ',
        (Some('n'), TILDE) => 'ñ',
        _ => return,
    };
    out.pop();
    out.push(recomposed);
}

impl Stage for RemoveDiacritics {
    fn name(&self) -> &'static str {
        "remove_diacritics"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        if text.is_ascii() {
            return false;
        }
        text.chars().any(needs_fold)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }

        let mut out = String::with_capacity(text.len());
        let mut buf = [0u8; 4];
        for c in text.chars() {
            if !needs_fold(c) {
                out.push(c);
                continue;
            }
            for d in ICU4X_NFD.normalize(c.encode_utf8(&mut buf)).chars() {
                push_folded(&mut out, d);
            }
        }
        Cow::Owned(out)
    }
}

impl StageTestConfig for RemoveDiacritics {
    fn samples() -> &'static [&'static str] {
        &["CAFÉ", "MÜLLER", "FRANÇOIS", "PEÑA", "C\u{0327}A", "한국", ""]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["SMITH", "FRANÇOIS", "garçon", "PEÑA", "señor", "한국어", "O'BRIEN", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("MÜLLER", "MULLER"),
            ("Zoë", "Zoe"),
            ("SÃO", "SAO"),
            ("PEN\u{0303}A", "PEÑA"),
            ("DVOŘÁK", "DVORAK"),
            ("FRANC\u{0327}OIS", "FRANÇOIS"),
            ("e\u{0301}", "e"),
        ]
    }
}
