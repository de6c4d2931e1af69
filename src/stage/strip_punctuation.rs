use crate::{stage::Stage, testing::stage_contract::StageTestConfig};
use std::borrow::Cow;

/// Drops every character that is neither a letter nor whitespace.
///
/// Apostrophes, hyphens, digits and stray combining marks vanish without a
/// replacement, so `O'Brien` and `OBrien` normalise identically. Whitespace
/// is kept: the normalizer uses it to find word breaks.
pub struct StripPunctuation;

#[inline(always)]
fn keep(c: char) -> bool {
    c.is_alphabetic() || c.is_whitespace()
}

impl Stage for StripPunctuation {
    fn name(&self) -> &'static str {
        "strip_punctuation"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        if text.is_ascii() {
            return text
                .bytes()
                .any(|b| !(b.is_ascii_alphabetic() || b.is_ascii_whitespace()));
        }
        text.chars().any(|c| !keep(c))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        Cow::Owned(text.chars().filter(|&c| keep(c)).collect())
    }
}

impl StageTestConfig for StripPunctuation {
    fn samples() -> &'static [&'static str] {
        &["O'BRIEN", "SMITH-JONES", "MAC CAFFREY", "R2D2", "", "...", "ÇA"]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["SMITH", "MAC CAFFREY", "van der Berg", "FRANÇOIS", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("O'BRIEN", "OBRIEN"),
            ("SMITH-JONES", "SMITHJONES"),
            ("J. R. R.", "J R R"),
            ("#42", ""),
        ]
    }
}
