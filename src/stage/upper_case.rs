use crate::{stage::Stage, testing::stage_contract::StageTestConfig};
use std::borrow::Cow;

/// Folds text to upper case, the single case the rule tables are written in.
///
/// Uses full Unicode upper-casing, so `ß` becomes `SS` and `ç` becomes `Ç`.
/// Zero-copy when the text is already upper case.
pub struct UpperCase;

#[inline(always)]
fn changes_on_upper(c: char) -> bool {
    let mut upper = c.to_uppercase();
    !(upper.next() == Some(c) && upper.next().is_none())
}

impl Stage for UpperCase {
    fn name(&self) -> &'static str {
        "upper_case"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        if text.is_ascii() {
            return text.bytes().any(|b| b.is_ascii_lowercase());
        }
        text.chars().any(changes_on_upper)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        if text.is_ascii() {
            return Cow::Owned(text.to_ascii_uppercase());
        }
        Cow::Owned(text.to_uppercase())
    }
}

impl StageTestConfig for UpperCase {
    fn samples() -> &'static [&'static str] {
        &["Smith", "mac caffrey", "GROß", "françois", "Øster", ""]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["SMITH", "MAC CAFFREY", "O'BRIEN", "123 !@#", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("smith", "SMITH"),
            ("o'Brien", "O'BRIEN"),
            ("Groß", "GROSS"),
            ("françois", "FRANÇOIS"),
            ("peña", "PEÑA"),
        ]
    }
}
