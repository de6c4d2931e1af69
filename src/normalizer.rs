// src/normalizer.rs
use crate::{
    process::{Chain, ChainedProcess, EmptyProcess, Process},
    stage::{
        remove_diacritics::RemoveDiacritics, strip_punctuation::StripPunctuation,
        upper_case::UpperCase,
    },
    word::Word,
};
use log::{debug, trace};
use std::borrow::Cow;

type Builtin = ChainedProcess<
    StripPunctuation,
    ChainedProcess<RemoveDiacritics, ChainedProcess<UpperCase, EmptyProcess>>,
>;

/// Turns raw text into a [`Word`].
///
/// 1. upper-case
/// 2. remove diacritics (keeping `Ç`)
/// 3. drop everything but letters and whitespace
/// 4. join the remaining words with a single space
///
/// The space survives so that rules can still see a word boundary:
/// `"mac caffrey"` and `"maccaffrey"` end up with the same code because the
/// C rule swallows `C` + space + `C`, not because the space vanished.
pub struct Normalizer {
    chain: Builtin,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            chain: Chain::new()
                .then(UpperCase)
                .then(RemoveDiacritics)
                .then(StripPunctuation)
                .build(),
        }
    }

    pub fn normalize(&self, raw: &str) -> Word {
        let cleaned = self.chain.process(Cow::Borrowed(raw));
        let joined = join_words(&cleaned);
        if joined.is_empty() && !raw.is_empty() {
            debug!("no letters left after normalizing {raw:?}");
        }

        let word = Word::new(&joined);
        if word.origin().any() {
            trace!("{joined:?}: origin {:?}", word.origin());
        }
        word
    }
}

/// Collapse every whitespace run to one space and trim both ends.
fn join_words(text: &str) -> Cow<'_, str> {
    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return Cow::Borrowed("");
    };
    let Some(second) = words.next() else {
        return Cow::Borrowed(first);
    };

    let mut out = String::with_capacity(text.len());
    out.push_str(first);
    for w in std::iter::once(second).chain(words) {
        out.push(' ');
        out.push_str(w);
    }
    Cow::Owned(out)
}
