//! Double Metaphone phonetic encoding for names and words.
//!
//! ```
//! assert_eq!(phonemy::encode("Smith"), ("SM0".to_string(), "XMT".to_string()));
//! assert_eq!(phonemy::encode("Catherine"), phonemy::encode("Katherine"));
//! ```

pub mod encoder;
pub mod engine;
pub mod finalize;
pub mod normalizer;
pub mod origin;
pub mod process;
pub mod stage;
pub mod testing;
pub mod word;

pub use encoder::{
    ConfigError, DEFAULT_MAX_LENGTH, DoubleMetaphone, DoubleMetaphoneBuilder, Encoder,
};
pub use engine::Step;
pub use finalize::Codes;
pub use normalizer::Normalizer;
pub use origin::Origin;
pub use stage::remove_diacritics::RemoveDiacritics;
pub use stage::strip_punctuation::StripPunctuation;
pub use stage::upper_case::UpperCase;

/// `(primary, alternate)` with the default length cap.
pub fn encode(word: &str) -> (String, String) {
    DoubleMetaphone::new().encode(word).into()
}

/// `(primary, alternate)` capped at `max_length`. A cap of 0 gives empty codes.
pub fn encode_with_max_length(word: &str, max_length: usize) -> (String, String) {
    DoubleMetaphone::with_max_length(max_length)
        .encode(word)
        .into()
}
