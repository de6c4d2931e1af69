use thiserror::Error;

use crate::{
    engine::{self, Step, Steps},
    finalize::{Codes, finalize},
    normalizer::Normalizer,
};

/// Longest code kept by default. Pass 4 for the classic short codes.
pub const DEFAULT_MAX_LENGTH: usize = 32;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_length must be at least 1")]
    ZeroMaxLength,
}

/// Anything that turns a word into phonetic codes.
pub trait Encoder: Send + Sync {
    fn name(&self) -> &'static str;
    fn encode(&self, word: &str) -> Codes;
}

/// Double Metaphone encoder.
///
/// Holds no state beyond its configuration, so one value can be copied freely
/// and shared between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleMetaphone {
    max_length: usize,
}

impl Default for DoubleMetaphone {
    fn default() -> Self {
        Self::new()
    }
}

impl DoubleMetaphone {
    pub const fn new() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
        }
    }

    pub fn builder() -> DoubleMetaphoneBuilder {
        DoubleMetaphoneBuilder::default()
    }

    /// Unchecked constructor: 0 is allowed and yields empty codes.
    pub(crate) const fn with_max_length(max_length: usize) -> Self {
        Self { max_length }
    }

    #[inline(always)]
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn encode(&self, word: &str) -> Codes {
        let word = Normalizer::new().normalize(word);
        let (primary, alternate) = engine::transduce(&word, self.max_length);
        finalize(primary, alternate, self.max_length)
    }

    /// Every rule that fires while encoding `word`, in order.
    ///
    /// Emissions are listed in full; the length cap is not applied.
    pub fn explain(&self, word: &str) -> Vec<Step> {
        let word = Normalizer::new().normalize(word);
        Steps::new(&word).collect()
    }
}

impl Encoder for DoubleMetaphone {
    fn name(&self) -> &'static str {
        "double_metaphone"
    }

    fn encode(&self, word: &str) -> Codes {
        DoubleMetaphone::encode(self, word)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DoubleMetaphoneBuilder {
    max_length: usize,
}

impl Default for DoubleMetaphoneBuilder {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl DoubleMetaphoneBuilder {
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn build(self) -> Result<DoubleMetaphone, ConfigError> {
        if self.max_length == 0 {
            return Err(ConfigError::ZeroMaxLength);
        }
        Ok(DoubleMetaphone::with_max_length(self.max_length))
    }
}
