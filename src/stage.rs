//! Text stages run by the [`Normalizer`](crate::normalizer::Normalizer) before
//! a word reaches the transduction engine.
//!
//! # Zero-copy contract
//!
//! Every stage works on a `Cow<str>`:
//!
//! * `needs_apply(&self, text)` is a cheap pre-scan. Returning `false` skips the
//!   stage entirely and the text stays borrowed.
//! * `apply(&self, text)` performs the transformation. When nothing changes it
//!   must hand the input back untouched (same pointer, no allocation).
//!
//! Stages are idempotent, and `needs_apply` must agree exactly with whether
//! `apply` would change the text. `assert_stage_contract!` checks both.

pub mod remove_diacritics;
pub mod strip_punctuation;
pub mod upper_case;

use std::borrow::Cow;

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in logs and test failures.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` skips the whole stage.
    fn needs_apply(&self, text: &str) -> bool;

    /// Allocation-aware transformation. Must always be correct.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;
}
