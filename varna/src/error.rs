//! Engine errors.

use crate::config::ConfigError;
use crate::context::ContextError;
use crate::types::Script;

/// Errors raised while reading a word or validating primitive arguments.
///
/// Rule operations fold these into a non-applying
/// [`TransformationResult`](crate::result::TransformationResult); only
/// [`apply_rapara`](crate::substitution::rapara::apply_rapara) and the
/// lower-level parsing API return them directly.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum EngineError {
    /// Input was empty or whitespace only
    #[error("Empty input")]
    EmptyInput,

    /// A character sequence has no entry in the phoneme table
    #[error("Unrecognized grapheme {grapheme:?} at byte offset {offset}")]
    UnrecognizedGrapheme {
        /// the offending character
        grapheme: char,
        /// byte offset into the normalized input
        offset: usize,
    },

    /// Input mixes IAST and Devanagari characters
    #[error("Input mixes IAST and Devanagari")]
    MixedScript,

    /// Input is written in neither supported script
    #[error("Input is not in a supported script (found {0:?})")]
    UnknownScript(char),

    /// Two arguments that must share a script do not
    #[error("Expected {expected} input, found {found}")]
    ScriptMismatch {
        /// script the caller committed to
        expected: Script,
        /// script found in the argument
        found: Script,
    },

    /// A primitive was called with a missing or malformed argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Context flags could not be parsed or contradict each other
    #[error("Invalid context")]
    Context(#[from] ContextError),

    /// Engine configuration is invalid
    #[error("Invalid configuration")]
    Config(#[from] ConfigError),
}
