//! The uniform result of a rule operation.

use serde::Serialize;
use smol_str::SmolStr;

use crate::error::EngineError;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Detail {
    Substitution {
        /// The word's final sound, after which the replacement is placed.
        terminal: SmolStr,
        /// Segment index the replacement is inserted at.
        position: usize,
        replacement: SmolStr,
        /// Name of the suggestion row used, if the caller gave no replacement.
        #[serde(skip_serializing_if = "Option::is_none")]
        suggested_by: Option<&'static str>,
        /// An r was appended to the replacement.
        rapara: bool,
    },
    Shortening {
        position: usize,
        final_vowel_original: SmolStr,
        final_vowel_shortened: SmolStr,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransformationResult {
    /// The rule's precondition held.
    pub applies: bool,
    /// The surface form differs after transformation.
    pub changed: bool,
    pub transformed: Option<SmolStr>,
    pub explanation: String,
    /// Why the input could not be processed at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Detail>,
}

impl TransformationResult {
    pub fn not_applicable<S: Into<String>>(explanation: S) -> TransformationResult {
        TransformationResult {
            applies: false,
            changed: false,
            transformed: None,
            explanation: explanation.into(),
            reason: None,
            rule: None,
            detail: None,
        }
    }

    pub fn invalid(error: &EngineError) -> TransformationResult {
        TransformationResult {
            reason: Some(error.to_string()),
            ..TransformationResult::not_applicable("input could not be processed")
        }
    }

    /// A rule that fired. `transformed` is `None` in preview mode.
    pub fn applied<S: Into<String>>(
        original: &str,
        transformed: Option<SmolStr>,
        explanation: S,
        rule: &'static str,
        detail: Detail,
    ) -> TransformationResult {
        let changed = transformed.as_deref().map_or(false, |t| t != original);

        TransformationResult {
            applies: true,
            changed,
            transformed: if changed { transformed } else { None },
            explanation: explanation.into(),
            reason: None,
            rule: Some(rule),
            detail: Some(detail),
        }
    }
}
