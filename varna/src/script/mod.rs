//! Script detection for IAST and Devanagari input.

use serde::Serialize;
use unic_char_range::{chars, CharRange};
use unic_ucd_category::GeneralCategory;

use crate::error::EngineError;
use crate::types::Script;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ScriptDetection {
    /// Nothing but whitespace: nothing to transform.
    Empty,
    Detected(Script),
    Mixed,
    /// First letter belonging to neither script.
    Unrecognized(char),
}

impl ScriptDetection {
    pub fn script(&self) -> Option<Script> {
        match self {
            ScriptDetection::Detected(script) => Some(*script),
            _ => None,
        }
    }
}

#[inline(always)]
fn devanagari_ranges() -> [CharRange; 2] {
    [
        chars!('\u{0900}'..='\u{097F}'),
        chars!('\u{A8E0}'..='\u{A8FF}'),
    ]
}

#[inline(always)]
fn latin_ranges() -> [CharRange; 4] {
    [
        chars!('a'..='z'),
        chars!('A'..='Z'),
        chars!('\u{00C0}'..='\u{024F}'),
        chars!('\u{1E00}'..='\u{1EFF}'),
    ]
}

#[inline(always)]
fn is_combining_diacritic(ch: char) -> bool {
    chars!('\u{0300}'..='\u{036F}').contains(ch)
}

pub fn is_devanagari(ch: char) -> bool {
    devanagari_ranges().iter().any(|r| r.contains(ch))
}

pub fn is_iast(ch: char) -> bool {
    latin_ranges().iter().any(|r| r.contains(ch)) || is_combining_diacritic(ch)
}

/// Classifies `word` by the scripts of its letters.
///
/// Whitespace, punctuation and digits are ignored. Any letter outside both
/// scripts makes the whole word unrecognized.
pub fn detect(word: &str) -> ScriptDetection {
    let mut seen_iast = false;
    let mut seen_devanagari = false;

    for ch in word.chars() {
        if ch.is_whitespace() {
            continue;
        }

        if is_devanagari(ch) {
            seen_devanagari = true;
        } else if is_iast(ch) {
            seen_iast = true;
        } else if GeneralCategory::of(ch).is_letter() || GeneralCategory::of(ch).is_mark() {
            return ScriptDetection::Unrecognized(ch);
        }
    }

    match (seen_iast, seen_devanagari) {
        (true, true) => ScriptDetection::Mixed,
        (true, false) => ScriptDetection::Detected(Script::Iast),
        (false, true) => ScriptDetection::Detected(Script::Devanagari),
        (false, false) => ScriptDetection::Empty,
    }
}

/// Settles the script of `word`. A caller's hint wins over detection.
pub fn resolve(word: &str, hint: Option<Script>) -> Result<Script, EngineError> {
    if word.trim().is_empty() {
        return Err(EngineError::EmptyInput);
    }

    if let Some(script) = hint {
        return Ok(script);
    }

    match detect(word) {
        ScriptDetection::Detected(script) => Ok(script),
        ScriptDetection::Mixed => Err(EngineError::MixedScript),
        ScriptDetection::Unrecognized(ch) => Err(EngineError::UnknownScript(ch)),
        ScriptDetection::Empty => Err(EngineError::EmptyInput),
    }
}
