//! Final-sound substitution.
//!
//! A replacement is placed immediately after the word's final sound; it
//! never overwrites it. When the caller gives no replacement one is taken
//! from [`suggest::SUGGESTION_RULES`]. A replacement for a final ṛ/ṝ goes
//! through [`rapara::rapara`].

use smol_str::SmolStr;

use crate::config::EngineConfig;
use crate::context::SubstitutionContext;
use crate::error::EngineError;
use crate::phoneme::{PhonemeTables, Sound};
use crate::result::{Detail, TransformationResult};
use crate::script::{self, ScriptDetection};
use crate::types::Options;
use crate::word::{Segmenter, Word};

pub mod rapara;
pub mod suggest;

#[derive(Clone, Copy, Debug)]
pub struct Substitutor<'t> {
    tables: &'t PhonemeTables,
    config: &'t EngineConfig,
}

impl<'t> Substitutor<'t> {
    pub fn new(tables: &'t PhonemeTables, config: &'t EngineConfig) -> Substitutor<'t> {
        Substitutor { tables, config }
    }

    pub fn substitute(
        &self,
        word: &str,
        replacement: Option<&str>,
        ctx: &SubstitutionContext,
        options: Options,
    ) -> TransformationResult {
        let segmenter = Segmenter::new(self.tables, self.config.normalize_case);

        let word = match segmenter.segment(word, ctx.script) {
            Ok(word) => word,
            Err(e) => return TransformationResult::invalid(&e),
        };

        match self.substitute_word(&word, replacement, ctx, options) {
            Ok(result) => result,
            Err(e) => TransformationResult::invalid(&e),
        }
    }

    fn substitute_word(
        &self,
        word: &Word,
        replacement: Option<&str>,
        ctx: &SubstitutionContext,
        options: Options,
    ) -> Result<TransformationResult, EngineError> {
        let terminal = word.terminal().ok_or(EngineError::EmptyInput)?.sound();

        let (sounds, suggested_by) = match replacement {
            Some(replacement) => (self.read_replacement(word, replacement)?, None),
            None => match suggest::suggest(self.tables.gradation(), ctx.process, terminal) {
                Some((rule, sounds)) => (sounds, Some(rule.name)),
                None => {
                    log::debug!("no {} suggestion after {:?}", ctx.process, terminal);
                    return Ok(TransformationResult::not_applicable(format!(
                        "no {} replacement is suggested after final {}",
                        ctx.process,
                        self.render(&[terminal], word)
                    )));
                }
            },
        };

        if let Some(limit) = self.config.replacement_limits.limit_for(ctx.process) {
            if sounds.len() > limit {
                return Ok(TransformationResult::not_applicable(format!(
                    "replacement of {} phonemes exceeds the {} limit of {}",
                    sounds.len(),
                    ctx.process,
                    limit
                )));
            }
        }

        let (sounds, augmented) = rapara::rapara(&sounds, terminal);
        let rendered_replacement = self.render(&sounds, word);

        let transformed = if options.transform {
            let mut all = word.sounds();
            all.extend_from_slice(&sounds);
            Some(self.render(&all, word))
        } else {
            None
        };

        log::debug!(
            "substitute: {:?} + {:?} ({}{})",
            word.as_str(),
            rendered_replacement,
            ctx.process,
            if augmented { ", rapara" } else { "" }
        );

        Ok(TransformationResult::applied(
            word.as_str(),
            transformed,
            format!(
                "{} placed after final {}{}",
                rendered_replacement,
                self.render(&[terminal], word),
                if augmented { " with r appended" } else { "" }
            ),
            suggested_by.unwrap_or("substitution/explicit"),
            Detail::Substitution {
                terminal: self.render(&[terminal], word),
                position: word.len(),
                replacement: rendered_replacement,
                suggested_by,
                rapara: augmented,
            },
        ))
    }

    fn read_replacement(&self, word: &Word, replacement: &str) -> Result<Vec<Sound>, EngineError> {
        if replacement.trim().is_empty() {
            return Err(EngineError::InvalidArgument("replacement"));
        }

        match script::detect(replacement) {
            ScriptDetection::Detected(found) if found != word.script() => {
                return Err(EngineError::ScriptMismatch {
                    expected: word.script(),
                    found,
                })
            }
            ScriptDetection::Mixed => return Err(EngineError::MixedScript),
            _ => {}
        }

        Segmenter::new(self.tables, self.config.normalize_case)
            .segment(replacement, Some(word.script()))
            .map(|r| r.sounds())
    }

    fn render(&self, sounds: &[Sound], word: &Word) -> SmolStr {
        self.tables.render(sounds, word.script()).into()
    }
}
