//! One entry point over the phoneme tables and every rule component.

use smol_str::SmolStr;

use crate::config::EngineConfig;
use crate::context::{ShorteningContext, SubstitutionContext, UpadhaContext};
use crate::error::EngineError;
use crate::gradation::{GradationResolver, UpadhaAnalysis};
use crate::phoneme::PhonemeTables;
use crate::result::TransformationResult;
use crate::script::{self, ScriptDetection};
use crate::shortening::{NoStems, Shortener, StemClassifier};
use crate::substitution::{rapara, Substitutor};
use crate::types::{Options, Script};
use crate::word::{Segmenter, Word};

/// Borrows a set of [`PhonemeTables`] and owns the configuration and the
/// nominal-stem classifier used by shortening.
///
/// ```
/// use varna::{Engine, PhonemeTables};
///
/// let tables = PhonemeTables::new();
/// let engine = Engine::new(&tables);
/// assert_eq!(engine.guna("ṛ"), "ar");
/// ```
pub struct Engine<'t, C = NoStems> {
    tables: &'t PhonemeTables,
    config: EngineConfig,
    classifier: C,
}

impl<'t> Engine<'t, NoStems> {
    pub fn new(tables: &'t PhonemeTables) -> Engine<'t, NoStems> {
        Engine {
            tables,
            config: EngineConfig::default(),
            classifier: NoStems,
        }
    }

    pub fn with_config(tables: &'t PhonemeTables, config: EngineConfig) -> Result<Engine<'t, NoStems>, EngineError> {
        config.validate()?;
        Ok(Engine {
            tables,
            config,
            classifier: NoStems,
        })
    }
}

impl<'t, C: StemClassifier> Engine<'t, C> {
    /// Replaces the stem classifier.
    pub fn with_classifier<D: StemClassifier>(self, classifier: D) -> Engine<'t, D> {
        Engine {
            tables: self.tables,
            config: self.config,
            classifier,
        }
    }

    pub fn detect_script(&self, word: &str) -> ScriptDetection {
        script::detect(word)
    }

    /// The hint if given, otherwise the detected script. `None` for empty,
    /// mixed or unrecognized input.
    pub fn resolve_script(&self, word: &str, hint: Option<Script>) -> Option<Script> {
        script::resolve(word, hint).ok()
    }

    pub fn segment(&self, word: &str, hint: Option<Script>) -> Result<Word, EngineError> {
        Segmenter::new(self.tables, self.config.normalize_case).segment(word, hint)
    }

    pub fn guna(&self, vowel: &str) -> SmolStr {
        self.resolver().guna_str(vowel)
    }

    pub fn vriddhi(&self, vowel: &str) -> SmolStr {
        self.resolver().vriddhi_str(vowel)
    }

    pub fn analyze_upadha(&self, word: &str, ctx: &UpadhaContext) -> UpadhaAnalysis {
        self.resolver().analyze_upadha(word, ctx)
    }

    pub fn substitute(
        &self,
        word: &str,
        replacement: Option<&str>,
        ctx: &SubstitutionContext,
        options: Options,
    ) -> TransformationResult {
        Substitutor::new(self.tables, &self.config).substitute(word, replacement, ctx, options)
    }

    pub fn apply_rapara(&self, substitute: &str, original: &str, script: Script) -> Result<SmolStr, EngineError> {
        rapara::apply_rapara(self.tables, substitute, original, script)
    }

    pub fn shorten(&self, word: &str, ctx: &ShorteningContext, options: Options) -> TransformationResult {
        Shortener::new(self.tables, &self.config, &self.classifier).shorten(word, ctx, options)
    }

    /// Writes `word` in `target`, letter for letter.
    pub fn transliterate(&self, word: &str, target: Script) -> Result<SmolStr, EngineError> {
        let word = self.segment(word, None)?;
        if word.script() == target {
            return Ok(SmolStr::new(word.as_str()));
        }
        Ok(self.tables.render(&word.sounds(), target).into())
    }

    fn resolver(&self) -> GradationResolver<'_> {
        GradationResolver::new(self.tables, &self.config)
    }
}
