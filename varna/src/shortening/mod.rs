//! Context-gated shortening of a word's final long vowel.
//!
//! Three distinct rules share one mechanism: map the final vowel through
//! the long→short table and splice it back. Each rule has its own gate and
//! they are tried in table order; the first that opens and finds a
//! shortenable final vowel fires.

use itertools::Itertools;
use smol_str::SmolStr;

use crate::config::EngineConfig;
use crate::context::{Gender, ShorteningContext};
use crate::phoneme::{PhonemeTables, Sound};
use crate::result::{Detail, TransformationResult};
use crate::types::Options;
use crate::word::{Segmenter, Word};

/// Nominal-stem classification, supplied by the caller.
pub trait StemClassifier {
    fn is_pratipadika(&self, word: &Word, ctx: &ShorteningContext) -> bool;
}

impl<F> StemClassifier for F
where
    F: Fn(&str) -> bool,
{
    fn is_pratipadika(&self, word: &Word, _ctx: &ShorteningContext) -> bool {
        self(word.as_str())
    }
}

/// Classifies nothing as a stem.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoStems;

impl StemClassifier for NoStems {
    fn is_pratipadika(&self, _word: &Word, _ctx: &ShorteningContext) -> bool {
        false
    }
}

/// Classifies every word as a stem.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllStems;

impl StemClassifier for AllStems {
    fn is_pratipadika(&self, _word: &Word, _ctx: &ShorteningContext) -> bool {
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    Open,
    Closed(&'static str),
}

pub struct ShorteningRule {
    pub name: &'static str,
    pub gate: fn(&Word, &ShorteningContext, &dyn StemClassifier) -> Gate,
}

fn neuter_gate(word: &Word, ctx: &ShorteningContext, stems: &dyn StemClassifier) -> Gate {
    if ctx.gender() != Some(Gender::Neuter) {
        return Gate::Closed("gender is not neuter");
    }
    if !stems.is_pratipadika(word, ctx) {
        return Gate::Closed("not a nominal stem");
    }
    Gate::Open
}

fn upasarjana_gate(word: &Word, ctx: &ShorteningContext, stems: &dyn StemClassifier) -> Gate {
    if !ctx.is_upasarjana() {
        return Gate::Closed("not an upasarjana");
    }
    if !(word.ends_with(&[Sound::G, Sound::O]) || ctx.is_feminine()) {
        return Gate::Closed("neither go-final nor feminine");
    }
    if !stems.is_pratipadika(word, ctx) {
        return Gate::Closed("not a nominal stem");
    }
    Gate::Open
}

fn taddhita_elision_gate(word: &Word, ctx: &ShorteningContext, _: &dyn StemClassifier) -> Gate {
    if ctx.elision().is_none() {
        return Gate::Closed("no taddhita luk or lup");
    }
    match word.terminal() {
        Some(seg) if seg.sound() == Sound::Ii => Gate::Open,
        _ => Gate::Closed("final vowel is not ī"),
    }
}

pub static SHORTENING_RULES: [ShorteningRule; 3] = [
    ShorteningRule {
        name: "shortening/neuter-stem",
        gate: neuter_gate,
    },
    ShorteningRule {
        name: "shortening/upasarjana",
        gate: upasarjana_gate,
    },
    ShorteningRule {
        name: "shortening/taddhita-elision",
        gate: taddhita_elision_gate,
    },
];

pub struct Shortener<'t, C> {
    tables: &'t PhonemeTables,
    config: &'t EngineConfig,
    stems: &'t C,
}

impl<'t, C> Shortener<'t, C>
where
    C: StemClassifier,
{
    pub fn new(tables: &'t PhonemeTables, config: &'t EngineConfig, stems: &'t C) -> Self {
        Shortener {
            tables,
            config,
            stems,
        }
    }

    pub fn shorten(&self, word: &str, ctx: &ShorteningContext, options: Options) -> TransformationResult {
        let segmenter = Segmenter::new(self.tables, self.config.normalize_case);

        match segmenter.segment(word, ctx.script()) {
            Ok(word) => self.shorten_word(&word, ctx, options),
            Err(e) => TransformationResult::invalid(&e),
        }
    }

    pub fn shorten_word(&self, word: &Word, ctx: &ShorteningContext, options: Options) -> TransformationResult {
        let mut closed = Vec::with_capacity(SHORTENING_RULES.len());

        for rule in SHORTENING_RULES.iter() {
            match (rule.gate)(word, ctx, self.stems) {
                Gate::Closed(why) => {
                    log::debug!("{}: closed ({})", rule.name, why);
                    closed.push(format!("{}: {}", rule.name, why));
                }
                Gate::Open => match self.apply(word, rule, options) {
                    Some(result) => return result,
                    None => closed.push(format!("{}: final is not a long vowel", rule.name)),
                },
            }
        }

        TransformationResult::not_applicable(closed.iter().join("; "))
    }

    fn apply(&self, word: &Word, rule: &ShorteningRule, options: Options) -> Option<TransformationResult> {
        let terminal = word.terminal()?;
        let short = self.tables.gradation().map_long_to_short(terminal.sound())?;
        let script = word.script();
        let render = |sounds: &[Sound]| -> SmolStr { self.tables.render(sounds, script).into() };

        let transformed = if options.transform {
            Some(render(&word.with_terminal(&[short])))
        } else {
            None
        };

        log::debug!("{}: {:?} final {:?} -> {:?}", rule.name, word.as_str(), terminal.sound(), short);

        Some(TransformationResult::applied(
            word.as_str(),
            transformed,
            format!(
                "{} shortens final {} to {}",
                rule.name,
                render(&[terminal.sound()]),
                render(&[short])
            ),
            rule.name,
            Detail::Shortening {
                position: word.len() - 1,
                final_vowel_original: render(&[terminal.sound()]),
                final_vowel_shortened: render(&[short]),
            },
        ))
    }
}
