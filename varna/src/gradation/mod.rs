//! Guṇa and vṛddhi of ik vowels, and upadha analysis of candidate roots.

use serde::Serialize;
use smol_str::SmolStr;

use crate::config::EngineConfig;
use crate::context::UpadhaContext;
use crate::error::EngineError;
use crate::phoneme::{GradeForm, IkClass, PhonemeTables, Sound};
use crate::word::{Segmenter, UpadhaMode, Word};

/// How a word came to be analyzed as a verbal root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RootCandidacy {
    /// The caller said it is a root.
    Asserted,
    /// Short enough to be guessed a root. An approximation.
    Heuristic,
    /// Not treated as a root.
    Rejected,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpadhaAnalysis {
    /// The word was analyzed as a root and has an upadha.
    pub applies: bool,
    pub has_ik_upadha: bool,
    pub candidacy: RootCandidacy,
    pub upadha: Option<SmolStr>,
    pub upadha_index: Option<usize>,
    pub ik_class: Option<IkClass>,
    /// The upadha is a short ik vowel (laghu).
    pub is_light: bool,
    pub guna_form: Option<SmolStr>,
    pub vriddhi_form: Option<SmolStr>,
    pub explanation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl UpadhaAnalysis {
    fn empty(candidacy: RootCandidacy, explanation: String) -> UpadhaAnalysis {
        UpadhaAnalysis {
            applies: false,
            has_ik_upadha: false,
            candidacy,
            upadha: None,
            upadha_index: None,
            ik_class: None,
            is_light: false,
            guna_form: None,
            vriddhi_form: None,
            explanation,
            reason: None,
        }
    }

    fn invalid(error: &EngineError) -> UpadhaAnalysis {
        let mut analysis = UpadhaAnalysis::empty(
            RootCandidacy::Rejected,
            "input could not be analyzed".into(),
        );
        analysis.reason = Some(error.to_string());
        analysis
    }
}

#[derive(Clone, Copy, Debug)]
pub struct GradationResolver<'t> {
    tables: &'t PhonemeTables,
    config: &'t EngineConfig,
}

impl<'t> GradationResolver<'t> {
    pub fn new(tables: &'t PhonemeTables, config: &'t EngineConfig) -> GradationResolver<'t> {
        GradationResolver { tables, config }
    }

    /// Guṇa of `sound`; any sound outside the ik set maps to itself.
    pub fn guna(&self, sound: Sound) -> GradeForm {
        self.tables
            .gradation()
            .guna(sound)
            .unwrap_or_else(|| GradeForm::bare(sound))
    }

    /// Vṛddhi of `sound`; any sound outside the ik set maps to itself.
    pub fn vriddhi(&self, sound: Sound) -> GradeForm {
        self.tables
            .gradation()
            .vriddhi(sound)
            .unwrap_or_else(|| GradeForm::bare(sound))
    }

    /// String form of [`guna`](Self::guna). Input that is not a single
    /// phoneme comes back unchanged.
    pub fn guna_str(&self, vowel: &str) -> SmolStr {
        self.grade_str(vowel, |s| self.guna(s))
    }

    /// String form of [`vriddhi`](Self::vriddhi).
    pub fn vriddhi_str(&self, vowel: &str) -> SmolStr {
        self.grade_str(vowel, |s| self.vriddhi(s))
    }

    fn grade_str<F>(&self, vowel: &str, grade: F) -> SmolStr
    where
        F: Fn(Sound) -> GradeForm,
    {
        let segmenter = Segmenter::new(self.tables, self.config.normalize_case);

        match segmenter.segment(vowel, None) {
            Ok(word) if word.len() == 1 && word.segments()[0].sound().is_ik() => {
                let form = grade(word.segments()[0].sound());
                self.tables.render(&form.sounds(), word.script()).into()
            }
            _ => SmolStr::new(vowel),
        }
    }

    /// Whether `word`'s upadha is an ik vowel eligible for guṇa, and its
    /// graded forms.
    pub fn analyze_upadha(&self, word: &str, ctx: &UpadhaContext) -> UpadhaAnalysis {
        let segmenter = Segmenter::new(self.tables, self.config.normalize_case);

        match segmenter.segment(word, ctx.script) {
            Ok(word) => self.analyze_word(&word, ctx),
            Err(e) => {
                log::debug!("upadha analysis rejected {:?}: {}", word, e);
                UpadhaAnalysis::invalid(&e)
            }
        }
    }

    pub fn analyze_word(&self, word: &Word, ctx: &UpadhaContext) -> UpadhaAnalysis {
        let candidacy = self.root_candidacy(word, ctx);

        if candidacy == RootCandidacy::Rejected {
            return UpadhaAnalysis::empty(
                candidacy,
                format!("{} is not treated as a verbal root", word.as_str()),
            );
        }

        let (index, segment) = match word.upadha(UpadhaMode::VerbalRoot) {
            Some(found) => found,
            None => {
                return UpadhaAnalysis::empty(
                    candidacy,
                    format!("{} is too short to have an upadha", word.as_str()),
                )
            }
        };

        let sound = segment.sound();
        let script = word.script();
        let render = |sounds: &[Sound]| -> SmolStr { self.tables.render(sounds, script).into() };
        let upadha = Some(render(&[sound]));

        if !sound.is_ik() {
            let mut analysis = UpadhaAnalysis::empty(
                candidacy,
                format!("upadha {} is not an ik vowel", render(&[sound])),
            );
            analysis.applies = true;
            analysis.upadha = upadha;
            analysis.upadha_index = Some(index);
            return analysis;
        }

        let guna = self.guna(sound);
        let vriddhi = self.vriddhi(sound);

        UpadhaAnalysis {
            applies: true,
            has_ik_upadha: true,
            candidacy,
            upadha,
            upadha_index: Some(index),
            ik_class: sound.ik_class(),
            is_light: !sound.is_long(),
            guna_form: Some(render(&guna.sounds())),
            vriddhi_form: Some(render(&vriddhi.sounds())),
            explanation: format!(
                "upadha {} is an ik vowel: guna {}, vriddhi {}",
                render(&[sound]),
                render(&guna.sounds()),
                render(&vriddhi.sounds())
            ),
            reason: None,
        }
    }

    fn root_candidacy(&self, word: &Word, ctx: &UpadhaContext) -> RootCandidacy {
        match ctx.is_dhatu {
            Some(true) => RootCandidacy::Asserted,
            Some(false) => RootCandidacy::Rejected,
            None if word.len() <= self.config.root_candidate_max_len => {
                log::warn!(
                    "treating {:?} as a verbal root by length ({} <= {})",
                    word.as_str(),
                    word.len(),
                    self.config.root_candidate_max_len
                );
                RootCandidacy::Heuristic
            }
            None => RootCandidacy::Rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn with_resolver<F: FnOnce(GradationResolver)>(f: F) {
        let tables = PhonemeTables::new();
        let config = EngineConfig::default();
        f(GradationResolver::new(&tables, &config));
    }

    #[test]
    fn guna_and_vriddhi_of_ik_vowels() {
        with_resolver(|r| {
            assert_eq!(r.guna_str("i"), "e");
            assert_eq!(r.guna_str("ī"), "e");
            assert_eq!(r.guna_str("u"), "o");
            assert_eq!(r.guna_str("ṛ"), "ar");
            assert_eq!(r.guna_str("ḷ"), "al");
            assert_eq!(r.vriddhi_str("i"), "ai");
            assert_eq!(r.vriddhi_str("u"), "au");
            assert_eq!(r.vriddhi_str("ṛ"), "ār");
            assert_eq!(r.vriddhi_str("ḹ"), "āl");
        });
    }

    #[test]
    fn devanagari_grades() {
        with_resolver(|r| {
            assert_eq!(r.guna_str("इ"), "ए");
            assert_eq!(r.guna_str("ऋ"), "अर्");
            assert_eq!(r.vriddhi_str("ऊ"), "औ");
            assert_eq!(r.vriddhi_str("ॠ"), "आर्");
        });
    }

    #[test]
    fn identity_outside_ik() {
        with_resolver(|r| {
            assert_eq!(r.guna_str("a"), "a");
            assert_eq!(r.guna_str("e"), "e");
            assert_eq!(r.vriddhi_str("k"), "k");
            assert_eq!(r.guna_str("ki"), "ki");
            assert_eq!(r.guna_str(""), "");
            assert_eq!(r.guna(Sound::Au), GradeForm::bare(Sound::Au));
        });
    }

    #[test]
    fn analyze_kr() {
        with_resolver(|r| {
            let analysis = r.analyze_upadha("kṛ", &UpadhaContext::new());
            assert!(analysis.applies);
            assert!(analysis.has_ik_upadha);
            assert_eq!(analysis.candidacy, RootCandidacy::Heuristic);
            assert_eq!(analysis.upadha.as_deref(), Some("ṛ"));
            assert_eq!(analysis.ik_class, Some(IkClass::R));
            assert_eq!(analysis.guna_form.as_deref(), Some("ar"));
            assert_eq!(analysis.vriddhi_form.as_deref(), Some("ār"));
        });
    }

    #[test]
    fn analyze_consonant_final_roots() {
        with_resolver(|r| {
            let analysis = r.analyze_upadha("budh", &UpadhaContext::new().dhatu(true));
            assert_eq!(analysis.candidacy, RootCandidacy::Asserted);
            assert_eq!(analysis.upadha.as_deref(), Some("u"));
            assert_eq!(analysis.guna_form.as_deref(), Some("o"));
            assert!(analysis.is_light);

            let analysis = r.analyze_upadha("jīv", &UpadhaContext::new().dhatu(true));
            assert!(analysis.has_ik_upadha);
            assert!(!analysis.is_light);

            let analysis = r.analyze_upadha("pat", &UpadhaContext::new());
            assert!(analysis.applies);
            assert!(!analysis.has_ik_upadha);
            assert_eq!(analysis.upadha.as_deref(), Some("a"));
            assert!(analysis.guna_form.is_none());
        });
    }

    #[test]
    fn candidacy() {
        with_resolver(|r| {
            let long = r.analyze_upadha("devadatta", &UpadhaContext::new());
            assert_eq!(long.candidacy, RootCandidacy::Rejected);
            assert!(!long.applies);

            let asserted = r.analyze_upadha("devadatta", &UpadhaContext::new().dhatu(true));
            assert_eq!(asserted.candidacy, RootCandidacy::Asserted);

            let denied = r.analyze_upadha("kṛ", &UpadhaContext::new().dhatu(false));
            assert_eq!(denied.candidacy, RootCandidacy::Rejected);
            assert!(!denied.has_ik_upadha);
        });
    }

    #[test]
    fn invalid_input_is_reported_not_raised() {
        with_resolver(|r| {
            let analysis = r.analyze_upadha("   ", &UpadhaContext::new());
            assert!(!analysis.applies);
            assert!(analysis.reason.is_some());
        });
    }

    #[test]
    fn devanagari_root() {
        with_resolver(|r| {
            let analysis = r.analyze_upadha("कृ", &UpadhaContext::new().dhatu(true));
            assert_eq!(analysis.upadha.as_deref(), Some("ऋ"));
            assert_eq!(analysis.guna_form.as_deref(), Some("अर्"));
        });
    }

    proptest! {
        #[test]
        fn grades_are_total_over_ik(ik in proptest::sample::select(Sound::IK.to_vec())) {
            let tables = PhonemeTables::new();
            prop_assert!(tables.gradation().guna(ik).is_some());
            prop_assert!(tables.gradation().vriddhi(ik).is_some());
        }

        #[test]
        fn short_and_long_collapse(class in proptest::sample::select(vec![IkClass::I, IkClass::U, IkClass::R, IkClass::L])) {
            let tables = PhonemeTables::new();
            let config = EngineConfig::default();
            let r = GradationResolver::new(&tables, &config);
            let short = class.short();
            let long = short.long_counterpart().unwrap();

            prop_assert_eq!(r.guna(short), r.guna(long));
            prop_assert_eq!(r.vriddhi(short), r.vriddhi(long));
        }
    }
}
