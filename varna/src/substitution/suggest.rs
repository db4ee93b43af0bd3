//! Replacement suggestions per morphological process.
//!
//! Rows are tried in order and the first whose process and predicate match
//! wins, so more specific rows come before general ones.

use crate::context::Process;
use crate::phoneme::{GradationTable, Sound};

pub struct SuggestionRule {
    pub name: &'static str,
    pub process: Process,
    pub matches: fn(Sound) -> bool,
    pub replace: fn(&GradationTable, Sound) -> Vec<Sound>,
}

fn is_short_i_or_u(s: Sound) -> bool {
    matches!(s, Sound::I | Sound::U)
}

fn guna(table: &GradationTable, s: Sound) -> Vec<Sound> {
    table.guna(s).map(|g| g.sounds()).unwrap_or_else(|| vec![s])
}

fn vriddhi_of_vowel(table: &GradationTable, s: Sound) -> Vec<Sound> {
    match s {
        Sound::A | Sound::Aa => vec![Sound::Aa],
        Sound::E | Sound::Ai => vec![Sound::Ai],
        Sound::O | Sound::Au => vec![Sound::Au],
        _ => table.vriddhi(s).map(|g| g.sounds()).unwrap_or_else(|| vec![s]),
    }
}

fn semivowel(_: &GradationTable, s: Sound) -> Vec<Sound> {
    match s {
        Sound::I | Sound::Ii => vec![Sound::Y],
        Sound::U | Sound::Uu => vec![Sound::V],
        Sound::VocalicR | Sound::VocalicRr => vec![Sound::R],
        Sound::VocalicL | Sound::VocalicLl => vec![Sound::L],
        _ => vec![s],
    }
}

pub static SUGGESTION_RULES: &[SuggestionRule] = &[
    SuggestionRule {
        name: "declension/vocalic-r-guna",
        process: Process::Declension,
        matches: Sound::is_vocalic_r,
        replace: guna,
    },
    SuggestionRule {
        name: "declension/i-u-guna",
        process: Process::Declension,
        matches: is_short_i_or_u,
        replace: guna,
    },
    SuggestionRule {
        name: "conjugation/final-ik-guna",
        process: Process::Conjugation,
        matches: Sound::is_ik,
        replace: guna,
    },
    SuggestionRule {
        name: "derivation/final-vowel-vriddhi",
        process: Process::Derivation,
        matches: Sound::is_vowel,
        replace: vriddhi_of_vowel,
    },
    SuggestionRule {
        name: "sandhi/ik-to-semivowel",
        process: Process::Sandhi,
        matches: Sound::is_ik,
        replace: semivowel,
    },
];

/// First matching row for `terminal` under `process`, with its replacement.
pub fn suggest(
    table: &GradationTable,
    process: Process,
    terminal: Sound,
) -> Option<(&'static SuggestionRule, Vec<Sound>)> {
    SUGGESTION_RULES
        .iter()
        .find(|rule| rule.process == process && (rule.matches)(terminal))
        .map(|rule| (rule, (rule.replace)(table, terminal)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phoneme::PhonemeTables;

    fn names(process: Process, terminal: Sound) -> Option<(&'static str, Vec<Sound>)> {
        let tables = PhonemeTables::new();
        suggest(tables.gradation(), process, terminal).map(|(rule, s)| (rule.name, s))
    }

    #[test]
    fn declension_prefers_the_specific_row() {
        assert_eq!(
            names(Process::Declension, Sound::VocalicR),
            Some(("declension/vocalic-r-guna", vec![Sound::A, Sound::R]))
        );
        assert_eq!(
            names(Process::Declension, Sound::I),
            Some(("declension/i-u-guna", vec![Sound::E]))
        );
        assert_eq!(names(Process::Declension, Sound::Ii), None);
    }

    #[test]
    fn other_processes() {
        assert_eq!(names(Process::Conjugation, Sound::Uu).map(|x| x.1), Some(vec![Sound::O]));
        assert_eq!(names(Process::Derivation, Sound::A).map(|x| x.1), Some(vec![Sound::Aa]));
        assert_eq!(names(Process::Derivation, Sound::O).map(|x| x.1), Some(vec![Sound::Au]));
        assert_eq!(
            names(Process::Derivation, Sound::VocalicR).map(|x| x.1),
            Some(vec![Sound::Aa, Sound::R])
        );
        assert_eq!(names(Process::Sandhi, Sound::I).map(|x| x.1), Some(vec![Sound::Y]));
        assert_eq!(names(Process::Sandhi, Sound::VocalicRr).map(|x| x.1), Some(vec![Sound::R]));
        assert_eq!(names(Process::Sandhi, Sound::K), None);
        assert_eq!(names(Process::General, Sound::I), None);
    }

    #[test]
    fn rule_names_are_unique() {
        let mut names: Vec<&str> = SUGGESTION_RULES.iter().map(|r| r.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SUGGESTION_RULES.len());
    }
}
