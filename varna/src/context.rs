//! Caller-supplied grammatical context.
//!
//! Each operation takes its own small context type. Enumerated flags parse
//! case-insensitively from the names higher-level rules use, and
//! contradictory combinations are rejected when the context is built, not
//! when a rule reads it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::Script;

/// Errors building a context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ContextError {
    /// A flag value is not one of the recognized names
    #[error("Unknown {field} {value:?}")]
    Unknown {
        /// name of the flag
        field: &'static str,
        /// text that failed to parse
        value: String,
    },

    /// Two flags cannot hold together
    #[error("Contradictory context: {0}")]
    Contradiction(&'static str),
}

macro_rules! named_enum {
    ($ty:ident, $field:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub fn name(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = ContextError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($name => Ok($ty::$variant),)+
                    _ => Err(ContextError::Unknown {
                        field: $field,
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Neuter,
    Masculine,
    Feminine,
}

named_enum!(Gender, "gender", {
    Neuter => "neuter",
    Masculine => "masculine",
    Feminine => "feminine",
});

/// Kind of complete affix elision in taddhita derivation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Elision {
    Luk,
    Lup,
}

named_enum!(Elision, "taddhita elision type", {
    Luk => "luk",
    Lup => "lup",
});

/// Morphological process a substitution is requested for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Process {
    Declension,
    Conjugation,
    Derivation,
    Sandhi,
    General,
}

named_enum!(Process, "morphological process", {
    Declension => "declension",
    Conjugation => "conjugation",
    Derivation => "derivation",
    Sandhi => "sandhi",
    General => "general",
});

impl Default for Process {
    fn default() -> Self {
        Process::General
    }
}

/// Context for [`analyze_upadha`](crate::gradation::GradationResolver::analyze_upadha).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpadhaContext {
    pub script: Option<Script>,
    /// Whether the word is known to be a verbal root. `None` falls back to
    /// the length heuristic.
    pub is_dhatu: Option<bool>,
}

impl UpadhaContext {
    pub fn new() -> UpadhaContext {
        UpadhaContext::default()
    }

    pub fn dhatu(mut self, is_dhatu: bool) -> UpadhaContext {
        self.is_dhatu = Some(is_dhatu);
        self
    }

    pub fn script(mut self, script: Script) -> UpadhaContext {
        self.script = Some(script);
        self
    }
}

/// Context for [`substitute`](crate::substitution::Substitutor::substitute).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionContext {
    pub script: Option<Script>,
    pub process: Process,
}

impl SubstitutionContext {
    pub fn new(process: Process) -> SubstitutionContext {
        SubstitutionContext {
            script: None,
            process,
        }
    }

    pub fn script(mut self, script: Script) -> SubstitutionContext {
        self.script = Some(script);
        self
    }
}

/// Context for [`shorten`](crate::shortening::Shortener::shorten). Build with
/// [`ShorteningContext::builder`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ShorteningContext {
    script: Option<Script>,
    gender: Option<Gender>,
    is_upasarjana: bool,
    is_feminine: bool,
    elision: Option<Elision>,
}

impl ShorteningContext {
    pub fn builder() -> ShorteningContextBuilder {
        ShorteningContextBuilder::default()
    }

    #[inline(always)]
    pub fn script(&self) -> Option<Script> {
        self.script
    }

    #[inline(always)]
    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    /// Subordinate member of a compound.
    #[inline(always)]
    pub fn is_upasarjana(&self) -> bool {
        self.is_upasarjana
    }

    /// Feminine gender or a feminine affix has been applied.
    #[inline(always)]
    pub fn is_feminine(&self) -> bool {
        self.is_feminine || self.gender == Some(Gender::Feminine)
    }

    #[inline(always)]
    pub fn elision(&self) -> Option<Elision> {
        self.elision
    }
}

#[derive(Clone, Debug, Default)]
pub struct ShorteningContextBuilder {
    script: Option<Script>,
    gender: Option<Gender>,
    is_upasarjana: bool,
    feminine_affix: bool,
    elision: Option<Elision>,
}

impl ShorteningContextBuilder {
    pub fn script(mut self, script: Script) -> Self {
        self.script = Some(script);
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn upasarjana(mut self, is_upasarjana: bool) -> Self {
        self.is_upasarjana = is_upasarjana;
        self
    }

    /// Marks that a feminine affix (ṭāp, ṅīp, ...) has been applied.
    pub fn feminine_affix(mut self, applied: bool) -> Self {
        self.feminine_affix = applied;
        self
    }

    pub fn elision(mut self, elision: Elision) -> Self {
        self.elision = Some(elision);
        self
    }

    pub fn build(self) -> Result<ShorteningContext, ContextError> {
        if self.feminine_affix {
            match self.gender {
                Some(Gender::Neuter) => {
                    return Err(ContextError::Contradiction(
                        "feminine affix on a neuter word",
                    ))
                }
                Some(Gender::Masculine) => {
                    return Err(ContextError::Contradiction(
                        "feminine affix on a masculine word",
                    ))
                }
                _ => {}
            }
        }

        Ok(ShorteningContext {
            script: self.script,
            gender: self.gender,
            is_upasarjana: self.is_upasarjana,
            is_feminine: self.feminine_affix,
            elision: self.elision,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Neuter".parse::<Gender>().unwrap(), Gender::Neuter);
        assert_eq!("LUK".parse::<Elision>().unwrap(), Elision::Luk);
        assert_eq!(" lup ".parse::<Elision>().unwrap(), Elision::Lup);
        assert_eq!("Sandhi".parse::<Process>().unwrap(), Process::Sandhi);
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "aluk".parse::<Elision>(),
            Err(ContextError::Unknown {
                field: "taddhita elision type",
                value: "aluk".into()
            })
        );
        assert!("common".parse::<Gender>().is_err());
        assert!("inflection".parse::<Process>().is_err());
    }

    #[test]
    fn rejects_contradictions() {
        let err = ShorteningContext::builder()
            .gender(Gender::Neuter)
            .feminine_affix(true)
            .build();
        assert!(matches!(err, Err(ContextError::Contradiction(_))));

        let ok = ShorteningContext::builder()
            .gender(Gender::Feminine)
            .feminine_affix(true)
            .build()
            .unwrap();
        assert!(ok.is_feminine());
    }

    #[test]
    fn feminine_gender_implies_feminine() {
        let ctx = ShorteningContext::builder()
            .gender(Gender::Feminine)
            .build()
            .unwrap();
        assert!(ctx.is_feminine());
        assert!(!ShorteningContext::default().is_feminine());
    }

    #[test]
    fn serde_names_match_parse_names() {
        assert_eq!(serde_json::to_string(&Process::Derivation).unwrap(), "\"derivation\"");
        assert_eq!(serde_json::to_string(&Elision::Lup).unwrap(), "\"lup\"");
    }
}
