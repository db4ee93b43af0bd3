use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::context::ContextError;

/// Writing system of a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Script {
    /// International Alphabet of Sanskrit Transliteration.
    #[serde(rename = "IAST")]
    Iast,
    /// Devanagari (U+0900 block).
    Devanagari,
}

impl Script {
    pub const ALL: [Script; 2] = [Script::Iast, Script::Devanagari];

    #[inline(always)]
    pub fn name(&self) -> &'static str {
        match self {
            Script::Iast => "IAST",
            Script::Devanagari => "Devanagari",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.name())
    }
}

impl FromStr for Script {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "iast" | "latin" => Ok(Script::Iast),
            "devanagari" | "deva" => Ok(Script::Devanagari),
            _ => Err(ContextError::Unknown {
                field: "script",
                value: s.into(),
            }),
        }
    }
}

/// Preview or commit switch shared by every transforming operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// When false only applicability is computed and no string is produced.
    pub transform: bool,
}

impl Options {
    pub const fn commit() -> Options {
        Options { transform: true }
    }

    pub const fn preview() -> Options {
        Options { transform: false }
    }
}

impl Default for Options {
    fn default() -> Self {
        Options::commit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_names_parse_back() {
        for script in Script::ALL.iter() {
            assert_eq!(script.name().parse::<Script>().unwrap(), *script);
        }
        assert_eq!("DEVA".parse::<Script>().unwrap(), Script::Devanagari);
        assert!("cyrillic".parse::<Script>().is_err());
    }

    #[test]
    fn options_default_commits() {
        assert!(Options::default().transform);
        assert!(!Options::preview().transform);
    }
}
