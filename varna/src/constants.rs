pub const VIRAMA: char = '\u{094D}';

/// Longest grapheme, in chars, found in either script table.
pub const MAX_GRAPHEME_CHARS: usize = 2;

pub const DEFAULT_ROOT_CANDIDATE_MAX_LEN: usize = 5;

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]
    use super::*;

    #[test]
    fn test_MAX_GRAPHEME_CHARS() {
        use crate::phoneme::tables::{DEVANAGARI_TABLE, IAST_ALIASES, IAST_TABLE};

        let longest = IAST_TABLE
            .iter()
            .map(|(g, _)| g)
            .chain(IAST_ALIASES.iter().map(|(g, _)| g))
            .chain(DEVANAGARI_TABLE.iter().map(|(g, _, _)| g))
            .map(|g| g.chars().count())
            .max()
            .unwrap_or(0);

        assert!(MAX_GRAPHEME_CHARS == longest);
    }

    #[test]
    fn test_VIRAMA() {
        assert_eq!(VIRAMA.to_string(), "्");
    }
}
