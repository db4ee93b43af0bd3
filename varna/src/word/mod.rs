//! Segmentation of a word into phonemes, and the positions rules look at.

use std::ops::Range;

use serde::Serialize;
use smol_str::SmolStr;
use unic_normal::StrNormalForm;

use crate::constants::VIRAMA;
use crate::error::EngineError;
use crate::phoneme::tables::{Entry, Form, ScriptTable};
use crate::phoneme::{Phoneme, PhonemeTables, Sound};
use crate::script;
use crate::types::Script;

/// How a segment appears in the surface string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Written {
    /// Its own grapheme.
    Letter,
    /// A Devanagari vowel sign on the preceding consonant.
    Sign,
    /// The unwritten `a` of a Devanagari consonant. Its span is empty.
    Inherent,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub phoneme: Phoneme,
    /// Byte range in the normalized text.
    pub span: Range<usize>,
    pub written: Written,
}

impl Segment {
    #[inline(always)]
    pub fn sound(&self) -> Sound {
        self.phoneme.sound()
    }
}

/// Which segment counts as the upadha.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpadhaMode {
    /// Always the second-to-last segment.
    Penultimate,
    /// As `Penultimate`, except a trailing ik vowel is its own upadha.
    VerbalRoot,
}

/// A word read into phonemes. Never mutated; transformations render a new
/// string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    text: SmolStr,
    script: Script,
    segments: Vec<Segment>,
}

impl Word {
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline(always)]
    pub fn script(&self) -> Script {
        self.script
    }

    #[inline(always)]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn sounds(&self) -> Vec<Sound> {
        self.segments.iter().map(Segment::sound).collect()
    }

    #[inline(always)]
    pub fn initial(&self) -> Option<&Segment> {
        self.segments.first()
    }

    /// The final segment.
    #[inline(always)]
    pub fn terminal(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// Index and segment of the upadha.
    ///
    /// Words of fewer than two segments have none. In
    /// [`UpadhaMode::VerbalRoot`] a final ik vowel is returned in place of
    /// the true penultimate: for roots like kṛ, ci, yu the trailing vowel,
    /// not the consonant before it, is what gradation targets.
    pub fn upadha(&self, mode: UpadhaMode) -> Option<(usize, &Segment)> {
        let len = self.segments.len();
        if len < 2 {
            return None;
        }

        let last = &self.segments[len - 1];
        if mode == UpadhaMode::VerbalRoot && last.phoneme.is_ik() {
            return Some((len - 1, last));
        }

        Some((len - 2, &self.segments[len - 2]))
    }

    /// True if the word's final sounds are `suffix`.
    pub fn ends_with(&self, suffix: &[Sound]) -> bool {
        self.segments.len() >= suffix.len()
            && self.segments[self.segments.len() - suffix.len()..]
                .iter()
                .zip(suffix)
                .all(|(seg, s)| seg.sound() == *s)
    }

    /// Sounds with the final one replaced by `replacement`.
    pub fn with_terminal(&self, replacement: &[Sound]) -> Vec<Sound> {
        let mut sounds = self.sounds();
        sounds.pop();
        sounds.extend_from_slice(replacement);
        sounds
    }
}

/// Reads words against the phoneme tables.
#[derive(Clone, Copy, Debug)]
pub struct Segmenter<'t> {
    tables: &'t PhonemeTables,
    normalize_case: bool,
}

impl<'t> Segmenter<'t> {
    pub fn new(tables: &'t PhonemeTables, normalize_case: bool) -> Segmenter<'t> {
        Segmenter {
            tables,
            normalize_case,
        }
    }

    /// Segments `word`, using `hint` as its script if given.
    pub fn segment(&self, word: &str, hint: Option<Script>) -> Result<Word, EngineError> {
        let script = script::resolve(word, hint)?;
        let text = self.normalize(word.trim(), script);
        let table = self.tables.table(script);

        let segments = match script {
            Script::Iast => segment_iast(table, &text)?,
            Script::Devanagari => segment_devanagari(table, &text)?,
        };

        log::trace!("segmented {:?} into {} phonemes", text, segments.len());

        Ok(Word {
            text,
            script,
            segments,
        })
    }

    fn normalize(&self, word: &str, script: Script) -> SmolStr {
        let nfc = word.nfc().collect::<String>();

        if self.normalize_case && script == Script::Iast {
            nfc.to_lowercase().into()
        } else {
            nfc.into()
        }
    }
}

/// Greedy longest match: digraphs and diphthongs are never split while a
/// longer grapheme fits.
fn segment_iast(table: &ScriptTable, text: &str) -> Result<Vec<Segment>, EngineError> {
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_count = boundaries.len() - 1;

    let mut segments = Vec::with_capacity(char_count);
    let mut pos = 0;

    while pos < char_count {
        let longest = table.longest_grapheme().min(char_count - pos);

        let found = (1..=longest).rev().find_map(|n| {
            let span = boundaries[pos]..boundaries[pos + n];
            table.lookup(&text[span.clone()]).map(|entry| (n, span, entry))
        });

        match found {
            Some((n, span, entry)) => {
                log::trace!("iast {:?} -> {:?}", &text[span.clone()], entry.sound);
                segments.push(Segment {
                    phoneme: Phoneme::new(entry.sound, Script::Iast),
                    span,
                    written: Written::Letter,
                });
                pos += n;
            }
            None => return Err(unrecognized(text, boundaries[pos])),
        }
    }

    Ok(segments)
}

fn segment_devanagari(table: &ScriptTable, text: &str) -> Result<Vec<Segment>, EngineError> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let end_of = |i: usize| chars.get(i + 1).map(|(o, _)| *o).unwrap_or(text.len());
    let lookup = |i: usize| -> Option<Entry> {
        let (offset, _) = chars[i];
        table.lookup(&text[offset..end_of(i)])
    };

    let mut segments = Vec::with_capacity(chars.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let (offset, ch) = chars[i];

        let entry = match lookup(i) {
            Some(entry) if entry.form == Form::Letter => entry,
            _ => return Err(EngineError::UnrecognizedGrapheme { grapheme: ch, offset }),
        };

        let mut span = offset..end_of(i);
        i += 1;

        segments.push(Segment {
            phoneme: Phoneme::new(entry.sound, Script::Devanagari),
            span: span.clone(),
            written: Written::Letter,
        });

        if !entry.sound.takes_inherent_vowel() {
            continue;
        }

        // A consonant is closed by a virama, carries a vowel sign, or keeps
        // its inherent a.
        match chars.get(i) {
            Some(&(_, VIRAMA)) => {
                span.end = end_of(i);
                if let Some(last) = segments.last_mut() {
                    last.span = span;
                }
                i += 1;
            }
            Some(&(sign_offset, _)) if lookup(i).map(|e| e.form) == Some(Form::Sign) => {
                if let Some(sign) = lookup(i) {
                    segments.push(Segment {
                        phoneme: Phoneme::new(sign.sound, Script::Devanagari),
                        span: sign_offset..end_of(i),
                        written: Written::Sign,
                    });
                }
                i += 1;
            }
            _ => {
                segments.push(Segment {
                    phoneme: Phoneme::new(Sound::A, Script::Devanagari),
                    span: span.end..span.end,
                    written: Written::Inherent,
                });
            }
        }
    }

    Ok(segments)
}

fn unrecognized(text: &str, offset: usize) -> EngineError {
    let grapheme = text[offset..].chars().next().unwrap_or_default();
    EngineError::UnrecognizedGrapheme { grapheme, offset }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sounds(word: &str) -> Vec<Sound> {
        let tables = PhonemeTables::new();
        Segmenter::new(&tables, true)
            .segment(word, None)
            .unwrap()
            .sounds()
    }

    #[test]
    fn greedy_iast() {
        assert_eq!(sounds("kṛ"), vec![Sound::K, Sound::VocalicR]);
        assert_eq!(sounds("bhāvaḥ"), vec![Sound::Bh, Sound::Aa, Sound::V, Sound::A, Sound::Visarga]);
        assert_eq!(sounds("kaiṭabha"), vec![Sound::K, Sound::Ai, Sound::Tt, Sound::A, Sound::Bh, Sound::A]);
        assert_eq!(sounds("gauḥ"), vec![Sound::G, Sound::Au, Sound::Visarga]);
    }

    #[test]
    fn iast_is_normalized() {
        assert_eq!(sounds("ra\u{0304}ma"), sounds("rāma"));
        assert_eq!(sounds("Rāma"), sounds("rāma"));
        assert_eq!(sounds("saṁskṛta"), sounds("saṃskṛta"));
    }

    #[test]
    fn devanagari_inherent_vowel_and_virama() {
        assert_eq!(sounds("देव"), vec![Sound::D, Sound::E, Sound::V, Sound::A]);
        assert_eq!(sounds("देवा"), vec![Sound::D, Sound::E, Sound::V, Sound::Aa]);
        assert_eq!(sounds("बुध्"), vec![Sound::B, Sound::U, Sound::Dh]);
        assert_eq!(sounds("कृ"), vec![Sound::K, Sound::VocalicR]);
        assert_eq!(sounds("क्ष"), vec![Sound::K, Sound::Ss, Sound::A]);
        assert_eq!(sounds("इति"), vec![Sound::I, Sound::T, Sound::I]);
        assert_eq!(sounds("रामः"), vec![Sound::R, Sound::Aa, Sound::M, Sound::A, Sound::Visarga]);
    }

    #[test]
    fn spans_point_into_the_text() {
        let tables = PhonemeTables::new();
        let word = Segmenter::new(&tables, true).segment("देवा", None).unwrap();
        let last = word.terminal().unwrap();

        assert_eq!(last.written, Written::Sign);
        assert_eq!(&word.as_str()[last.span.clone()], "ा");

        let word = Segmenter::new(&tables, true).segment("देव", None).unwrap();
        let last = word.terminal().unwrap();
        assert_eq!(last.written, Written::Inherent);
        assert!(last.span.is_empty());
    }

    #[test]
    fn rejects_unknown_graphemes() {
        let tables = PhonemeTables::new();
        let segmenter = Segmenter::new(&tables, true);

        assert!(matches!(
            segmenter.segment("kxa", None),
            Err(EngineError::UnrecognizedGrapheme { grapheme: 'x', offset: 1 })
        ));
        assert!(matches!(
            segmenter.segment("ा", None),
            Err(EngineError::UnrecognizedGrapheme { .. })
        ));
        assert!(matches!(segmenter.segment("", None), Err(EngineError::EmptyInput)));
    }

    #[test]
    fn positions() {
        let tables = PhonemeTables::new();
        let segmenter = Segmenter::new(&tables, true);

        let word = segmenter.segment("bhid", None).unwrap();
        assert_eq!(word.initial().unwrap().sound(), Sound::Bh);
        assert_eq!(word.terminal().unwrap().sound(), Sound::D);
        assert_eq!(word.upadha(UpadhaMode::Penultimate).unwrap().1.sound(), Sound::I);
        assert_eq!(word.upadha(UpadhaMode::VerbalRoot).unwrap().1.sound(), Sound::I);
    }

    #[test]
    fn verbal_root_upadha_is_the_final_ik() {
        let tables = PhonemeTables::new();
        let segmenter = Segmenter::new(&tables, true);

        let word = segmenter.segment("kṛ", None).unwrap();
        assert_eq!(word.upadha(UpadhaMode::Penultimate).unwrap().1.sound(), Sound::K);
        let (index, seg) = word.upadha(UpadhaMode::VerbalRoot).unwrap();
        assert_eq!((index, seg.sound()), (1, Sound::VocalicR));

        let word = segmenter.segment("i", None).unwrap();
        assert!(word.upadha(UpadhaMode::VerbalRoot).is_none());
    }

    #[test]
    fn ends_with_and_splice() {
        let tables = PhonemeTables::new();
        let word = Segmenter::new(&tables, true).segment("citrago", None).unwrap();

        assert!(word.ends_with(&[Sound::G, Sound::O]));
        assert!(!word.ends_with(&[Sound::K, Sound::O]));
        assert_eq!(
            tables.render(&word.with_terminal(&[Sound::U]), Script::Iast),
            "citragu"
        );
    }
}
