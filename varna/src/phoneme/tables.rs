//! Grapheme tables for IAST and Devanagari, and the gradation maps.
//!
//! The two script tables are written out independently. Their one-to-one
//! correspondence over [`Sound::ALL`] is checked by the tests at the bottom
//! of this file rather than derived from a shared source.

use hashbrown::HashMap;

use super::{GradeForm, Sound};
use crate::constants::{MAX_GRAPHEME_CHARS, VIRAMA};
use crate::types::Script;

/// How a Devanagari grapheme is written relative to a consonant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Form {
    /// Stand-alone letter (consonant, independent vowel, anusvāra, visarga).
    Letter,
    /// Dependent vowel sign (mātrā) attached to a preceding consonant.
    Sign,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Entry {
    pub sound: Sound,
    pub form: Form,
}

pub(crate) static IAST_TABLE: &[(&str, Sound)] = &[
    ("a", Sound::A),
    ("ā", Sound::Aa),
    ("i", Sound::I),
    ("ī", Sound::Ii),
    ("u", Sound::U),
    ("ū", Sound::Uu),
    ("ṛ", Sound::VocalicR),
    ("ṝ", Sound::VocalicRr),
    ("ḷ", Sound::VocalicL),
    ("ḹ", Sound::VocalicLl),
    ("e", Sound::E),
    ("ai", Sound::Ai),
    ("o", Sound::O),
    ("au", Sound::Au),
    ("k", Sound::K),
    ("kh", Sound::Kh),
    ("g", Sound::G),
    ("gh", Sound::Gh),
    ("ṅ", Sound::Ng),
    ("c", Sound::C),
    ("ch", Sound::Ch),
    ("j", Sound::J),
    ("jh", Sound::Jh),
    ("ñ", Sound::Ny),
    ("ṭ", Sound::Tt),
    ("ṭh", Sound::Tth),
    ("ḍ", Sound::Dd),
    ("ḍh", Sound::Ddh),
    ("ṇ", Sound::Nn),
    ("t", Sound::T),
    ("th", Sound::Th),
    ("d", Sound::D),
    ("dh", Sound::Dh),
    ("n", Sound::N),
    ("p", Sound::P),
    ("ph", Sound::Ph),
    ("b", Sound::B),
    ("bh", Sound::Bh),
    ("m", Sound::M),
    ("y", Sound::Y),
    ("r", Sound::R),
    ("l", Sound::L),
    ("v", Sound::V),
    ("ś", Sound::Sh),
    ("ṣ", Sound::Ss),
    ("s", Sound::S),
    ("h", Sound::H),
    ("ṃ", Sound::Anusvara),
    ("ḥ", Sound::Visarga),
];

/// Accepted on input. Only the hiatus forms are ever written back.
pub(crate) static IAST_ALIASES: &[(&str, Sound)] = &[
    ("ṁ", Sound::Anusvara),
    ("ï", Sound::I),
    ("ü", Sound::U),
];

/// Short i or u written after a, where plain letters would read as a diphthong.
const IAST_HIATUS: &[(Sound, &str)] = &[(Sound::I, "ï"), (Sound::U, "ü")];

pub(crate) static DEVANAGARI_TABLE: &[(&str, Sound, Form)] = &[
    ("अ", Sound::A, Form::Letter),
    ("आ", Sound::Aa, Form::Letter),
    ("इ", Sound::I, Form::Letter),
    ("ई", Sound::Ii, Form::Letter),
    ("उ", Sound::U, Form::Letter),
    ("ऊ", Sound::Uu, Form::Letter),
    ("ऋ", Sound::VocalicR, Form::Letter),
    ("ॠ", Sound::VocalicRr, Form::Letter),
    ("ऌ", Sound::VocalicL, Form::Letter),
    ("ॡ", Sound::VocalicLl, Form::Letter),
    ("ए", Sound::E, Form::Letter),
    ("ऐ", Sound::Ai, Form::Letter),
    ("ओ", Sound::O, Form::Letter),
    ("औ", Sound::Au, Form::Letter),
    ("ा", Sound::Aa, Form::Sign),
    ("ि", Sound::I, Form::Sign),
    ("ी", Sound::Ii, Form::Sign),
    ("ु", Sound::U, Form::Sign),
    ("ू", Sound::Uu, Form::Sign),
    ("ृ", Sound::VocalicR, Form::Sign),
    ("ॄ", Sound::VocalicRr, Form::Sign),
    ("ॢ", Sound::VocalicL, Form::Sign),
    ("ॣ", Sound::VocalicLl, Form::Sign),
    ("े", Sound::E, Form::Sign),
    ("ै", Sound::Ai, Form::Sign),
    ("ो", Sound::O, Form::Sign),
    ("ौ", Sound::Au, Form::Sign),
    ("क", Sound::K, Form::Letter),
    ("ख", Sound::Kh, Form::Letter),
    ("ग", Sound::G, Form::Letter),
    ("घ", Sound::Gh, Form::Letter),
    ("ङ", Sound::Ng, Form::Letter),
    ("च", Sound::C, Form::Letter),
    ("छ", Sound::Ch, Form::Letter),
    ("ज", Sound::J, Form::Letter),
    ("झ", Sound::Jh, Form::Letter),
    ("ञ", Sound::Ny, Form::Letter),
    ("ट", Sound::Tt, Form::Letter),
    ("ठ", Sound::Tth, Form::Letter),
    ("ड", Sound::Dd, Form::Letter),
    ("ढ", Sound::Ddh, Form::Letter),
    ("ण", Sound::Nn, Form::Letter),
    ("त", Sound::T, Form::Letter),
    ("थ", Sound::Th, Form::Letter),
    ("द", Sound::D, Form::Letter),
    ("ध", Sound::Dh, Form::Letter),
    ("न", Sound::N, Form::Letter),
    ("प", Sound::P, Form::Letter),
    ("फ", Sound::Ph, Form::Letter),
    ("ब", Sound::B, Form::Letter),
    ("भ", Sound::Bh, Form::Letter),
    ("म", Sound::M, Form::Letter),
    ("य", Sound::Y, Form::Letter),
    ("र", Sound::R, Form::Letter),
    ("ल", Sound::L, Form::Letter),
    ("व", Sound::V, Form::Letter),
    ("श", Sound::Sh, Form::Letter),
    ("ष", Sound::Ss, Form::Letter),
    ("स", Sound::S, Form::Letter),
    ("ह", Sound::H, Form::Letter),
    ("ं", Sound::Anusvara, Form::Letter),
    ("ः", Sound::Visarga, Form::Letter),
];

static GUNA: [(Sound, GradeForm); 8] = [
    (Sound::I, GradeForm::bare(Sound::E)),
    (Sound::Ii, GradeForm::bare(Sound::E)),
    (Sound::U, GradeForm::bare(Sound::O)),
    (Sound::Uu, GradeForm::bare(Sound::O)),
    (Sound::VocalicR, GradeForm::with_coda(Sound::A, Sound::R)),
    (Sound::VocalicRr, GradeForm::with_coda(Sound::A, Sound::R)),
    (Sound::VocalicL, GradeForm::with_coda(Sound::A, Sound::L)),
    (Sound::VocalicLl, GradeForm::with_coda(Sound::A, Sound::L)),
];

static VRIDDHI: [(Sound, GradeForm); 8] = [
    (Sound::I, GradeForm::bare(Sound::Ai)),
    (Sound::Ii, GradeForm::bare(Sound::Ai)),
    (Sound::U, GradeForm::bare(Sound::Au)),
    (Sound::Uu, GradeForm::bare(Sound::Au)),
    (Sound::VocalicR, GradeForm::with_coda(Sound::Aa, Sound::R)),
    (Sound::VocalicRr, GradeForm::with_coda(Sound::Aa, Sound::R)),
    (Sound::VocalicL, GradeForm::with_coda(Sound::Aa, Sound::L)),
    (Sound::VocalicLl, GradeForm::with_coda(Sound::Aa, Sound::L)),
];

// Diphthongs take i/u as their short substitutes.
static LONG_TO_SHORT: [(Sound, Sound); 9] = [
    (Sound::Aa, Sound::A),
    (Sound::Ii, Sound::I),
    (Sound::Uu, Sound::U),
    (Sound::VocalicRr, Sound::VocalicR),
    (Sound::VocalicLl, Sound::VocalicL),
    (Sound::E, Sound::I),
    (Sound::O, Sound::U),
    (Sound::Ai, Sound::I),
    (Sound::Au, Sound::U),
];

/// Grapheme lookup for one script.
#[derive(Debug)]
pub struct ScriptTable {
    script: Script,
    by_grapheme: HashMap<&'static str, Entry>,
    letters: HashMap<Sound, &'static str>,
    signs: HashMap<Sound, &'static str>,
    longest: usize,
}

impl ScriptTable {
    fn iast() -> ScriptTable {
        let mut table = ScriptTable::empty(Script::Iast);

        for &(grapheme, sound) in IAST_TABLE.iter() {
            table.insert(grapheme, sound, Form::Letter);
        }

        for &(grapheme, sound) in IAST_ALIASES.iter() {
            table.by_grapheme.insert(
                grapheme,
                Entry {
                    sound,
                    form: Form::Letter,
                },
            );
        }

        table
    }

    fn devanagari() -> ScriptTable {
        let mut table = ScriptTable::empty(Script::Devanagari);

        for &(grapheme, sound, form) in DEVANAGARI_TABLE.iter() {
            table.insert(grapheme, sound, form);
        }

        table
    }

    fn empty(script: Script) -> ScriptTable {
        ScriptTable {
            script,
            by_grapheme: HashMap::new(),
            letters: HashMap::new(),
            signs: HashMap::new(),
            longest: 0,
        }
    }

    fn insert(&mut self, grapheme: &'static str, sound: Sound, form: Form) {
        debug_assert!(grapheme.chars().count() <= MAX_GRAPHEME_CHARS);
        self.by_grapheme.insert(grapheme, Entry { sound, form });
        match form {
            Form::Letter => self.letters.insert(sound, grapheme),
            Form::Sign => self.signs.insert(sound, grapheme),
        };
        self.longest = self.longest.max(grapheme.chars().count());
    }

    #[inline(always)]
    pub fn script(&self) -> Script {
        self.script
    }

    #[inline(always)]
    pub fn lookup(&self, grapheme: &str) -> Option<Entry> {
        self.by_grapheme.get(grapheme).copied()
    }

    /// Independent form of `sound`. Every sound has one in both scripts.
    #[inline(always)]
    pub fn letter(&self, sound: Sound) -> &'static str {
        self.letters.get(&sound).copied().unwrap_or("")
    }

    /// Dependent vowel sign, Devanagari only. Short `a` has none.
    #[inline(always)]
    pub fn sign(&self, sound: Sound) -> Option<&'static str> {
        self.signs.get(&sound).copied()
    }

    /// Length in chars of the longest grapheme, bounding the greedy scan.
    #[inline(always)]
    pub fn longest_grapheme(&self) -> usize {
        self.longest
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Writes a sound sequence out in this table's script.
    ///
    /// Devanagari output attaches vowels to a preceding consonant as signs,
    /// leaves short `a` implicit, and closes a vowelless consonant with a
    /// virama.
    pub fn render(&self, sounds: &[Sound]) -> String {
        match self.script {
            Script::Iast => self.render_iast(sounds),
            Script::Devanagari => self.render_devanagari(sounds),
        }
    }

    fn render_iast(&self, sounds: &[Sound]) -> String {
        let mut out = String::new();
        let mut previous = None;

        for &sound in sounds {
            let hiatus = match previous {
                Some(Sound::A) => IAST_HIATUS.iter().find(|(s, _)| *s == sound).map(|(_, g)| *g),
                _ => None,
            };
            out.push_str(hiatus.unwrap_or_else(|| self.letter(sound)));
            previous = Some(sound);
        }

        out
    }

    fn render_devanagari(&self, sounds: &[Sound]) -> String {
        let mut out = String::new();
        let mut open_consonant = false;

        for &sound in sounds {
            if sound.is_vowel() {
                if open_consonant {
                    if let Some(sign) = self.sign(sound) {
                        out.push_str(sign);
                    }
                    open_consonant = false;
                } else {
                    out.push_str(self.letter(sound));
                }
                continue;
            }

            if open_consonant {
                out.push(VIRAMA);
            }
            out.push_str(self.letter(sound));
            open_consonant = sound.takes_inherent_vowel();
        }

        if open_consonant {
            out.push(VIRAMA);
        }

        out
    }
}

/// Guṇa, vṛddhi and long→short maps.
#[derive(Debug)]
pub struct GradationTable {
    guna: HashMap<Sound, GradeForm>,
    vriddhi: HashMap<Sound, GradeForm>,
    short: HashMap<Sound, Sound>,
}

impl GradationTable {
    fn new() -> GradationTable {
        GradationTable {
            guna: GUNA.iter().copied().collect(),
            vriddhi: VRIDDHI.iter().copied().collect(),
            short: LONG_TO_SHORT.iter().copied().collect(),
        }
    }

    /// Guṇa image of an ik vowel; `None` outside the ik set.
    #[inline(always)]
    pub fn guna(&self, sound: Sound) -> Option<GradeForm> {
        self.guna.get(&sound).copied()
    }

    /// Vṛddhi image of an ik vowel; `None` outside the ik set.
    #[inline(always)]
    pub fn vriddhi(&self, sound: Sound) -> Option<GradeForm> {
        self.vriddhi.get(&sound).copied()
    }

    #[inline(always)]
    pub fn map_long_to_short(&self, sound: Sound) -> Option<Sound> {
        self.short.get(&sound).copied()
    }
}

/// All static phonological data, built once and shared by reference.
#[derive(Debug)]
pub struct PhonemeTables {
    iast: ScriptTable,
    devanagari: ScriptTable,
    gradation: GradationTable,
}

impl PhonemeTables {
    pub fn new() -> PhonemeTables {
        let tables = PhonemeTables {
            iast: ScriptTable::iast(),
            devanagari: ScriptTable::devanagari(),
            gradation: GradationTable::new(),
        };

        log::debug!(
            "phoneme tables built: {} IAST, {} Devanagari letters",
            tables.iast.len(),
            tables.devanagari.len()
        );

        tables
    }

    #[inline(always)]
    pub fn table(&self, script: Script) -> &ScriptTable {
        match script {
            Script::Iast => &self.iast,
            Script::Devanagari => &self.devanagari,
        }
    }

    #[inline(always)]
    pub fn gradation(&self) -> &GradationTable {
        &self.gradation
    }

    #[inline(always)]
    pub fn render(&self, sounds: &[Sound], script: Script) -> String {
        self.table(script).render(sounds)
    }
}

impl Default for PhonemeTables {
    fn default() -> Self {
        PhonemeTables::new()
    }
}
