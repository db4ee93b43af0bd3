//! Sounds of Sanskrit and their articulatory and grade classification.
//!
//! A [`Sound`] is the script-independent identity of a phoneme. A
//! [`Phoneme`] pairs it with the [`Script`] it was read from, which is what
//! decides how it is written back out. The static tables mapping graphemes to
//! sounds live in [`tables`].

use serde::{Deserialize, Serialize};

use crate::types::Script;

pub mod tables;

pub use self::tables::{GradationTable, PhonemeTables, ScriptTable};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sound {
    A,
    Aa,
    I,
    Ii,
    U,
    Uu,
    VocalicR,
    VocalicRr,
    VocalicL,
    VocalicLl,
    E,
    Ai,
    O,
    Au,
    K,
    Kh,
    G,
    Gh,
    Ng,
    C,
    Ch,
    J,
    Jh,
    Ny,
    Tt,
    Tth,
    Dd,
    Ddh,
    Nn,
    T,
    Th,
    D,
    Dh,
    N,
    P,
    Ph,
    B,
    Bh,
    M,
    Y,
    R,
    L,
    V,
    Sh,
    Ss,
    S,
    H,
    Anusvara,
    Visarga,
}

/// Vowel length or diphthong status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    Short,
    Long,
    Diphthong,
}

/// Membership in the gradation series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradationClass {
    /// i, ī, u, ū, ṛ, ṝ, ḷ, ḹ
    Ik,
    /// a, e, o
    Guna,
    /// ā, ai, au
    Vriddhi,
    Other,
}

/// The four homorganic pairs of the ik set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IkClass {
    I,
    U,
    R,
    L,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Place {
    Velar,
    Palatal,
    Retroflex,
    Dental,
    Labial,
    Glottal,
    /// Anusvāra, articulated in the nose alone.
    Nasal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Manner {
    Stop,
    Nasal,
    Liquid,
    Sibilant,
    Semivowel,
    Fricative,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Voicing {
    Voiced,
    Voiceless,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VowelClass {
    pub grade: Grade,
    pub gradation: GradationClass,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConsonantClass {
    pub place: Place,
    pub manner: Manner,
    pub voicing: Voicing,
    pub aspirated: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Class {
    Vowel(VowelClass),
    Consonant(ConsonantClass),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Vowel,
    Consonant,
}

const fn vowel(grade: Grade, gradation: GradationClass) -> Class {
    Class::Vowel(VowelClass { grade, gradation })
}

const fn consonant(place: Place, manner: Manner, voicing: Voicing, aspirated: bool) -> Class {
    Class::Consonant(ConsonantClass {
        place,
        manner,
        voicing,
        aspirated,
    })
}

impl Sound {
    pub const ALL: [Sound; 49] = [
        Sound::A,
        Sound::Aa,
        Sound::I,
        Sound::Ii,
        Sound::U,
        Sound::Uu,
        Sound::VocalicR,
        Sound::VocalicRr,
        Sound::VocalicL,
        Sound::VocalicLl,
        Sound::E,
        Sound::Ai,
        Sound::O,
        Sound::Au,
        Sound::K,
        Sound::Kh,
        Sound::G,
        Sound::Gh,
        Sound::Ng,
        Sound::C,
        Sound::Ch,
        Sound::J,
        Sound::Jh,
        Sound::Ny,
        Sound::Tt,
        Sound::Tth,
        Sound::Dd,
        Sound::Ddh,
        Sound::Nn,
        Sound::T,
        Sound::Th,
        Sound::D,
        Sound::Dh,
        Sound::N,
        Sound::P,
        Sound::Ph,
        Sound::B,
        Sound::Bh,
        Sound::M,
        Sound::Y,
        Sound::R,
        Sound::L,
        Sound::V,
        Sound::Sh,
        Sound::Ss,
        Sound::S,
        Sound::H,
        Sound::Anusvara,
        Sound::Visarga,
    ];

    pub const IK: [Sound; 8] = [
        Sound::I,
        Sound::Ii,
        Sound::U,
        Sound::Uu,
        Sound::VocalicR,
        Sound::VocalicRr,
        Sound::VocalicL,
        Sound::VocalicLl,
    ];

    pub const fn class(self) -> Class {
        use self::GradationClass::*;
        use self::Grade::*;
        use self::Manner::*;
        use self::Place::*;
        use self::Voicing::*;

        match self {
            Sound::A => vowel(Short, Guna),
            Sound::Aa => vowel(Long, Vriddhi),
            Sound::I | Sound::U | Sound::VocalicR | Sound::VocalicL => vowel(Short, Ik),
            Sound::Ii | Sound::Uu | Sound::VocalicRr | Sound::VocalicLl => vowel(Long, Ik),
            Sound::E | Sound::O => vowel(Diphthong, Guna),
            Sound::Ai | Sound::Au => vowel(Diphthong, Vriddhi),

            Sound::K => consonant(Velar, Stop, Voiceless, false),
            Sound::Kh => consonant(Velar, Stop, Voiceless, true),
            Sound::G => consonant(Velar, Stop, Voiced, false),
            Sound::Gh => consonant(Velar, Stop, Voiced, true),
            Sound::Ng => consonant(Velar, Manner::Nasal, Voiced, false),

            Sound::C => consonant(Palatal, Stop, Voiceless, false),
            Sound::Ch => consonant(Palatal, Stop, Voiceless, true),
            Sound::J => consonant(Palatal, Stop, Voiced, false),
            Sound::Jh => consonant(Palatal, Stop, Voiced, true),
            Sound::Ny => consonant(Palatal, Manner::Nasal, Voiced, false),

            Sound::Tt => consonant(Retroflex, Stop, Voiceless, false),
            Sound::Tth => consonant(Retroflex, Stop, Voiceless, true),
            Sound::Dd => consonant(Retroflex, Stop, Voiced, false),
            Sound::Ddh => consonant(Retroflex, Stop, Voiced, true),
            Sound::Nn => consonant(Retroflex, Manner::Nasal, Voiced, false),

            Sound::T => consonant(Dental, Stop, Voiceless, false),
            Sound::Th => consonant(Dental, Stop, Voiceless, true),
            Sound::D => consonant(Dental, Stop, Voiced, false),
            Sound::Dh => consonant(Dental, Stop, Voiced, true),
            Sound::N => consonant(Dental, Manner::Nasal, Voiced, false),

            Sound::P => consonant(Labial, Stop, Voiceless, false),
            Sound::Ph => consonant(Labial, Stop, Voiceless, true),
            Sound::B => consonant(Labial, Stop, Voiced, false),
            Sound::Bh => consonant(Labial, Stop, Voiced, true),
            Sound::M => consonant(Labial, Manner::Nasal, Voiced, false),

            Sound::Y => consonant(Palatal, Semivowel, Voiced, false),
            Sound::R => consonant(Retroflex, Liquid, Voiced, false),
            Sound::L => consonant(Dental, Liquid, Voiced, false),
            Sound::V => consonant(Labial, Semivowel, Voiced, false),

            Sound::Sh => consonant(Palatal, Sibilant, Voiceless, false),
            Sound::Ss => consonant(Retroflex, Sibilant, Voiceless, false),
            Sound::S => consonant(Dental, Sibilant, Voiceless, false),
            Sound::H => consonant(Glottal, Fricative, Voiced, false),

            Sound::Anusvara => consonant(Place::Nasal, Manner::Nasal, Voiced, false),
            Sound::Visarga => consonant(Glottal, Fricative, Voiceless, false),
        }
    }

    #[inline(always)]
    pub const fn category(self) -> Category {
        match self.class() {
            Class::Vowel(_) => Category::Vowel,
            Class::Consonant(_) => Category::Consonant,
        }
    }

    #[inline(always)]
    pub const fn is_vowel(self) -> bool {
        matches!(self.class(), Class::Vowel(_))
    }

    /// True for consonants that carry an inherent vowel in Devanagari.
    /// Anusvāra and visarga are written as marks and never do.
    #[inline(always)]
    pub const fn takes_inherent_vowel(self) -> bool {
        !self.is_vowel() && !matches!(self, Sound::Anusvara | Sound::Visarga)
    }

    pub const fn grade(self) -> Option<Grade> {
        match self.class() {
            Class::Vowel(v) => Some(v.grade),
            Class::Consonant(_) => None,
        }
    }

    pub const fn gradation_class(self) -> GradationClass {
        match self.class() {
            Class::Vowel(v) => v.gradation,
            Class::Consonant(_) => GradationClass::Other,
        }
    }

    #[inline(always)]
    pub const fn is_ik(self) -> bool {
        matches!(self.gradation_class(), GradationClass::Ik)
    }

    #[inline(always)]
    pub const fn is_guna(self) -> bool {
        matches!(self.gradation_class(), GradationClass::Guna)
    }

    #[inline(always)]
    pub const fn is_vriddhi(self) -> bool {
        matches!(self.gradation_class(), GradationClass::Vriddhi)
    }

    /// Member of the three-sound "aṇ" set: short a, i, u.
    #[inline(always)]
    pub const fn is_an(self) -> bool {
        matches!(self, Sound::A | Sound::I | Sound::U)
    }

    #[inline(always)]
    pub const fn is_vocalic_r(self) -> bool {
        matches!(self, Sound::VocalicR | Sound::VocalicRr)
    }

    #[inline(always)]
    pub const fn is_long(self) -> bool {
        matches!(self.grade(), Some(Grade::Long))
    }

    pub const fn ik_class(self) -> Option<IkClass> {
        match self {
            Sound::I | Sound::Ii => Some(IkClass::I),
            Sound::U | Sound::Uu => Some(IkClass::U),
            Sound::VocalicR | Sound::VocalicRr => Some(IkClass::R),
            Sound::VocalicL | Sound::VocalicLl => Some(IkClass::L),
            _ => None,
        }
    }

    /// Long partner of a short simple vowel.
    pub const fn long_counterpart(self) -> Option<Sound> {
        match self {
            Sound::A => Some(Sound::Aa),
            Sound::I => Some(Sound::Ii),
            Sound::U => Some(Sound::Uu),
            Sound::VocalicR => Some(Sound::VocalicRr),
            Sound::VocalicL => Some(Sound::VocalicLl),
            _ => None,
        }
    }

    /// Short partner of a long simple vowel. Diphthongs have none.
    pub const fn short_counterpart(self) -> Option<Sound> {
        match self {
            Sound::Aa => Some(Sound::A),
            Sound::Ii => Some(Sound::I),
            Sound::Uu => Some(Sound::U),
            Sound::VocalicRr => Some(Sound::VocalicR),
            Sound::VocalicLl => Some(Sound::VocalicL),
            _ => None,
        }
    }

    pub const fn consonant_class(self) -> Option<ConsonantClass> {
        match self.class() {
            Class::Consonant(c) => Some(c),
            Class::Vowel(_) => None,
        }
    }
}

impl IkClass {
    pub const fn short(self) -> Sound {
        match self {
            IkClass::I => Sound::I,
            IkClass::U => Sound::U,
            IkClass::R => Sound::VocalicR,
            IkClass::L => Sound::VocalicL,
        }
    }
}

/// A sound as read from, and written back to, one script.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phoneme {
    sound: Sound,
    script: Script,
}

impl Phoneme {
    #[inline(always)]
    pub const fn new(sound: Sound, script: Script) -> Phoneme {
        Phoneme { sound, script }
    }

    #[inline(always)]
    pub const fn sound(&self) -> Sound {
        self.sound
    }

    #[inline(always)]
    pub const fn script(&self) -> Script {
        self.script
    }

    #[inline(always)]
    pub const fn category(&self) -> Category {
        self.sound.category()
    }

    #[inline(always)]
    pub const fn class(&self) -> Class {
        self.sound.class()
    }

    #[inline(always)]
    pub const fn is_vowel(&self) -> bool {
        self.sound.is_vowel()
    }

    #[inline(always)]
    pub const fn is_ik(&self) -> bool {
        self.sound.is_ik()
    }

    #[inline(always)]
    pub const fn is_guna(&self) -> bool {
        self.sound.is_guna()
    }

    #[inline(always)]
    pub const fn is_vriddhi(&self) -> bool {
        self.sound.is_vriddhi()
    }

    #[inline(always)]
    pub const fn is_an(&self) -> bool {
        self.sound.is_an()
    }

    /// Independent (letter) form in this phoneme's script.
    pub fn grapheme<'t>(&self, tables: &'t PhonemeTables) -> &'t str {
        tables.table(self.script).letter(self.sound)
    }
}

/// The image of a vowel under guṇa or vṛddhi: a vowel optionally followed
/// by the liquid that ṛ/ḷ leave behind (`ar`, `ār`, `al`, `āl`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GradeForm {
    pub vowel: Sound,
    pub coda: Option<Sound>,
}

impl GradeForm {
    pub const fn bare(vowel: Sound) -> GradeForm {
        GradeForm { vowel, coda: None }
    }

    pub const fn with_coda(vowel: Sound, coda: Sound) -> GradeForm {
        GradeForm {
            vowel,
            coda: Some(coda),
        }
    }

    pub fn sounds(&self) -> Vec<Sound> {
        std::iter::once(self.vowel).chain(self.coda).collect()
    }
}
