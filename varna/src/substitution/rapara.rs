//! R-augmentation: a, i or u standing in for ṛ/ṝ is followed by r.

use smol_str::SmolStr;

use crate::error::EngineError;
use crate::phoneme::{PhonemeTables, Sound};
use crate::script::{self, ScriptDetection};
use crate::types::Script;
use crate::word::Segmenter;

/// Sound-level rapara. Returns `substitute` with `r` appended when it is a
/// single aṇ vowel replacing ṛ or ṝ, otherwise unchanged.
pub fn rapara(substitute: &[Sound], original: Sound) -> (Vec<Sound>, bool) {
    match substitute {
        [single] if single.is_an() && original.is_vocalic_r() => (vec![*single, Sound::R], true),
        _ => (substitute.to_vec(), false),
    }
}

/// String-level rapara over already validated phonemes.
///
/// Unlike the rule operations this fails loudly: empty arguments or
/// arguments not written in `script` are an [`EngineError::InvalidArgument`].
pub fn apply_rapara(
    tables: &PhonemeTables,
    substitute: &str,
    original: &str,
    script: Script,
) -> Result<SmolStr, EngineError> {
    check_argument(substitute, script, "substitute")?;
    check_argument(original, script, "original")?;

    let segmenter = Segmenter::new(tables, false);
    let sub = segmenter
        .segment(substitute, Some(script))
        .map_err(|_| EngineError::InvalidArgument("substitute"))?;
    let orig = segmenter
        .segment(original, Some(script))
        .map_err(|_| EngineError::InvalidArgument("original"))?;

    let original_sound = match orig.segments() {
        [single] => Some(single.sound()),
        _ => None,
    };

    match original_sound {
        Some(o) => {
            let (sounds, augmented) = rapara(&sub.sounds(), o);
            if augmented {
                log::debug!("rapara: {} for {} -> +r", substitute, original);
                Ok(tables.render(&sounds, script).into())
            } else {
                Ok(SmolStr::new(substitute))
            }
        }
        None => Ok(SmolStr::new(substitute)),
    }
}

fn check_argument(arg: &str, script: Script, name: &'static str) -> Result<(), EngineError> {
    if arg.trim().is_empty() {
        return Err(EngineError::InvalidArgument(name));
    }

    match script::detect(arg) {
        ScriptDetection::Detected(found) if found == script => Ok(()),
        _ => Err(EngineError::InvalidArgument(name)),
    }
}
