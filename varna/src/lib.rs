/*! Sanskrit phonology over IAST and Devanagari.

Segments words into phonemes, resolves guṇa and vṛddhi grades of the ik
vowels, analyzes the penultimate sound (upadha) of candidate verbal roots,
places replacements after a word's final sound, and shortens final long
vowels in the grammatical contexts that call for it.

Words are read in either script and every result comes back in the script
it was given in.

# Usage examples

```
use varna::{Engine, Options, PhonemeTables, Process, SubstitutionContext, UpadhaContext};

let tables = PhonemeTables::new();
let engine = Engine::new(&tables);

assert_eq!(engine.guna("ṛ"), "ar");

let analysis = engine.analyze_upadha("kṛ", &UpadhaContext::new().dhatu(true));
assert_eq!(analysis.guna_form.as_deref(), Some("ar"));

let ctx = SubstitutionContext::new(Process::Declension);
let result = engine.substitute("rāma", Some("sya"), &ctx, Options::commit());
assert_eq!(result.transformed.as_deref(), Some("rāmasya"));
```

Shortening needs to know which words are nominal stems (prātipadika). Pass
a [`StemClassifier`], or any `Fn(&str) -> bool`, to
[`Engine::with_classifier`].

*/

pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod gradation;
pub mod phoneme;
pub mod result;
pub mod script;
pub mod shortening;
pub mod substitution;
pub mod types;
pub mod word;

pub(crate) mod constants;

pub use config::{ConfigError, EngineConfig, ReplacementLimits};
pub use context::{
    ContextError, Elision, Gender, Process, ShorteningContext, SubstitutionContext, UpadhaContext,
};
pub use engine::Engine;
pub use error::EngineError;
pub use gradation::{RootCandidacy, UpadhaAnalysis};
pub use phoneme::{Phoneme, PhonemeTables, Sound};
pub use result::{Detail, TransformationResult};
pub use script::ScriptDetection;
pub use shortening::{AllStems, NoStems, StemClassifier};
pub use types::{Options, Script};
pub use word::Word;

/// Sends `log` output to stderr, filtered by `RUST_LOG`. Safe to call more
/// than once.
#[cfg(feature = "logging")]
pub fn enable_logging() {
    let _ = env_logger::try_init();
}
