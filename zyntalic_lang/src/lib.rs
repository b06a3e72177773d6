// Zyntalic language core crate.
//
// Provides the Zyntalic constructed language as a programmatic resource for
// `zyntalic_translate` (the rendering pipeline and CLI). No I/O, no global
// state.
//
// Architecture:
// - `types.rs`: Core types — `Script`, `PartOfSpeech`, `Phoneme`, `VowelClass`
// - `phonology.rs`: Dual-script inventories, syllable synthesis under
//   phonotactic constraints, sound-change pipeline, romanization, Hangul
//   block composition
// - `morphology.rs`: Vowel-harmony suffix tables, noun/verb inflection,
//   derivational morphology, typed usage errors
// - `lexicon.rs`: Per-anchor vocabulary lists loaded from embedded JSON
//
// The anchor lexicon is loaded from `data/anchor_lexicon.json` via
// `AnchorLexicon::from_json()` (JSON string in, typed struct out). The
// `default_lexicon()` convenience function uses `include_str!` to embed the
// shipped lexicon at compile time.
//
// Determinism constraint: this crate is the heart of the "same input, same
// output" contract. All RNG goes through `zyntalic_prng::ZynRng`, one
// generator per synthesis call, threaded explicitly — never ambient.

pub mod lexicon;
pub mod morphology;
pub mod phonology;
pub mod types;

// Re-export key types at crate root for convenience.
pub use lexicon::{default_lexicon, AnchorEntry, AnchorLexicon};
pub use morphology::{
    Aspect, Case, Derivation, Evidentiality, InflectedWord, MorphError, MorphemeBundle, Number,
    Tense,
};
pub use phonology::{Syllable, SyllableShape, SynthesisParams};
pub use types::{PartOfSpeech, Phoneme, Script, VowelClass};
