// Core Zyntalic language types: scripts, parts of speech, phonemes, and
// vowel classes.
//
// These types are shared by the phonology module (syllable synthesis,
// romanization) and the morphology module (vowel-harmony suffix selection),
// and re-exported at the crate root for `zyntalic_translate`.
//
// The type hierarchy is:
// - `Script` — which of the two parallel glyph inventories a symbol belongs to
// - `PartOfSpeech` — noun, verb, adjective, particle
// - `Manner` / `Place` — articulatory features of consonants
// - `Phoneme` — a symbol with IPA value, script tag, and features
// - `VowelClass` — front/back vowel harmony class
//
// Determinism constraint: these types are used by seeded synthesis and must
// not introduce any non-deterministic behavior (no HashMap, no system RNG).

use serde::{Deserialize, Serialize};

/// Which glyph inventory a symbol is drawn from.
///
/// Zyntalic deliberately mixes two scripts within a single word: a
/// Hangul-style jamo inventory and a Polish-flavored Latin inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Hangul,
    Latin,
}

/// Part of speech for a lexical item.
///
/// Drives the script mix of synthesized words: nouns and adjectives skew
/// Hangul, verbs skew Latin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Particle,
}

impl PartOfSpeech {
    /// Short code used in the context tail (`pos=` field).
    pub fn code(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adj",
            PartOfSpeech::Particle => "part",
        }
    }
}

/// Manner of articulation for a consonant phoneme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Manner {
    Stop,
    Fricative,
    Nasal,
    Liquid,
    Affricate,
}

/// Place of articulation for a consonant phoneme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Place {
    Bilabial,
    Labiodental,
    Alveolar,
    Postalveolar,
    Palatal,
    Velar,
    Glottal,
}

/// A consonant phoneme with its articulatory features.
///
/// Phonemes exist only in the two static inventories in `phonology`; they
/// are never constructed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phoneme {
    /// The written symbol (one or two letters for Latin digraphs).
    pub symbol: &'static str,
    /// IPA value, for documentation and feature classification.
    pub ipa: &'static str,
    /// Which inventory the symbol belongs to.
    pub script: Script,
    pub manner: Manner,
    pub place: Place,
    pub voiced: bool,
}

/// Vowel class for suffix harmony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VowelClass {
    /// Front vowels — bright suffix variants.
    Front,
    /// Back vowels — deep suffix variants. The default for roots with no
    /// classifiable vowels or an exact tie.
    Back,
}
