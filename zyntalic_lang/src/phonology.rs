// Zyntalic phonology: dual-script inventories, syllable synthesis, sound
// changes, and romanization.
//
// Zyntalic words mix two glyph inventories: precomposed Hangul syllable
// blocks and a Polish-flavored Latin alphabet. Which script a syllable is
// drawn from is a per-syllable weighted coin conditioned on part of speech
// (nouns skew Hangul, verbs skew Latin).
//
// This module provides:
// - The static phoneme inventories and phonotactic cluster tables
// - `Syllable` — the structural onset/nucleus/coda model with validity checks
// - `synthesize_word` — seeded word generation under phonotactic constraints
// - `apply_sound_changes` — the fixed, ordered sound-change pipeline
// - `romanize` — Hangul-block-aware transliteration
// - Hangul block composition/decomposition (U+AC00 arithmetic)
//
// Determinism constraint: all randomness flows through a `ZynRng` constructed
// from the caller's seed key. Same key + same parameters = same word, always.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use zyntalic_prng::ZynRng;

use crate::types::{Manner, PartOfSpeech, Phoneme, Place, Script};

// ---------------------------------------------------------------------------
// Hangul block arithmetic
// ---------------------------------------------------------------------------

/// First precomposed Hangul syllable codepoint (가).
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;

/// Number of onset jamo (choseong).
const CHOSEONG_COUNT: u32 = 19;
/// Number of vowel jamo (jungseong).
const JUNGSEONG_COUNT: u32 = 21;
/// Number of coda jamo including "no coda" (jongseong).
const JONGSEONG_COUNT: u32 = 28;

/// Compose a precomposed Hangul syllable block from jamo indices.
///
/// `cho` 0–18, `jung` 0–20, `jong` 0–27 (0 = no coda). Returns `None` if any
/// index is out of range.
pub fn compose_block(cho: u32, jung: u32, jong: u32) -> Option<char> {
    if cho >= CHOSEONG_COUNT || jung >= JUNGSEONG_COUNT || jong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE + (cho * JUNGSEONG_COUNT + jung) * JONGSEONG_COUNT + jong;
    char::from_u32(code)
}

/// Decompose a precomposed Hangul syllable into (choseong, jungseong,
/// jongseong) indices. Returns `None` for non-Hangul characters.
pub fn decompose_block(c: char) -> Option<(u32, u32, u32)> {
    let code = c as u32;
    if !(HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_BASE + 11171).contains(&code) {
        return None;
    }
    let offset = code - HANGUL_SYLLABLE_BASE;
    let jong = offset % JONGSEONG_COUNT;
    let jung = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let cho = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((cho, jung, jong))
}

// ---------------------------------------------------------------------------
// Romanization tables (index-aligned with jamo order)
// ---------------------------------------------------------------------------

/// Onset jamo romanizations, choseong order ㄱ..ㅎ.
pub const CHOSEONG_ROMAN: [&str; 19] = [
    "g", "kk", "n", "d", "tt", "r", "m", "b", "pp", "s", "ss", "", "j", "jj", "ch", "k", "t", "p",
    "h",
];

/// Vowel jamo romanizations, jungseong order ㅏ..ㅣ.
pub const JUNGSEONG_ROMAN: [&str; 21] = [
    "a", "ae", "ya", "yae", "eo", "e", "yeo", "ye", "o", "wa", "wae", "oe", "yo", "u", "wo", "we",
    "wi", "yu", "eu", "ui", "i",
];

/// Coda jamo romanizations by final sound value, jongseong order (0 = none).
pub const JONGSEONG_ROMAN: [&str; 28] = [
    "", "k", "k", "k", "n", "n", "n", "t", "l", "k", "m", "p", "t", "t", "p", "t", "m", "p", "p",
    "t", "t", "ng", "t", "t", "k", "t", "p", "t",
];

// ---------------------------------------------------------------------------
// Latin (Polish-flavored) inventory
// ---------------------------------------------------------------------------

/// The Latin consonant inventory with articulatory features.
pub const LATIN_CONSONANTS: &[Phoneme] = &[
    // Stops
    Phoneme { symbol: "p", ipa: "p", script: Script::Latin, manner: Manner::Stop, place: Place::Bilabial, voiced: false },
    Phoneme { symbol: "b", ipa: "b", script: Script::Latin, manner: Manner::Stop, place: Place::Bilabial, voiced: true },
    Phoneme { symbol: "t", ipa: "t", script: Script::Latin, manner: Manner::Stop, place: Place::Alveolar, voiced: false },
    Phoneme { symbol: "d", ipa: "d", script: Script::Latin, manner: Manner::Stop, place: Place::Alveolar, voiced: true },
    Phoneme { symbol: "k", ipa: "k", script: Script::Latin, manner: Manner::Stop, place: Place::Velar, voiced: false },
    Phoneme { symbol: "g", ipa: "g", script: Script::Latin, manner: Manner::Stop, place: Place::Velar, voiced: true },
    // Fricatives
    Phoneme { symbol: "f", ipa: "f", script: Script::Latin, manner: Manner::Fricative, place: Place::Labiodental, voiced: false },
    Phoneme { symbol: "v", ipa: "v", script: Script::Latin, manner: Manner::Fricative, place: Place::Labiodental, voiced: true },
    Phoneme { symbol: "s", ipa: "s", script: Script::Latin, manner: Manner::Fricative, place: Place::Alveolar, voiced: false },
    Phoneme { symbol: "z", ipa: "z", script: Script::Latin, manner: Manner::Fricative, place: Place::Alveolar, voiced: true },
    Phoneme { symbol: "ś", ipa: "ɕ", script: Script::Latin, manner: Manner::Fricative, place: Place::Palatal, voiced: false },
    Phoneme { symbol: "ź", ipa: "ʑ", script: Script::Latin, manner: Manner::Fricative, place: Place::Palatal, voiced: true },
    Phoneme { symbol: "sz", ipa: "ʃ", script: Script::Latin, manner: Manner::Fricative, place: Place::Postalveolar, voiced: false },
    Phoneme { symbol: "ż", ipa: "ʒ", script: Script::Latin, manner: Manner::Fricative, place: Place::Postalveolar, voiced: true },
    Phoneme { symbol: "ch", ipa: "x", script: Script::Latin, manner: Manner::Fricative, place: Place::Velar, voiced: false },
    Phoneme { symbol: "h", ipa: "x", script: Script::Latin, manner: Manner::Fricative, place: Place::Glottal, voiced: false },
    // Nasals
    Phoneme { symbol: "m", ipa: "m", script: Script::Latin, manner: Manner::Nasal, place: Place::Bilabial, voiced: true },
    Phoneme { symbol: "n", ipa: "n", script: Script::Latin, manner: Manner::Nasal, place: Place::Alveolar, voiced: true },
    Phoneme { symbol: "ń", ipa: "ɲ", script: Script::Latin, manner: Manner::Nasal, place: Place::Palatal, voiced: true },
    // Liquids
    Phoneme { symbol: "l", ipa: "l", script: Script::Latin, manner: Manner::Liquid, place: Place::Alveolar, voiced: true },
    Phoneme { symbol: "ł", ipa: "w", script: Script::Latin, manner: Manner::Liquid, place: Place::Velar, voiced: true },
    Phoneme { symbol: "r", ipa: "r", script: Script::Latin, manner: Manner::Liquid, place: Place::Alveolar, voiced: true },
    // Affricates
    Phoneme { symbol: "c", ipa: "ʦ", script: Script::Latin, manner: Manner::Affricate, place: Place::Alveolar, voiced: false },
    Phoneme { symbol: "dz", ipa: "ʣ", script: Script::Latin, manner: Manner::Affricate, place: Place::Alveolar, voiced: true },
    Phoneme { symbol: "ć", ipa: "ʧ", script: Script::Latin, manner: Manner::Affricate, place: Place::Palatal, voiced: false },
    Phoneme { symbol: "dź", ipa: "ʤ", script: Script::Latin, manner: Manner::Affricate, place: Place::Palatal, voiced: true },
    Phoneme { symbol: "cz", ipa: "ʧ", script: Script::Latin, manner: Manner::Affricate, place: Place::Postalveolar, voiced: false },
    Phoneme { symbol: "dż", ipa: "ʤ", script: Script::Latin, manner: Manner::Affricate, place: Place::Postalveolar, voiced: true },
];

/// The Latin vowel inventory.
pub const LATIN_VOWELS: &[&str] = &["a", "ą", "e", "ę", "i", "o", "ó", "u", "y"];

/// Consonants allowed as a single Latin coda.
pub const LATIN_SINGLE_CODAS: &[&str] = &["n", "m", "l", "r", "t", "k", "p"];

/// Two-consonant onsets allowed by the phonotactics.
pub const VALID_ONSET_CLUSTERS: &[(&str, &str)] = &[
    ("s", "p"), ("s", "t"), ("s", "k"),
    ("ś", "p"), ("ś", "t"),
    ("sz", "p"), ("sz", "t"), ("sz", "k"), ("sz", "ć"),
    ("p", "r"), ("b", "r"), ("t", "r"), ("d", "r"), ("k", "r"), ("g", "r"),
    ("p", "ł"), ("b", "ł"), ("k", "ł"), ("g", "ł"),
    ("f", "r"), ("ch", "r"),
];

/// Two-consonant codas allowed by the phonotactics.
pub const VALID_CODA_CLUSTERS: &[(&str, &str)] =
    &[("n", "t"), ("m", "p"), ("ŋ", "k"), ("l", "t")];

/// Whether a consonant pair is an allowed complex onset.
pub fn is_valid_onset_cluster(first: &str, second: &str) -> bool {
    VALID_ONSET_CLUSTERS.iter().any(|&(a, b)| a == first && b == second)
}

/// Whether a consonant pair is an allowed complex coda.
pub fn is_valid_coda_cluster(first: &str, second: &str) -> bool {
    VALID_CODA_CLUSTERS.iter().any(|&(a, b)| a == first && b == second)
}

// ---------------------------------------------------------------------------
// Syllable model
// ---------------------------------------------------------------------------

/// Structural shape of a syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyllableShape {
    V,
    Vc,
    Cv,
    Cvc,
    Ccv,
    Ccvc,
}

/// A phonological syllable: onset (0–2 consonants), nucleus (exactly one
/// vowel), coda (0–1 consonant cluster).
///
/// Latin-script syllables are synthesized through this model; Hangul-script
/// syllables are synthesized directly as precomposed blocks, whose
/// (choseong, jungseong, jongseong) decomposition is the same structure.
#[derive(Debug, Clone)]
pub struct Syllable {
    pub onset: SmallVec<[&'static str; 2]>,
    pub nucleus: &'static str,
    pub coda: SmallVec<[&'static str; 2]>,
    pub script: Script,
}

impl Syllable {
    /// Structural shape of this syllable.
    pub fn shape(&self) -> SyllableShape {
        let complex_onset = self.onset.len() > 1;
        match (self.onset.is_empty(), self.coda.is_empty()) {
            (true, true) => SyllableShape::V,
            (true, false) => SyllableShape::Vc,
            (false, true) => {
                if complex_onset {
                    SyllableShape::Ccv
                } else {
                    SyllableShape::Cv
                }
            }
            (false, false) => {
                if complex_onset {
                    SyllableShape::Ccvc
                } else {
                    SyllableShape::Cvc
                }
            }
        }
    }

    /// Check this syllable against the phonotactic constraints: non-empty
    /// nucleus, complex onset/coda only from the fixed cluster tables.
    pub fn is_valid(&self) -> bool {
        if self.nucleus.is_empty() {
            return false;
        }
        if self.onset.len() > 1 && !is_valid_onset_cluster(self.onset[0], self.onset[1]) {
            return false;
        }
        if self.coda.len() > 1 && !is_valid_coda_cluster(self.coda[0], self.coda[1]) {
            return false;
        }
        true
    }

    /// Render to text: onset + nucleus + coda, concatenated.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for c in &self.onset {
            out.push_str(c);
        }
        out.push_str(self.nucleus);
        for c in &self.coda {
            out.push_str(c);
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Synthesis parameters
// ---------------------------------------------------------------------------

/// Tunable probabilities for word synthesis. All values are probabilities
/// in [0, 1]; the defaults reproduce the canonical Zyntalic texture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisParams {
    /// Share of Hangul-script syllables in nouns and adjectives.
    pub hangul_share_noun: f64,
    /// Share of Hangul-script syllables in verbs.
    pub hangul_share_verb: f64,
    /// Share of Hangul-script syllables for other parts of speech.
    pub hangul_share_default: f64,
    /// Probability a syllable has an onset at all.
    pub onset_probability: f64,
    /// Probability a single onset attempts a cluster extension. The
    /// extension is kept only if the pair is in `VALID_ONSET_CLUSTERS`.
    pub cluster_probability: f64,
    /// Probability a syllable has a coda.
    pub coda_probability: f64,
    /// Probability a Polish texture marker is appended to one interior
    /// syllable of the finished word.
    pub texture_marker_probability: f64,
}

impl Default for SynthesisParams {
    fn default() -> Self {
        SynthesisParams {
            hangul_share_noun: 0.85,
            hangul_share_verb: 0.15,
            hangul_share_default: 0.7,
            onset_probability: 0.8,
            cluster_probability: 0.2,
            coda_probability: 0.4,
            texture_marker_probability: 0.2,
        }
    }
}

impl SynthesisParams {
    /// Script preference for a part of speech: the probability that a
    /// syllable is drawn from the Hangul inventory.
    pub fn hangul_share(&self, pos: PartOfSpeech) -> f64 {
        match pos {
            PartOfSpeech::Noun | PartOfSpeech::Adjective => self.hangul_share_noun,
            PartOfSpeech::Verb => self.hangul_share_verb,
            PartOfSpeech::Particle => self.hangul_share_default,
        }
    }
}

/// Interior texture markers occasionally appended between syllables.
const TEXTURE_MARKERS: &[&str] = &["ć", "ść", "rz", "ż", "sz", "cz"];

// ---------------------------------------------------------------------------
// Word synthesis
// ---------------------------------------------------------------------------

/// Syllable count band for a source word: short words get two syllables,
/// long words up to five.
pub fn syllable_count_for(word: &str) -> usize {
    match word.chars().count() {
        0..=3 => 2,
        4..=6 => 3,
        7..=10 => 4,
        _ => 5,
    }
}

/// Synthesize a phonotactically valid Zyntalic word.
///
/// `seed_key` names the word's random stream (`"phon:" + seed_key`); the
/// same key, syllable count, part of speech, and parameters always produce
/// the same word. Syllables draw their script per the part-of-speech share,
/// then the finished word runs through the sound-change pipeline.
pub fn synthesize_word(
    seed_key: &str,
    syllable_count: usize,
    pos: PartOfSpeech,
    params: &SynthesisParams,
) -> String {
    let mut rng = ZynRng::from_key(&format!("phon:{seed_key}"));
    let share = params.hangul_share(pos);

    let mut parts: Vec<String> = Vec::with_capacity(syllable_count);
    for _ in 0..syllable_count {
        if rng.random_bool(share) {
            parts.push(hangul_syllable(&mut rng, params).to_string());
        } else {
            let syl = latin_syllable(&mut rng, params);
            debug_assert!(syl.is_valid());
            parts.push(syl.render());
        }
    }

    // Occasional Polish texture marker after an interior syllable.
    if parts.len() >= 2 && rng.random_bool(params.texture_marker_probability) {
        let marker = rng.pick(TEXTURE_MARKERS).copied().unwrap_or("ż");
        let at = rng.range_usize(1, parts.len());
        parts[at].push_str(marker);
    }

    apply_sound_changes(&parts.concat())
}

/// Draw one Latin-script syllable under the phonotactic constraints.
///
/// A cluster extension whose pair is not in the valid-onset table is
/// dropped, never emitted; the nucleus is always present.
fn latin_syllable(rng: &mut ZynRng, params: &SynthesisParams) -> Syllable {
    let mut onset: SmallVec<[&'static str; 2]> = SmallVec::new();
    if rng.random_bool(params.onset_probability) {
        if let Some(p) = rng.pick(LATIN_CONSONANTS) {
            onset.push(p.symbol);
        }
        if rng.random_bool(params.cluster_probability) {
            if let Some(second) = rng.pick(LATIN_CONSONANTS) {
                if is_valid_onset_cluster(onset[0], second.symbol) {
                    onset.push(second.symbol);
                }
            }
        }
    }

    let nucleus = rng.pick(LATIN_VOWELS).copied().unwrap_or("a");

    let mut coda: SmallVec<[&'static str; 2]> = SmallVec::new();
    if rng.random_bool(params.coda_probability) {
        if let Some(c) = rng.pick(LATIN_SINGLE_CODAS) {
            coda.push(c);
        }
    }

    Syllable {
        onset,
        nucleus,
        coda,
        script: Script::Latin,
    }
}

/// Draw one Hangul-script syllable as a precomposed block.
///
/// The block always carries a jungseong (nucleus); a jongseong (coda) is
/// present with `coda_probability`.
fn hangul_syllable(rng: &mut ZynRng, params: &SynthesisParams) -> char {
    let cho = rng.range_u64(0, u64::from(CHOSEONG_COUNT)) as u32;
    let jung = rng.range_u64(0, u64::from(JUNGSEONG_COUNT)) as u32;
    let jong = if rng.random_bool(params.coda_probability) {
        rng.range_u64(1, u64::from(JONGSEONG_COUNT)) as u32
    } else {
        0
    };
    compose_block(cho, jung, jong).expect("jamo indices are in range")
}

// ---------------------------------------------------------------------------
// Sound changes
// ---------------------------------------------------------------------------

/// Apply the ordered sound-change pipeline to a word.
///
/// Rule order is fixed: voicing assimilation, nasal place assimilation,
/// sibilant harmony, vowel-hiatus collapse, cluster simplification,
/// epenthesis. Each rule is a plain left-to-right scan; re-applying the
/// pipeline to its own output is a no-op once rule preconditions are gone.
pub fn apply_sound_changes(word: &str) -> String {
    let w = voice_assimilation(word);
    let w = nasal_assimilation(&w);
    let w = sibilant_harmony(&w);
    let w = hiatus_collapse(&w);
    let w = cluster_simplification(&w);
    epenthesis(&w)
}

fn is_latin_vowel_char(c: char) -> bool {
    matches!(c, 'a' | 'ą' | 'e' | 'ę' | 'i' | 'o' | 'ó' | 'u' | 'y')
}

/// Voicing assimilation: a stop takes the voicing of a following stop.
fn voice_assimilation(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    for i in 0..chars.len().saturating_sub(1) {
        let next = chars[i + 1];
        chars[i] = match (chars[i], next) {
            ('b', 'p' | 't' | 'k') => 'p',
            ('d', 'p' | 't' | 'k') => 't',
            ('g', 'p' | 't' | 'k') => 'k',
            ('p', 'b' | 'd' | 'g') => 'b',
            ('t', 'b' | 'd' | 'g') => 'd',
            ('k', 'b' | 'd' | 'g') => 'g',
            (c, _) => c,
        };
    }
    chars.into_iter().collect()
}

/// Nasal place assimilation: `n` becomes `m` before labials and `ŋ` before
/// velars.
fn nasal_assimilation(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    for i in 0..chars.len().saturating_sub(1) {
        if chars[i] == 'n' {
            match chars[i + 1] {
                'p' | 'b' | 'm' => chars[i] = 'm',
                'k' | 'g' => chars[i] = 'ŋ',
                _ => {}
            }
        }
    }
    chars.into_iter().collect()
}

/// Sibilant harmony: once a word contains a postalveolar sibilant (`sz` or
/// `ż`), plain `s`/`z` elsewhere in the word harmonize to `sz`/`ż`.
fn sibilant_harmony(word: &str) -> String {
    if !word.contains("sz") && !word.contains('ż') {
        return word.to_string();
    }
    let chars: Vec<char> = word.chars().collect();
    let mut out = String::with_capacity(word.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        match c {
            // `s` not already part of `sz` spreads to `sz`.
            's' if chars.get(i + 1) != Some(&'z') => out.push_str("sz"),
            // `z` not already part of `sz` spreads to `ż`.
            'z' if i == 0 || chars[i - 1] != 's' => out.push('ż'),
            _ => out.push(c),
        }
    }
    out
}

/// Vowel-hiatus collapse: identical adjacent vowels merge into one.
fn hiatus_collapse(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut prev: Option<char> = None;
    for c in word.chars() {
        if is_latin_vowel_char(c) && prev == Some(c) {
            continue;
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

/// Cluster simplification: a sibilant trapped between two stops deletes.
fn cluster_simplification(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let mut out = String::with_capacity(word.len());
    let mut i = 0;
    while i < chars.len() {
        let is_trapped_sibilant = i > 0
            && i + 1 < chars.len()
            && matches!(chars[i], 's' | 'z')
            && matches!(chars[i - 1], 'p' | 't' | 'k')
            && matches!(chars[i + 1], 'p' | 't' | 'k');
        if !is_trapped_sibilant {
            out.push(chars[i]);
        }
        i += 1;
    }
    out
}

/// Epenthesis: insert `e` between a sibilant-stop sequence and a following
/// consonant, breaking up a three-consonant cluster.
fn epenthesis(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let mut out = String::with_capacity(word.len() + 2);
    for i in 0..chars.len() {
        out.push(chars[i]);
        let starts_cluster = matches!(chars[i], 's' | 'z')
            && i + 2 < chars.len()
            && matches!(chars[i + 1], 'p' | 't' | 'k')
            && chars[i + 2].is_ascii_alphabetic()
            && !is_latin_vowel_char(chars[i + 2]);
        if starts_cluster {
            out.push('e');
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Romanization
// ---------------------------------------------------------------------------

/// Romanize Zyntalic text.
///
/// Precomposed Hangul blocks decompose to their jamo and substitute through
/// the romanization tables; every other character passes through unchanged.
pub fn romanize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if let Some((cho, jung, jong)) = decompose_block(c) {
            out.push_str(CHOSEONG_ROMAN[cho as usize]);
            out.push_str(JUNGSEONG_ROMAN[jung as usize]);
            out.push_str(JONGSEONG_ROMAN[jong as usize]);
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_block() {
        // 가 = ㄱ(0) + ㅏ(0) + none(0)
        assert_eq!(compose_block(0, 0, 0), Some('가'));
        // 한 = ㅎ(18) + ㅏ(0) + ㄴ(4)
        assert_eq!(compose_block(18, 0, 4), Some('한'));
        // Out of range
        assert_eq!(compose_block(19, 0, 0), None);
        assert_eq!(compose_block(0, 21, 0), None);
        assert_eq!(compose_block(0, 0, 28), None);
    }

    #[test]
    fn test_decompose_block() {
        assert_eq!(decompose_block('가'), Some((0, 0, 0)));
        assert_eq!(decompose_block('한'), Some((18, 0, 4)));
        assert_eq!(decompose_block('a'), None);
        assert_eq!(decompose_block('ż'), None);
    }

    #[test]
    fn test_compose_decompose_roundtrip() {
        for cho in [0u32, 7, 18] {
            for jung in [0u32, 10, 20] {
                for jong in [0u32, 4, 27] {
                    let c = compose_block(cho, jung, jong).unwrap();
                    assert_eq!(decompose_block(c), Some((cho, jung, jong)));
                }
            }
        }
    }

    #[test]
    fn test_cluster_tables() {
        assert!(is_valid_onset_cluster("s", "t"));
        assert!(is_valid_onset_cluster("sz", "k"));
        assert!(!is_valid_onset_cluster("t", "s"));
        assert!(is_valid_coda_cluster("n", "t"));
        assert!(!is_valid_coda_cluster("t", "n"));
    }

    #[test]
    fn test_syllable_shape() {
        let mut syl = Syllable {
            onset: SmallVec::new(),
            nucleus: "a",
            coda: SmallVec::new(),
            script: Script::Latin,
        };
        assert_eq!(syl.shape(), SyllableShape::V);
        syl.onset.push("t");
        assert_eq!(syl.shape(), SyllableShape::Cv);
        syl.coda.push("n");
        assert_eq!(syl.shape(), SyllableShape::Cvc);
        syl.onset = SmallVec::from_slice(&["s", "t"]);
        assert_eq!(syl.shape(), SyllableShape::Ccvc);
    }

    #[test]
    fn test_syllable_validity() {
        let valid = Syllable {
            onset: SmallVec::from_slice(&["s", "t"]),
            nucleus: "a",
            coda: SmallVec::from_slice(&["n"]),
            script: Script::Latin,
        };
        assert!(valid.is_valid());

        let bad_cluster = Syllable {
            onset: SmallVec::from_slice(&["t", "s"]),
            nucleus: "a",
            coda: SmallVec::new(),
            script: Script::Latin,
        };
        assert!(!bad_cluster.is_valid());

        let no_nucleus = Syllable {
            onset: SmallVec::from_slice(&["t"]),
            nucleus: "",
            coda: SmallVec::new(),
            script: Script::Latin,
        };
        assert!(!no_nucleus.is_valid());
    }

    #[test]
    fn test_synthesize_word_deterministic() {
        let params = SynthesisParams::default();
        let a = synthesize_word("water", 3, PartOfSpeech::Noun, &params);
        let b = synthesize_word("water", 3, PartOfSpeech::Noun, &params);
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn test_synthesize_word_key_sensitivity() {
        let params = SynthesisParams::default();
        let a = synthesize_word("water", 3, PartOfSpeech::Noun, &params);
        let b = synthesize_word("fire", 3, PartOfSpeech::Noun, &params);
        assert_ne!(a, b, "distinct keys should give distinct words");
    }

    #[test]
    fn test_synthesized_hangul_blocks_have_nucleus() {
        // Every precomposed block decomposes to a jungseong by construction;
        // verify over many seeds that synthesized Hangul chars are blocks.
        let params = SynthesisParams::default();
        for seed in 0..50 {
            let word = synthesize_word(&format!("w{seed}"), 3, PartOfSpeech::Noun, &params);
            for c in word.chars() {
                if (c as u32) >= 0xAC00 {
                    let (_, jung, _) = decompose_block(c).expect("hangul char is a block");
                    assert!(jung < 21);
                }
            }
        }
    }

    #[test]
    fn test_latin_syllables_always_valid() {
        let params = SynthesisParams::default();
        let mut rng = ZynRng::from_key("latin-validity");
        for _ in 0..500 {
            let syl = latin_syllable(&mut rng, &params);
            assert!(syl.is_valid(), "invalid syllable: {:?}", syl);
            assert!(!syl.nucleus.is_empty());
        }
    }

    #[test]
    fn test_verbs_skew_latin() {
        let params = SynthesisParams::default();
        let mut hangul_chars = 0usize;
        let mut total = 0usize;
        for seed in 0..100 {
            let word = synthesize_word(&format!("v{seed}"), 3, PartOfSpeech::Verb, &params);
            for c in word.chars() {
                total += 1;
                if decompose_block(c).is_some() {
                    hangul_chars += 1;
                }
            }
        }
        // Verbs are 15% Hangul per syllable; character share should stay low.
        let share = hangul_chars as f64 / total as f64;
        assert!(share < 0.4, "verb hangul share too high: {share:.2}");
    }

    #[test]
    fn test_voice_assimilation() {
        assert_eq!(voice_assimilation("abta"), "apta");
        assert_eq!(voice_assimilation("apda"), "abda");
        assert_eq!(voice_assimilation("aka"), "aka");
    }

    #[test]
    fn test_nasal_assimilation() {
        assert_eq!(nasal_assimilation("anpa"), "ampa");
        assert_eq!(nasal_assimilation("anka"), "aŋka");
        assert_eq!(nasal_assimilation("anta"), "anta");
    }

    #[test]
    fn test_sibilant_harmony() {
        // A postalveolar trigger spreads to plain sibilants.
        assert_eq!(sibilant_harmony("saż"), "szaż");
        assert_eq!(sibilant_harmony("zasz"), "żasz");
        // No trigger, no change.
        assert_eq!(sibilant_harmony("sas"), "sas");
        // Existing `sz` is left alone.
        assert_eq!(sibilant_harmony("szasz"), "szasz");
    }

    #[test]
    fn test_hiatus_collapse() {
        assert_eq!(hiatus_collapse("taat"), "tat");
        assert_eq!(hiatus_collapse("tait"), "tait");
        assert_eq!(hiatus_collapse("toool"), "tol");
    }

    #[test]
    fn test_cluster_simplification() {
        assert_eq!(cluster_simplification("apstak"), "aptak");
        assert_eq!(cluster_simplification("askat"), "askat");
    }

    #[test]
    fn test_epenthesis() {
        assert_eq!(epenthesis("sptak"), "septak");
        assert_eq!(epenthesis("spak"), "spak");
    }

    #[test]
    fn test_sound_changes_idempotent_on_fixed_point() {
        let params = SynthesisParams::default();
        for seed in 0..30 {
            let word = synthesize_word(&format!("i{seed}"), 3, PartOfSpeech::Noun, &params);
            // synthesize_word already applied the pipeline once.
            assert_eq!(apply_sound_changes(&word), word, "word not a fixed point: {word}");
        }
    }

    #[test]
    fn test_romanize_blocks() {
        assert_eq!(romanize("한"), "han");
        assert_eq!(romanize("가"), "ga");
        // Mixed text: Latin passes through.
        assert_eq!(romanize("가na"), "gana");
        // Unmapped characters pass through unchanged.
        assert_eq!(romanize("x!"), "x!");
    }

    #[test]
    fn test_syllable_count_bands() {
        assert_eq!(syllable_count_for("sun"), 2);
        assert_eq!(syllable_count_for("river"), 3);
        assert_eq!(syllable_count_for("mountains"), 4);
        assert_eq!(syllable_count_for("extraordinary"), 5);
        assert_eq!(syllable_count_for(""), 2);
    }
}
