// Zyntalic morphology: agglutinative inflection with vowel harmony.
//
// Every suffix has exactly two allomorphs — a front-vowel variant and a
// back-vowel variant — selected by the root's harmony class. Suffixes
// concatenate in a fixed order:
//   nouns: stem → derivation → number → case
//   verbs: stem → aspect → tense → evidentiality
//
// All feature categories are closed enums; the suffix tables are
// pattern-matched functions over them, so the compiler checks coverage.
// Nominative case and singular number are zero-marked.
//
// The gloss of an inflected word is reconstructible: the root followed by
// each applied feature's canonical short code, hyphen-joined, in
// application order.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::phonology::decompose_block;
use crate::types::{PartOfSpeech, VowelClass};

// ---------------------------------------------------------------------------
// Feature categories
// ---------------------------------------------------------------------------

/// Grammatical case (six-case system). Nominative is zero-marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    Nominative,
    Accusative,
    Genitive,
    Dative,
    Locative,
    Instrumental,
}

impl Case {
    /// Canonical short code used in glosses.
    pub fn code(self) -> &'static str {
        match self {
            Case::Nominative => "nom",
            Case::Accusative => "acc",
            Case::Genitive => "gen",
            Case::Dative => "dat",
            Case::Locative => "loc",
            Case::Instrumental => "ins",
        }
    }
}

/// Grammatical number. Singular is zero-marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Number {
    Singular,
    Plural,
    /// A group treated as a unit.
    Collective,
}

impl Number {
    pub fn code(self) -> &'static str {
        match self {
            Number::Singular => "sg",
            Number::Plural => "pl",
            Number::Collective => "col",
        }
    }
}

/// Verb tense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    Past,
    Present,
    Future,
    /// Timeless truths.
    Gnomic,
}

impl Tense {
    pub fn code(self) -> &'static str {
        match self {
            Tense::Past => "pst",
            Tense::Present => "prs",
            Tense::Future => "fut",
            Tense::Gnomic => "gnom",
        }
    }
}

/// Verb aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aspect {
    Perfective,
    Imperfective,
    Iterative,
}

impl Aspect {
    pub fn code(self) -> &'static str {
        match self {
            Aspect::Perfective => "pfv",
            Aspect::Imperfective => "ipfv",
            Aspect::Iterative => "iter",
        }
    }
}

/// Evidentiality: how the speaker knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Evidentiality {
    Direct,
    Hearsay,
    Inferential,
    Assumptive,
}

impl Evidentiality {
    pub fn code(self) -> &'static str {
        match self {
            Evidentiality::Direct => "dir",
            Evidentiality::Hearsay => "hear",
            Evidentiality::Inferential => "inf",
            Evidentiality::Assumptive => "assm",
        }
    }
}

/// Derivational morphology types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Derivation {
    /// Doer suffix (noun).
    Agent,
    /// Tool suffix (noun).
    Instrument,
    /// Quality suffix (noun).
    Abstract,
    /// Smallness suffix.
    Diminutive,
    /// Bigness suffix.
    Augmentative,
    /// Gerund (noun).
    VerbalNoun,
}

impl Derivation {
    pub fn code(self) -> &'static str {
        match self {
            Derivation::Agent => "agent",
            Derivation::Instrument => "instrument",
            Derivation::Abstract => "abstract",
            Derivation::Diminutive => "diminutive",
            Derivation::Augmentative => "augmentative",
            Derivation::VerbalNoun => "verbal-noun",
        }
    }

    /// Parse a derivation type from its code. Unknown codes are a usage
    /// error, reported to the caller, never substituted.
    pub fn from_code(code: &str) -> Result<Derivation, MorphError> {
        match code {
            "agent" => Ok(Derivation::Agent),
            "instrument" => Ok(Derivation::Instrument),
            "abstract" => Ok(Derivation::Abstract),
            "diminutive" => Ok(Derivation::Diminutive),
            "augmentative" => Ok(Derivation::Augmentative),
            "verbal-noun" => Ok(Derivation::VerbalNoun),
            other => Err(MorphError::UnknownDerivation(other.to_string())),
        }
    }

    /// The part of speech a derived word ends up with. Every derivation in
    /// the current inventory nominalizes its base.
    pub fn derived_pos(self) -> PartOfSpeech {
        PartOfSpeech::Noun
    }
}

/// Usage errors from the inflection API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MorphError {
    #[error("cannot inflect an empty root")]
    EmptyRoot,
    #[error("unknown derivation type: {0}")]
    UnknownDerivation(String),
}

// ---------------------------------------------------------------------------
// Vowel harmony
// ---------------------------------------------------------------------------

/// Jungseong indices counted as front-class vowels.
const FRONT_JUNGSEONG: &[u32] = &[1, 3, 5, 7, 11, 16]; // ㅐ ㅒ ㅔ ㅖ ㅚ ㅟ

/// Jungseong indices counted as back-class vowels. ㅣ (20) is neutral.
const BACK_JUNGSEONG: &[u32] = &[0, 2, 4, 6, 8, 9, 10, 12, 13, 14, 15, 17, 18, 19];

fn latin_vowel_class(c: char) -> Option<VowelClass> {
    match c {
        'e' | 'é' | 'ę' | 'i' | 'í' | 'ö' | 'ő' | 'ü' | 'ű' => Some(VowelClass::Front),
        'a' | 'á' | 'ą' | 'o' | 'ó' | 'u' | 'ú' => Some(VowelClass::Back),
        // `y` is neutral: it harmonizes with either class.
        _ => None,
    }
}

/// Classify a root's vowel-harmony class.
///
/// Counts front-class against back-class vowels across both scripts
/// (Hangul blocks are decomposed to their jungseong). A strict front
/// majority gives Front; ties, back majorities, and vowel-less roots give
/// Back.
pub fn vowel_harmony(root: &str) -> VowelClass {
    let mut front = 0usize;
    let mut back = 0usize;
    for c in root.chars() {
        if let Some((_, jung, _)) = decompose_block(c) {
            if FRONT_JUNGSEONG.contains(&jung) {
                front += 1;
            } else if BACK_JUNGSEONG.contains(&jung) {
                back += 1;
            }
        } else {
            match latin_vowel_class(c.to_ascii_lowercase()) {
                Some(VowelClass::Front) => front += 1,
                Some(VowelClass::Back) => back += 1,
                None => {}
            }
        }
    }
    if front > back {
        VowelClass::Front
    } else {
        VowelClass::Back
    }
}

// ---------------------------------------------------------------------------
// Suffix tables
// ---------------------------------------------------------------------------

/// A suffix with front/back vowel harmony variants.
#[derive(Debug, Clone, Copy)]
pub struct HarmonySuffix {
    /// Front vowel variant (for front-class roots).
    pub front: &'static str,
    /// Back vowel variant (for back-class roots).
    pub back: &'static str,
}

impl HarmonySuffix {
    /// Select the allomorph for a harmony class.
    pub fn select(&self, class: VowelClass) -> &'static str {
        match class {
            VowelClass::Front => self.front,
            VowelClass::Back => self.back,
        }
    }
}

/// Case suffix pair. Nominative is zero-marked.
pub fn case_suffix(case: Case) -> HarmonySuffix {
    match case {
        Case::Nominative => HarmonySuffix { front: "", back: "" },
        Case::Accusative => HarmonySuffix { front: "eł", back: "oł" },
        Case::Genitive => HarmonySuffix { front: "nek", back: "nok" },
        Case::Dative => HarmonySuffix { front: "re", back: "ra" },
        Case::Locative => HarmonySuffix { front: "ben", back: "ban" },
        Case::Instrumental => HarmonySuffix { front: "vel", back: "val" },
    }
}

/// Number suffix pair. Singular is zero-marked.
pub fn number_suffix(number: Number) -> HarmonySuffix {
    match number {
        Number::Singular => HarmonySuffix { front: "", back: "" },
        Number::Plural => HarmonySuffix { front: "ek", back: "ok" },
        Number::Collective => HarmonySuffix { front: "ség", back: "ság" },
    }
}

/// Tense suffix pair.
pub fn tense_suffix(tense: Tense) -> HarmonySuffix {
    match tense {
        Tense::Past => HarmonySuffix { front: "eć", back: "ać" },
        Tense::Present => HarmonySuffix { front: "esz", back: "asz" },
        Tense::Future => HarmonySuffix { front: "ész", back: "ász" },
        Tense::Gnomic => HarmonySuffix { front: "ím", back: "ám" },
    }
}

/// Aspect suffix pair.
pub fn aspect_suffix(aspect: Aspect) -> HarmonySuffix {
    match aspect {
        Aspect::Perfective => HarmonySuffix { front: "meł", back: "moł" },
        Aspect::Imperfective => HarmonySuffix { front: "ísz", back: "ász" },
        Aspect::Iterative => HarmonySuffix { front: "géł", back: "gáł" },
    }
}

/// Evidentiality suffix pair.
pub fn evidentiality_suffix(evid: Evidentiality) -> HarmonySuffix {
    match evid {
        Evidentiality::Direct => HarmonySuffix { front: "déł", back: "dáł" },
        Evidentiality::Hearsay => HarmonySuffix { front: "kéł", back: "káł" },
        Evidentiality::Inferential => HarmonySuffix { front: "téł", back: "táł" },
        Evidentiality::Assumptive => HarmonySuffix { front: "véł", back: "váł" },
    }
}

/// Derivational suffix pair.
pub fn derivation_suffix(deriv: Derivation) -> HarmonySuffix {
    match deriv {
        Derivation::Agent => HarmonySuffix { front: "ész", back: "ász" },
        Derivation::Instrument => HarmonySuffix { front: "ény", back: "ány" },
        Derivation::Abstract => HarmonySuffix { front: "ség", back: "ság" },
        Derivation::Diminutive => HarmonySuffix { front: "ka", back: "ko" },
        Derivation::Augmentative => HarmonySuffix { front: "úł", back: "úł" },
        Derivation::VerbalNoun => HarmonySuffix { front: "ésí", back: "ásí" },
    }
}

// ---------------------------------------------------------------------------
// Inflection
// ---------------------------------------------------------------------------

/// A bundle of morphological features applied to a root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphemeBundle {
    pub case: Option<Case>,
    pub number: Option<Number>,
    pub tense: Option<Tense>,
    pub aspect: Option<Aspect>,
    pub evidentiality: Option<Evidentiality>,
    #[serde(default)]
    pub derivations: Vec<Derivation>,
}

/// A fully inflected Zyntalic word. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflectedWord {
    /// The uninflected root.
    pub root: String,
    /// The features that were applied.
    pub bundle: MorphemeBundle,
    /// The surface form after suffixation.
    pub surface: String,
    /// Reconstructible gloss: root + short codes in application order.
    pub gloss: String,
    /// Part of speech of the result.
    pub pos: PartOfSpeech,
}

/// Inflect a noun with case and number.
///
/// Suffix order: stem → number → case. Nominative and singular contribute
/// no suffix and no gloss code. Empty roots are a usage error.
pub fn inflect_noun(root: &str, case: Case, number: Number) -> Result<InflectedWord, MorphError> {
    if root.is_empty() {
        return Err(MorphError::EmptyRoot);
    }
    let class = vowel_harmony(root);

    let mut surface = root.to_string();
    let mut gloss_parts = vec![root.to_string()];

    if number != Number::Singular {
        surface.push_str(number_suffix(number).select(class));
        gloss_parts.push(number.code().to_string());
    }
    if case != Case::Nominative {
        surface.push_str(case_suffix(case).select(class));
        gloss_parts.push(case.code().to_string());
    }

    Ok(InflectedWord {
        root: root.to_string(),
        bundle: MorphemeBundle {
            case: Some(case),
            number: Some(number),
            ..MorphemeBundle::default()
        },
        surface,
        gloss: gloss_parts.join("-"),
        pos: PartOfSpeech::Noun,
    })
}

/// Inflect a verb with tense, aspect, and optional evidentiality.
///
/// Suffix order: stem → aspect → tense → evidentiality. Aspect and tense
/// are always marked on verbs.
pub fn inflect_verb(
    root: &str,
    tense: Tense,
    aspect: Aspect,
    evidentiality: Option<Evidentiality>,
) -> Result<InflectedWord, MorphError> {
    if root.is_empty() {
        return Err(MorphError::EmptyRoot);
    }
    let class = vowel_harmony(root);

    let mut surface = root.to_string();
    let mut gloss_parts = vec![root.to_string()];

    surface.push_str(aspect_suffix(aspect).select(class));
    gloss_parts.push(aspect.code().to_string());

    surface.push_str(tense_suffix(tense).select(class));
    gloss_parts.push(tense.code().to_string());

    if let Some(evid) = evidentiality {
        surface.push_str(evidentiality_suffix(evid).select(class));
        gloss_parts.push(evid.code().to_string());
    }

    Ok(InflectedWord {
        root: root.to_string(),
        bundle: MorphemeBundle {
            tense: Some(tense),
            aspect: Some(aspect),
            evidentiality,
            ..MorphemeBundle::default()
        },
        surface,
        gloss: gloss_parts.join("-"),
        pos: PartOfSpeech::Verb,
    })
}

/// Apply derivational morphology to create a new word.
pub fn derive(root: &str, derivation: Derivation) -> Result<InflectedWord, MorphError> {
    if root.is_empty() {
        return Err(MorphError::EmptyRoot);
    }
    let class = vowel_harmony(root);
    let surface = format!("{}{}", root, derivation_suffix(derivation).select(class));

    Ok(InflectedWord {
        root: root.to_string(),
        bundle: MorphemeBundle {
            derivations: vec![derivation],
            ..MorphemeBundle::default()
        },
        surface,
        gloss: format!("{}-{}", root, derivation.code()),
        pos: derivation.derived_pos(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel_harmony_latin() {
        assert_eq!(vowel_harmony("mile"), VowelClass::Front);
        assert_eq!(vowel_harmony("malo"), VowelClass::Back);
        // Tie defaults to back.
        assert_eq!(vowel_harmony("mila"), VowelClass::Back);
        // No vowels defaults to back.
        assert_eq!(vowel_harmony("szk"), VowelClass::Back);
        assert_eq!(vowel_harmony(""), VowelClass::Back);
    }

    #[test]
    fn test_vowel_harmony_neutral_y() {
        // `y` counts toward neither class.
        assert_eq!(vowel_harmony("tyki"), VowelClass::Front);
        assert_eq!(vowel_harmony("tyk"), VowelClass::Back);
    }

    #[test]
    fn test_vowel_harmony_hangul() {
        // 메 = ㅁ + ㅔ (jungseong 5, front class)
        assert_eq!(vowel_harmony("메"), VowelClass::Front);
        // 마 = ㅁ + ㅏ (jungseong 0, back class)
        assert_eq!(vowel_harmony("마"), VowelClass::Back);
        // 미 = ㅁ + ㅣ (neutral) — defaults back
        assert_eq!(vowel_harmony("미"), VowelClass::Back);
    }

    #[test]
    fn test_inflect_noun_accusative_back() {
        // All-back-vowel root must take the back accusative allomorph.
        let w = inflect_noun("malo", Case::Accusative, Number::Singular).unwrap();
        assert_eq!(w.surface, "malooł");
        assert!(w.surface.ends_with("oł"));
        assert_eq!(w.gloss, "malo-acc");
    }

    #[test]
    fn test_inflect_noun_accusative_front() {
        let w = inflect_noun("mile", Case::Accusative, Number::Singular).unwrap();
        assert_eq!(w.surface, "mileeł");
        assert!(w.surface.ends_with("eł"));
        assert_eq!(w.gloss, "mile-acc");
    }

    #[test]
    fn test_inflect_noun_nominative_singular_is_bare() {
        let w = inflect_noun("malo", Case::Nominative, Number::Singular).unwrap();
        assert_eq!(w.surface, "malo");
        assert_eq!(w.gloss, "malo");
    }

    #[test]
    fn test_inflect_noun_plural_then_case() {
        // Number suffix precedes case suffix.
        let w = inflect_noun("malo", Case::Genitive, Number::Plural).unwrap();
        assert_eq!(w.surface, "malooknok");
        assert_eq!(w.gloss, "malo-pl-gen");
    }

    #[test]
    fn test_front_root_all_suffixes_front() {
        let root = "mile";
        for case in [
            Case::Accusative,
            Case::Genitive,
            Case::Dative,
            Case::Locative,
            Case::Instrumental,
        ] {
            let w = inflect_noun(root, case, Number::Singular).unwrap();
            let suffix = case_suffix(case);
            assert!(
                w.surface.ends_with(suffix.front),
                "{:?} of front root should end with {}, got {}",
                case,
                suffix.front,
                w.surface
            );
        }
    }

    #[test]
    fn test_back_root_all_suffixes_back() {
        let root = "malo";
        for case in [
            Case::Accusative,
            Case::Genitive,
            Case::Dative,
            Case::Locative,
            Case::Instrumental,
        ] {
            let w = inflect_noun(root, case, Number::Singular).unwrap();
            let suffix = case_suffix(case);
            assert!(
                w.surface.ends_with(suffix.back),
                "{:?} of back root should end with {}, got {}",
                case,
                suffix.back,
                w.surface
            );
        }
    }

    #[test]
    fn test_inflect_verb_order() {
        // stem → aspect → tense → evidentiality
        let w = inflect_verb(
            "mondo",
            Tense::Past,
            Aspect::Perfective,
            Some(Evidentiality::Hearsay),
        )
        .unwrap();
        assert_eq!(w.surface, "mondomołaćkáł");
        assert_eq!(w.gloss, "mondo-pfv-pst-hear");
        assert_eq!(w.pos, PartOfSpeech::Verb);
    }

    #[test]
    fn test_inflect_verb_no_evidentiality() {
        let w = inflect_verb("mondo", Tense::Present, Aspect::Imperfective, None).unwrap();
        assert_eq!(w.surface, "mondoászasz");
        assert_eq!(w.gloss, "mondo-ipfv-prs");
    }

    #[test]
    fn test_derive() {
        let w = derive("mondo", Derivation::Agent).unwrap();
        assert_eq!(w.surface, "mondoász");
        assert_eq!(w.gloss, "mondo-agent");
        assert_eq!(w.pos, PartOfSpeech::Noun);

        let front = derive("mile", Derivation::Agent).unwrap();
        assert_eq!(front.surface, "mileész");
    }

    #[test]
    fn test_empty_root_is_usage_error() {
        assert_eq!(
            inflect_noun("", Case::Accusative, Number::Singular),
            Err(MorphError::EmptyRoot)
        );
        assert_eq!(
            inflect_verb("", Tense::Present, Aspect::Imperfective, None),
            Err(MorphError::EmptyRoot)
        );
        assert_eq!(derive("", Derivation::Agent), Err(MorphError::EmptyRoot));
    }

    #[test]
    fn test_derivation_from_code() {
        assert_eq!(Derivation::from_code("agent"), Ok(Derivation::Agent));
        assert_eq!(
            Derivation::from_code("verbal-noun"),
            Ok(Derivation::VerbalNoun)
        );
        assert_eq!(
            Derivation::from_code("bogus"),
            Err(MorphError::UnknownDerivation("bogus".to_string()))
        );
    }

    #[test]
    fn test_gloss_reconstructible() {
        let w = inflect_noun("malo", Case::Dative, Number::Collective).unwrap();
        assert_eq!(w.gloss, "malo-col-dat");
        let parts: Vec<&str> = w.gloss.split('-').collect();
        assert_eq!(parts[0], "malo");
        assert_eq!(parts[1], Number::Collective.code());
        assert_eq!(parts[2], Case::Dative.code());
    }
}
