// English parsing into S-O-V-C slots.
//
// A stable heuristic, not a full NLP parser: it tokenizes, locates the main
// verb, then runs an explicit state machine over the token array to assign
// every token to subject / object / context. The closed verb and
// context-marker sets live here as data so they are easy to test
// exhaustively.
//
// State machine:
//   SeekingVerb — before any subject material has been collected
//   InSubject   — collecting subject tokens, still left of the verb
//   InObject    — right of the verb, before the first context marker
//   InContext   — inside a marker-introduced context clause
//
// Failure semantics: a sentence with no recognizable verb treats the token
// midpoint as the verb instead of raising; an empty sentence parses to an
// all-empty `ParsedSentence` and is filtered upstream.

use serde::{Deserialize, Serialize};
use zyntalic_lang::Tense;

// ---------------------------------------------------------------------------
// Closed word sets
// ---------------------------------------------------------------------------

/// Common English verbs (base, 3rd person, and past forms).
pub const COMMON_VERBS: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "do", "does", "did",
    "say", "says", "said", "make", "makes", "made", "go", "goes", "went",
    "see", "sees", "saw", "know", "knows", "knew", "think", "thinks", "thought",
    "take", "takes", "took", "come", "comes", "came", "want", "wants", "wanted",
    "use", "uses", "used", "find", "finds", "found", "give", "gives", "gave",
    "tell", "tells", "told", "work", "works", "worked", "call", "calls", "called",
    "try", "tries", "tried", "ask", "asks", "asked", "need", "needs", "needed",
    "feel", "feels", "felt", "become", "becomes", "became", "leave", "leaves", "left",
    "put", "puts", "keep", "keeps", "kept", "let", "lets",
    "begin", "begins", "began", "seem", "seems", "help", "helps", "helped",
    "talk", "talks", "talked", "turn", "turns", "turned", "start", "starts", "started",
    "show", "shows", "showed", "play", "plays", "played", "move", "moves", "moved",
    "live", "lives", "lived", "believe", "believes", "believed",
    "bring", "brings", "brought", "write", "writes", "wrote",
    "sit", "sits", "sat", "stand", "stands", "stood",
    "walk", "walks", "walked", "love", "loves", "loved", "sing", "sings", "sang",
];

/// Irregular past forms that carry past tense without an `-ed` ending.
const IRREGULAR_PAST: &[&str] = &["was", "were", "had", "did"];

/// Semantic classification of a context clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextKind {
    Temporal,
    Spatial,
    Causal,
    Conditional,
    Modal,
    Evidential,
}

impl ContextKind {
    pub fn code(self) -> &'static str {
        match self {
            ContextKind::Temporal => "temp",
            ContextKind::Spatial => "spat",
            ContextKind::Causal => "caus",
            ContextKind::Conditional => "cond",
            ContextKind::Modal => "modal",
            ContextKind::Evidential => "evid",
        }
    }
}

/// A context marker: the English word that introduces a context clause,
/// its semantic kind, and (where the marker table fixes one) its Zyntalic
/// translation. Markers without a fixed translation synthesize one keyed
/// by the marker string.
#[derive(Debug, Clone, Copy)]
pub struct ContextMarker {
    pub english: &'static str,
    pub kind: ContextKind,
    pub zyntalic: Option<&'static str>,
}

/// The closed set of context markers (prepositions and subordinators).
pub const CONTEXT_MARKERS: &[ContextMarker] = &[
    // Temporal
    ContextMarker { english: "when", kind: ContextKind::Temporal, zyntalic: Some("뛀쨮") },
    ContextMarker { english: "while", kind: ContextKind::Temporal, zyntalic: Some("뚧홧") },
    ContextMarker { english: "after", kind: ContextKind::Temporal, zyntalic: Some("켓뚜") },
    ContextMarker { english: "before", kind: ContextKind::Temporal, zyntalic: Some("쾏뫼") },
    ContextMarker { english: "during", kind: ContextKind::Temporal, zyntalic: None },
    // Spatial
    ContextMarker { english: "in", kind: ContextKind::Spatial, zyntalic: Some("홍뛸") },
    ContextMarker { english: "on", kind: ContextKind::Spatial, zyntalic: Some("뷠콮") },
    ContextMarker { english: "at", kind: ContextKind::Spatial, zyntalic: Some("멷뚺") },
    ContextMarker { english: "from", kind: ContextKind::Spatial, zyntalic: None },
    ContextMarker { english: "to", kind: ContextKind::Spatial, zyntalic: None },
    ContextMarker { english: "over", kind: ContextKind::Spatial, zyntalic: None },
    ContextMarker { english: "under", kind: ContextKind::Spatial, zyntalic: None },
    ContextMarker { english: "into", kind: ContextKind::Spatial, zyntalic: None },
    ContextMarker { english: "onto", kind: ContextKind::Spatial, zyntalic: None },
    ContextMarker { english: "between", kind: ContextKind::Spatial, zyntalic: None },
    ContextMarker { english: "within", kind: ContextKind::Spatial, zyntalic: None },
    // Causal
    ContextMarker { english: "because", kind: ContextKind::Causal, zyntalic: Some("룏딲") },
    ContextMarker { english: "since", kind: ContextKind::Causal, zyntalic: None },
    ContextMarker { english: "as", kind: ContextKind::Causal, zyntalic: None },
    ContextMarker { english: "by", kind: ContextKind::Causal, zyntalic: None },
    // Conditional
    ContextMarker { english: "if", kind: ContextKind::Conditional, zyntalic: Some("솻뷨") },
    ContextMarker { english: "unless", kind: ContextKind::Conditional, zyntalic: None },
    // Modal
    ContextMarker { english: "with", kind: ContextKind::Modal, zyntalic: None },
    ContextMarker { english: "without", kind: ContextKind::Modal, zyntalic: None },
    ContextMarker { english: "against", kind: ContextKind::Modal, zyntalic: None },
    ContextMarker { english: "through", kind: ContextKind::Modal, zyntalic: None },
    // Evidential
    ContextMarker { english: "apparently", kind: ContextKind::Evidential, zyntalic: None },
    ContextMarker { english: "reportedly", kind: ContextKind::Evidential, zyntalic: None },
];

/// Look up a (lowercased) token in the context-marker table.
pub fn context_marker(word: &str) -> Option<&'static ContextMarker> {
    CONTEXT_MARKERS.iter().find(|m| m.english == word)
}

// ---------------------------------------------------------------------------
// Parse result
// ---------------------------------------------------------------------------

/// A context clause keyed by its introducing marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextClause {
    /// The English marker that introduced the clause (lowercased).
    pub marker: String,
    /// Semantic classification of the clause.
    pub kind: ContextKind,
    /// Clause content after the marker, space-joined.
    pub content: String,
}

/// One parsed English sentence in S-O-V-C slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSentence {
    pub subject: String,
    pub verb: String,
    pub object: String,
    pub contexts: Vec<ContextClause>,
    pub tense: Option<Tense>,
    pub subj_plural: bool,
    pub obj_plural: bool,
}

// ---------------------------------------------------------------------------
// Tokenizer and heuristics
// ---------------------------------------------------------------------------

/// Split on word boundaries, keeping apostrophes and hyphens inside words.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut buff = String::new();
    for ch in text.trim().chars() {
        if ch.is_alphanumeric() || ch == '\'' || ch == '’' || ch == '-' {
            buff.push(ch);
        } else if !buff.is_empty() {
            out.push(std::mem::take(&mut buff));
        }
    }
    if !buff.is_empty() {
        out.push(buff);
    }
    out
}

/// Locate the main verb index.
///
/// Preference order: the token after an explicit `will`; the first token in
/// the closed verb list or with a verbal ending; the token midpoint as a
/// last resort.
fn find_verb_index(low: &[String]) -> usize {
    if let Some(i) = low.iter().position(|t| t == "will") {
        if i + 1 < low.len() {
            return i + 1;
        }
    }

    for (i, t) in low.iter().enumerate() {
        if COMMON_VERBS.contains(&t.as_str()) {
            return i;
        }
        if (t.ends_with("ed") || t.ends_with("ing")) && t.chars().count() > 3 {
            return i;
        }
        // Naive 3rd person present: "walks" matches via "walk".
        if t.ends_with('s') && t.chars().count() > 3 && COMMON_VERBS.contains(&&t[..t.len() - 1]) {
            return i;
        }
    }

    low.len() / 2
}

/// Infer tense from an auxiliary, past morphology, or default present.
fn guess_tense(low: &[String], verb_idx: usize) -> Tense {
    if low[..=verb_idx.min(low.len() - 1)].iter().any(|t| t == "will") {
        return Tense::Future;
    }
    let v = low.get(verb_idx).map(String::as_str).unwrap_or("");
    if v.ends_with("ed") || IRREGULAR_PAST.contains(&v) {
        return Tense::Past;
    }
    Tense::Present
}

/// Guess whether a phrase is plural from its final word.
fn guess_plural(phrase: &str) -> bool {
    let Some(last) = phrase.split_whitespace().next_back() else {
        return false;
    };
    let last = last.to_lowercase();
    last.ends_with('s')
        && !last.ends_with("ss")
        && !last.ends_with("us")
        && !last.ends_with("is")
}

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

/// Named parser states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    SeekingVerb,
    InSubject,
    InObject,
    InContext,
}

/// Parse an English sentence into S-O-V-C slots.
pub fn parse_sentence(text: &str) -> ParsedSentence {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return ParsedSentence::default();
    }
    let low: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();

    let verb_idx = find_verb_index(&low);
    let tense = guess_tense(&low, verb_idx);

    let mut subject_tokens: Vec<&str> = Vec::new();
    let mut object_tokens: Vec<&str> = Vec::new();
    let mut verb = String::new();
    let mut contexts: Vec<(usize, Vec<&str>)> = Vec::new(); // (marker table idx, content)

    let mut state = ParseState::SeekingVerb;
    for (i, tok) in tokens.iter().enumerate() {
        match state {
            ParseState::SeekingVerb | ParseState::InSubject => {
                if i == verb_idx {
                    verb = tok.clone();
                    state = ParseState::InObject;
                } else if context_marker(&low[i]).is_none() {
                    // Pre-verb markers are excluded from the subject.
                    subject_tokens.push(tok);
                    state = ParseState::InSubject;
                }
            }
            ParseState::InObject => {
                if let Some(idx) = CONTEXT_MARKERS.iter().position(|m| m.english == low[i]) {
                    contexts.push((idx, Vec::new()));
                    state = ParseState::InContext;
                } else {
                    object_tokens.push(tok);
                }
            }
            ParseState::InContext => {
                if let Some(idx) = CONTEXT_MARKERS.iter().position(|m| m.english == low[i]) {
                    contexts.push((idx, Vec::new()));
                } else if let Some((_, content)) = contexts.last_mut() {
                    content.push(tok);
                }
            }
        }
    }

    let subject = subject_tokens.join(" ");
    let object = object_tokens.join(" ");
    let subj_plural = guess_plural(&subject);
    let obj_plural = guess_plural(&object);

    ParsedSentence {
        subject,
        verb,
        object,
        contexts: contexts
            .into_iter()
            .map(|(idx, content)| {
                let marker = &CONTEXT_MARKERS[idx];
                ContextClause {
                    marker: marker.english.to_string(),
                    kind: marker.kind,
                    content: content.join(" "),
                }
            })
            .collect(),
        tense: Some(tense),
        subj_plural,
        obj_plural,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_keeps_internal_punctuation() {
        assert_eq!(
            tokenize("I don't know self-doubt."),
            vec!["I", "don't", "know", "self-doubt"]
        );
        assert_eq!(tokenize(""), Vec::<String>::new());
        assert_eq!(tokenize("  hello   world  "), vec!["hello", "world"]);
    }

    #[test]
    fn test_parse_simple_svo() {
        let p = parse_sentence("I see the river.");
        assert_eq!(p.subject, "I");
        assert_eq!(p.verb, "see");
        assert_eq!(p.object, "the river");
        assert!(p.contexts.is_empty());
        assert_eq!(p.tense, Some(Tense::Present));
    }

    #[test]
    fn test_parse_context_clause() {
        let p = parse_sentence("I see the river at night.");
        assert_eq!(p.subject, "I");
        assert_eq!(p.verb, "see");
        assert_eq!(p.object, "the river");
        assert_eq!(p.contexts.len(), 1);
        assert_eq!(p.contexts[0].marker, "at");
        assert_eq!(p.contexts[0].kind, ContextKind::Spatial);
        assert_eq!(p.contexts[0].content, "night");
    }

    #[test]
    fn test_parse_multiple_context_clauses() {
        let p = parse_sentence("She walked home after dusk because rain fell");
        assert_eq!(p.verb, "walked");
        assert_eq!(p.contexts.len(), 2);
        assert_eq!(p.contexts[0].marker, "after");
        assert_eq!(p.contexts[0].kind, ContextKind::Temporal);
        assert_eq!(p.contexts[1].marker, "because");
        assert_eq!(p.contexts[1].kind, ContextKind::Causal);
        assert_eq!(p.contexts[1].content, "rain fell");
    }

    #[test]
    fn test_future_with_will() {
        let p = parse_sentence("The birds will sing at dawn.");
        assert_eq!(p.verb, "sing");
        assert_eq!(p.tense, Some(Tense::Future));
        // The auxiliary is not a context marker, so it stays in the
        // subject slot; only the token after it becomes the verb.
        assert_eq!(p.subject, "The birds will");
    }

    #[test]
    fn test_past_from_morphology() {
        let p = parse_sentence("They walked home.");
        assert_eq!(p.tense, Some(Tense::Past));
        let p2 = parse_sentence("He was here.");
        assert_eq!(p2.tense, Some(Tense::Past));
    }

    #[test]
    fn test_verbless_sentence_uses_midpoint() {
        let p = parse_sentence("Red autumn leaf");
        // No verb recognized; the midpoint token serves as the verb.
        assert_eq!(p.verb, "autumn");
        assert_eq!(p.subject, "Red");
        assert_eq!(p.object, "leaf");
    }

    #[test]
    fn test_empty_sentence_parses_empty() {
        let p = parse_sentence("   ");
        assert_eq!(p, ParsedSentence::default());
    }

    #[test]
    fn test_pre_verb_marker_excluded_from_subject() {
        let p = parse_sentence("In winter the lake was frozen.");
        assert_eq!(p.subject, "winter the lake");
        assert_eq!(p.verb, "was");
        assert_eq!(p.object, "frozen");
        assert_eq!(p.tense, Some(Tense::Past));
    }

    #[test]
    fn test_plural_guess() {
        assert!(guess_plural("the rivers"));
        assert!(!guess_plural("the glass"));
        assert!(!guess_plural("the cactus"));
        assert!(!guess_plural("the thesis"));
        assert!(!guess_plural(""));
    }

    #[test]
    fn test_marker_table_is_consistent() {
        // Every marker is lowercase and unique.
        let mut seen = std::collections::BTreeSet::new();
        for m in CONTEXT_MARKERS {
            assert_eq!(m.english, m.english.to_lowercase());
            assert!(seen.insert(m.english), "duplicate marker {}", m.english);
        }
        assert!(context_marker("because").is_some());
        assert!(context_marker("banana").is_none());
    }

    #[test]
    fn test_third_person_s_detected() {
        let p = parse_sentence("The cat walks in the garden.");
        assert_eq!(p.verb, "walks");
        assert_eq!(p.subject, "The cat");
        assert_eq!(p.contexts.len(), 1);
        assert_eq!(p.contexts[0].content, "the garden");
    }
}
