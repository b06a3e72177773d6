// Context-tail assembly.
//
// Every rendered sentence ends with a delimiter-bounded metadata block:
//
//   ⟦ctx:han=<tail token>; lemma=<lemma>; pos=<pos>; anchors=<top anchor>⟧
//
// The tail is a semicolon-separated list of key=value pairs inside the
// ⟦⟧ bracket pair. It always carries a synthesized tail token and the
// lemma; the part of speech and the top-ranked anchor are appended when
// known. The tail token is a two-syllable Hangul-skewed word keyed by the
// lemma, so the same lemma always carries the same tail.

use zyntalic_lang::phonology::synthesize_word;
use zyntalic_lang::{PartOfSpeech, SynthesisParams};

/// Opening delimiter of the context tail.
pub const TAIL_OPEN: &str = "⟦ctx:";
/// Closing delimiter of the context tail.
pub const TAIL_CLOSE: &str = "⟧";

/// Synthesize the Hangul-skewed tail token for a lemma.
pub fn make_tail_token(seed: &str, params: &SynthesisParams) -> String {
    // Noun profile: Hangul-heavy, matching the tail's Korean-style texture.
    synthesize_word(&format!("tail:{seed}"), 2, PartOfSpeech::Noun, params)
}

/// Render the full context tail for a sentence.
///
/// `seed` keys the tail token (the lemma, or the source sentence when no
/// lemma could be extracted). The lemma is embedded as-is, even when empty.
pub fn render_context_tail(
    seed: &str,
    lemma: &str,
    pos: PartOfSpeech,
    top_anchor: Option<&str>,
    params: &SynthesisParams,
) -> String {
    let han = make_tail_token(seed, params);
    match top_anchor {
        Some(anchor) => format!(
            "{TAIL_OPEN}han={han}; lemma={lemma}; pos={}; anchors={anchor}{TAIL_CLOSE}",
            pos.code()
        ),
        None => format!(
            "{TAIL_OPEN}han={han}; lemma={lemma}; pos={}{TAIL_CLOSE}",
            pos.code()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_token_deterministic() {
        let params = SynthesisParams::default();
        assert_eq!(
            make_tail_token("love", &params),
            make_tail_token("love", &params)
        );
        assert_ne!(
            make_tail_token("love", &params),
            make_tail_token("war", &params)
        );
    }

    #[test]
    fn test_tail_well_formed() {
        let params = SynthesisParams::default();
        let tail = render_context_tail(
            "love",
            "love",
            PartOfSpeech::Verb,
            Some("Shakespeare_Sonnets"),
            &params,
        );
        assert!(tail.starts_with(TAIL_OPEN));
        assert!(tail.ends_with(TAIL_CLOSE));
        assert!(tail.contains("lemma=love"));
        assert!(tail.contains("pos=verb"));
        assert!(tail.contains("anchors=Shakespeare_Sonnets"));
        assert!(tail.contains("han="));
        // Exactly one open and one close delimiter.
        assert_eq!(tail.matches(TAIL_OPEN).count(), 1);
        assert_eq!(tail.matches(TAIL_CLOSE).count(), 1);
    }

    #[test]
    fn test_tail_without_anchor() {
        let params = SynthesisParams::default();
        let tail = render_context_tail("x", "x", PartOfSpeech::Noun, None, &params);
        assert!(tail.contains("pos=noun"));
        assert!(!tail.contains("anchors="));
    }
}
