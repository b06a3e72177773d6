// Anchor lexicon: per-anchor vocabulary lists loaded from embedded JSON.
//
// Each cultural anchor (a literary work) carries a small word list split by
// category (nouns/verbs/adjectives). The anchor weighting component samples
// these lists to build anchor embeddings, and the rendering engines draw
// from them to bias vocabulary toward the highest-weighted anchors.
//
// Follows the same pattern as the pipeline config: JSON string in, typed
// struct out, with `default_lexicon()` embedding the shipped data at
// compile time. Entry order from the JSON file is preserved for
// deterministic iteration.

use serde::{Deserialize, Serialize};

/// One anchor's vocabulary entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnchorEntry {
    /// Anchor identifier, e.g. "Shakespeare_Sonnets".
    pub id: String,
    #[serde(default)]
    pub nouns: Vec<String>,
    #[serde(default)]
    pub verbs: Vec<String>,
    #[serde(default)]
    pub adjectives: Vec<String>,
}

impl AnchorEntry {
    /// A short representative sample of this anchor's vocabulary: up to five
    /// words from each category, falling back to the id with underscores
    /// spaced out when the lists are empty.
    pub fn vocabulary_sample(&self) -> String {
        let mut words: Vec<&str> = Vec::new();
        words.extend(self.adjectives.iter().take(5).map(String::as_str));
        words.extend(self.nouns.iter().take(5).map(String::as_str));
        words.extend(self.verbs.iter().take(5).map(String::as_str));
        if words.is_empty() {
            self.id.replace('_', " ")
        } else {
            words.join(" ")
        }
    }
}

/// The top-level JSON structure for the lexicon file.
#[derive(Debug, Deserialize)]
struct LexiconFile {
    anchors: Vec<AnchorEntry>,
}

/// A loaded anchor lexicon with query methods.
///
/// Constructed from JSON via `from_json()`. Preserves entry order from the
/// JSON file for deterministic iteration (anchor ranking ties break by
/// file order).
#[derive(Debug, Clone)]
pub struct AnchorLexicon {
    entries: Vec<AnchorEntry>,
}

impl AnchorLexicon {
    /// Parse a lexicon from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let file: LexiconFile = serde_json::from_str(json)?;
        Ok(AnchorLexicon {
            entries: file.anchors,
        })
    }

    /// All entries, in file order.
    pub fn all(&self) -> &[AnchorEntry] {
        &self.entries
    }

    /// Look up an anchor by id.
    pub fn get(&self, id: &str) -> Option<&AnchorEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// All anchor ids, in file order.
    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.id.as_str()).collect()
    }
}

/// Load the default anchor lexicon embedded at compile time.
///
/// Uses `include_str!` to embed `data/anchor_lexicon.json`. Panics if the
/// embedded JSON is malformed (should never happen in a released build).
pub fn default_lexicon() -> AnchorLexicon {
    let json = include_str!("../../data/anchor_lexicon.json");
    AnchorLexicon::from_json(json).expect("embedded anchor_lexicon.json is malformed")
}
