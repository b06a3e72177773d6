// Anchor weighting: embedding backends and cosine-ranked cultural anchors.
//
// Every input sentence is embedded into a fixed-dimension vector and
// compared against precomputed embeddings of the cultural anchors (literary
// works with small vocabularies in the anchor lexicon). The top-ranked
// anchors, with fixed decaying weights, bias word synthesis downstream.
//
// The embedding backend is an injected dependency behind the `Encoder`
// trait, constructed once at startup and passed by reference — never a
// lazily-initialized global. The shipped backend is `HashEncoder`: a
// deterministic, input-stable pseudo-embedding seeded from a blake3 hash of
// the text. A learned sentence encoder can replace it behind the same
// trait; whichever backend is constructed is used exclusively for the whole
// run, so identical text always yields identical rankings.

use zyntalic_lang::AnchorLexicon;
use zyntalic_prng::ZynRng;

/// An embedding backend. Implementations must be pure functions of the
/// input text for the lifetime of the process.
pub trait Encoder: Send + Sync {
    /// The fixed dimension of produced vectors.
    fn dim(&self) -> usize;
    /// Embed a text into a `dim()`-length vector.
    fn encode(&self, text: &str) -> Vec<f32>;
    /// Backend name, for logging.
    fn name(&self) -> &'static str;
}

/// Deterministic fallback encoder: hashes the text to seed a generator
/// producing a pseudo-random but input-stable vector.
#[derive(Debug, Clone)]
pub struct HashEncoder {
    dim: usize,
}

impl HashEncoder {
    pub fn new(dim: usize) -> Self {
        HashEncoder { dim }
    }
}

impl Encoder for HashEncoder {
    fn dim(&self) -> usize {
        self.dim
    }

    fn encode(&self, text: &str) -> Vec<f32> {
        let mut rng = ZynRng::from_key(&format!("embed:{text}"));
        (0..self.dim).map(|_| rng.next_f32()).collect()
    }

    fn name(&self) -> &'static str {
        "hash"
    }
}

/// Cosine similarity between two vectors of equal length.
///
/// Returns 0 for zero-magnitude inputs rather than dividing by zero.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (&x, &y) in a.iter().zip(b.iter()) {
        dot += f64::from(x) * f64::from(y);
        norm_a += f64::from(x) * f64::from(x);
        norm_b += f64::from(y) * f64::from(y);
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Precomputed anchor embeddings, built once at startup and read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct AnchorIndex {
    anchors: Vec<(String, Vec<f32>)>,
}

impl AnchorIndex {
    /// Embed every anchor's vocabulary sample. Anchor order follows the
    /// lexicon file, which also serves as the tiebreak order for ranking.
    pub fn build(encoder: &dyn Encoder, lexicon: &AnchorLexicon) -> Self {
        let anchors = lexicon
            .all()
            .iter()
            .map(|entry| (entry.id.clone(), encoder.encode(&entry.vocabulary_sample())))
            .collect();
        AnchorIndex { anchors }
    }

    /// Number of indexed anchors.
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Embed `text` and rank anchors by cosine similarity.
    ///
    /// Returns the text embedding and the top-k anchors with decaying
    /// weights (`decay[0]` for the best match, and so on; `k` is capped by
    /// both the decay table and the anchor count). Weights are strictly
    /// decreasing by rank and sum to at most 1.
    pub fn weigh(
        &self,
        encoder: &dyn Encoder,
        text: &str,
        top_k: usize,
        decay: &[f64],
    ) -> (Vec<f32>, Vec<(String, f64)>) {
        let embedding = encoder.encode(text);

        let mut scored: Vec<(usize, f64)> = self
            .anchors
            .iter()
            .enumerate()
            .map(|(i, (_, vec))| (i, cosine_similarity(&embedding, vec)))
            .collect();
        // Stable sort: equal similarities keep lexicon file order.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let k = top_k.min(decay.len()).min(scored.len());
        let ranked = scored[..k]
            .iter()
            .zip(decay.iter())
            .map(|(&(i, _), &w)| (self.anchors[i].0.clone(), w))
            .collect();

        (embedding, ranked)
    }
}
