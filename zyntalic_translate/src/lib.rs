// Zyntalic translation pipeline.
//
// Maps arbitrary input text to a stable Zyntalic surface form by composing
// deterministic sub-generators: anchor-based semantic weighting, seeded
// word synthesis with morphological inflection (from `zyntalic_lang`), and
// S-O-V-C syntactic linearization with a trailing context-tail block.
// Given the same input and configuration, the output is byte-identical
// across runs and machines.
//
// Architecture:
// - `config.rs`: `PipelineConfig` — every tunable, JSON-loadable
// - `anchors.rs`: `Encoder` trait + deterministic `HashEncoder`,
//   precomputed `AnchorIndex`, cosine-ranked anchor weighting
// - `syntax.rs`: tokenizer and the S-O-V-C parse state machine over the
//   closed verb/marker sets
// - `tail.rs`: the ⟦ctx:…⟧ context-tail block
// - `translate.rs`: the `Translator`, rendering engines (core, chiasmus,
//   transformer), and the `translate_text` / `translate_sentence` surface
// - `main.rs`: the `zyntalic` CLI binary
//
// Concurrency: the pipeline is synchronous with no shared mutable state.
// A `Translator` is built once (anchor index and lexicon precomputed) and
// is read-only afterwards, so independent calls may run fully in parallel.

pub mod anchors;
pub mod config;
pub mod syntax;
pub mod tail;
pub mod translate;

// Re-export the public surface at crate root.
pub use anchors::{AnchorIndex, Encoder, HashEncoder};
pub use config::{ConfigError, PipelineConfig};
pub use syntax::{parse_sentence, ContextClause, ContextKind, ParsedSentence};
pub use translate::{
    translate_sentence, translate_text, Engine, TranslateError, TranslationRecord, Translator,
};
