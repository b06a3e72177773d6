// The translation orchestrator: engines, per-slot rendering, and the
// public `translate_text` / `translate_sentence` surface.
//
// Per sentence the pipeline runs: lemma extraction → anchor weighting →
// S-O-V-C parse → per-slot word rendering (mirror-rate scaffolding vs.
// synthesized vocabulary, biased by anchor weights) → S-O-V-C assembly →
// context tail. Three rendering engines share that skeleton:
//
// - `core`        — the baseline rule composition
// - `chiasmus`    — stylistically mirrored variant (clause + inverted echo)
// - `transformer` — anchor-driven variant via the injected encoder
//
// Alternate-engine failure falls back to `core` for that one sentence; the
// record's `engine` field reports the engine that actually produced the
// output (see DESIGN.md). Malformed calls — out-of-range mirror rate,
// unknown engine name — fail fast with a typed error before any synthesis.
//
// Determinism: one `ZynRng` per sentence, keyed by the sentence text, plus
// one per synthesized word inside `zyntalic_lang`. No ambient state; a
// `Translator` is immutable after construction and safe to share across
// threads.

use serde::Serialize;
use thiserror::Error;

use zyntalic_lang::morphology::{inflect_noun, inflect_verb};
use zyntalic_lang::phonology::{syllable_count_for, synthesize_word};
use zyntalic_lang::{default_lexicon, AnchorLexicon, Aspect, Case, Number, PartOfSpeech, Tense};
use zyntalic_prng::ZynRng;

use crate::anchors::{AnchorIndex, Encoder, HashEncoder};
use crate::config::PipelineConfig;
use crate::syntax::{parse_sentence, ContextClause, ParsedSentence};
use crate::tail::render_context_tail;

/// Rendering strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    /// Baseline rule composition with anchor mixing.
    Core,
    /// Stylistically mirrored rendering.
    Chiasmus,
    /// Anchor-driven rendering through the embedding backend.
    Transformer,
}

impl Engine {
    /// Parse an engine name. Unknown names are a usage error.
    pub fn parse(name: &str) -> Result<Engine, TranslateError> {
        match name {
            "core" => Ok(Engine::Core),
            "chiasmus" => Ok(Engine::Chiasmus),
            "transformer" => Ok(Engine::Transformer),
            other => Err(TranslateError::UnknownEngine(other.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Engine::Core => "core",
            Engine::Chiasmus => "chiasmus",
            Engine::Transformer => "transformer",
        }
    }
}

/// Usage errors from the translation API. Reported immediately, never
/// retried or silently substituted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TranslateError {
    #[error("mirror rate must be a finite value in [0, 1], got {0}")]
    MirrorRateOutOfRange(f64),
    #[error("unknown engine: {0}")]
    UnknownEngine(String),
}

/// The externally visible unit of work: one translated sentence.
/// Immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationRecord {
    /// The original sentence.
    pub source: String,
    /// The rendered Zyntalic string, context tail included.
    pub target: String,
    /// First normalized content word of the source.
    pub lemma: String,
    /// Ranked (anchor id, weight) pairs that biased this rendering.
    pub anchors: Vec<(String, f64)>,
    /// The engine that actually produced `target`.
    pub engine: String,
}

/// The translation pipeline, constructed once and then read-only.
pub struct Translator {
    config: PipelineConfig,
    encoder: Box<dyn Encoder>,
    index: AnchorIndex,
    lexicon: AnchorLexicon,
}

impl Translator {
    /// Build a translator with the deterministic hash encoder.
    pub fn new(config: PipelineConfig) -> Self {
        let encoder: Box<dyn Encoder> = Box::new(HashEncoder::new(config.embedding_dim));
        Self::with_encoder(config, encoder)
    }

    /// Build a translator around an injected embedding backend.
    ///
    /// The backend is used exclusively for the whole life of this
    /// translator; the two backends are never mixed within one run.
    pub fn with_encoder(config: PipelineConfig, encoder: Box<dyn Encoder>) -> Self {
        let lexicon = default_lexicon();
        let index = AnchorIndex::build(&*encoder, &lexicon);
        log::debug!(
            "translator ready: encoder={}, {} anchors indexed",
            encoder.name(),
            index.len()
        );
        Translator {
            config,
            encoder,
            index,
            lexicon,
        }
    }

    /// Translate multi-sentence text into a list of records.
    ///
    /// Splits on terminal punctuation (`.`, `!`, `?`); every non-empty
    /// sentence yields exactly one record. Empty input yields an empty
    /// list. Fails fast on malformed parameters before any synthesis.
    pub fn translate_text(
        &self,
        text: &str,
        mirror_rate: f64,
        engine: &str,
    ) -> Result<Vec<TranslationRecord>, TranslateError> {
        let engine = Engine::parse(engine)?;
        validate_mirror_rate(mirror_rate)?;

        Ok(split_sentences(text)
            .iter()
            .map(|sentence| self.render_record(sentence, mirror_rate, engine))
            .collect())
    }

    /// Translate a single sentence to a structured record.
    pub fn translate_sentence(
        &self,
        text: &str,
        mirror_rate: f64,
        engine: &str,
    ) -> Result<TranslationRecord, TranslateError> {
        let engine = Engine::parse(engine)?;
        validate_mirror_rate(mirror_rate)?;
        Ok(self.render_record(text.trim(), mirror_rate, engine))
    }

    // -- rendering ---------------------------------------------------------

    /// Render one sentence with the requested engine, falling back to the
    /// baseline when an alternate engine cannot produce output.
    fn render_record(&self, src: &str, mirror_rate: f64, engine: Engine) -> TranslationRecord {
        let lemma = clean_lemma(src);

        let attempt = match engine {
            Engine::Core => Some(self.render_core(src, &lemma, mirror_rate)),
            Engine::Chiasmus => self.render_chiasmus(src, &lemma, mirror_rate),
            Engine::Transformer => self.render_transformer(src, &lemma, mirror_rate),
        };

        match attempt {
            Some((target, anchors)) => TranslationRecord {
                source: src.to_string(),
                target,
                lemma,
                anchors,
                engine: engine.name().to_string(),
            },
            None => {
                log::debug!("engine {} fell back to core for: {src}", engine.name());
                let (target, anchors) = self.render_core(src, &lemma, mirror_rate);
                TranslationRecord {
                    source: src.to_string(),
                    target,
                    lemma,
                    anchors,
                    engine: Engine::Core.name().to_string(),
                }
            }
        }
    }

    /// Baseline composition: parse, render each slot, assemble S-O-V-C,
    /// append the context tail.
    fn render_core(&self, src: &str, lemma: &str, mirror_rate: f64) -> (String, Vec<(String, f64)>) {
        let (_, anchors) = self.index.weigh(
            &*self.encoder,
            src,
            self.config.anchor_top_k,
            &self.config.anchor_decay,
        );
        let parsed = parse_sentence(src);
        let mut rng = ZynRng::from_key(&format!("sent:{src}"));

        let mut parts = self.render_slots(&parsed, &anchors, mirror_rate, &mut rng);
        parts.push(self.render_tail(src, lemma, &parsed, &anchors));

        (parts.join(" "), anchors)
    }

    /// Mirrored rendering: the core clause followed by an inverted echo
    /// (verb–object–subject) around a pivot particle. Requires a non-empty
    /// clause; otherwise the caller falls back to the baseline.
    fn render_chiasmus(
        &self,
        src: &str,
        lemma: &str,
        mirror_rate: f64,
    ) -> Option<(String, Vec<(String, f64)>)> {
        let (_, anchors) = self.index.weigh(
            &*self.encoder,
            src,
            self.config.anchor_top_k,
            &self.config.anchor_decay,
        );
        let parsed = parse_sentence(src);
        let mut rng = ZynRng::from_key(&format!("sent:{src}"));

        let forward = self.render_slots(&parsed, &anchors, mirror_rate, &mut rng);
        if forward.is_empty() {
            return None;
        }

        let pivot = synthesize_word(
            "ctx:chiasmus-pivot",
            1,
            PartOfSpeech::Particle,
            &self.config.synthesis,
        );
        let mut parts = forward.clone();
        parts.push(pivot);
        parts.extend(forward.into_iter().rev());
        parts.push(self.render_tail(src, lemma, &parsed, &anchors));

        Some((parts.join(" "), anchors))
    }

    /// Anchor-driven rendering: top-2 semantic match through the encoder,
    /// with every synthesized word seeded from the matched anchors'
    /// vocabulary. Requires usable anchor vocabulary; otherwise the caller
    /// falls back to the baseline.
    fn render_transformer(
        &self,
        src: &str,
        lemma: &str,
        mirror_rate: f64,
    ) -> Option<(String, Vec<(String, f64)>)> {
        let (_, anchors) = self.index.weigh(
            &*self.encoder,
            src,
            self.config.semantic_decay.len(),
            &self.config.semantic_decay,
        );
        let usable = anchors.iter().any(|(id, _)| {
            self.lexicon
                .get(id)
                .is_some_and(|e| !e.nouns.is_empty() || !e.verbs.is_empty())
        });
        if !usable {
            return None;
        }

        let parsed = parse_sentence(src);
        let mut rng = ZynRng::from_key(&format!("sem:{src}"));

        // Force anchor lending: the anchor weights are treated as a
        // distribution over which matched anchor seeds each word.
        let mut parts = self.render_slots_with_bias(&parsed, &anchors, mirror_rate, 1.0, &mut rng);
        if parts.is_empty() {
            return None;
        }
        parts.push(self.render_tail(src, lemma, &parsed, &anchors));

        Some((parts.join(" "), anchors))
    }

    /// Render subject, object, verb, and context clauses, in that order.
    /// Empty slots contribute nothing — never a placeholder.
    fn render_slots(
        &self,
        parsed: &ParsedSentence,
        anchors: &[(String, f64)],
        mirror_rate: f64,
        rng: &mut ZynRng,
    ) -> Vec<String> {
        let bias = anchors.first().map(|(_, w)| *w).unwrap_or(0.0);
        self.render_slots_with_bias(parsed, anchors, mirror_rate, bias, rng)
    }

    fn render_slots_with_bias(
        &self,
        parsed: &ParsedSentence,
        anchors: &[(String, f64)],
        mirror_rate: f64,
        anchor_bias: f64,
        rng: &mut ZynRng,
    ) -> Vec<String> {
        let mut parts: Vec<String> = Vec::new();

        if !parsed.subject.is_empty() {
            parts.push(self.render_noun_phrase(
                &parsed.subject,
                Case::Nominative,
                parsed.subj_plural,
                anchors,
                mirror_rate,
                anchor_bias,
                rng,
            ));
        }
        if !parsed.object.is_empty() {
            parts.push(self.render_noun_phrase(
                &parsed.object,
                Case::Accusative,
                parsed.obj_plural,
                anchors,
                mirror_rate,
                anchor_bias,
                rng,
            ));
        }
        if !parsed.verb.is_empty() {
            parts.push(self.render_verb(
                &parsed.verb,
                parsed.tense.unwrap_or(Tense::Present),
                anchors,
                mirror_rate,
                anchor_bias,
                rng,
            ));
        }
        for clause in &parsed.contexts {
            parts.push(self.render_context_clause(clause, anchors, mirror_rate, anchor_bias, rng));
        }

        parts
    }

    /// Render a noun phrase word by word. The phrase head (final word)
    /// carries the case and number marking.
    #[allow(clippy::too_many_arguments)]
    fn render_noun_phrase(
        &self,
        phrase: &str,
        case: Case,
        plural: bool,
        anchors: &[(String, f64)],
        mirror_rate: f64,
        anchor_bias: f64,
        rng: &mut ZynRng,
    ) -> String {
        let words: Vec<&str> = phrase.split_whitespace().collect();
        let last = words.len().saturating_sub(1);
        words
            .iter()
            .enumerate()
            .map(|(i, word)| {
                if rng.random_bool(mirror_rate) {
                    // Mirror: retain the source-language scaffolding.
                    (*word).to_string()
                } else {
                    let root = self.synthesize_root(
                        word,
                        PartOfSpeech::Noun,
                        anchors,
                        anchor_bias,
                        rng,
                    );
                    if i == last {
                        let number = if plural { Number::Plural } else { Number::Singular };
                        inflect_noun(&root, case, number)
                            .map(|w| w.surface)
                            .unwrap_or(root)
                    } else {
                        root
                    }
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Render the verb slot, inflected for tense.
    fn render_verb(
        &self,
        verb: &str,
        tense: Tense,
        anchors: &[(String, f64)],
        mirror_rate: f64,
        anchor_bias: f64,
        rng: &mut ZynRng,
    ) -> String {
        if rng.random_bool(mirror_rate) {
            return verb.to_string();
        }
        let root = self.synthesize_root(verb, PartOfSpeech::Verb, anchors, anchor_bias, rng);
        inflect_verb(&root, tense, Aspect::Imperfective, None)
            .map(|w| w.surface)
            .unwrap_or(root)
    }

    /// Render a context clause: translated marker, then the clause content
    /// under the usual mirror logic (uninflected).
    fn render_context_clause(
        &self,
        clause: &ContextClause,
        anchors: &[(String, f64)],
        mirror_rate: f64,
        anchor_bias: f64,
        rng: &mut ZynRng,
    ) -> String {
        let marker = crate::syntax::context_marker(&clause.marker)
            .and_then(|m| m.zyntalic)
            .map(str::to_string)
            .unwrap_or_else(|| {
                // No table entry: synthesize a marker keyed by the English
                // marker string, so it is stable across sentences.
                synthesize_word(
                    &format!("ctx:{}", clause.marker),
                    2,
                    PartOfSpeech::Particle,
                    &self.config.synthesis,
                )
            });

        let mut out = vec![marker];
        for word in clause.content.split_whitespace() {
            if rng.random_bool(mirror_rate) {
                out.push(word.to_string());
            } else {
                out.push(self.synthesize_root(
                    word,
                    PartOfSpeech::Noun,
                    anchors,
                    anchor_bias,
                    rng,
                ));
            }
        }
        out.join(" ")
    }

    /// Synthesize a Zyntalic root for a source word, optionally lending the
    /// synthesis seed from a weighted anchor's vocabulary.
    fn synthesize_root(
        &self,
        word: &str,
        pos: PartOfSpeech,
        anchors: &[(String, f64)],
        anchor_bias: f64,
        rng: &mut ZynRng,
    ) -> String {
        let normalized = word.to_lowercase();
        let seed = if anchor_bias > 0.0 && !anchors.is_empty() && rng.random_bool(anchor_bias) {
            let weights: Vec<f64> = anchors.iter().map(|(_, w)| *w).collect();
            let (id, _) = &anchors[rng.pick_weighted(&weights)];
            match self.lexicon.get(id) {
                Some(entry) => {
                    let pool = match pos {
                        PartOfSpeech::Verb => &entry.verbs,
                        _ => &entry.nouns,
                    };
                    match rng.pick(pool) {
                        // The lent word shades the stream; the source word
                        // keeps each slot distinct.
                        Some(lent) => format!("{lent}:{normalized}"),
                        None => normalized.clone(),
                    }
                }
                None => normalized.clone(),
            }
        } else {
            normalized.clone()
        };
        synthesize_word(
            &seed,
            syllable_count_for(&normalized),
            pos,
            &self.config.synthesis,
        )
    }

    /// Render the context tail for a sentence.
    fn render_tail(
        &self,
        src: &str,
        lemma: &str,
        parsed: &ParsedSentence,
        anchors: &[(String, f64)],
    ) -> String {
        let seed = if lemma.is_empty() { src } else { lemma };
        // The tail reports the verb's part of speech when a verb was
        // found, noun otherwise.
        let pos = if parsed.verb.is_empty() {
            PartOfSpeech::Noun
        } else {
            PartOfSpeech::Verb
        };
        render_context_tail(
            seed,
            lemma,
            pos,
            anchors.first().map(|(id, _)| id.as_str()),
            &self.config.synthesis,
        )
    }
}

// ---------------------------------------------------------------------------
// Free helpers and the convenience API
// ---------------------------------------------------------------------------

fn validate_mirror_rate(rate: f64) -> Result<(), TranslateError> {
    if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
        return Err(TranslateError::MirrorRateOutOfRange(rate));
    }
    Ok(())
}

/// Split text into sentences on terminal punctuation, keeping the
/// punctuation attached and dropping empty fragments.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut buff = String::new();
    for ch in text.trim().chars() {
        buff.push(ch);
        if matches!(ch, '.' | '!' | '?') {
            let s = buff.trim();
            if !s.trim_matches(['.', '!', '?']).trim().is_empty() {
                sentences.push(s.to_string());
            }
            buff.clear();
        }
    }
    let s = buff.trim();
    if !s.is_empty() {
        sentences.push(s.to_string());
    }
    sentences
}

/// First normalized content word of a sentence, used as the lemma.
pub fn clean_lemma(text: &str) -> String {
    let cleaned: String = text
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '\'' || c == '-' {
                c
            } else {
                ' '
            }
        })
        .collect();
    cleaned
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Translate multi-sentence text with a default-configured pipeline.
///
/// Convenience wrapper over [`Translator`]; long-lived callers should
/// construct a `Translator` once and reuse it.
pub fn translate_text(
    text: &str,
    mirror_rate: f64,
    engine: &str,
) -> Result<Vec<TranslationRecord>, TranslateError> {
    Translator::new(PipelineConfig::default()).translate_text(text, mirror_rate, engine)
}

/// Translate a single sentence with a default-configured pipeline.
pub fn translate_sentence(
    text: &str,
    mirror_rate: f64,
    engine: &str,
) -> Result<TranslationRecord, TranslateError> {
    Translator::new(PipelineConfig::default()).translate_sentence(text, mirror_rate, engine)
}
