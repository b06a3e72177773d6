// Data-driven pipeline configuration.
//
// All tunable translation parameters live here in `PipelineConfig`, loaded
// from JSON or constructed with defaults. The pipeline never uses magic
// numbers — it reads from the config. This enables texture iteration
// without recompilation, and keeps two processes with identical configs
// byte-identical in output.
//
// Word-synthesis probabilities are grouped in the nested
// `SynthesisParams` struct owned by `zyntalic_lang::phonology`.
//
// **Critical constraint: determinism.** Config values feed directly into
// seeded synthesis. Identical configs are required for identical results.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use zyntalic_lang::SynthesisParams;

/// Errors from loading or validating a pipeline config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tunable parameters for the whole translation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Word-synthesis probabilities (script shares, onset/coda rates).
    #[serde(default)]
    pub synthesis: SynthesisParams,
    /// Dimension of text embeddings (both backends produce this length).
    pub embedding_dim: usize,
    /// How many ranked anchors a weighing returns.
    pub anchor_top_k: usize,
    /// Decaying weights assigned to ranked anchors, first rank first.
    /// Must be strictly decreasing and sum to at most 1.
    pub anchor_decay: Vec<f64>,
    /// Anchor weights used by the transformer engine (top-2 semantic match).
    pub semantic_decay: Vec<f64>,
    /// Mirror rate used when the caller does not supply one.
    pub default_mirror_rate: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            synthesis: SynthesisParams::default(),
            embedding_dim: 300,
            anchor_top_k: 3,
            anchor_decay: vec![0.60, 0.25, 0.15],
            semantic_decay: vec![0.7, 0.3],
            default_mirror_rate: 0.8,
        }
    }
}

impl PipelineConfig {
    /// Parse a config from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PipelineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the pipeline depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.embedding_dim == 0 {
            return Err(ConfigError::Invalid("embedding_dim must be positive".into()));
        }
        if self.anchor_top_k == 0 || self.anchor_top_k > self.anchor_decay.len() {
            return Err(ConfigError::Invalid(format!(
                "anchor_top_k must be in 1..={}",
                self.anchor_decay.len()
            )));
        }
        for pair in self.anchor_decay.windows(2) {
            if pair[1] >= pair[0] {
                return Err(ConfigError::Invalid(
                    "anchor_decay must be strictly decreasing".into(),
                ));
            }
        }
        let total: f64 = self.anchor_decay.iter().sum();
        if total > 1.0 + 1e-9 {
            return Err(ConfigError::Invalid("anchor_decay must sum to at most 1".into()));
        }
        if !(0.0..=1.0).contains(&self.default_mirror_rate) {
            return Err(ConfigError::Invalid(
                "default_mirror_rate must be in [0, 1]".into(),
            ));
        }
        Ok(())
    }
}
