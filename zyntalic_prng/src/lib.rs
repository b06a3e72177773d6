// Deterministic, portable pseudo-random number generator for Zyntalic.
//
// Implements xoshiro256++ (Blackman & Vigna, 2019) with SplitMix64 seeding.
// The generator core is hand-rolled with no external RNG dependency so that
// the same seed yields bit-identical streams on every platform.
//
// This crate is the single source of randomness for the whole workspace:
// `zyntalic_lang` (word and syllable synthesis) and `zyntalic_translate`
// (anchor embedding fallback, per-sentence rendering decisions) both draw
// from instances of `ZynRng`. Every synthesis call constructs its own
// generator from a string key via `ZynRng::from_key`, so calls are isolated
// from each other and safe to run in parallel.
//
// **Critical constraint: determinism.** Every method on `ZynRng` must
// produce identical output given the same prior state, regardless of
// platform, compiler version, or optimization level. No floating-point
// arithmetic in the core generator, no stdlib PRNG, no ambient state.

use serde::{Deserialize, Serialize};

/// Derive a stable 64-bit seed from an arbitrary string key.
///
/// Hashes the key's UTF-8 bytes with blake3 and takes the first eight bytes
/// of the digest, big-endian. Total over all strings, including the empty
/// string; identical keys produce identical seeds in any process.
pub fn stable_seed(key: &str) -> u64 {
    let digest = blake3::hash(key.as_bytes());
    let bytes = digest.as_bytes();
    u64::from_be_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}

/// Xoshiro256++ PRNG — the workspace's sole source of randomness.
///
/// One instance per synthesis call (word, syllable, sentence, or embedding),
/// seeded deterministically from a string key, discarded after use.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ZynRng {
    s: [u64; 4],
}

impl ZynRng {
    /// Create a new PRNG seeded from a `u64`.
    ///
    /// Uses SplitMix64 to expand the seed into the 256-bit internal state.
    /// Two `ZynRng` instances created with the same seed produce identical
    /// output sequences.
    pub fn new(seed: u64) -> Self {
        let mut sm = seed;
        Self {
            s: [
                splitmix64(&mut sm),
                splitmix64(&mut sm),
                splitmix64(&mut sm),
                splitmix64(&mut sm),
            ],
        }
    }

    /// Create a PRNG keyed by an arbitrary string.
    ///
    /// Equivalent to `ZynRng::new(stable_seed(key))`. This is the entry
    /// point the synthesis pipeline uses: keys like `"phon:water"` or
    /// `"ctx:because"` give every generated artifact its own stream.
    pub fn from_key(key: &str) -> Self {
        Self::new(stable_seed(key))
    }

    /// Generate the next `u64` in the sequence.
    pub fn next_u64(&mut self) -> u64 {
        let result = (self.s[0].wrapping_add(self.s[3]))
            .rotate_left(23)
            .wrapping_add(self.s[0]);

        let t = self.s[1] << 17;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];

        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);

        result
    }

    /// Generate a uniform `f32` in [0, 1).
    ///
    /// Uses the upper 24 bits of a `u64` to fill the mantissa of an f32.
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Generate a uniform `f64` in [0, 1).
    ///
    /// Uses the upper 53 bits of a `u64` to fill the mantissa of an f64.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Generate a uniform random integer in `[low, high)`.
    ///
    /// Uses rejection sampling to avoid modulo bias.
    /// Panics if `low >= high`.
    pub fn range_u64(&mut self, low: u64, high: u64) -> u64 {
        assert!(low < high, "range_u64: low must be less than high");
        let range = high - low;
        if range.is_power_of_two() {
            return low + (self.next_u64() & (range - 1));
        }
        // Rejection sampling to avoid modulo bias.
        let threshold = range.wrapping_neg() % range; // = (2^64 - range) % range
        loop {
            let r = self.next_u64();
            if r >= threshold {
                return low + (r % range);
            }
        }
    }

    /// Generate a uniform random `usize` in `[low, high)`.
    ///
    /// Panics if `low >= high`.
    pub fn range_usize(&mut self, low: usize, high: usize) -> usize {
        self.range_u64(low as u64, high as u64) as usize
    }

    /// Generate a uniform random `usize` in `[low, high]` (inclusive on both ends).
    ///
    /// Panics if `low > high`.
    pub fn range_usize_inclusive(&mut self, low: usize, high: usize) -> usize {
        assert!(low <= high, "range_usize_inclusive: low must be <= high");
        self.range_u64(low as u64, high as u64 + 1) as usize
    }

    /// Return `true` with probability `p`, `false` otherwise.
    ///
    /// `p` should be in [0.0, 1.0]. Values outside this range are clamped:
    /// `p <= 0.0` always returns false, `p >= 1.0` always returns true.
    pub fn random_bool(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Pick a uniformly random element from a slice.
    ///
    /// Returns `None` for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.range_usize(0, items.len())])
        }
    }

    /// Pick an index according to a weight table.
    ///
    /// Weights need not sum to 1; non-positive weights are treated as zero.
    /// Returns the last index if every weight is zero (or on floating-point
    /// shortfall), so the result is always a valid index into `weights`.
    /// Panics if `weights` is empty.
    pub fn pick_weighted(&mut self, weights: &[f64]) -> usize {
        assert!(!weights.is_empty(), "pick_weighted: weights must be non-empty");
        let total: f64 = weights.iter().map(|w| w.max(0.0)).sum();
        if total <= 0.0 {
            return weights.len() - 1;
        }
        let mut target = self.next_f64() * total;
        for (i, w) in weights.iter().enumerate() {
            let w = w.max(0.0);
            if target < w {
                return i;
            }
            target -= w;
        }
        weights.len() - 1
    }
}

/// SplitMix64 — used only for seeding xoshiro256++ from a single `u64`.
///
/// This is the standard recommendation from the xoshiro authors for
/// expanding a small seed into a larger state.
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
