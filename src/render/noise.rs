//! Seeded noise stream for texture jitter.
//!
//! Xorshift64 with the standard (13, 7, 17) shifts. Pure integer state, so a
//! given seed yields the same sequence on every platform. Each tile builds its
//! own stream from `seed + tile_index`; there is no shared global generator.

/// Deterministic xorshift64 stream.
#[derive(Debug, Clone)]
pub struct NoiseStream {
    state: u64,
}

impl NoiseStream {
    /// Replaces a zero seed, which is a fixed point of xorshift.
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Stream for one tile of a multi-tile texture.
    pub fn for_tile(seed: u64, tile_index: u64) -> Self {
        Self::new(seed.wrapping_add(tile_index))
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform f64 in `[0, 1)` from the upper 53 bits.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform f64 in `[min, max)`.
    pub fn uniform(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Uniform integer in `lo..=hi`.
    pub fn int_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        let span = u64::from(hi - lo) + 1;
        lo + (self.next_u64() % span) as u32
    }
}
