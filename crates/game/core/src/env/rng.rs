//! Stateless deterministic randomness.
//!
//! Random choices (such as picking a roaming waypoint) are derived from a
//! seed built out of the inputs of the decision pass. No generator state is
//! kept between calls, so repeating a pass with identical inputs repeats its
//! choices.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must produce the same value for the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform index in `0..len`. Returns 0 when `len` is 0.
    fn pick_index(&self, seed: u64, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.next_u32(seed) as u64 % len as u64) as usize
    }
}

/// PCG-XSH-RR generator: 64-bit state, 32-bit output.
///
/// Each call advances a single step from the seed and permutes the result.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Mixes the inputs of one random choice into a seed.
///
/// * `world_seed` - base seed from [`AiConfig`](crate::AiConfig)
/// * `now_ms` - tick time of the decision pass
/// * `entity` - agent making the choice
/// * `context` - distinguishes several choices within one pass (e.g., the waypoint index)
pub fn compute_seed(world_seed: u64, now_ms: u64, entity: u32, context: u32) -> u64 {
    let mut hash = world_seed;
    hash ^= now_ms.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (entity as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // SplitMix-style avalanche
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
