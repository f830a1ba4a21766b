//! A generator that replays a fixed list of uniform fractions, for tests that
//! need to know exactly which centroids get drawn.

use rand::RngCore;

/// Replays `fractions` in order (wrapping around) as the `u` in `[0, 1)` seen by
/// `rng.gen::<f64>()`.
#[derive(Debug, Clone)]
pub(crate) struct ScriptedRng {
    fractions: Vec<f64>,
    pos: usize,
}

impl ScriptedRng {
    pub(crate) fn new(fractions: &[f64]) -> Self {
        assert!(!fractions.is_empty(), "script must not be empty");
        assert!(
            fractions.iter().all(|f| (0.0..1.0).contains(f)),
            "fractions must lie in [0, 1)"
        );
        Self {
            fractions: fractions.to_vec(),
            pos: 0,
        }
    }

    /// How many words have been handed out so far.
    pub(crate) fn draws(&self) -> usize {
        self.pos
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let fraction = self.fractions[self.pos % self.fractions.len()];
        self.pos += 1;
        // `gen::<f64>()` keeps the top 53 bits and scales them by 2^-53.
        ((fraction * (1u64 << 53) as f64) as u64) << 11
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
