//! Random candidate selection.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use rcut_stock::StockCandidate;

/// Picks one candidate uniformly at random among the top-ranked results.
///
/// Restricting the pool to the first few candidates keeps variety across
/// runs while still preferring the most relevant footage.
#[derive(Debug)]
pub struct CandidatePicker {
    rng: StdRng,
}

impl CandidatePicker {
    /// Create a picker with OS-seeded randomness.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a picker with a fixed seed for reproducible picks.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick uniformly at random among the first `top_n` candidates.
    ///
    /// Returns `None` when the candidate list is empty.
    pub fn pick<'a>(
        &mut self,
        candidates: &'a [StockCandidate],
        top_n: usize,
    ) -> Option<&'a StockCandidate> {
        let pool = &candidates[..candidates.len().min(top_n)];
        pool.choose(&mut self.rng)
    }
}

impl Default for CandidatePicker {
    fn default() -> Self {
        Self::new()
    }
}
