use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

/// The two random phases a ring build draws up front.
///
/// Drawing them once per build (rather than per sample) keeps the outline smooth while still
/// making successive renders look hand-varied.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Phases {
    /// Phase of the per-sample edge jitter.
    pub jitter: f64,
    /// Phase of the radius bulge.
    pub bulge: f64,
}

impl Phases {
    pub fn new(jitter: f64, bulge: f64) -> Self {
        Self { jitter, bulge }
    }

    /// Draws both phases uniformly from `[0, 2π)`, jitter first.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let jitter = rng.gen_range(0.0..TAU);
        let bulge = rng.gen_range(0.0..TAU);
        Self { jitter, bulge }
    }
}

/// A reproducible generator when `seed` is set, fresh OS entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
