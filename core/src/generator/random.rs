use super::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Reproducible source backed by a seeded small RNG.
#[derive(Clone, Debug)]
pub struct SeededUnitSource {
    seed: u64,
    rng: SmallRng,
}

impl SeededUnitSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl UnitSource for SeededUnitSource {
    fn next_unit(&mut self) -> f64 {
        use rand::Rng;
        self.rng.random::<f64>()
    }
}
