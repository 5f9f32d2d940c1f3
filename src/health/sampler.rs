use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the pseudo-random draw behind a simulated health probe.
/// Injected so test suites can pin specific outcomes.
pub trait StatusSampler: Send {
    /// A value in [0, 1).
    fn sample(&mut self) -> f64;
}

pub struct SeededSampler {
    rng: StdRng,
}

impl SeededSampler {
    /// A fixed seed reproduces the same probe results run after run; with
    /// no seed the generator draws from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }
}

impl StatusSampler for SeededSampler {
    fn sample(&mut self) -> f64 {
        self.rng.random()
    }
}
