//https://github.com/parasyte/pixels/tree/c2454b01abc11c007d4b9de8525195af942fef0d/examples/conway

/// Fill probability used when the caller does not pick one.
pub const INITIAL_FILL: f32 = 0.5;

/// Generate a pseudorandom seed for the PRNG.
pub fn generate_seed() -> Result<(u64, u64), getrandom::Error> {
    use byteorder::{ByteOrder, NativeEndian};
    use getrandom::getrandom;

    let mut seed = [0_u8; 16];

    getrandom(&mut seed)?;

    Ok((
        NativeEndian::read_u64(&seed[0..8]),
        NativeEndian::read_u64(&seed[8..16]),
    ))
}

/// Decides the initial state of newly built cells.
pub trait StateSource {
    fn next_alive(&mut self) -> bool;
}

/// Each draw is alive with a fixed probability.
pub struct BernoulliSource {
    rng: randomize::PCG32,
    probability: f32,
}

impl BernoulliSource {
    /// `probability` is clamped into `[0, 1]`.
    pub fn new(seed: (u64, u64), probability: f32) -> Self {
        Self {
            rng: seed.into(),
            probability: probability.clamp(0.0, 1.0),
        }
    }

    /// Seeded from OS entropy.
    pub fn from_entropy(probability: f32) -> Result<Self, getrandom::Error> {
        Ok(Self::new(generate_seed()?, probability))
    }

    pub fn probability(&self) -> f32 {
        self.probability
    }
}

impl StateSource for BernoulliSource {
    fn next_alive(&mut self) -> bool {
        randomize::f32_half_open_right(self.rng.next_u32()) < self.probability
    }
}

impl<F: FnMut() -> bool> StateSource for F {
    fn next_alive(&mut self) -> bool {
        self()
    }
}
