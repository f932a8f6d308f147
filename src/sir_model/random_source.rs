use {
    rand::{distributions::{Distribution, Uniform}, seq::{SliceRandom, index}},
    rand_pcg::Pcg64,
};

/// # Source of randomness for graph construction, seeding and the SIR dynamics
/// * `uniform` has to return values in `[0, 1)`
/// * everything is drawn through this trait, so a seeded `Pcg64` gives reproducible runs
pub trait RandomSource{
    fn uniform(&mut self) -> f64;

    /// `amount.min(len)` distinct indices out of `0..len`
    fn sample_distinct(&mut self, len: usize, amount: usize) -> Vec<usize>;

    fn shuffle(&mut self, slice: &mut [usize]);
}

impl RandomSource for Pcg64{
    #[inline]
    fn uniform(&mut self) -> f64
    {
        Uniform::new(0.0, 1.0).sample(self)
    }

    fn sample_distinct(&mut self, len: usize, amount: usize) -> Vec<usize>
    {
        index::sample(self, len, amount.min(len)).into_vec()
    }

    fn shuffle(&mut self, slice: &mut [usize])
    {
        slice.shuffle(self);
    }
}
