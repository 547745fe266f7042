#![cfg(test)]

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub(crate) struct TestUtil;

impl TestUtil {
    const SEED: u64 = 0x6c69_6e71;
    const NUM_SEQUENCES: usize = 40;
    const MAX_LEN: usize = 12;

    /// Produces a fixed, reproducible batch of random integer sequences, including an empty one.
    pub fn random_sequences() -> Vec<Vec<i32>> {
        let mut rng = StdRng::seed_from_u64(Self::SEED);

        let mut seqs: Vec<Vec<i32>> = vec![vec![]];

        for _ in 0..Self::NUM_SEQUENCES {
            let len = rng.gen_range(1, Self::MAX_LEN + 1);
            let seq: Vec<i32> = (0..len).map(|_| rng.gen_range(-20i32, 21)).collect();
            seqs.push(seq);
        }

        seqs
    }
}
