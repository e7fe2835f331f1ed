mod zigzag_test;

use crate::core::preprocess::LumaMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 재현 가능한 무작위 휘도 행렬
pub(crate) fn random_luma(width: usize, height: usize, seed: u64) -> LumaMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let samples = (0..width * height)
        .map(|_| rng.gen_range(0.0..255.0))
        .collect();
    LumaMatrix::from_vec(width, height, samples).unwrap()
}
