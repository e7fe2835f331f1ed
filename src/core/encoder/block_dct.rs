//! 8×8 직교 정규 DCT
//!
//! 순방향: `X(u,v) = ¼·c(u)·c(v)·Σ_y Σ_x f(y,x)·cos((2y+1)uπ/16)·cos((2x+1)vπ/16)`,
//! `c(0) = 1/√2`, 그 외 1. 역방향은 같은 스케일의 분리형 역변환.
//!
//! rustdct의 DCT-II / DCT-III는 정규화되지 않은 형태이므로 여기서 스케일을 맞춘다.

use super::{BLOCK_DIM, BLOCK_SIZE};
use rustdct::{DctPlanner, TransformType2And3};
use std::f64::consts::SQRT_2;
use std::sync::Arc;

/// 한 블록의 변환 계수, 자연 순서 (row * 8 + col)
pub type CoefficientBlock = [f64; BLOCK_SIZE];

/// 1차원 직교 정규 스케일 √(2/N). N = 8 이면 0.5
const AXIS_SCALE: f64 = 0.5;

/// 블록 DCT 변환기. 계획(plan)은 스레드 간에 공유된다.
#[derive(Clone)]
pub struct BlockDct {
    dct: Arc<dyn TransformType2And3<f64>>,
}

impl BlockDct {
    pub fn new() -> Self {
        let mut planner = DctPlanner::new();
        Self {
            dct: planner.plan_dct2(BLOCK_DIM),
        }
    }

    /// 순방향 2D DCT
    pub fn forward(&self, block: &[f64; BLOCK_SIZE]) -> CoefficientBlock {
        let mut coeffs = *block;
        self.apply_separable(&mut coeffs, |dct, line| dct.process_dct2(line));

        for u in 0..BLOCK_DIM {
            for v in 0..BLOCK_DIM {
                coeffs[u * BLOCK_DIM + v] *=
                    AXIS_SCALE * AXIS_SCALE * normalization(u) * normalization(v);
            }
        }
        coeffs
    }

    /// 역방향 2D DCT
    pub fn inverse(&self, coeffs: &CoefficientBlock) -> [f64; BLOCK_SIZE] {
        let mut pixels = *coeffs;
        // DCT-III는 첫 항을 절반으로 더하므로 c(0)=1/√2 를 맞추려면 √2를 곱한다
        for u in 0..BLOCK_DIM {
            for v in 0..BLOCK_DIM {
                pixels[u * BLOCK_DIM + v] *= dc_lift(u) * dc_lift(v);
            }
        }

        self.apply_separable(&mut pixels, |dct, line| dct.process_dct3(line));

        for value in pixels.iter_mut() {
            *value *= AXIS_SCALE * AXIS_SCALE;
        }
        pixels
    }

    /// 행 방향 후 열 방향으로 1D 변환 적용
    fn apply_separable<F>(&self, data: &mut [f64; BLOCK_SIZE], transform: F)
    where
        F: Fn(&dyn TransformType2And3<f64>, &mut [f64]),
    {
        for row in data.chunks_exact_mut(BLOCK_DIM) {
            transform(self.dct.as_ref(), row);
        }

        let mut column = [0.0; BLOCK_DIM];
        for x in 0..BLOCK_DIM {
            for y in 0..BLOCK_DIM {
                column[y] = data[y * BLOCK_DIM + x];
            }
            transform(self.dct.as_ref(), &mut column);
            for y in 0..BLOCK_DIM {
                data[y * BLOCK_DIM + x] = column[y];
            }
        }
    }
}

impl Default for BlockDct {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BlockDct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockDct").field("size", &BLOCK_DIM).finish()
    }
}

#[inline]
fn normalization(freq: usize) -> f64 {
    if freq == 0 {
        1.0 / SQRT_2
    } else {
        1.0
    }
}

#[inline]
fn dc_lift(freq: usize) -> f64 {
    if freq == 0 {
        SQRT_2
    } else {
        1.0
    }
}
