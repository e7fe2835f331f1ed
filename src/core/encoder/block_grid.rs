//! 블록 그리드로 변환된 휘도 행렬

use super::block_dct::{BlockDct, CoefficientBlock};
use super::zigzag::truncate_coefficients;
use super::{BLOCK_DIM, BLOCK_SIZE};
use crate::core::error::{CodecError, Result};
use crate::core::preprocess::{clamp, crop, LumaMatrix, PIXEL_MAX, PIXEL_MIN};
use crate::core::systems::ReconstructionPool;
use ndarray::Array2;
use rayon::prelude::*;

/// 블록별 DCT 계수 묶음
///
/// 순방향 단계에서 슬롯마다 한 번씩 쓰이고, 이후에는 읽기 전용으로 공유된다.
#[derive(Debug, Clone)]
pub struct BlockGrid {
    /// 블록 행 우선 순서의 계수 블록
    pub blocks: Vec<CoefficientBlock>,
    pub grid_rows: usize,
    pub grid_cols: usize,
    /// 패딩 전 원본 크기
    pub total_rows: usize,
    pub total_cols: usize,
}

impl BlockGrid {
    /// 패딩된 행렬의 모든 블록을 병렬로 순방향 변환
    ///
    /// `padded`의 크기는 `BLOCK_DIM`의 배수여야 한다.
    pub fn transform(
        padded: &LumaMatrix,
        original_rows: usize,
        original_cols: usize,
        dct: &BlockDct,
        pool: &ReconstructionPool,
    ) -> Self {
        let grid_rows = padded.height() / BLOCK_DIM;
        let grid_cols = padded.width() / BLOCK_DIM;
        let source = padded.as_array();

        let mut blocks = vec![[0.0; BLOCK_SIZE]; grid_rows * grid_cols];
        pool.for_each_slot(&mut blocks, |block_idx, slot| {
            let start_i = (block_idx / grid_cols) * BLOCK_DIM;
            let start_j = (block_idx % grid_cols) * BLOCK_DIM;

            let mut block_data = [0.0; BLOCK_SIZE];
            for y in 0..BLOCK_DIM {
                for x in 0..BLOCK_DIM {
                    block_data[y * BLOCK_DIM + x] = source[[start_i + y, start_j + x]];
                }
            }
            *slot = dct.forward(&block_data);
        });

        Self {
            blocks,
            grid_rows,
            grid_cols,
            total_rows: original_rows,
            total_cols: original_cols,
        }
    }

    pub fn block(&self, grid_i: usize, grid_j: usize) -> &CoefficientBlock {
        &self.blocks[grid_i * self.grid_cols + grid_j]
    }

    pub fn num_blocks(&self) -> usize {
        self.grid_rows * self.grid_cols
    }

    /// 블록마다 지그재그 상위 `k`개 계수만으로 역변환하여 원본 크기 이미지 복원
    ///
    /// 단계마다 자체 출력 버퍼를 갖고, 블록 행(8줄 띠)을 서로 겹치지 않는
    /// 구간으로 나누어 쓰므로 공유 버퍼 잠금이 없다.
    /// 현재 rayon 풀 안에서 호출되면 그 풀에서 병렬로 돈다.
    pub fn reconstruct(&self, k: usize, dct: &BlockDct) -> Result<LumaMatrix> {
        let padded_cols = self.grid_cols * BLOCK_DIM;
        let padded_rows = self.grid_rows * BLOCK_DIM;
        let mut buffer = vec![0.0; padded_rows * padded_cols];

        buffer
            .par_chunks_mut(BLOCK_DIM * padded_cols)
            .enumerate()
            .for_each(|(grid_i, strip)| {
                for grid_j in 0..self.grid_cols {
                    let truncated = truncate_coefficients(self.block(grid_i, grid_j), k);
                    let pixels = dct.inverse(&truncated);
                    for y in 0..BLOCK_DIM {
                        let row = &mut strip[y * padded_cols + grid_j * BLOCK_DIM..][..BLOCK_DIM];
                        for (x, out) in row.iter_mut().enumerate() {
                            *out = clamp(pixels[y * BLOCK_DIM + x], PIXEL_MIN, PIXEL_MAX);
                        }
                    }
                }
            });

        let padded = Array2::from_shape_vec((padded_rows, padded_cols), buffer)
            .map_err(|e| CodecError::InvalidImage(e.to_string()))?;
        Ok(crop(
            &LumaMatrix::from_array(padded),
            self.total_cols,
            self.total_rows,
        ))
    }
}
