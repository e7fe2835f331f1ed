//! 블록 DCT 점진 인코더
//!
//! 전처리 → 전체 블록 순방향 변환 → 샘플 포인트마다 (절단 → 역변환 → 조립 → 크롭)

use super::block_dct::BlockDct;
use super::block_grid::BlockGrid;
use super::{ProgressiveEncoder, BLOCK_DIM, BLOCK_SIZE};
use crate::core::compressor::{CompressionMethod, ComponentLevel};
use crate::core::error::Result;
use crate::core::preprocess::{pad_to_block_multiple, LumaMatrix};
use crate::core::sampling::sample_points;
use crate::core::systems::ReconstructionPool;

/// 계수 하나를 f64 로 저장한다고 가정한 바이트 수
const BYTES_PER_COEFFICIENT: usize = 8;

/// 블록 DCT 인코더
#[derive(Debug, Clone, Default)]
pub struct DctEncoder {
    dct: BlockDct,
}

impl DctEncoder {
    pub fn new() -> Self {
        Self { dct: BlockDct::new() }
    }

    /// 요청 예산을 `[1, 64]`로 클램프
    pub fn clamp_budget(requested: usize) -> usize {
        requested.clamp(1, BLOCK_SIZE)
    }

    /// `k × 블록 수 × 8` 바이트 (설명용 추정치)
    pub fn approximate_byte_size(k: usize, grid_rows: usize, grid_cols: usize) -> usize {
        k * grid_rows * grid_cols * BYTES_PER_COEFFICIENT
    }

    /// 순방향 단계만 수행 (패딩 포함)
    pub fn transform(&self, luma: &LumaMatrix, pool: &ReconstructionPool) -> BlockGrid {
        let padded = pad_to_block_multiple(luma, BLOCK_DIM);
        BlockGrid::transform(&padded, luma.height(), luma.width(), &self.dct, pool)
    }

    /// 단일 단계 복원
    pub fn reconstruct(&self, grid: &BlockGrid, k: usize) -> Result<ComponentLevel> {
        let k = Self::clamp_budget(k);
        Ok(ComponentLevel {
            num_components: k,
            approximate_byte_size: Self::approximate_byte_size(k, grid.grid_rows, grid.grid_cols),
            image: grid.reconstruct(k, &self.dct)?,
        })
    }
}

impl ProgressiveEncoder for DctEncoder {
    fn method(&self) -> CompressionMethod {
        CompressionMethod::BlockTransform
    }

    fn max_components(&self, _luma: &LumaMatrix) -> usize {
        BLOCK_SIZE
    }

    fn encode(
        &self,
        luma: &LumaMatrix,
        requested: usize,
        pool: &ReconstructionPool,
    ) -> Result<Vec<ComponentLevel>> {
        let grid = self.transform(luma, pool);
        log::debug!(
            "DCT forward pass done: {}x{} blocks",
            grid.grid_rows,
            grid.grid_cols
        );

        let budget = Self::clamp_budget(requested);
        if budget != requested {
            log::debug!("DCT budget {} clamped to {}", requested, budget);
        }

        let points = sample_points(budget);
        pool.try_map_units(&points, |&k| self.reconstruct(&grid, k))
    }
}
