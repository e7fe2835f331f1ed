//! 점진 인코더: 블록 DCT와 SVD 저계수 근사

pub mod block_dct;
pub mod block_grid;
pub mod dct_encoder;
pub mod svd_encoder;
pub mod zigzag;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

use crate::core::compressor::{CompressionMethod, ComponentLevel};
use crate::core::error::Result;
use crate::core::preprocess::LumaMatrix;
use crate::core::systems::ReconstructionPool;

/// 블록 한 변의 길이
pub const BLOCK_DIM: usize = 8;
/// 블록당 계수 개수
pub const BLOCK_SIZE: usize = BLOCK_DIM * BLOCK_DIM;

/// 두 코더가 공유하는 능력 계약
pub trait ProgressiveEncoder {
    fn method(&self) -> CompressionMethod;

    /// 이 이미지에서 유효한 최대 성분 수
    fn max_components(&self, luma: &LumaMatrix) -> usize;

    /// 샘플 포인트마다 한 단계씩, 성분 수 오름차순으로 복원
    fn encode(
        &self,
        luma: &LumaMatrix,
        requested: usize,
        pool: &ReconstructionPool,
    ) -> Result<Vec<ComponentLevel>>;
}

// 재수출
pub use block_dct::{BlockDct, CoefficientBlock};
pub use block_grid::BlockGrid;
pub use dct_encoder::DctEncoder;
pub use svd_encoder::{SingularTripleSet, SvdEncoder};
pub use zigzag::{truncate_coefficients, NATURAL_TO_ZIGZAG, ZIGZAG_ORDER};
