//! 압축기 파사드: 방식 태그로 코더를 골라 순서가 보장된 결과를 조립한다

use super::method::CompressionMethod;
use super::result::{ComponentLevel, CompressionResult};
use crate::core::encoder::{DctEncoder, ProgressiveEncoder, SvdEncoder};
use crate::core::error::Result;
use crate::core::preprocess::{to_luma, LumaMatrix, PixelSource};
use crate::core::systems::{CompressionConfig, ReconstructionPool};
use std::sync::Arc;
use std::time::Instant;

/// 무압축 기준 채널 수
const ORIGINAL_CHANNELS: usize = 3;

/// 압축기
///
/// 풀을 지정하지 않으면 프로세스 전역 풀을 쓴다.
#[derive(Debug, Clone)]
pub struct Compressor {
    method: CompressionMethod,
    pool: Option<Arc<ReconstructionPool>>,
}

impl Compressor {
    pub fn new(method: CompressionMethod) -> Self {
        Self { method, pool: None }
    }

    pub fn with_pool(method: CompressionMethod, pool: Arc<ReconstructionPool>) -> Self {
        Self {
            method,
            pool: Some(pool),
        }
    }

    /// 스레드 수가 지정되어 있으면 전용 풀을 만든다
    pub fn from_config(config: &CompressionConfig) -> Result<Self> {
        config.validate()?;
        match config.num_threads {
            Some(_) => Ok(Self::with_pool(config.method, Arc::new(config.build_pool()?))),
            None => Ok(Self::new(config.method)),
        }
    }

    pub fn method(&self) -> CompressionMethod {
        self.method
    }

    fn pool(&self) -> Result<&ReconstructionPool> {
        match &self.pool {
            Some(pool) => Ok(pool.as_ref()),
            None => ReconstructionPool::global(),
        }
    }

    /// 이미지 → 휘도 → 선택된 코더
    pub fn compress<P: PixelSource + ?Sized>(
        &self,
        image: &P,
        requested_components: usize,
    ) -> Result<CompressionResult> {
        let luma = to_luma(image)?;
        self.compress_luma(&luma, requested_components)
    }

    /// 이미 휘도로 변환된 행렬 압축
    pub fn compress_luma(
        &self,
        luma: &LumaMatrix,
        requested_components: usize,
    ) -> Result<CompressionResult> {
        let pool = self.pool()?;
        let started = Instant::now();
        log::debug!(
            "{} compression of {}x{} image, {} components requested",
            self.method,
            luma.width(),
            luma.height(),
            requested_components
        );

        let levels = match self.method {
            CompressionMethod::BlockTransform => {
                run(&DctEncoder::new(), luma, requested_components, pool)?
            }
            CompressionMethod::LowRank => {
                run(&SvdEncoder::new(), luma, requested_components, pool)?
            }
        };

        debug_assert!(!levels.is_empty());
        debug_assert!(levels
            .windows(2)
            .all(|w| w[0].num_components < w[1].num_components));

        log::info!(
            "{} compression completed in {:?} ({} component levels)",
            self.method,
            started.elapsed(),
            levels.len()
        );

        Ok(CompressionResult {
            method: self.method,
            original_byte_size: luma.width() * luma.height() * ORIGINAL_CHANNELS,
            levels,
        })
    }
}

fn run<E: ProgressiveEncoder>(
    encoder: &E,
    luma: &LumaMatrix,
    requested: usize,
    pool: &ReconstructionPool,
) -> Result<Vec<ComponentLevel>> {
    log::debug!(
        "{} encoder: valid range 1..={}",
        encoder.method(),
        encoder.max_components(luma)
    );
    encoder.encode(luma, requested, pool)
}

/// 전역 풀을 쓰는 단축 진입점
pub fn compress<P: PixelSource + ?Sized>(
    image: &P,
    method: CompressionMethod,
    requested_components: usize,
) -> Result<CompressionResult> {
    Compressor::new(method).compress(image, requested_components)
}
