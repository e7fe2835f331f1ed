//! # 점진 압축 엔진 핵심 모듈
//!
//! 전처리, 샘플 포인트 생성, 블록 DCT / SVD 코더, 병렬 복원 스케줄러, 압축기 파사드

pub mod compressor;
pub mod encoder;
pub mod error;
pub mod matrix;
pub mod preprocess;
pub mod sampling;
pub mod systems;

// 주요 타입들 재수출
pub use compressor::*;
pub use encoder::{DctEncoder, ProgressiveEncoder, SvdEncoder, BLOCK_DIM, BLOCK_SIZE};
pub use error::{CodecError, Result};
pub use matrix::QualityStats;
pub use preprocess::{to_luma, LumaMatrix, PixelSource, RgbBuffer};
pub use sampling::sample_points;
pub use systems::{CompressionConfig, ReconstructionPool};
