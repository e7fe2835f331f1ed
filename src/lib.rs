//! 점진적 손실 복원 비교 라이브러리
//!
//! 원본 이미지에서 보존 성분(블록 DCT 계수 또는 특이값) 개수를 늘려 가며
//! 일련의 복원 이미지를 만든다. 예산이 커질수록 충실도가 올라가는 것을 볼 수 있다.
//!
//! ```no_run
//! use progressive_codec::{compress, CompressionMethod, RgbBuffer};
//!
//! let image = RgbBuffer::filled(64, 48, [90, 120, 200]);
//! let result = compress(&image, CompressionMethod::BlockTransform, 16)?;
//! for level in &result.levels {
//!     println!("{} components: ~{} bytes", level.num_components, level.approximate_byte_size);
//! }
//! # Ok::<(), progressive_codec::CodecError>(())
//! ```

pub mod core;

// 핵심 모듈들 재수출
pub use crate::core::{
    compress, sample_points, to_luma, CodecError, ComponentLevel, CompressionConfig,
    CompressionMethod, CompressionResult, CompressionSummary, Compressor, LevelSummary,
    LumaMatrix, PixelSource, QualityStats, ReconstructionPool, Result, RgbBuffer,
};
