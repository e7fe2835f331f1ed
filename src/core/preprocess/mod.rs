//! 전처리: 휘도 변환, 블록 정렬 패딩, 값 클램프

pub mod luma;
pub mod padding;

#[cfg(test)]
mod __tests__;

pub use luma::{clamp, to_luma, LumaMatrix, PixelSource, RgbBuffer, LUMA_WEIGHTS, PIXEL_MAX, PIXEL_MIN};
pub use padding::{crop, next_block_multiple, pad_to_block_multiple};
