//! 압축기 파사드와 결과 타입

pub mod facade;
pub mod method;
pub mod result;

#[cfg(test)]
mod __tests__;

pub use facade::{compress, Compressor};
pub use method::CompressionMethod;
pub use result::{ComponentLevel, CompressionResult, CompressionSummary, LevelSummary};
