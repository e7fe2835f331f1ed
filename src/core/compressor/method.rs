//! 압축 방식 태그

use crate::core::error::CodecError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 압축 방식
///
/// 닫힌 집합이므로 트레잇 객체 대신 열거형으로 분기한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompressionMethod {
    /// 8×8 블록 DCT 계수 절단
    #[serde(rename = "DCT", alias = "dct")]
    BlockTransform,
    /// 전체 행렬 SVD 저계수 근사
    #[serde(rename = "SVD", alias = "svd")]
    LowRank,
}

impl CompressionMethod {
    pub const ALL: [CompressionMethod; 2] =
        [CompressionMethod::BlockTransform, CompressionMethod::LowRank];

    /// 짧은 태그 ("DCT" / "SVD")
    pub fn tag(&self) -> &'static str {
        match self {
            CompressionMethod::BlockTransform => "DCT",
            CompressionMethod::LowRank => "SVD",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompressionMethod::BlockTransform => "DCT (Discrete Cosine Transform)",
            CompressionMethod::LowRank => "SVD (Singular Value Decomposition)",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CompressionMethod::BlockTransform => {
                "Block-based compression, very efficient per component"
            }
            CompressionMethod::LowRank => {
                "Matrix decomposition, requires more components"
            }
        }
    }

    /// 요청이 없을 때 쓰는 성분 수
    pub fn default_components(&self) -> usize {
        match self {
            CompressionMethod::BlockTransform => 10,
            CompressionMethod::LowRank => 64,
        }
    }

    /// UI에서 제시하는 상한. 실제 클램프는 코더가 이미지 크기로 한다.
    pub fn max_components_hint(&self) -> usize {
        match self {
            CompressionMethod::BlockTransform => 20,
            CompressionMethod::LowRank => 256,
        }
    }
}

impl fmt::Display for CompressionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for CompressionMethod {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dct" | "block-transform" | "blocktransform" => Ok(CompressionMethod::BlockTransform),
            "svd" | "low-rank" | "lowrank" => Ok(CompressionMethod::LowRank),
            other => Err(CodecError::Config(format!(
                "invalid method '{}', use DCT or SVD",
                other
            ))),
        }
    }
}
