//! 압축 결과 타입과 크기 보고 헬퍼

use super::method::CompressionMethod;
use crate::core::preprocess::LumaMatrix;
use serde::{Deserialize, Serialize};

/// 출력 단계 하나
///
/// `approximate_byte_size`는 설명용 추정치다. 양자화나 엔트로피 코딩을 하지 않으므로
/// 실제 저장 크기가 아니다.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentLevel {
    pub num_components: usize,
    pub approximate_byte_size: usize,
    pub image: LumaMatrix,
}

impl ComponentLevel {
    pub fn bytes_per_component(&self) -> f64 {
        self.approximate_byte_size as f64 / self.num_components as f64
    }
}

/// 압축 호출 하나의 전체 결과
///
/// 불변식: `levels`는 비어 있지 않고 `num_components`가 순증가하며,
/// 마지막 값은 (클램프된) 요청 예산과 같다.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionResult {
    pub method: CompressionMethod,
    /// width × height × 3 (무압축 3채널 기준)
    pub original_byte_size: usize,
    pub levels: Vec<ComponentLevel>,
}

impl CompressionResult {
    /// 마지막 단계의 성분 수 = 실제 적용된 예산
    pub fn effective_components(&self) -> usize {
        self.levels.last().map(|l| l.num_components).unwrap_or(0)
    }

    pub fn level(&self, num_components: usize) -> Option<&ComponentLevel> {
        self.levels
            .iter()
            .find(|l| l.num_components == num_components)
    }

    /// 원본 / 추정 크기
    pub fn compression_ratio(&self, level: &ComponentLevel) -> f64 {
        self.original_byte_size as f64 / level.approximate_byte_size as f64
    }

    /// 추정 크기가 원본의 몇 %인지
    pub fn size_percentage(&self, level: &ComponentLevel) -> f64 {
        level.approximate_byte_size as f64 / self.original_byte_size as f64 * 100.0
    }

    /// 이미지를 뺀 직렬화용 요약
    pub fn summary(&self) -> CompressionSummary {
        CompressionSummary {
            method: self.method,
            original_size: self.original_byte_size,
            component_levels: self
                .levels
                .iter()
                .map(|l| LevelSummary {
                    num_components: l.num_components,
                    data_size: l.approximate_byte_size,
                })
                .collect(),
        }
    }
}

/// JSON 보고용 요약 (camelCase 키)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionSummary {
    pub method: CompressionMethod,
    pub original_size: usize,
    pub component_levels: Vec<LevelSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelSummary {
    pub num_components: usize,
    pub data_size: usize,
}
