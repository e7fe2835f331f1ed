//! # 압축 실행 설정
//!
//! 방식, 성분 예산, 작업자 수. JSON으로 읽고 쓸 수 있다.

use crate::core::compressor::CompressionMethod;
use crate::core::error::{CodecError, Result};
use crate::core::systems::scheduler::ReconstructionPool;
use serde::{Deserialize, Serialize};

/// 압축 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionConfig {
    /// 압축 방식
    pub method: CompressionMethod,
    /// 요청 성분 수 (없으면 방식별 기본값)
    #[serde(default)]
    pub components: Option<usize>,
    /// 작업자 스레드 수 (없으면 하드웨어 스레드 수)
    #[serde(default)]
    pub num_threads: Option<usize>,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            method: CompressionMethod::BlockTransform,
            components: None,
            num_threads: None,
        }
    }
}

impl CompressionConfig {
    pub fn new(method: CompressionMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CodecError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| CodecError::Config(e.to_string()))
    }

    /// 0 스레드는 의미가 없으므로 거부. 성분 예산은 코더가 클램프하므로 검사하지 않는다.
    pub fn validate(&self) -> Result<()> {
        if self.num_threads == Some(0) {
            return Err(CodecError::Config(
                "numThreads must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn effective_components(&self) -> usize {
        self.components
            .unwrap_or_else(|| self.method.default_components())
    }

    pub fn effective_threads(&self) -> usize {
        self.num_threads.unwrap_or_else(num_cpus::get)
    }

    pub fn build_pool(&self) -> Result<ReconstructionPool> {
        self.validate()?;
        ReconstructionPool::new(self.effective_threads())
    }
}
