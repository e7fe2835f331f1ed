//! 압축 엔진 에러 타입

use thiserror::Error;

/// 압축 호출 하나가 실패하는 경우들
///
/// 모든 에러는 해당 호출에 대해 종료성이며 내부 재시도는 없다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    /// 빈 이미지, 크기 불일치, 유한하지 않은 샘플 등
    #[error("invalid image: {0}")]
    InvalidImage(String),
    /// 특이값 분해가 수렴하지 않았거나 복원할 성분이 없음
    #[error("SVD factorization failed: {0}")]
    FactorizationError(String),
    #[error("failed to build worker pool: {0}")]
    PoolBuild(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CodecError>;
