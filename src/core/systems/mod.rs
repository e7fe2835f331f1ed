//! # 실행 시스템
//!
//! 작업자 풀과 실행 설정

pub mod config;
pub mod scheduler;

pub use config::CompressionConfig;
pub use scheduler::ReconstructionPool;

// 테스트 모듈들
#[cfg(test)]
mod __tests__;
