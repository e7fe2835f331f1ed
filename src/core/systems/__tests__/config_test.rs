use super::super::{CompressionConfig, ReconstructionPool};
use crate::core::compressor::CompressionMethod;
use crate::core::error::CodecError;

#[test]
fn 기본_설정_테스트() {
    let config = CompressionConfig::default();
    assert_eq!(config.method, CompressionMethod::BlockTransform);
    assert_eq!(config.effective_components(), 10);
    assert_eq!(config.effective_threads(), num_cpus::get());
}

#[test]
fn test_method_default_components() {
    let config = CompressionConfig::new(CompressionMethod::LowRank);
    assert_eq!(config.effective_components(), 64);

    let explicit = CompressionConfig {
        components: Some(7),
        ..config
    };
    assert_eq!(explicit.effective_components(), 7);
}

#[test]
fn test_json_round_trip() {
    let config = CompressionConfig {
        method: CompressionMethod::LowRank,
        components: Some(32),
        num_threads: Some(2),
    };
    let json = config.to_json_string().unwrap();
    assert!(json.contains("\"numThreads\""));
    assert!(json.contains("\"SVD\""));

    let parsed = CompressionConfig::from_json_str(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_json_optional_fields() {
    let parsed = CompressionConfig::from_json_str(r#"{ "method": "DCT" }"#).unwrap();
    assert_eq!(parsed.method, CompressionMethod::BlockTransform);
    assert_eq!(parsed.components, None);
    assert_eq!(parsed.num_threads, None);
}

#[test]
fn test_invalid_config_rejected() {
    assert!(matches!(
        CompressionConfig::from_json_str(r#"{ "method": "FFT" }"#),
        Err(CodecError::Config(_))
    ));
    assert!(matches!(
        CompressionConfig::from_json_str(r#"{ "method": "SVD", "numThreads": 0 }"#),
        Err(CodecError::Config(_))
    ));
}

#[test]
fn test_build_pool_uses_thread_count() {
    let config = CompressionConfig {
        num_threads: Some(3),
        ..CompressionConfig::default()
    };
    let pool: ReconstructionPool = config.build_pool().unwrap();
    assert_eq!(pool.num_threads(), 3);
}
