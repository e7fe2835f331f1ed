use super::super::{ComponentLevel, CompressionMethod, CompressionResult};
use crate::core::preprocess::LumaMatrix;
use approx::assert_relative_eq;

fn sample_result() -> CompressionResult {
    let image = LumaMatrix::from_vec(2, 2, vec![0.0; 4]).unwrap();
    CompressionResult {
        method: CompressionMethod::LowRank,
        original_byte_size: 1200,
        levels: vec![
            ComponentLevel {
                num_components: 1,
                approximate_byte_size: 100,
                image: image.clone(),
            },
            ComponentLevel {
                num_components: 4,
                approximate_byte_size: 400,
                image,
            },
        ],
    }
}

#[test]
fn test_size_helpers() {
    let result = sample_result();
    let last = result.levels.last().unwrap();

    assert_eq!(result.effective_components(), 4);
    assert_relative_eq!(result.compression_ratio(last), 3.0);
    assert_relative_eq!(result.size_percentage(last), 100.0 / 3.0, max_relative = 1e-12);
    assert_relative_eq!(last.bytes_per_component(), 100.0);
    assert!(result.level(4).is_some());
    assert!(result.level(2).is_none());
}

#[test]
fn 요약_json_키_테스트() {
    let summary = sample_result().summary();
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["method"], "SVD");
    assert_eq!(json["originalSize"], 1200);
    assert_eq!(json["componentLevels"][1]["numComponents"], 4);
    assert_eq!(json["componentLevels"][1]["dataSize"], 400);
}
