use super::super::QualityStats;
use crate::core::error::CodecError;
use crate::core::preprocess::LumaMatrix;
use approx::assert_relative_eq;

#[test]
fn 동일_이미지는_무한대_psnr() {
    let image = LumaMatrix::from_vec(3, 3, (0..9).map(|v| v as f64 * 10.0).collect()).unwrap();
    let stats = QualityStats::measure(&image, &image).unwrap();
    assert_eq!(stats.mse, 0.0);
    assert_eq!(stats.rmse, 0.0);
    assert!(stats.psnr.is_infinite());
}

#[test]
fn test_known_error() {
    let original = LumaMatrix::from_vec(2, 2, vec![100.0; 4]).unwrap();
    let shifted = LumaMatrix::from_vec(2, 2, vec![110.0; 4]).unwrap();
    let stats = QualityStats::measure(&original, &shifted).unwrap();

    assert_relative_eq!(stats.mse, 100.0);
    assert_relative_eq!(stats.rmse, 10.0);
    assert_relative_eq!(stats.psnr, 10.0 * (255.0f64 * 255.0 / 100.0).log10());
    println!("✅ {}", stats);
}

#[test]
fn test_size_mismatch() {
    let a = LumaMatrix::from_vec(2, 2, vec![0.0; 4]).unwrap();
    let b = LumaMatrix::from_vec(4, 1, vec![0.0; 4]).unwrap();
    assert!(matches!(
        QualityStats::measure(&a, &b),
        Err(CodecError::InvalidImage(_))
    ));
}
