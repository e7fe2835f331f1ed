//! 복원 품질 통계

use crate::core::error::{CodecError, Result};
use crate::core::preprocess::{LumaMatrix, PIXEL_MAX};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityStats {
    pub mse: f64,
    pub rmse: f64,
    /// 최대값 255 기준 PSNR (dB). 완전히 같으면 무한대
    pub psnr: f64,
}

impl QualityStats {
    /// 원본과 복원 이미지 비교
    pub fn measure(original: &LumaMatrix, reconstructed: &LumaMatrix) -> Result<Self> {
        if original.width() != reconstructed.width() || original.height() != reconstructed.height()
        {
            return Err(CodecError::InvalidImage(format!(
                "size mismatch: {}x{} vs {}x{}",
                original.width(),
                original.height(),
                reconstructed.width(),
                reconstructed.height()
            )));
        }

        let count = (original.width() * original.height()) as f64;
        let mse = original
            .as_array()
            .iter()
            .zip(reconstructed.as_array().iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            / count;

        let psnr = if mse == 0.0 {
            f64::INFINITY
        } else {
            10.0 * (PIXEL_MAX * PIXEL_MAX / mse).log10()
        };

        Ok(Self {
            mse,
            rmse: mse.sqrt(),
            psnr,
        })
    }
}

impl fmt::Display for QualityStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RMSE {:.4}, PSNR {:.2} dB", self.rmse, self.psnr)
    }
}
