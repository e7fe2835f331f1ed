//! 휘도(luma) 행렬과 픽셀 소스

use crate::core::error::{CodecError, Result};
use image::{DynamicImage, GenericImageView, GrayImage, RgbImage, RgbaImage};
use ndarray::Array2;

/// ITU-R BT.601 휘도 가중치
pub const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// 출력 픽셀 범위
pub const PIXEL_MIN: f64 = 0.0;
pub const PIXEL_MAX: f64 = 255.0;

/// 2차원 RGB 픽셀 소스
///
/// 이미지 컨테이너 디코딩은 이 크레이트 밖의 일이므로, 코어는 이 트레잇만 본다.
pub trait PixelSource {
    /// (width, height)
    fn dimensions(&self) -> (usize, usize);
    /// (x, y) 위치의 RGB 값
    fn rgb_at(&self, x: usize, y: usize) -> [u8; 3];
}

/// 행 우선 RGB8 버퍼
#[derive(Debug, Clone, PartialEq)]
pub struct RgbBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbBuffer {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if data.len() != width * height * 3 {
            return Err(CodecError::InvalidImage(format!(
                "RGB buffer length {} does not match {}x{}x3",
                data.len(),
                width,
                height
            )));
        }
        Ok(Self { width, height, data })
    }

    /// 모든 픽셀이 같은 색인 버퍼
    pub fn filled(width: usize, height: usize, rgb: [u8; 3]) -> Self {
        let data = std::iter::repeat(rgb)
            .take(width * height)
            .flatten()
            .collect();
        Self { width, height, data }
    }

    /// R = G = B 인 회색조 버퍼
    pub fn from_gray(width: usize, height: usize, gray: &[u8]) -> Result<Self> {
        if gray.len() != width * height {
            return Err(CodecError::InvalidImage(format!(
                "gray buffer length {} does not match {}x{}",
                gray.len(),
                width,
                height
            )));
        }
        let data = gray.iter().flat_map(|&g| [g, g, g]).collect();
        Ok(Self { width, height, data })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl PixelSource for RgbBuffer {
    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn rgb_at(&self, x: usize, y: usize) -> [u8; 3] {
        let offset = (y * self.width + x) * 3;
        [self.data[offset], self.data[offset + 1], self.data[offset + 2]]
    }
}

impl PixelSource for RgbImage {
    fn dimensions(&self) -> (usize, usize) {
        (self.width() as usize, self.height() as usize)
    }

    fn rgb_at(&self, x: usize, y: usize) -> [u8; 3] {
        self.get_pixel(x as u32, y as u32).0
    }
}

impl PixelSource for RgbaImage {
    fn dimensions(&self) -> (usize, usize) {
        (self.width() as usize, self.height() as usize)
    }

    fn rgb_at(&self, x: usize, y: usize) -> [u8; 3] {
        let [r, g, b, _] = self.get_pixel(x as u32, y as u32).0;
        [r, g, b]
    }
}

impl PixelSource for DynamicImage {
    fn dimensions(&self) -> (usize, usize) {
        (self.width() as usize, self.height() as usize)
    }

    fn rgb_at(&self, x: usize, y: usize) -> [u8; 3] {
        let pixel = self.get_pixel(x as u32, y as u32);
        [pixel[0], pixel[1], pixel[2]]
    }
}

/// 휘도 행렬 (height × width, 행 우선)
///
/// 값은 대략 0~255 범위지만 출력 시점까지 클램프하지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub struct LumaMatrix {
    data: Array2<f64>,
}

impl LumaMatrix {
    /// 행 우선 샘플로 생성
    pub fn from_vec(width: usize, height: usize, samples: Vec<f64>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CodecError::InvalidImage(format!(
                "image has zero dimension ({}x{})",
                width, height
            )));
        }
        if samples.iter().any(|v| !v.is_finite()) {
            return Err(CodecError::InvalidImage(
                "luma samples must be finite".to_string(),
            ));
        }
        let data = Array2::from_shape_vec((height, width), samples)
            .map_err(|e| CodecError::InvalidImage(e.to_string()))?;
        Ok(Self { data })
    }

    /// 크기가 검증된 배열을 그대로 감싼다 (패딩/크롭/복원 결과용)
    pub(crate) fn from_array(data: Array2<f64>) -> Self {
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn get(&self, y: usize, x: usize) -> f64 {
        self.data[[y, x]]
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    /// 행 우선 샘플 복사본
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.iter().copied().collect()
    }

    /// 클램프 + 반올림한 8비트 회색조 바이트 (행 우선)
    pub fn to_gray_bytes(&self) -> Vec<u8> {
        self.data
            .iter()
            .map(|&v| clamp(v, PIXEL_MIN, PIXEL_MAX).round() as u8)
            .collect()
    }

    /// 전송 포맷 인코딩용 회색조 이미지
    pub fn to_gray_image(&self) -> Result<GrayImage> {
        GrayImage::from_raw(
            self.width() as u32,
            self.height() as u32,
            self.to_gray_bytes(),
        )
        .ok_or_else(|| CodecError::InvalidImage("gray buffer size mismatch".to_string()))
    }
}

/// 픽셀 소스를 휘도 행렬로 변환: 0.299R + 0.587G + 0.114B
pub fn to_luma<P: PixelSource + ?Sized>(image: &P) -> Result<LumaMatrix> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(CodecError::InvalidImage(format!(
            "image has zero dimension ({}x{})",
            width, height
        )));
    }

    let data = Array2::from_shape_fn((height, width), |(y, x)| {
        let [r, g, b] = image.rgb_at(x, y);
        LUMA_WEIGHTS[0] * r as f64 + LUMA_WEIGHTS[1] * g as f64 + LUMA_WEIGHTS[2] * b as f64
    });
    Ok(LumaMatrix::from_array(data))
}

/// 출력 픽셀에만 적용. 변환 계수에는 절대 쓰지 않는다.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
