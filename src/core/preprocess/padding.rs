//! 블록 정렬 패딩과 크롭

use super::luma::LumaMatrix;
use ndarray::{s, Array2};

/// `size` 이상인 가장 작은 `block_size` 배수
#[inline]
pub fn next_block_multiple(size: usize, block_size: usize) -> usize {
    (size + block_size - 1) / block_size * block_size
}

/// 각 차원을 `block_size` 배수로 늘린다.
///
/// 새 셀은 가장 가까운 경계 셀 값을 복제한다 (zero-fill 아님).
pub fn pad_to_block_multiple(matrix: &LumaMatrix, block_size: usize) -> LumaMatrix {
    let (height, width) = (matrix.height(), matrix.width());
    let padded_height = next_block_multiple(height, block_size);
    let padded_width = next_block_multiple(width, block_size);

    if padded_height == height && padded_width == width {
        return matrix.clone();
    }

    let source = matrix.as_array();
    let padded = Array2::from_shape_fn((padded_height, padded_width), |(y, x)| {
        source[[y.min(height - 1), x.min(width - 1)]]
    });
    LumaMatrix::from_array(padded)
}

/// 좌상단 `width × height` 영역만 남긴다.
pub fn crop(matrix: &LumaMatrix, width: usize, height: usize) -> LumaMatrix {
    let width = width.min(matrix.width());
    let height = height.min(matrix.height());
    if width == matrix.width() && height == matrix.height() {
        return matrix.clone();
    }
    LumaMatrix::from_array(matrix.as_array().slice(s![..height, ..width]).to_owned())
}
