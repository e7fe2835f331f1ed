//! 지그재그 계수 우선순위
//!
//! 블록의 64개 계수 위치를 저주파(좌상단)에서 고주파(우하단) 순으로 나열한다.
//! 컴파일 타임에 한 번 계산되는 전역 읽기 전용 상수.

use super::{BLOCK_DIM, BLOCK_SIZE};
use super::block_dct::CoefficientBlock;

/// 지그재그 인덱스 → 자연(행 우선) 인덱스
pub static ZIGZAG_ORDER: [usize; BLOCK_SIZE] = zigzag_order();

/// 자연 인덱스 → 지그재그 인덱스
pub static NATURAL_TO_ZIGZAG: [usize; BLOCK_SIZE] = invert(&zigzag_order());

/// 대각선 sweep: 짝수 대각선은 좌하단→우상단, 홀수 대각선은 우상단→좌하단
const fn zigzag_order() -> [usize; BLOCK_SIZE] {
    let mut order = [0usize; BLOCK_SIZE];
    let mut idx = 0;
    let mut diagonal = 0;
    while diagonal < 2 * BLOCK_DIM - 1 {
        let mut k = 0;
        while k <= diagonal {
            let (row, col) = if diagonal % 2 == 0 {
                (diagonal - k, k)
            } else {
                (k, diagonal - k)
            };
            if row < BLOCK_DIM && col < BLOCK_DIM {
                order[idx] = row * BLOCK_DIM + col;
                idx += 1;
            }
            k += 1;
        }
        diagonal += 1;
    }
    order
}

const fn invert(order: &[usize; BLOCK_SIZE]) -> [usize; BLOCK_SIZE] {
    let mut inverse = [0usize; BLOCK_SIZE];
    let mut i = 0;
    while i < BLOCK_SIZE {
        inverse[order[i]] = i;
        i += 1;
    }
    inverse
}

/// 지그재그 인덱스가 `k` 미만인 계수만 남기고 나머지는 0
pub fn truncate_coefficients(block: &CoefficientBlock, k: usize) -> CoefficientBlock {
    let mut truncated = [0.0; BLOCK_SIZE];
    for &pos in ZIGZAG_ORDER.iter().take(k) {
        truncated[pos] = block[pos];
    }
    truncated
}
