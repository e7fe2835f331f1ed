use super::super::{truncate_coefficients, NATURAL_TO_ZIGZAG, ZIGZAG_ORDER};

/// JPEG 표준 지그재그 표
const JPEG_ZIGZAG: [usize; 64] = [
     0,  1,  8, 16,  9,  2,  3, 10,
    17, 24, 32, 25, 18, 11,  4,  5,
    12, 19, 26, 33, 40, 48, 41, 34,
    27, 20, 13,  6,  7, 14, 21, 28,
    35, 42, 49, 56, 57, 50, 43, 36,
    29, 22, 15, 23, 30, 37, 44, 51,
    58, 59, 52, 45, 38, 31, 39, 46,
    53, 60, 61, 54, 47, 55, 62, 63,
];

#[test]
fn 지그재그_표준_순서_테스트() {
    assert_eq!(ZIGZAG_ORDER, JPEG_ZIGZAG);
}

#[test]
fn test_inverse_table() {
    for i in 0..64 {
        assert_eq!(NATURAL_TO_ZIGZAG[ZIGZAG_ORDER[i]], i);
        assert_eq!(ZIGZAG_ORDER[NATURAL_TO_ZIGZAG[i]], i);
    }
}

#[test]
fn test_truncate_keeps_lowest_frequencies() {
    let block: [f64; 64] = std::array::from_fn(|i| i as f64 + 1.0);

    for k in 0..=64 {
        let truncated = truncate_coefficients(&block, k);
        for pos in 0..64 {
            if NATURAL_TO_ZIGZAG[pos] < k {
                assert_eq!(truncated[pos], block[pos]);
            } else {
                assert_eq!(truncated[pos], 0.0);
            }
        }
    }
}

#[test]
fn test_truncate_beyond_block_is_identity() {
    let block: [f64; 64] = std::array::from_fn(|i| (i as f64).sin());
    assert_eq!(truncate_coefficients(&block, 1000), block);
}
