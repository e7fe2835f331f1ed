use super::super::{crop, next_block_multiple, pad_to_block_multiple, LumaMatrix};

fn ramp(width: usize, height: usize) -> LumaMatrix {
    let samples = (0..width * height).map(|i| i as f64).collect();
    LumaMatrix::from_vec(width, height, samples).unwrap()
}

#[test]
fn test_next_block_multiple() {
    assert_eq!(next_block_multiple(1, 8), 8);
    assert_eq!(next_block_multiple(8, 8), 8);
    assert_eq!(next_block_multiple(10, 8), 16);
    assert_eq!(next_block_multiple(17, 8), 24);
}

#[test]
fn 경계_복제_패딩_테스트() {
    let matrix = ramp(10, 10);
    let padded = pad_to_block_multiple(&matrix, 8);

    assert_eq!((padded.width(), padded.height()), (16, 16));

    // 원본 영역은 그대로
    for y in 0..10 {
        for x in 0..10 {
            assert_eq!(padded.get(y, x), matrix.get(y, x));
        }
    }
    // 오른쪽/아래쪽은 가장 가까운 경계 셀 복제
    for y in 0..10 {
        for x in 10..16 {
            assert_eq!(padded.get(y, x), matrix.get(y, 9));
        }
    }
    for y in 10..16 {
        for x in 0..10 {
            assert_eq!(padded.get(y, x), matrix.get(9, x));
        }
    }
    // 모서리는 우하단 셀
    for y in 10..16 {
        for x in 10..16 {
            assert_eq!(padded.get(y, x), matrix.get(9, 9));
        }
    }
}

#[test]
fn test_aligned_input_is_unchanged() {
    let matrix = ramp(16, 8);
    let padded = pad_to_block_multiple(&matrix, 8);
    assert_eq!(padded, matrix);
}

#[test]
fn test_crop_restores_original_region() {
    let matrix = ramp(10, 7);
    let padded = pad_to_block_multiple(&matrix, 8);
    assert_eq!((padded.width(), padded.height()), (16, 8));

    let cropped = crop(&padded, 10, 7);
    assert_eq!(cropped, matrix);
}
