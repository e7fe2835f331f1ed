//! 샘플 포인트 생성기
//!
//! 렌더링할 성분 개수의 오름차순 목록을 만든다.
//! 세 개를 내보낼 때마다 스텝에 1.5를 곱하고 내림한다 (최소 1).
//! 스텝 1은 floor(1.5) = 1 이므로 그대로 유지되고, 결과적으로 모든 개수가 샘플링된다.

/// 이 값 이하의 예산은 1..=max 전부를 샘플링
pub const DENSE_SAMPLING_LIMIT: usize = 20;

/// 스텝 증가 배율
pub const STEP_GROWTH: f64 = 1.5;

/// 몇 개를 내보낼 때마다 스텝을 키우는지
pub const STEP_GROWTH_PERIOD: usize = 3;

/// `[1, max_components]` 안의 순증가 수열, 항상 `max_components`로 끝난다.
///
/// `max_components == 0`이면 빈 벡터.
pub fn sample_points(max_components: usize) -> Vec<usize> {
    if max_components <= DENSE_SAMPLING_LIMIT {
        return (1..=max_components).collect();
    }

    let mut points = vec![1];
    let mut current = 1;
    let mut step = 1usize;

    while current < max_components {
        current = (current + step).min(max_components);
        points.push(current);

        if points.len() % STEP_GROWTH_PERIOD == 0 {
            step = ((step as f64 * STEP_GROWTH) as usize).max(1);
        }
    }

    if points.last() != Some(&max_components) {
        points.push(max_components);
    }

    points
}
