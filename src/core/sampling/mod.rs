//! 렌더링할 성분 개수(샘플 포인트) 선택

pub mod sample_points;


pub use sample_points::{sample_points, DENSE_SAMPLING_LIMIT, STEP_GROWTH, STEP_GROWTH_PERIOD};
