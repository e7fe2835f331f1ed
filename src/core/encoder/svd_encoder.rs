//! SVD 기반 저계수 점진 인코더
//!
//! 휘도 행렬 전체를 M = UΣVᵀ 로 한 번 분해하고,
//! 단계 k 마다 상위 k개의 특이 삼중항으로 U_k·diag(S_k)·V_kᵀ 를 복원한다.

use super::ProgressiveEncoder;
use crate::core::compressor::{CompressionMethod, ComponentLevel};
use crate::core::error::{CodecError, Result};
use crate::core::preprocess::{clamp, LumaMatrix, PIXEL_MAX, PIXEL_MIN};
use crate::core::sampling::sample_points;
use crate::core::systems::ReconstructionPool;
use nalgebra::DMatrix;
use ndarray::Array2;

/// 값 하나를 f64 로 저장한다고 가정한 바이트 수
const BYTES_PER_VALUE: usize = 8;

/// 특이값 하나당 허용하는 SVD 반복 횟수. 상한에 도달하면 수렴 실패로 본다.
pub const ITERATIONS_PER_RANK: usize = 100;

/// 특이 삼중항 집합 (특이값 내림차순)
///
/// 호출 하나 동안만 살아 있고, 단계별 병렬 복원에서 읽기 전용으로 공유된다.
#[derive(Debug, Clone)]
pub struct SingularTripleSet {
    /// height × r
    pub u: DMatrix<f64>,
    pub singular_values: Vec<f64>,
    /// r × width
    pub v_t: DMatrix<f64>,
}

impl SingularTripleSet {
    /// 전체 행렬 분해
    pub fn factorize(luma: &LumaMatrix, max_iterations: usize) -> Result<Self> {
        let matrix = DMatrix::from_row_slice(luma.height(), luma.width(), &luma.to_vec());

        let svd = matrix
            .try_svd(true, true, f64::EPSILON, max_iterations)
            .ok_or_else(|| {
                CodecError::FactorizationError(format!(
                    "SVD did not converge within {} iterations",
                    max_iterations
                ))
            })?;

        let u = svd
            .u
            .ok_or_else(|| CodecError::FactorizationError("U matrix not computed".to_string()))?;
        let v_t = svd
            .v_t
            .ok_or_else(|| CodecError::FactorizationError("V^T matrix not computed".to_string()))?;
        let values: Vec<f64> = svd.singular_values.iter().copied().collect();

        if values.iter().any(|s| !s.is_finite()) {
            return Err(CodecError::FactorizationError(
                "non-finite singular value".to_string(),
            ));
        }

        // 내림차순 정렬 순서로 U 열과 Vᵀ 행을 재배치
        let mut order: Vec<usize> = (0..values.len()).collect();
        order.sort_by(|&a, &b| values[b].total_cmp(&values[a]));

        let rank = order.len();
        let u = DMatrix::from_fn(u.nrows(), rank, |i, j| u[(i, order[j])]);
        let v_t = DMatrix::from_fn(rank, v_t.ncols(), |i, j| v_t[(order[i], j)]);
        let singular_values = order.iter().map(|&i| values[i]).collect();

        Ok(Self {
            u,
            singular_values,
            v_t,
        })
    }

    /// 사용 가능한 특이값 개수 = min(height, width)
    pub fn rank(&self) -> usize {
        self.singular_values.len()
    }

    /// U_k · diag(S_k) · V_kᵀ
    pub fn reconstruct(&self, k: usize) -> DMatrix<f64> {
        let k = k.min(self.rank());
        let scaled_u = DMatrix::from_fn(self.u.nrows(), k, |i, j| {
            self.u[(i, j)] * self.singular_values[j]
        });
        let v_t_k = DMatrix::from_fn(k, self.v_t.ncols(), |i, j| self.v_t[(i, j)]);
        scaled_u * v_t_k
    }
}

/// SVD 인코더
#[derive(Debug, Clone, Default)]
pub struct SvdEncoder {
    /// 반복 상한 (없으면 `ITERATIONS_PER_RANK × min(height, width)`)
    pub max_iterations: Option<usize>,
}

impl SvdEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_iterations(max_iterations: usize) -> Self {
        Self {
            max_iterations: Some(max_iterations),
        }
    }

    fn iteration_limit(&self, luma: &LumaMatrix) -> usize {
        self.max_iterations
            .unwrap_or_else(|| ITERATIONS_PER_RANK * luma.height().min(luma.width()))
    }

    /// `k × (height + width + 1) × 8` 바이트 (설명용 추정치)
    pub fn approximate_byte_size(k: usize, height: usize, width: usize) -> usize {
        k * (height + width + 1) * BYTES_PER_VALUE
    }

    /// 단일 단계 복원: 값은 [0, 255]로 클램프되어 원본 크기 이미지에 쓰인다
    pub fn reconstruct(&self, triples: &SingularTripleSet, k: usize) -> ComponentLevel {
        let product = triples.reconstruct(k);
        let (height, width) = (product.nrows(), product.ncols());
        let image = Array2::from_shape_fn((height, width), |(y, x)| {
            clamp(product[(y, x)], PIXEL_MIN, PIXEL_MAX)
        });

        ComponentLevel {
            num_components: k,
            approximate_byte_size: Self::approximate_byte_size(k, height, width),
            image: LumaMatrix::from_array(image),
        }
    }
}

impl ProgressiveEncoder for SvdEncoder {
    fn method(&self) -> CompressionMethod {
        CompressionMethod::LowRank
    }

    fn max_components(&self, luma: &LumaMatrix) -> usize {
        luma.height().min(luma.width())
    }

    fn encode(
        &self,
        luma: &LumaMatrix,
        requested: usize,
        pool: &ReconstructionPool,
    ) -> Result<Vec<ComponentLevel>> {
        if requested == 0 {
            return Err(CodecError::FactorizationError(
                "no singular triples requested".to_string(),
            ));
        }

        let limit = self.iteration_limit(luma);
        let triples = pool.install(|| SingularTripleSet::factorize(luma, limit))?;
        log::debug!(
            "SVD factorized {}x{} matrix, rank {}",
            luma.height(),
            luma.width(),
            triples.rank()
        );

        let budget = requested.min(triples.rank());
        if budget != requested {
            log::debug!("SVD budget {} clamped to {}", requested, budget);
        }

        let points = sample_points(budget);
        Ok(pool.map_units(&points, |&k| self.reconstruct(&triples, k)))
    }
}
