//! 병렬 복원 스케줄러
//!
//! 고정 크기 작업자 풀(기본값: 하드웨어 스레드 수) 위에서 독립적인 작업 단위를
//! fan-out 하고, 모든 단위가 끝난 뒤에만 호출자에게 돌아온다 (join/barrier).
//! 풀은 한 번 만들어 여러 압축 호출에 재사용한다.

use crate::core::error::{CodecError, Result};
use once_cell::sync::OnceCell;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

static GLOBAL_POOL: OnceCell<ReconstructionPool> = OnceCell::new();

/// 복원 작업자 풀
pub struct ReconstructionPool {
    pool: ThreadPool,
}

impl ReconstructionPool {
    /// `num_threads` 개의 작업자로 풀 생성 (0이면 하드웨어 스레드 수)
    pub fn new(num_threads: usize) -> Result<Self> {
        let num_threads = if num_threads == 0 {
            num_cpus::get()
        } else {
            num_threads
        };

        let pool = ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| format!("reconstruct-{}", i))
            .build()
            .map_err(|e| CodecError::PoolBuild(e.to_string()))?;

        log::debug!("reconstruction pool ready with {} workers", num_threads);
        Ok(Self { pool })
    }

    /// 하드웨어 스레드 수 크기의 풀
    pub fn with_hardware_concurrency() -> Result<Self> {
        Self::new(num_cpus::get())
    }

    /// 프로세스 전역 풀. 첫 호출 시 한 번만 만든다.
    pub fn global() -> Result<&'static ReconstructionPool> {
        GLOBAL_POOL.get_or_try_init(Self::with_hardware_concurrency)
    }

    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// 풀 안에서 클로저 실행. 안쪽의 rayon 병렬 반복도 이 풀에서 돈다.
    pub fn install<R, F>(&self, op: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(op)
    }

    /// 슬롯 하나당 작업 하나. 슬롯은 서로 겹치지 않으므로 잠금이 필요 없다.
    pub fn for_each_slot<T, F>(&self, slots: &mut [T], work: F)
    where
        T: Send,
        F: Fn(usize, &mut T) + Send + Sync,
    {
        self.pool.install(|| {
            slots
                .par_iter_mut()
                .enumerate()
                .for_each(|(index, slot)| work(index, slot));
        });
    }

    /// 입력 하나당 작업 하나, 결과는 입력 순서대로
    pub fn map_units<I, O, F>(&self, units: &[I], work: F) -> Vec<O>
    where
        I: Sync,
        O: Send,
        F: Fn(&I) -> O + Send + Sync,
    {
        self.pool
            .install(|| units.par_iter().map(|unit| work(unit)).collect())
    }

    /// 실패할 수 있는 `map_units`. 하나라도 실패하면 부분 결과 없이 에러를 돌려준다.
    pub fn try_map_units<I, O, F>(&self, units: &[I], work: F) -> Result<Vec<O>>
    where
        I: Sync,
        O: Send,
        F: Fn(&I) -> Result<O> + Send + Sync,
    {
        self.pool
            .install(|| units.par_iter().map(|unit| work(unit)).collect())
    }
}

impl std::fmt::Debug for ReconstructionPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReconstructionPool")
            .field("num_threads", &self.num_threads())
            .finish()
    }
}
