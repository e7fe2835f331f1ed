use super::super::ReconstructionPool;
use crate::core::error::CodecError;
use rayon::prelude::*;

#[test]
fn 슬롯별_작업_테스트() {
    let pool = ReconstructionPool::new(4).unwrap();
    let mut slots = vec![0usize; 1000];
    pool.for_each_slot(&mut slots, |index, slot| *slot = index * index);

    for (index, value) in slots.iter().enumerate() {
        assert_eq!(*value, index * index);
    }
}

#[test]
fn test_map_units_preserves_order() {
    let pool = ReconstructionPool::new(3).unwrap();
    let units: Vec<u64> = (1..=200).collect();
    let results = pool.map_units(&units, |&n| n * 2);
    assert_eq!(results, units.iter().map(|n| n * 2).collect::<Vec<_>>());
}

#[test]
fn test_try_map_units_fails_without_partial_result() {
    let pool = ReconstructionPool::new(2).unwrap();
    let units: Vec<usize> = (0..50).collect();
    let result = pool.try_map_units(&units, |&n| {
        if n == 37 {
            Err(CodecError::FactorizationError("unit 37".to_string()))
        } else {
            Ok(n)
        }
    });
    assert!(matches!(result, Err(CodecError::FactorizationError(_))));

    let ok = pool.try_map_units(&units, |&n| Ok(n + 1)).unwrap();
    assert_eq!(ok.len(), 50);
    assert_eq!(ok[49], 50);
}

#[test]
fn test_nested_work_runs_on_same_pool() {
    let pool = ReconstructionPool::new(2).unwrap();
    let units = vec![10usize, 20, 30];
    let sums = pool.map_units(&units, |&n| {
        assert_eq!(rayon::current_num_threads(), 2);
        (0..n).into_par_iter().sum::<usize>()
    });
    assert_eq!(sums, vec![45, 190, 435]);
}

#[test]
fn test_zero_threads_means_hardware_concurrency() {
    let pool = ReconstructionPool::new(0).unwrap();
    assert_eq!(pool.num_threads(), num_cpus::get());
}

#[test]
fn test_global_pool_is_shared() {
    let first = ReconstructionPool::global().unwrap();
    let second = ReconstructionPool::global().unwrap();
    assert!(std::ptr::eq(first, second));
    assert!(first.num_threads() >= 1);
}
