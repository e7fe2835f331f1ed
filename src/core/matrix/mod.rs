pub mod quality;

// 재수출
pub use quality::QualityStats;

#[cfg(test)]
mod __tests__;
