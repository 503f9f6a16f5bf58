//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use analyze::{analyze_word, AnalysisResult};
pub use benchmark::{run_benchmark, BenchmarkResult};
pub use simple::run_simple;
pub use solve::{solve_word, SolveConfig, SolveResult};
pub use test_all::{print_test_all_statistics, run_test_all, TestAllStatistics};
