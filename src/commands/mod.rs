//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod play;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::{GameEnd, run_play};
pub use solve::{SolveConfig, SolveResult, TurnStep, solve_word};
