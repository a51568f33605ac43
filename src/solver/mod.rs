//! Jotto solving engine
//!
//! Candidate filtering, letter deduction, session state and the next-probe
//! advisor.

pub mod advisor;
mod candidates;
mod classifier;
mod deducer;
mod session;

pub use advisor::{GuessAdvisor, Recommendation, Scenario, SolverConfig};
pub use candidates::CandidateStore;
pub use classifier::LetterClassification;
pub use deducer::trim_letters;
pub use session::{Session, TurnOutcome};
