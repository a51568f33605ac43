//! Jotto Solver
//!
//! A solver assistant for Jotto: the secret is a word with no repeated
//! letters, and each probe is answered with the number of letters it shares
//! with the secret, regardless of position.
//!
//! # Quick Start
//!
//! ```rust
//! use jotto_solver::core::Word;
//! use jotto_solver::solver::{GuessAdvisor, Session, TurnOutcome};
//! use jotto_solver::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::from_lines(["cat", "dog", "rat", "bat"]);
//! let mut session = Session::new(&dictionary, 3).unwrap();
//!
//! // "cat" shares one letter with the secret
//! let outcome = session.observe(&Word::new("cat").unwrap(), 1).unwrap();
//! assert_eq!(outcome, TurnOutcome::Continue { remaining: 2 });
//!
//! let advisor = GuessAdvisor::default();
//! let next = advisor.recommend(&session, &Default::default()).unwrap();
//! println!("Try {} next", next.word);
//! ```

// Core domain types
pub mod core;

// Solving engine
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
