//! State-space search for the sliding eight puzzle.
//!
//! This crate provides the search core: a board type that generates its
//! successor configurations, reference-counted search states that remember
//! their discovery path, and a family of frontier strategies (random,
//! breadth-first, depth-first, greedy, A*) sharing one admission rule.

pub mod board;
pub mod error;
pub mod heuristic;
pub mod searcher;
pub mod state;

// Re-export main types
pub use board::{Board, Direction, CELLS, GOAL_DIGITS, SIZE};
pub use error::SearchError;
pub use heuristic::{by_name, misplaced_tiles, weighted_misplaced, zero_estimate, Heuristic};
pub use searcher::{
    create_searcher, CancelToken, SearchOutcome, SearchResult, Searcher, SearcherParam, Strategy,
};
pub use state::State;
