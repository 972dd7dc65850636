//! Estimators of remaining cost for the informed search strategies.
//!
//! A heuristic is a plain function from a state to a non-negative estimate.
//! Three standard estimators are built in; callers may pass any function
//! with the right shape.

use crate::error::SearchError;
use crate::state::State;

/// An estimate of the number of moves still needed to reach the goal.
pub type Heuristic = fn(&State) -> u32;

/// Estimates zero everywhere, reducing informed search to breadth-like
/// exploration ordered by path cost alone.
pub fn zero_estimate(_state: &State) -> u32 {
    0
}

/// Number of non-blank tiles away from their goal cell. Admissible: every
/// misplaced tile needs at least one move.
pub fn misplaced_tiles(state: &State) -> u32 {
    state.board.num_misplaced()
}

/// Row/column-weighted misplacement count. Not admissible; see
/// `Board::num_row_col_misplaced` for the exact formula.
pub fn weighted_misplaced(state: &State) -> u32 {
    state.board.num_row_col_misplaced()
}

/// Look up a built-in estimator by its CLI name.
pub fn by_name(name: &str) -> Result<Heuristic, SearchError> {
    match name {
        "zero" => Ok(zero_estimate),
        "misplaced" => Ok(misplaced_tiles),
        "weighted" => Ok(weighted_misplaced),
        other => Err(SearchError::UnknownHeuristic {
            name: other.to_string(),
        }),
    }
}
