//! Typed errors for board construction and searcher configuration.
//!
//! Failed moves are not errors: `Board::move_blank` reports an off-grid move
//! with a plain `bool` so successor generation can skip it and keep going.

/// Failure raised while building a board, a direction, or a searcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The serialized board is not a permutation of the digits `0..=8`.
    InvalidConfiguration { detail: String },
    /// A move token other than `up`, `down`, `left`, or `right`.
    UnknownDirection { token: String },
    /// An algorithm name the searcher factory does not recognize.
    UnknownAlgorithm { name: String },
    /// A heuristic name the lookup table does not recognize.
    UnknownHeuristic { name: String },
    /// An informed algorithm was requested without a heuristic parameter.
    MissingHeuristic { algorithm: String },
    /// An uninformed algorithm was given a heuristic instead of a depth limit.
    UnexpectedHeuristic { algorithm: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfiguration { detail } => {
                write!(f, "invalid board configuration: {detail}")
            }
            Self::UnknownDirection { token } => write!(f, "unknown direction: {token}"),
            Self::UnknownAlgorithm { name } => write!(f, "unknown algorithm: {name}"),
            Self::UnknownHeuristic { name } => write!(f, "unknown heuristic: {name}"),
            Self::MissingHeuristic { algorithm } => {
                write!(f, "{algorithm} requires a heuristic")
            }
            Self::UnexpectedHeuristic { algorithm } => {
                write!(f, "{algorithm} takes a depth limit, not a heuristic")
            }
        }
    }
}

impl std::error::Error for SearchError {}
