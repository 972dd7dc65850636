//! Search states: a board plus the path that discovered it.
//!
//! States form a tree. Each state owns a reference-counted link to its
//! predecessor, so sibling subtrees share ancestor chains and a chain is
//! freed as soon as the last frontier entry referencing it is dropped.

use std::rc::Rc;

use smallvec::SmallVec;

use crate::board::{Board, Direction};

/// A board together with the move sequence that reached it.
///
/// Never mutated after construction. `moved` is `None` only for the root.
#[derive(Debug)]
pub struct State {
    pub board: Board,
    pub predecessor: Option<Rc<State>>,
    pub moved: Option<Direction>,
    pub num_moves: u32,
}

impl State {
    /// The root state of a search: no predecessor, zero moves.
    pub fn root(board: Board) -> Rc<State> {
        Rc::new(State {
            board,
            predecessor: None,
            moved: None,
            num_moves: 0,
        })
    }

    /// Every state reachable by one blank move, in `Direction::ALL` order.
    ///
    /// At most four states come back, fewer when the blank sits on an edge
    /// or corner. Each successor's board is an independent copy.
    pub fn generate_successors(self: &Rc<Self>) -> SmallVec<[Rc<State>; 4]> {
        let mut successors = SmallVec::new();
        for direction in Direction::ALL {
            let mut board = self.board.clone();
            if board.move_blank(direction) && board != self.board {
                successors.push(Rc::new(State {
                    board,
                    predecessor: Some(Rc::clone(self)),
                    moved: Some(direction),
                    num_moves: self.num_moves + 1,
                }));
            }
        }
        successors
    }

    /// Whether this state's board is the goal arrangement.
    pub fn is_goal(&self) -> bool {
        self.board.is_goal()
    }

    /// Whether any strict ancestor already holds this state's board.
    ///
    /// Walks the whole chain to the root, so the cost is proportional to
    /// the state's depth. Only the state's own path is consulted; the same
    /// board reached along a different path is not a cycle.
    pub fn creates_cycle(&self) -> bool {
        let mut ancestor = self.predecessor.as_deref();
        while let Some(state) = ancestor {
            if state.board == self.board {
                return true;
            }
            ancestor = state.predecessor.as_deref();
        }
        false
    }

    /// The move labels from the root to this state, in order.
    pub fn moves_from_root(&self) -> Vec<Direction> {
        let mut moves = Vec::with_capacity(self.num_moves as usize);
        let mut state = self;
        while let (Some(direction), Some(predecessor)) = (state.moved, state.predecessor.as_deref())
        {
            moves.push(direction);
            state = predecessor;
        }
        moves.reverse();
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GOAL_DIGITS;

    fn state_from(digits: &str) -> Rc<State> {
        State::root(Board::from_digits(digits).unwrap())
    }

    #[test]
    fn test_root_has_no_history() {
        let root = state_from(GOAL_DIGITS);
        assert_eq!(root.num_moves, 0);
        assert!(root.moved.is_none());
        assert!(root.predecessor.is_none());
        assert!(root.moves_from_root().is_empty());
    }

    #[test]
    fn test_successors_respect_expansion_order() {
        // Blank in the top-left corner: up and left fail, leaving
        // exactly [down, right] in that order.
        let root = state_from(GOAL_DIGITS);
        let successors = root.generate_successors();
        assert_eq!(successors.len(), 2);
        assert_eq!(successors[0].moved, Some(Direction::Down));
        assert_eq!(successors[1].moved, Some(Direction::Right));

        // Blank in the center: all four, in fixed order.
        let root = state_from("142305678");
        let successors = root.generate_successors();
        assert_eq!(successors.len(), 4);
        let moves: Vec<_> = successors.iter().map(|s| s.moved.unwrap()).collect();
        assert_eq!(moves, Direction::ALL);
    }

    #[test]
    fn test_successor_counts_moves_and_links_predecessor() {
        let root = state_from("142305678");
        for successor in root.generate_successors() {
            assert_eq!(successor.num_moves, root.num_moves + 1);
            assert!(Rc::ptr_eq(successor.predecessor.as_ref().unwrap(), &root));
            assert_ne!(successor.board, root.board);
        }
    }

    #[test]
    fn test_creates_cycle_detects_ancestor_repeat() {
        let root = state_from("142305678");
        let child = root
            .generate_successors()
            .into_iter()
            .find(|s| s.moved == Some(Direction::Up))
            .unwrap();

        // Moving back down restores the root's board two levels up.
        let grandchildren = child.generate_successors();
        let back = grandchildren
            .iter()
            .find(|s| s.board == root.board)
            .unwrap();
        assert!(back.creates_cycle());

        for other in grandchildren.iter().filter(|s| s.board != root.board) {
            assert!(!other.creates_cycle());
        }
        assert!(!child.creates_cycle());
    }

    #[test]
    fn test_moves_from_root_orders_labels_root_first() {
        let root = state_from(GOAL_DIGITS);
        let first = root
            .generate_successors()
            .into_iter()
            .find(|s| s.moved == Some(Direction::Down))
            .unwrap();
        let second = first
            .generate_successors()
            .into_iter()
            .find(|s| s.moved == Some(Direction::Right))
            .unwrap();

        assert_eq!(second.num_moves, 2);
        assert_eq!(
            second.moves_from_root(),
            vec![Direction::Down, Direction::Right]
        );
    }

    #[test]
    fn test_goal_detection() {
        assert!(state_from(GOAL_DIGITS).is_goal());
        assert!(!state_from("142305678").is_goal());
    }
}
