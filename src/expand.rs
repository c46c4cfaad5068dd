//! Successor generation and move-sequence replay.
//!
//! Expansion is a pure function of the board: every legal blank slide, in the
//! fixed `Move::ALL` order. Replay runs a move list forward from a board,
//! which is how reconstructed solutions are checked.

use smallvec::SmallVec;

use crate::board::{Board, Move, PuzzleInstance};

/// Children of one expansion. A board has at most four legal moves, so the
/// buffer never spills to the heap.
pub type Successors = SmallVec<[(Move, Board); 4]>;

/// All legal successors of `board`, in `Move::ALL` order: between 2 (blank in
/// a corner) and 4 (blank in the center).
pub fn successors(board: &Board) -> Successors {
    let mut children = Successors::new();
    for mv in Move::ALL {
        if let Some(child) = board.slide(mv) {
            children.push((mv, child));
        }
    }
    children
}

/// Apply `moves` to `start` in order. `None` if any move leaves the grid.
pub fn replay(start: &Board, moves: &[Move]) -> Option<Board> {
    let mut board = *start;
    for &mv in moves {
        board = board.slide(mv)?;
    }
    Some(board)
}

/// Does the move sequence take the instance's initial board to its goal?
pub fn verify_solution(instance: &PuzzleInstance, moves: &[Move]) -> bool {
    replay(&instance.initial, moves) == Some(instance.goal)
}
