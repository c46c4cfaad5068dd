//! Distance-to-goal estimates for A*.
//!
//! Both heuristics sum a per-tile positional discrepancy over the non-blank
//! tiles and never overestimate the true remaining move count, so A* stays
//! optimal with either.

use crate::board::Board;

/// Tile value -> goal (row, col), built once per search so heuristic calls
/// are a direct lookup instead of a scan of the goal board.
#[derive(Debug, Clone, Copy)]
pub struct GoalPositions {
    positions: [(u8, u8); 9],
}

impl GoalPositions {
    pub fn new(goal: &Board) -> Self {
        let mut positions = [(0u8, 0u8); 9];
        for (idx, &tile) in goal.cells().iter().enumerate() {
            positions[tile as usize] = ((idx / 3) as u8, (idx % 3) as u8);
        }
        Self { positions }
    }

    /// Goal (row, col) of a tile value.
    pub fn of(&self, tile: u8) -> (u8, u8) {
        self.positions[tile as usize]
    }
}

/// A scoring function plugged into [`crate::search::astar`].
pub type Heuristic = fn(&Board, &GoalPositions) -> f64;

/// Sum of per-tile |row gap| + |col gap|.
pub fn manhattan(board: &Board, goal: &GoalPositions) -> f64 {
    let mut total: u32 = 0;
    for (idx, &tile) in board.cells().iter().enumerate() {
        if tile == 0 {
            continue;
        }
        let (goal_row, goal_col) = goal.of(tile);
        total += (idx / 3).abs_diff(goal_row as usize) as u32;
        total += (idx % 3).abs_diff(goal_col as usize) as u32;
    }
    f64::from(total)
}

/// Sum of per-tile straight-line distances.
pub fn euclidean(board: &Board, goal: &GoalPositions) -> f64 {
    let mut total = 0.0;
    for (idx, &tile) in board.cells().iter().enumerate() {
        if tile == 0 {
            continue;
        }
        let (goal_row, goal_col) = goal.of(tile);
        let row_gap = (idx / 3) as f64 - f64::from(goal_row);
        let col_gap = (idx % 3) as f64 - f64::from(goal_col);
        total += (row_gap * row_gap + col_gap * col_gap).sqrt();
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: [[u8; 3]; 3]) -> Board {
        Board::try_from(rows).unwrap()
    }

    #[test]
    fn test_zero_at_goal() {
        let goal = board([[0, 1, 2], [3, 4, 5], [6, 7, 8]]);
        let positions = GoalPositions::new(&goal);
        assert_eq!(manhattan(&goal, &positions), 0.0);
        assert_eq!(euclidean(&goal, &positions), 0.0);
    }

    #[test]
    fn test_manhattan_counts_row_and_col_gaps() {
        let goal = board([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
        let positions = GoalPositions::new(&goal);

        // 8 and the blank swapped: tile 8 is one column off.
        let one_off = board([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
        assert_eq!(manhattan(&one_off, &positions), 1.0);

        // 1 moved from (0,0) to (2,1): two rows and one column off.
        let far = board([[2, 3, 6], [4, 5, 0], [7, 1, 8]]);
        assert!(manhattan(&far, &positions) >= 3.0);
    }

    #[test]
    fn test_euclidean_never_exceeds_manhattan() {
        let goal = board([[0, 1, 2], [3, 4, 5], [6, 7, 8]]);
        let positions = GoalPositions::new(&goal);
        let samples = [
            board([[1, 2, 3], [4, 5, 6], [7, 8, 0]]),
            board([[8, 7, 6], [5, 4, 3], [2, 1, 0]]),
            board([[1, 0, 2], [3, 4, 5], [6, 7, 8]]),
        ];
        for sample in samples {
            assert!(euclidean(&sample, &positions) <= manhattan(&sample, &positions));
        }
    }

    #[test]
    fn test_admissible_on_a_one_move_board() {
        // True cost is 1, so an admissible estimate must be at most 1.
        let goal = board([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
        let positions = GoalPositions::new(&goal);
        let one_away = board([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
        assert!(manhattan(&one_away, &positions) <= 1.0);
        assert!(euclidean(&one_away, &positions) <= 1.0);
    }

    #[test]
    fn test_goal_positions_lookup() {
        let goal = board([[0, 1, 2], [3, 4, 5], [6, 7, 8]]);
        let positions = GoalPositions::new(&goal);
        assert_eq!(positions.of(0), (0, 0));
        assert_eq!(positions.of(5), (1, 2));
        assert_eq!(positions.of(8), (2, 2));
    }
}
