//! Inversion-parity solvability precheck.
//!
//! Run once before any search: an unsolvable instance would otherwise make
//! every strategy exhaust the full half of the state space it can reach.
//! Blank slides never change inversion parity on an odd-width board, so the
//! initial board reaches the goal iff the parity gap between them is even.

use crate::board::Board;

/// Pairs out of order in `ranks`.
fn inversions(ranks: &[u8; 8]) -> usize {
    let mut count = 0;
    for i in 0..ranks.len() {
        for j in i + 1..ranks.len() {
            if ranks[i] > ranks[j] {
                count += 1;
            }
        }
    }
    count
}

/// Is `initial` reachable from (equivalently, can it reach) `goal`?
///
/// Each non-blank tile of `initial` is ranked by its position in the goal's
/// row-major order; the initial board is solvable iff that ranking has an
/// even inversion count. For the classic goal `[[0,1,2],[3,4,5],[6,7,8]]`
/// the ranking is the tile values themselves.
pub fn is_solvable(initial: &Board, goal: &Board) -> bool {
    // Rank of each tile value in the goal's flattened non-blank order.
    let mut rank = [0u8; 9];
    let mut next = 0u8;
    for &tile in goal.cells() {
        if tile != 0 {
            rank[tile as usize] = next;
            next += 1;
        }
    }

    let mut ranked = [0u8; 8];
    let mut filled = 0;
    for &tile in initial.cells() {
        if tile != 0 {
            ranked[filled] = rank[tile as usize];
            filled += 1;
        }
    }

    inversions(&ranked) % 2 == 0
}
