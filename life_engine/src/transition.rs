//! Transition engine — one Conway generation.
//!
//! The new grid is built entirely from the current generation's values;
//! the input board is never mutated. Cells outside the grid are dead —
//! there is no wraparound.

use crate::board::Board;
use crate::codec::{self, StateHash};

const OFFSETS: [isize; 3] = [-1, 0, 1];

/// Count the live cells among the 8 neighbors of (row, col).
///
/// Out-of-range neighbor positions contribute 0. Result is in [0, 8].
pub fn count_live_neighbors(board: &Board, row: usize, col: usize) -> u8 {
    let rows = board.rows() as isize;
    let columns = board.columns() as isize;
    let mut count = 0;

    for d_row in OFFSETS {
        for d_col in OFFSETS {
            if d_row == 0 && d_col == 0 {
                continue;
            }

            let neighbor_row = row as isize + d_row;
            let neighbor_col = col as isize + d_col;

            if neighbor_row >= 0
                && neighbor_row < rows
                && neighbor_col >= 0
                && neighbor_col < columns
                && board.get(neighbor_row as usize, neighbor_col as usize)
            {
                count += 1;
            }
        }
    }

    count
}

/// Apply the transition rule to every cell and return the next generation
/// together with its fingerprint.
///
/// A live cell survives iff it has 2 or 3 live neighbors; a dead cell
/// becomes alive iff it has exactly 3. Everything else is dead.
pub fn next_generation(board: &Board) -> (Board, StateHash) {
    let mut cells = Vec::with_capacity(board.rows() * board.columns());

    for row in 0..board.rows() {
        for col in 0..board.columns() {
            let live_neighbors = count_live_neighbors(board, row, col);
            let alive = if board.get(row, col) {
                live_neighbors == 2 || live_neighbors == 3
            } else {
                live_neighbors == 3
            };
            cells.push(alive);
        }
    }

    let next = Board::from_flat(board.rows(), board.columns(), cells);
    let hash = codec::state_hash(&next);
    (next, hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_alive(rows: usize, columns: usize) -> Board {
        Board::from_rows(&vec![vec![true; columns]; rows]).unwrap()
    }

    /// 2x2 block — a fixed point of the rule.
    fn block() -> Board {
        let mut board = Board::new(4, 4).unwrap();
        board.set(1, 1, true);
        board.set(1, 2, true);
        board.set(2, 1, true);
        board.set(2, 2, true);
        board
    }

    #[test]
    fn corner_edge_and_interior_neighbor_counts() {
        let board = all_alive(3, 3);
        assert_eq!(count_live_neighbors(&board, 0, 0), 3);
        assert_eq!(count_live_neighbors(&board, 0, 1), 5);
        assert_eq!(count_live_neighbors(&board, 1, 1), 8);
    }

    #[test]
    fn out_of_range_neighbors_are_dead() {
        let mut board = Board::new(1, 1).unwrap();
        board.set(0, 0, true);
        assert_eq!(count_live_neighbors(&board, 0, 0), 0);
    }

    #[test]
    fn dead_one_by_one_board_stays_dead() {
        let board = Board::new(1, 1).unwrap();
        let (next, _) = next_generation(&board);
        assert!(!next.get(0, 0));
    }

    #[test]
    fn lone_live_cell_dies_of_underpopulation() {
        let mut board = Board::new(3, 3).unwrap();
        board.set(1, 1, true);
        let (next, _) = next_generation(&board);
        assert_eq!(next.live_cells(), 0);
    }

    #[test]
    fn dead_cell_with_three_neighbors_is_born() {
        let mut board = Board::new(3, 3).unwrap();
        board.set(0, 0, true);
        board.set(0, 2, true);
        board.set(2, 1, true);
        let (next, _) = next_generation(&board);
        assert!(next.get(1, 1));
    }

    #[test]
    fn live_cell_with_four_neighbors_dies_of_overcrowding() {
        let mut board = Board::new(3, 3).unwrap();
        board.set(1, 1, true);
        board.set(0, 0, true);
        board.set(0, 2, true);
        board.set(2, 0, true);
        board.set(2, 2, true);
        let (next, _) = next_generation(&board);
        assert!(!next.get(1, 1));
    }

    #[test]
    fn block_is_a_fixed_point_and_idempotent() {
        let board = block();
        let (first, first_hash) = next_generation(&board);
        assert_eq!(first, board);

        // Feeding the fixed point back in reproduces it again.
        let (second, second_hash) = next_generation(&first);
        assert_eq!(second, first);
        assert_eq!(second_hash, first_hash);
    }

    #[test]
    fn returned_hash_matches_returned_grid() {
        let mut board = Board::new(4, 4).unwrap();
        board.set(1, 0, true);
        board.set(1, 1, true);
        board.set(1, 2, true);
        let (next, hash) = next_generation(&board);
        assert_eq!(hash, codec::state_hash(&next));
    }
}
