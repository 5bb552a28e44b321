//! Inverted gravity - gems rise toward row 0
//!
//! Each column is compacted independently: its gems keep their relative order and
//! move to the top, and the bottom of the column is padded with `Empty`.

use crate::board::BoardState;
use crate::types::GemType;

/// Return a new board after applying upward gravity
pub fn apply_gravity(board: &BoardState) -> BoardState {
    let width = board.width();
    let height = board.height();
    let mut cells = vec![GemType::Empty; width * height];

    for x in 0..width {
        // Two-pointer compaction: write_y trails read order.
        let mut write_y = 0;
        for gem in board.column(x).filter(|gem| gem.is_matchable()) {
            cells[write_y * width + x] = gem;
            write_y += 1;
        }
    }

    BoardState::from_parts(width, cells)
}
