//! Serializable board observation for callers (UI, AI, golden files).

use serde::{Deserialize, Serialize};

use crate::board::BoardState;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub width: usize,
    pub height: usize,
    /// One string per row in the board's text form (`.` = empty)
    pub rows: Vec<String>,
    /// FNV-1a 64 over the gem codes, row-major
    pub board_hash: u64,
}

impl BoardSnapshot {
    pub fn capture(board: &BoardState) -> Self {
        Self {
            width: board.width(),
            height: board.height(),
            rows: board
                .rows()
                .map(|row| row.iter().map(|gem| gem.as_char()).collect())
                .collect(),
            board_hash: board_hash(board),
        }
    }

    /// Rebuild the board this snapshot describes
    pub fn to_board(&self) -> crate::error::Result<BoardState> {
        BoardState::parse(&self.rows.join("\n"))
    }
}

impl From<&BoardState> for BoardSnapshot {
    fn from(board: &BoardState) -> Self {
        Self::capture(board)
    }
}

/// FNV-1a 64-bit hash of the board's gem codes
pub fn board_hash(board: &BoardState) -> u64 {
    let mut h = Fnv1a64::new();
    h.write(board.cells().iter().map(|gem| gem.code()));
    h.finish()
}

struct Fnv1a64 {
    state: u64,
}

impl Fnv1a64 {
    const OFFSET: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x00000100000001B3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET,
        }
    }

    fn write(&mut self, bytes: impl Iterator<Item = u8>) {
        for b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }

    fn finish(&self) -> u64 {
        self.state
    }
}
