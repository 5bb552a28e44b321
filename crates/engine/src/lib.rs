//! Move engine - legal swaps and move simulation on top of the core rules.
//!
//! This crate lists the swaps a player could make, narrows them to the ones that
//! immediately create a match, and simulates a chosen swap through full cascade
//! resolution. Choosing *which* move to play is left to callers.
//!
//! ```
//! use gem_cascade_core::{BoardState, SeededGemSupply};
//! use gem_cascade_engine::{productive_swaps, simulate_move};
//!
//! let board = BoardState::parse("RRBG\nYPRO").unwrap();
//! let moves = productive_swaps(&board);
//! assert_eq!(moves.len(), 1);
//!
//! let mut supply = SeededGemSupply::new(7);
//! let resolved = simulate_move(&board, moves[0], &mut supply).unwrap();
//! assert!(gem_cascade_core::is_stable(&resolved));
//! ```

pub mod moves;

pub use gem_cascade_core as core;
pub use gem_cascade_types as types;

pub use moves::{
    apply_swap, enumerate_swaps, filter_productive_swaps, is_productive_swap, productive_swaps,
    simulate_move, simulate_move_with,
};
