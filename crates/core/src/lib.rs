//! Core rules module - pure, deterministic, and testable
//!
//! This crate contains the board representation and every rule transform of an
//! inverted-gravity tile-matching puzzle. It has **no dependencies** on rendering,
//! input, scoring or I/O, making it:
//!
//! - **Deterministic**: Same board and same supply sequence produce identical results
//! - **Immutable**: No transform mutates its input; each returns a new [`BoardState`]
//! - **Testable**: Scripted supplies pin down exactly where each refill gem lands
//!
//! # Module Structure
//!
//! - [`board`]: Immutable rectangular gem grid with checked construction and access
//! - [`rules`]: Match detection (maximal runs of 3+) and match removal
//! - [`gravity`]: Upward gravity, compacting each column toward row 0
//! - [`refill`]: Bottom-up refill of empty cells from a gem supply
//! - [`cascade`]: The Scanning / Clearing / Settling / Stable resolver loop
//! - [`supply`]: The gem supply contract plus seeded and scripted supplies
//! - [`snapshot`]: Serializable board observation with a content hash
//! - [`error`]: The single error type shared by all of the above
//!
//! # Example
//!
//! ```
//! use gem_cascade_core::{resolve_cascades, BoardState, ScriptedGemSupply};
//! use gem_cascade_types::GemType;
//!
//! let board = BoardState::parse("RRR\nBGY\nPOB").unwrap();
//! let mut supply = ScriptedGemSupply::new([GemType::Red, GemType::Green, GemType::Purple]);
//!
//! let resolved = resolve_cascades(&board, &mut supply).unwrap();
//!
//! assert_eq!(resolved.to_string(), "BGY\nPOB\nRGP");
//! assert_eq!(supply.consumed(), 3);
//! ```

pub mod board;
pub mod cascade;
pub mod error;
pub mod gravity;
pub mod refill;
pub mod rules;
pub mod snapshot;
pub mod supply;

pub use gem_cascade_types as types;

// Re-export commonly used types for convenience
pub use board::BoardState;
pub use cascade::{
    is_stable, resolve_cascades, resolve_cascades_with, CascadeConfig, CascadeOutcome,
    CascadePhase,
};
pub use error::{Result, RulesError};
pub use gravity::apply_gravity;
pub use refill::refill_board;
pub use rules::{find_matches, remove_matches, MatchSet};
pub use snapshot::{board_hash, BoardSnapshot};
pub use supply::{GemSupply, ScriptedGemSupply, SeededGemSupply, SimpleRng};
