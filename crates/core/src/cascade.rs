//! Cascade resolution - drive a board to a stable fixed point
//!
//! The resolver is an explicit state machine over four transforms:
//!
//! ```text
//!            matches found            always
//! Scanning ───────────────> Clearing ────────> Settling ──┐
//!    │  │                                        ^         │
//!    │  └── no matches, board has an Empty ──────┘         │
//!    │                                                      │
//!    └── no matches, no Empty ──> Stable      Scanning <───┘
//! ```
//!
//! Clearing runs [`remove_matches`]; Settling runs [`apply_gravity`] then
//! [`refill_board`]. A board is stable when it has no match and no empty cell.
//! Settling without a preceding match handles boards that start with gaps.
//!
//! There is no built-in iteration cap. Callers that need bounded latency set
//! [`CascadeConfig::max_rounds`] and get [`RulesError::RoundLimitExceeded`] when
//! the board has not stabilized in time.

use tracing::{debug, trace};

use crate::board::BoardState;
use crate::error::{Result, RulesError};
use crate::gravity::apply_gravity;
use crate::refill::refill_board;
use crate::rules::{find_matches, remove_matches, MatchSet};
use crate::supply::GemSupply;
use crate::types::GemType;

/// Cascade resolution settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeConfig {
    /// Maximum number of settle rounds, `None` for unbounded
    pub max_rounds: Option<u32>,
}

impl CascadeConfig {
    pub fn unbounded() -> Self {
        Self { max_rounds: None }
    }

    pub fn bounded(max_rounds: u32) -> Self {
        Self {
            max_rounds: Some(max_rounds),
        }
    }
}

/// Resolver state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CascadePhase {
    Scanning,
    Clearing(MatchSet),
    Settling,
    Stable,
}

/// Result of a full resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeOutcome {
    /// The stable board
    pub board: BoardState,
    /// Settle rounds executed (gravity + refill passes)
    pub rounds: u32,
    /// Total cells cleared by matches across all rounds
    pub cleared: usize,
    /// Total gems drawn from the supply
    pub supplied: usize,
}

/// Return a new board with all cascades resolved.
///
/// Runs until the board is stable; a board that is already stable comes back
/// equal to the input without touching the supply.
pub fn resolve_cascades<S>(board: &BoardState, supply: &mut S) -> Result<BoardState>
where
    S: GemSupply + ?Sized,
{
    resolve_cascades_with(board, supply, &CascadeConfig::unbounded()).map(|o| o.board)
}

/// Resolve cascades under `config`, reporting what happened.
pub fn resolve_cascades_with<S>(
    board: &BoardState,
    supply: &mut S,
    config: &CascadeConfig,
) -> Result<CascadeOutcome>
where
    S: GemSupply + ?Sized,
{
    let mut current = board.clone();
    let mut phase = CascadePhase::Scanning;
    let mut rounds = 0u32;
    let mut cleared = 0usize;
    let mut supplied = 0usize;

    loop {
        trace!(?phase, round = rounds, "cascade phase");
        phase = match phase {
            CascadePhase::Scanning => {
                let matches = find_matches(&current);
                if !matches.is_empty() {
                    CascadePhase::Clearing(matches)
                } else if current.has_empty() {
                    CascadePhase::Settling
                } else {
                    CascadePhase::Stable
                }
            }
            CascadePhase::Clearing(matches) => {
                debug!(round = rounds + 1, matched = matches.len(), "clearing matches");
                current = remove_matches(&current, &matches)?;
                cleared += matches.len();
                CascadePhase::Settling
            }
            CascadePhase::Settling => {
                if let Some(limit) = config.max_rounds {
                    if rounds >= limit {
                        debug!(limit, "cascade round limit reached");
                        return Err(RulesError::RoundLimitExceeded { limit });
                    }
                }
                rounds += 1;
                let settled = apply_gravity(&current);
                let empties = settled.count(GemType::Empty);
                debug!(round = rounds, empties, "settling board");
                current = refill_board(&settled, supply)?;
                supplied += empties;
                CascadePhase::Scanning
            }
            CascadePhase::Stable => {
                debug!(rounds, cleared, supplied, "cascade stable");
                return Ok(CascadeOutcome {
                    board: current,
                    rounds,
                    cleared,
                    supplied,
                });
            }
        };
    }
}

/// Whether `board` has no match and no empty cell
pub fn is_stable(board: &BoardState) -> bool {
    !board.has_empty() && find_matches(board).is_empty()
}
