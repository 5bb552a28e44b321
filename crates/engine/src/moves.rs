//! Legal move enumeration and simulation.
//!
//! A legal swap exchanges two orthogonally adjacent, non-empty gems. Swaps are listed
//! by visiting source cells row-major and checking the right neighbour before the down
//! neighbour, so every adjacent pair appears exactly once and always in the same order.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::core::{
    find_matches, resolve_cascades, resolve_cascades_with, BoardState, CascadeConfig,
    CascadeOutcome, GemSupply, Result,
};
use crate::types::{Coordinate, GemType, Swap};

/// Return all structurally legal adjacent swaps on the board.
pub fn enumerate_swaps(board: &BoardState) -> Vec<Swap> {
    let mut swaps = Vec::new();
    for y in 0..board.height() {
        for x in 0..board.width() {
            swaps.extend(adjacent_swaps(board, Coordinate::new(x, y)));
        }
    }
    swaps
}

/// Swaps from `source` to its right and down neighbours, in that order.
fn adjacent_swaps(board: &BoardState, source: Coordinate) -> ArrayVec<Swap, 2> {
    let mut out = ArrayVec::new();
    if !is_gem(board, source) {
        return out;
    }
    for neighbour in [source.right(), source.down()] {
        if is_gem(board, neighbour) {
            out.push(Swap::new(source, neighbour));
        }
    }
    out
}

/// In bounds and holding a matchable gem
fn is_gem(board: &BoardState, coord: Coordinate) -> bool {
    board.at(coord).map(GemType::is_matchable).unwrap_or(false)
}

/// Return a new board with the two cells of `swap` exchanged.
///
/// Does not check adjacency or emptiness; use [`is_productive_swap`] for that.
/// Fails only if a coordinate is out of bounds.
pub fn apply_swap(board: &BoardState, swap: Swap) -> Result<BoardState> {
    let first = board.at(swap.first)?;
    let second = board.at(swap.second)?;
    let width = board.width();

    let mut cells = board.cells().to_vec();
    cells[swap.first.y * width + swap.first.x] = second;
    cells[swap.second.y * width + swap.second.x] = first;
    BoardState::from_cells(width, cells)
}

/// Whether the swap creates at least one match on the immediate post-swap board.
///
/// No cascade lookahead. Returns `false` if either endpoint is empty; fails if either
/// endpoint is out of bounds.
pub fn is_productive_swap(board: &BoardState, swap: Swap) -> Result<bool> {
    if !board.at(swap.first)?.is_matchable() || !board.at(swap.second)?.is_matchable() {
        return Ok(false);
    }
    let swapped = apply_swap(board, swap)?;
    Ok(!find_matches(&swapped).is_empty())
}

/// Keep only productive swaps, preserving input order.
pub fn filter_productive_swaps(board: &BoardState, swaps: &[Swap]) -> Result<Vec<Swap>> {
    let mut productive = Vec::new();
    for &swap in swaps {
        if is_productive_swap(board, swap)? {
            productive.push(swap);
        }
    }
    Ok(productive)
}

/// All productive swaps, in enumeration order
pub fn productive_swaps(board: &BoardState) -> Vec<Swap> {
    enumerate_swaps(board)
        .into_iter()
        .filter(|&swap| matches!(is_productive_swap(board, swap), Ok(true)))
        .collect()
}

/// Return the fully resolved board after applying `swap`.
///
/// The swap is applied unconditionally; callers are expected to have validated it.
pub fn simulate_move<S>(board: &BoardState, swap: Swap, supply: &mut S) -> Result<BoardState>
where
    S: GemSupply + ?Sized,
{
    debug!(%swap, "simulating move");
    let swapped = apply_swap(board, swap)?;
    resolve_cascades(&swapped, supply)
}

/// Like [`simulate_move`], reporting the cascade outcome under `config`.
pub fn simulate_move_with<S>(
    board: &BoardState,
    swap: Swap,
    supply: &mut S,
    config: &CascadeConfig,
) -> Result<CascadeOutcome>
where
    S: GemSupply + ?Sized,
{
    debug!(%swap, "simulating move");
    let swapped = apply_swap(board, swap)?;
    resolve_cascades_with(&swapped, supply, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RulesError, ScriptedGemSupply};
    use GemType::*;

    fn swap(a: (usize, usize), b: (usize, usize)) -> Swap {
        Swap::new(a.into(), b.into())
    }

    #[test]
    fn enumerate_orders_right_before_down() {
        let board = BoardState::parse("RB\nGY").unwrap();
        assert_eq!(
            enumerate_swaps(&board),
            vec![
                swap((0, 0), (1, 0)),
                swap((0, 0), (0, 1)),
                swap((1, 0), (1, 1)),
                swap((0, 1), (1, 1)),
            ]
        );
    }

    #[test]
    fn enumerate_skips_empty_cells() {
        let board = BoardState::parse("R.\nGB").unwrap();
        assert_eq!(
            enumerate_swaps(&board),
            vec![swap((0, 0), (0, 1)), swap((0, 1), (1, 1))]
        );
    }

    #[test]
    fn enumerate_handles_single_column() {
        let board = BoardState::parse("R\nB\nG").unwrap();
        assert_eq!(
            enumerate_swaps(&board),
            vec![swap((0, 0), (0, 1)), swap((0, 1), (0, 2))]
        );
    }

    #[test]
    fn apply_swap_exchanges_only_the_two_cells() {
        let board = BoardState::parse("RBG\nYPO").unwrap();
        let swapped = apply_swap(&board, swap((1, 0), (1, 1))).unwrap();
        assert_eq!(swapped.to_string(), "RPG\nYBO");
        assert_eq!(board.to_string(), "RBG\nYPO");
    }

    #[test]
    fn apply_swap_does_not_validate_adjacency() {
        let board = BoardState::parse("RBG").unwrap();
        let swapped = apply_swap(&board, swap((0, 0), (2, 0))).unwrap();
        assert_eq!(swapped.to_string(), "GBR");
    }

    #[test]
    fn apply_swap_rejects_out_of_bounds() {
        let board = BoardState::parse("RB").unwrap();
        let err = apply_swap(&board, swap((1, 0), (2, 0))).unwrap_err();
        assert!(matches!(err, RulesError::OutOfBounds { x: 2, .. }));
    }

    #[test]
    fn productive_swap_detection() {
        // Swapping (2,0) and (2,1) lines up three reds on row 0.
        let board = BoardState::parse("RRBG\nYPRO").unwrap();
        assert_eq!(is_productive_swap(&board, swap((2, 0), (2, 1))), Ok(true));
        assert_eq!(is_productive_swap(&board, swap((0, 0), (1, 0))), Ok(false));
    }

    #[test]
    fn swap_touching_empty_is_never_productive() {
        let board = BoardState::parse("RR.\nYPR").unwrap();
        assert_eq!(is_productive_swap(&board, swap((2, 0), (2, 1))), Ok(false));
    }

    #[test]
    fn filter_preserves_order() {
        let board = BoardState::parse("RRBG\nYPRO").unwrap();
        let all = enumerate_swaps(&board);
        let productive = filter_productive_swaps(&board, &all).unwrap();
        assert_eq!(productive, vec![swap((2, 0), (2, 1))]);
        assert_eq!(productive_swaps(&board), productive);
    }

    #[test]
    fn simulate_move_resolves_cascades() {
        let board = BoardState::parse("RRBG\nYPRO").unwrap();
        let mut supply = ScriptedGemSupply::new([Yellow, Green, Purple]);

        let resolved = simulate_move(&board, swap((2, 0), (2, 1)), &mut supply).unwrap();

        // Row 0 reds clear, column gems rise, refill lands on row 1.
        assert_eq!(resolved.to_string(), "YPBG\nYGPO");
        assert_eq!(supply.consumed(), 3);
    }
}
