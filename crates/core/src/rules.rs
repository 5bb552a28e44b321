//! Match rules - run detection and removal
//!
//! A match is a maximal horizontal or vertical run of at least [`MIN_MATCH_LENGTH`]
//! equal, matchable gems. Rows and columns are scanned independently and the
//! results are unioned, so a cell shared by a horizontal and a vertical run
//! (T, L and cross shapes) appears once.

use std::collections::BTreeSet;

use crate::board::BoardState;
use crate::error::Result;
use crate::types::{Coordinate, GemType, MIN_MATCH_LENGTH};

/// Every cell belonging to at least one qualifying run.
///
/// Set semantics only; callers must not depend on iteration order.
pub type MatchSet = BTreeSet<Coordinate>;

/// Return all coordinates that are part of a match
pub fn find_matches(board: &BoardState) -> MatchSet {
    let mut matches = MatchSet::new();
    let mut run = Vec::with_capacity(board.width().max(board.height()));

    for (y, row) in board.rows().enumerate() {
        let line = row
            .iter()
            .enumerate()
            .map(|(x, &gem)| (Coordinate::new(x, y), gem));
        collect_runs(line, &mut run, &mut matches);
    }

    for x in 0..board.width() {
        let line = board
            .column(x)
            .enumerate()
            .map(|(y, gem)| (Coordinate::new(x, y), gem));
        collect_runs(line, &mut run, &mut matches);
    }

    matches
}

/// Scan one line for maximal runs, adding qualifying ones to `matches`.
fn collect_runs<I>(line: I, run: &mut Vec<Coordinate>, matches: &mut MatchSet)
where
    I: Iterator<Item = (Coordinate, GemType)>,
{
    run.clear();
    let mut current = GemType::Empty;

    for (coord, gem) in line {
        if gem == current && gem.is_matchable() {
            run.push(coord);
            continue;
        }
        flush_run(current, run, matches);
        current = gem;
        run.push(coord);
    }
    flush_run(current, run, matches);
}

#[inline]
fn flush_run(gem: GemType, run: &mut Vec<Coordinate>, matches: &mut MatchSet) {
    if gem.is_matchable() && run.len() >= MIN_MATCH_LENGTH {
        matches.extend(run.iter().copied());
    }
    run.clear();
}

/// Return a new board with every matched cell set to `Empty`.
///
/// Fails with an out-of-bounds error if any coordinate lies outside the board;
/// in that case nothing is produced.
pub fn remove_matches(board: &BoardState, matches: &MatchSet) -> Result<BoardState> {
    let mut cells = board.cells().to_vec();
    for &coord in matches {
        let idx = board.index_of(coord)?;
        cells[idx] = GemType::Empty;
    }
    Ok(BoardState::from_parts(board.width(), cells))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RulesError;

    fn coords(list: &[(usize, usize)]) -> MatchSet {
        list.iter().map(|&c| Coordinate::from(c)).collect()
    }

    #[test]
    fn horizontal_match_detection() {
        let board = BoardState::parse("RRRB\nGBYP").unwrap();
        assert_eq!(find_matches(&board), coords(&[(0, 0), (1, 0), (2, 0)]));
    }

    #[test]
    fn vertical_match_detection() {
        let board = BoardState::parse("RG\nRB\nRY").unwrap();
        assert_eq!(find_matches(&board), coords(&[(0, 0), (0, 1), (0, 2)]));
    }

    #[test]
    fn overlapping_t_shape_counts_shared_cell_once() {
        let board = BoardState::parse("RRR\nBRG\nGRB").unwrap();
        let matches = find_matches(&board);
        assert_eq!(
            matches,
            coords(&[(0, 0), (1, 0), (2, 0), (1, 1), (1, 2)])
        );
        assert_eq!(matches.len(), 5);
    }

    #[test]
    fn long_run_is_one_maximal_run() {
        let board = BoardState::parse("BBBBB").unwrap();
        assert_eq!(find_matches(&board).len(), 5);
    }

    #[test]
    fn runs_of_two_do_not_match() {
        let board = BoardState::parse("RRBBRR\nGYGYGY").unwrap();
        assert!(find_matches(&board).is_empty());
    }

    #[test]
    fn empty_cells_never_match() {
        let board = BoardState::parse("...\n...\n...").unwrap();
        assert!(find_matches(&board).is_empty());
    }

    #[test]
    fn empty_breaks_a_run() {
        let board = BoardState::parse("RR.RR").unwrap();
        assert!(find_matches(&board).is_empty());
    }

    #[test]
    fn remove_matches_clears_only_matched_cells() {
        let board = BoardState::parse("RRRB\nGBYP").unwrap();
        let cleared = remove_matches(&board, &find_matches(&board)).unwrap();
        assert_eq!(cleared, BoardState::parse("...B\nGBYP").unwrap());
        // input untouched
        assert_eq!(board.to_string(), "RRRB\nGBYP");
    }

    #[test]
    fn remove_with_empty_set_is_structurally_equal() {
        let board = BoardState::parse("RGB\nYPO").unwrap();
        assert_eq!(remove_matches(&board, &MatchSet::new()).unwrap(), board);
    }

    #[test]
    fn remove_rejects_out_of_bounds_coordinates() {
        let board = BoardState::parse("RGB").unwrap();
        let err = remove_matches(&board, &coords(&[(0, 0), (3, 0)])).unwrap_err();
        assert!(matches!(err, RulesError::OutOfBounds { x: 3, y: 0, .. }));
    }
}
