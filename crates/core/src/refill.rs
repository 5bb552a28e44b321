//! Refill - fill empty cells from a gem supply
//!
//! Columns are visited left to right, and each column is scanned from the bottom row
//! upward. Every `Empty` cell costs exactly one supply call and occupied cells never
//! call it, so a scripted supply lands each gem in a predictable cell.

use tracing::warn;

use crate::board::BoardState;
use crate::error::{Result, RulesError};
use crate::supply::GemSupply;
use crate::types::GemType;

/// Return a new board with empty cells refilled bottom-up.
///
/// Fails with [`RulesError::SupplierReturnedEmpty`] if the supply yields `Empty`;
/// no partially refilled board escapes.
pub fn refill_board<S>(board: &BoardState, supply: &mut S) -> Result<BoardState>
where
    S: GemSupply + ?Sized,
{
    let width = board.width();
    let height = board.height();
    let mut cells = board.cells().to_vec();

    for x in 0..width {
        for y in (0..height).rev() {
            let idx = y * width + x;
            if cells[idx] != GemType::Empty {
                continue;
            }
            let gem = supply.next_gem();
            if !gem.is_matchable() {
                warn!(x, y, "gem supply returned an empty gem during refill");
                return Err(RulesError::SupplierReturnedEmpty { x, y });
            }
            cells[idx] = gem;
        }
    }

    Ok(BoardState::from_parts(width, cells))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::supply::ScriptedGemSupply;
    use GemType::*;

    fn refill(text: &str, script: &[GemType]) -> (String, usize) {
        let board = BoardState::parse(text).unwrap();
        let mut supply = ScriptedGemSupply::new(script);
        let refilled = refill_board(&board, &mut supply).unwrap();
        (refilled.to_string(), supply.consumed())
    }

    #[test]
    fn single_empty_cell_at_bottom() {
        assert_eq!(refill("R\nB\n.", &[Green]), ("R\nB\nG".to_string(), 1));
    }

    #[test]
    fn multiple_empty_cells_fill_bottom_up() {
        assert_eq!(
            refill(".\nR\n.\n.", &[Green, Blue, Yellow]),
            ("Y\nR\nB\nG".to_string(), 3)
        );
    }

    #[test]
    fn mixed_columns_refill_only_empty_cells() {
        assert_eq!(
            refill("R.\n.B\nG.", &[Yellow, Purple, Blue]),
            ("RB\nYB\nGP".to_string(), 3)
        );
    }

    #[test]
    fn full_board_never_calls_the_supply() {
        assert_eq!(refill("RB\nGY", &[]), ("RB\nGY".to_string(), 0));
    }

    #[test]
    fn columns_left_to_right_each_bottom_to_top() {
        assert_eq!(
            refill("..\n..", &[Red, Blue, Green, Yellow]),
            ("BY\nRG".to_string(), 4)
        );
    }

    #[test]
    fn supply_returning_empty_is_a_contract_violation() {
        let board = BoardState::parse(".").unwrap();
        let err = refill_board(&board, &mut || Empty).unwrap_err();
        assert_eq!(err, RulesError::SupplierReturnedEmpty { x: 0, y: 0 });
        assert_eq!(err.code(), "supplier_contract");
    }

    #[test]
    fn input_board_is_not_mutated() {
        let board = BoardState::parse("R.\n..").unwrap();
        let mut supply = ScriptedGemSupply::new([Blue, Green, Yellow]);
        let _ = refill_board(&board, &mut supply).unwrap();
        assert_eq!(board.to_string(), "R.\n..");
    }
}
