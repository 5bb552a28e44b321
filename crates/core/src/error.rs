//! Error types for the rules engine.

/// Failure raised by board construction or by a board transform.
///
/// No transform retries or partially applies: an `Err` means no new board was produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("board must contain at least one row")]
    EmptyBoard,

    #[error("board row {row} must contain at least one gem")]
    EmptyRow { row: usize },

    #[error("board rows must be rectangular: row {row} has {found} cells, expected {expected}")]
    NotRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid cell at ({x}, {y}): {reason}")]
    InvalidCell {
        x: usize,
        y: usize,
        reason: String,
    },

    #[error("coordinate out of bounds: ({x}, {y}) on a {width}x{height} board")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("gem supply returned an empty gem while refilling ({x}, {y})")]
    SupplierReturnedEmpty { x: usize, y: usize },

    #[error("cascade did not stabilize within {limit} rounds")]
    RoundLimitExceeded { limit: u32 },
}

impl RulesError {
    /// Stable machine-readable category
    pub fn code(&self) -> &'static str {
        match self {
            RulesError::EmptyBoard
            | RulesError::EmptyRow { .. }
            | RulesError::NotRectangular { .. }
            | RulesError::InvalidCell { .. } => "malformed_board",
            RulesError::OutOfBounds { .. } => "out_of_bounds",
            RulesError::SupplierReturnedEmpty { .. } => "supplier_contract",
            RulesError::RoundLimitExceeded { .. } => "round_limit",
        }
    }

    pub fn is_malformed_board(&self) -> bool {
        self.code() == "malformed_board"
    }
}

pub type Result<T> = std::result::Result<T, RulesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_group_construction_failures() {
        assert_eq!(RulesError::EmptyBoard.code(), "malformed_board");
        assert_eq!(RulesError::EmptyRow { row: 2 }.code(), "malformed_board");
        assert!(RulesError::NotRectangular {
            row: 1,
            expected: 3,
            found: 2
        }
        .is_malformed_board());
        assert_eq!(
            RulesError::OutOfBounds {
                x: 5,
                y: 0,
                width: 3,
                height: 3
            }
            .code(),
            "out_of_bounds"
        );
        assert_eq!(
            RulesError::SupplierReturnedEmpty { x: 0, y: 0 }.code(),
            "supplier_contract"
        );
        assert_eq!(
            RulesError::RoundLimitExceeded { limit: 4 }.code(),
            "round_limit"
        );
    }

    #[test]
    fn messages_name_the_offending_cell() {
        let err = RulesError::OutOfBounds {
            x: 5,
            y: 1,
            width: 3,
            height: 2,
        };
        assert_eq!(
            err.to_string(),
            "coordinate out of bounds: (5, 1) on a 3x2 board"
        );
    }
}
