//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental value types used throughout the rules engine.
//! All types are plain data with no behavior beyond parsing and comparison, making them
//! usable in any context (rules engine, move simulation, snapshots for callers).
//!
//! # Coordinates
//!
//! Boards are addressed by `(x, y)`:
//!
//! - **x** grows rightward, starting at column 0
//! - **y** grows downward, starting at row 0
//! - **Row 0** is the top row, the side gravity pulls gems toward
//!
//! Coordinates order row-major, `(y, x)`, which fixes the order in which swaps are listed.
//!
//! # Gem Codes
//!
//! | Gem | Char | Name | Code |
//! |-----|------|------|------|
//! | `Empty` | `.` | `empty` | 0 |
//! | `Red` | `R` | `red` | 1 |
//! | `Blue` | `B` | `blue` | 2 |
//! | `Green` | `G` | `green` | 3 |
//! | `Yellow` | `Y` | `yellow` | 4 |
//! | `Purple` | `P` | `purple` | 5 |
//! | `Orange` | `O` | `orange` | 6 |
//!
//! # Examples
//!
//! ```
//! use gem_cascade_types::{Coordinate, GemType, Swap, MIN_MATCH_LENGTH};
//!
//! // Parse from a one-character code (case-insensitive)
//! assert_eq!(GemType::from_char('r'), Some(GemType::Red));
//! assert_eq!(GemType::from_char('.'), Some(GemType::Empty));
//!
//! // Empty never takes part in a match
//! assert!(GemType::Red.is_matchable());
//! assert!(!GemType::Empty.is_matchable());
//!
//! // Swaps are stored with the row-major-earlier cell first
//! let swap = Swap::new(Coordinate::new(0, 1), Coordinate::new(0, 0));
//! assert_eq!(swap.first, Coordinate::new(0, 0));
//! assert!(swap.is_adjacent());
//!
//! assert_eq!(MIN_MATCH_LENGTH, 3);
//! ```

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum run length that counts as a match
pub const MIN_MATCH_LENGTH: usize = 3;

/// Default board width used by the headless runner (8 columns)
pub const DEFAULT_BOARD_WIDTH: usize = 8;

/// Default board height used by the headless runner (8 rows)
pub const DEFAULT_BOARD_HEIGHT: usize = 8;

/// The six matchable colors, in declaration order.
pub const MATCHABLE_GEMS: [GemType; 6] = [
    GemType::Red,
    GemType::Blue,
    GemType::Green,
    GemType::Yellow,
    GemType::Purple,
    GemType::Orange,
];

/// Logical value of a single board cell
///
/// Six colors plus the `Empty` sentinel for an unoccupied cell.
/// `Empty` never matches and must never come out of a gem supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GemType {
    Empty,
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
}

impl GemType {
    /// Whether this gem can take part in a run
    pub fn is_matchable(self) -> bool {
        self != GemType::Empty
    }

    /// Parse from a one-character code (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use gem_cascade_types::GemType;
    ///
    /// assert_eq!(GemType::from_char('B'), Some(GemType::Blue));
    /// assert_eq!(GemType::from_char('o'), Some(GemType::Orange));
    /// assert_eq!(GemType::from_char('x'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            '.' => Some(GemType::Empty),
            'R' => Some(GemType::Red),
            'B' => Some(GemType::Blue),
            'G' => Some(GemType::Green),
            'Y' => Some(GemType::Yellow),
            'P' => Some(GemType::Purple),
            'O' => Some(GemType::Orange),
            _ => None,
        }
    }

    /// One-character code, `.` for empty
    pub fn as_char(self) -> char {
        match self {
            GemType::Empty => '.',
            GemType::Red => 'R',
            GemType::Blue => 'B',
            GemType::Green => 'G',
            GemType::Yellow => 'Y',
            GemType::Purple => 'P',
            GemType::Orange => 'O',
        }
    }

    /// Parse from a lowercase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use gem_cascade_types::GemType;
    ///
    /// assert_eq!(GemType::from_str("purple"), Some(GemType::Purple));
    /// assert_eq!(GemType::from_str("EMPTY"), Some(GemType::Empty));
    /// assert_eq!(GemType::from_str("pink"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "empty" => Some(GemType::Empty),
            "red" => Some(GemType::Red),
            "blue" => Some(GemType::Blue),
            "green" => Some(GemType::Green),
            "yellow" => Some(GemType::Yellow),
            "purple" => Some(GemType::Purple),
            "orange" => Some(GemType::Orange),
            _ => None,
        }
    }

    /// Convert to lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            GemType::Empty => "empty",
            GemType::Red => "red",
            GemType::Blue => "blue",
            GemType::Green => "green",
            GemType::Yellow => "yellow",
            GemType::Purple => "purple",
            GemType::Orange => "orange",
        }
    }

    /// Numeric code used by snapshots (0 = empty)
    pub fn code(self) -> u8 {
        match self {
            GemType::Empty => 0,
            GemType::Red => 1,
            GemType::Blue => 2,
            GemType::Green => 3,
            GemType::Yellow => 4,
            GemType::Purple => 5,
            GemType::Orange => 6,
        }
    }

    /// Inverse of [`GemType::code`]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(GemType::Empty),
            1..=6 => Some(MATCHABLE_GEMS[code as usize - 1]),
            _ => None,
        }
    }
}

impl fmt::Display for GemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A board position, `x` rightward and `y` downward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The cell one column to the right (may be out of bounds)
    pub fn right(self) -> Self {
        Self::new(self.x + 1, self.y)
    }

    /// The cell one row down (may be out of bounds)
    pub fn down(self) -> Self {
        Self::new(self.x, self.y + 1)
    }

    pub fn manhattan(self, other: Coordinate) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

// Row-major: y first, then x.
impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An exchange of two cells
///
/// Unordered in meaning; stored with the row-major-earlier cell in `first`.
/// Swaps produced by the move enumerator are always orthogonally adjacent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Swap {
    pub first: Coordinate,
    pub second: Coordinate,
}

impl Swap {
    /// Build a swap in canonical orientation
    pub fn new(a: Coordinate, b: Coordinate) -> Self {
        if b < a {
            Self { first: b, second: a }
        } else {
            Self { first: a, second: b }
        }
    }

    /// Whether the two cells are orthogonal neighbours
    pub fn is_adjacent(&self) -> bool {
        self.first.manhattan(self.second) == 1
    }
}

impl fmt::Display for Swap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.first, self.second)
    }
}
