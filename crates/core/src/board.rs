//! Board module - immutable gem grid
//!
//! A board is a rectangular grid where each cell holds a [`GemType`], possibly `Empty`.
//! Uses a flat row-major vector for cache locality; only the width is stored and the
//! height is derived from the cell count.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//!
//! A `BoardState` is never mutated after construction. Every transform in this crate
//! takes `&BoardState` and returns a fresh one.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RulesError};
use crate::types::{Coordinate, GemType};

/// The gem grid, stored row-major (y * width + x)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardState {
    width: usize,
    cells: Vec<GemType>,
}

impl BoardState {
    /// Build a board from rows of gems. `Empty` cells are permitted.
    ///
    /// Fails when there are no rows, a row is empty, or rows differ in length.
    pub fn from_rows<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[GemType]>,
    {
        let mut width = None;
        let mut cells = Vec::new();

        for (y, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            if row.is_empty() {
                return Err(RulesError::EmptyRow { row: y });
            }
            match width {
                None => width = Some(row.len()),
                Some(expected) if expected != row.len() => {
                    return Err(RulesError::NotRectangular {
                        row: y,
                        expected,
                        found: row.len(),
                    });
                }
                Some(_) => {}
            }
            cells.extend_from_slice(row);
        }

        match width {
            Some(width) => Ok(Self { width, cells }),
            None => Err(RulesError::EmptyBoard),
        }
    }

    /// Like [`BoardState::from_rows`], but every cell must hold a matchable gem.
    pub fn from_filled_rows<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[GemType]>,
    {
        let board = Self::from_rows(rows)?;
        if let Some(idx) = board.cells.iter().position(|gem| !gem.is_matchable()) {
            return Err(RulesError::InvalidCell {
                x: idx % board.width,
                y: idx / board.width,
                reason: "empty cell not permitted".to_string(),
            });
        }
        Ok(board)
    }

    /// Build from a flat row-major cell vector.
    pub fn from_cells(width: usize, cells: Vec<GemType>) -> Result<Self> {
        if cells.is_empty() {
            return Err(RulesError::EmptyBoard);
        }
        if width == 0 {
            return Err(RulesError::EmptyRow { row: 0 });
        }
        if cells.len() % width != 0 {
            return Err(RulesError::NotRectangular {
                row: cells.len() / width,
                expected: width,
                found: cells.len() % width,
            });
        }
        Ok(Self { width, cells })
    }

    /// An all-empty board of the given size
    pub fn empty(width: usize, height: usize) -> Result<Self> {
        if height == 0 {
            return Err(RulesError::EmptyBoard);
        }
        Self::from_cells(width, vec![GemType::Empty; width * height])
    }

    /// Parse the text form: one line per row, one gem code per character (`.` = empty).
    ///
    /// ```
    /// use gem_cascade_core::BoardState;
    /// use gem_cascade_types::GemType;
    ///
    /// let board = BoardState::parse("RB.\nGYP").unwrap();
    /// assert_eq!(board.width(), 3);
    /// assert_eq!(board.height(), 2);
    /// assert_eq!(board.get(2, 0).unwrap(), GemType::Empty);
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let y = rows.len();
            let row = line
                .chars()
                .enumerate()
                .map(|(x, c)| {
                    GemType::from_char(c).ok_or_else(|| RulesError::InvalidCell {
                        x,
                        y,
                        reason: format!("unknown gem code {c:?}"),
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// Unchecked constructor for transforms that preserve the input's shape.
    pub(crate) fn from_parts(width: usize, cells: Vec<GemType>) -> Self {
        debug_assert!(width > 0 && !cells.is_empty() && cells.len() % width == 0);
        Self { width, cells }
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height() {
            return None;
        }
        Some(y * self.width + x)
    }

    pub(crate) fn index_of(&self, coord: Coordinate) -> Result<usize> {
        self.index(coord.x, coord.y)
            .ok_or_else(|| self.out_of_bounds(coord.x, coord.y))
    }

    fn out_of_bounds(&self, x: usize, y: usize) -> RulesError {
        RulesError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.cells.len() / self.width
    }

    /// Gem at (x, y). Out-of-bounds access is an error, never a default.
    pub fn get(&self, x: usize, y: usize) -> Result<GemType> {
        self.index(x, y)
            .map(|idx| self.cells[idx])
            .ok_or_else(|| self.out_of_bounds(x, y))
    }

    pub fn at(&self, coord: Coordinate) -> Result<GemType> {
        self.get(coord.x, coord.y)
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.index(coord.x, coord.y).is_some()
    }

    /// Flat row-major view of every cell
    pub fn cells(&self) -> &[GemType] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[GemType]> + '_ {
        self.cells.chunks(self.width)
    }

    pub fn to_rows(&self) -> Vec<Vec<GemType>> {
        self.rows().map(<[GemType]>::to_vec).collect()
    }

    /// Gems of column `x`, top to bottom
    pub fn column(&self, x: usize) -> impl Iterator<Item = GemType> + '_ {
        self.cells.iter().skip(x).step_by(self.width).copied()
    }

    pub fn count(&self, gem: GemType) -> usize {
        self.cells.iter().filter(|&&cell| cell == gem).count()
    }

    pub fn has_empty(&self) -> bool {
        self.cells.contains(&GemType::Empty)
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for gem in row {
                write!(f, "{}", gem.as_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for BoardState {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
