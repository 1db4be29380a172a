use std::str::FromStr;

use thiserror::Error;

use crate::cell::Cell;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PatternError {
    #[error("Pattern has no cells")]
    Empty,

    #[error("Row {row} does not match the width of the first row")]
    Ragged { row: usize },

    #[error("Unrecognized character '{ch}' on row {row}")]
    BadChar { row: usize, ch: char },
}

/// A rectangular arrangement of cells used to seed a simulation.
///
/// Patterns are always non-empty and rectangular; both are checked on
/// construction. A pattern describes the whole starting grid, dead border
/// included, so its shape becomes the grid shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    cells: Vec<Cell>,
    h: usize,
    w: usize,
}

impl Pattern {
    /// Build a pattern from explicit rows of cells.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, PatternError> {
        let Some(first) = rows.first() else {
            return Err(PatternError::Empty);
        };

        let w = first.len();
        if w == 0 {
            return Err(PatternError::Empty);
        }

        let mut cells = Vec::with_capacity(rows.len() * w);
        for (row, cs) in rows.iter().enumerate() {
            if cs.len() != w {
                return Err(PatternError::Ragged { row });
            }

            cells.extend_from_slice(cs);
        }

        Ok(Self {
            h: rows.len(),
            cells,
            w,
        })
    }

    /// Build an `height x width` pattern that is dead everywhere except at
    /// the given live coordinates.
    fn from_live_cells(height: usize, width: usize, live: &[(usize, usize)]) -> Self {
        let mut cells = vec![Cell::Dead; height * width];

        for &(r, c) in live {
            cells[r * width + c] = Cell::Alive;
        }

        Self {
            cells,
            h: height,
            w: width,
        }
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn get(&self, r: usize, c: usize) -> Cell {
        assert!(r < self.h, "row is out of bounds");
        assert!(c < self.w, "col is out of bounds");

        self.cells[r * self.w + c]
    }
}

/// Parse the plaintext pattern format: one line per row, `.` for a dead cell
/// and `O` for a live one. Lines starting with `!` are comments.
///
/// See: https://conwaylife.com/wiki/Plaintext
impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();

        for line in s.lines() {
            let line = line.trim_end();

            if line.is_empty() || line.starts_with('!') {
                continue;
            }

            let row = rows.len();
            let cells = line
                .chars()
                .map(|ch| match ch {
                    '.' => Ok(Cell::Dead),
                    'O' => Ok(Cell::Alive),
                    ch => Err(PatternError::BadChar { row, ch }),
                })
                .collect::<Result<Vec<_>, _>>()?;

            rows.push(cells);
        }

        Self::from_rows(rows)
    }
}

/// A few well-known starting patterns, each padded with its own dead border.
pub mod presets {
    use super::Pattern;

    /// 2x2 block, the smallest still life
    pub fn block() -> Pattern {
        Pattern::from_live_cells(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)])
    }

    /// Period-2 oscillator, a vertical bar of 3
    pub fn blinker() -> Pattern {
        Pattern::from_live_cells(5, 5, &[(1, 2), (2, 2), (3, 2)])
    }

    /// The classic diagonal traveller
    pub fn glider() -> Pattern {
        Pattern::from_live_cells(8, 8, &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)])
    }

    /// Two 2x2 blocks touching at a corner. On a 6x6 torus the pair
    /// oscillates with period 2.
    pub fn block_pair() -> Pattern {
        Pattern::from_live_cells(
            6,
            6,
            &[
                (1, 1),
                (1, 2),
                (2, 1),
                (2, 2),
                (3, 3),
                (3, 4),
                (4, 3),
                (4, 4),
            ],
        )
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::Cell;
    use super::Pattern;
    use super::PatternError;

    #[test]
    fn parse_plaintext() {
        let pattern = Pattern::from_str("!Name: Blinker\n.O.\n.O.\n.O.\n").unwrap();

        assert_eq!(pattern.height(), 3);
        assert_eq!(pattern.width(), 3);
        assert_eq!(pattern.get(0, 1), Cell::Alive);
        assert_eq!(pattern.get(0, 0), Cell::Dead);
    }

    #[test]
    fn parse_rejects_unknown_characters() {
        let err = Pattern::from_str(".O.\n.x.\n").unwrap_err();

        assert_eq!(err, PatternError::BadChar { row: 1, ch: 'x' });
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let err = Pattern::from_str("..O\n.O\n").unwrap_err();

        assert_eq!(err, PatternError::Ragged { row: 1 });
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(Pattern::from_str("!only comments\n"), Err(PatternError::Empty));
        assert_eq!(Pattern::from_rows(Vec::new()), Err(PatternError::Empty));
    }

    #[test]
    fn presets_are_rectangular() {
        for pattern in [
            super::presets::block(),
            super::presets::blinker(),
            super::presets::glider(),
            super::presets::block_pair(),
        ] {
            assert!(pattern.height() > 0);
            assert!(pattern.width() > 0);
        }
    }
}
