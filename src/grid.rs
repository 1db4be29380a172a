use std::fmt;

use crate::cell::Cell;

/// A fixed-size board of cells.
///
/// Cells are stored row-major. The grid is topologically a torus: the top row
/// borders the bottom row and the leftmost column borders the rightmost one,
/// so every cell has exactly 8 neighbors no matter where it sits. This is the
/// only boundary policy the grid supports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// The cell buffer
    cells: Vec<Cell>,

    /// Height of the grid, in cells
    h: usize,

    /// Width of the grid, in cells
    w: usize,
}

impl Grid {
    /// Create an all-dead grid. Both dimensions must be at least 1.
    pub fn new(height: usize, width: usize) -> Self {
        assert!(height > 0, "height must be positive");
        assert!(width > 0, "width must be positive");

        Self {
            cells: vec![Cell::Dead; height * width],
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

        self.cells[self.index(r, c)]
    }

    pub fn set(&mut self, r: usize, c: usize, cell: Cell) {
        assert!(r < self.h, "row is out of bounds");
        assert!(c < self.w, "col is out of bounds");

        let i = self.index(r, c);
        self.cells[i] = cell;
    }

    /// Number of alive cells on the whole grid
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// The coordinates of the 8 neighbors of `(r, c)`, in row-major order.
    ///
    /// Each coordinate wraps modulo its dimension, so `(0, 0)` on an `H x W`
    /// grid has `(H - 1, W - 1)` as its northwest neighbor. On grids narrower
    /// than 3 in either dimension the wrapped coordinates coincide, which
    /// means a cell can be its own neighbor there.
    pub fn neighbors(&self, r: usize, c: usize) -> [(usize, usize); 8] {
        assert!(r < self.h, "row is out of bounds");
        assert!(c < self.w, "col is out of bounds");

        let up = (r + self.h - 1) % self.h;
        let down = (r + 1) % self.h;
        let left = (c + self.w - 1) % self.w;
        let right = (c + 1) % self.w;

        [
            (up, left),
            (up, c),
            (up, right),
            (r, left),
            (r, right),
            (down, left),
            (down, c),
            (down, right),
        ]
    }

    /// Count the alive cells among the 8 neighbors of `(r, c)`
    pub fn alive_neighbors(&self, r: usize, c: usize) -> u8 {
        self.neighbors(r, c)
            .into_iter()
            .filter(|&(nr, nc)| self.get(nr, nc).is_alive())
            .count() as u8
    }

    fn index(&self, r: usize, c: usize) -> usize {
        r * self.w + c
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.h {
            for c in 0..self.w {
                let ch = if self.get(r, c).is_alive() { 'O' } else { '.' };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
