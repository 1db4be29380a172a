use crate::grid::Grid;

/// Hex values of braille dots
///
/// ```text
///      1   8
///      2  10
///      4  20
///     40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// Renders a grid as braille text, one dot per cell.
///
/// Each braille character packs a 2 column by 4 row block of cells: an alive
/// cell raises its dot, a dead cell leaves it flat. Grids whose dimensions
/// are not multiples of the block size get padded with flat dots on the last
/// character row/column.
pub struct Board {
    /// The frame buffer.
    fb: String,

    /// Codepoints. This allows us to construct the framebuffer more easily
    cp: Vec<u32>,

    /// Height of the grid being rendered, in cells
    h: usize,

    /// Width of the grid being rendered, in cells
    w: usize,
}

impl Board {
    pub fn new(grid_height: usize, grid_width: usize) -> Self {
        // Let `w` and `h` refer to the width and height of the grid. Then
        // `bw = ceil(w / 2)` and `bh = ceil(h / 4)` are the width and height
        // of our framebuffer in braille characters, not counting the
        // trailing newline expected at the end of each line.

        let (bw, bh) = (grid_width.div_ceil(2), grid_height.div_ceil(4));
        let cp = vec![BRAILLE_EMPTY; bw * bh];

        // Each braille character is 3 bytes, and newlines one byte. Since we
        // need `bh` newlines, this gives us a framebuffer of length
        // `3 * (bw * bh) + bh`.

        let fb = String::with_capacity(3 * (bw * bh) + bh);

        Self {
            fb,
            cp,
            h: grid_height,
            w: grid_width,
        }
    }

    /// Stamp the grid onto the framebuffer, replacing the previous frame
    pub fn draw(&mut self, grid: &Grid) {
        assert_eq!(grid.height(), self.h, "grid height changed");
        assert_eq!(grid.width(), self.w, "grid width changed");

        let bw = self.w.div_ceil(2);

        self.cp.fill(BRAILLE_EMPTY);

        for r in 0..self.h {
            for c in 0..self.w {
                if grid.get(r, c).is_alive() {
                    self.cp[(r / 4) * bw + (c / 2)] += Self::get_hex_value(r, c);
                }
            }
        }
    }

    /// Build the frame string from the current codepoints
    pub fn render(&mut self) -> &str {
        let bw = self.w.div_ceil(2);

        self.fb.clear();

        for (i, &c) in self.cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                self.fb.push('\n');
            }

            self.fb.push(::std::char::from_u32(c).unwrap());
        }
        self.fb.push('\n');

        &self.fb
    }

    fn get_hex_value(r: usize, c: usize) -> u32 {
        match (c % 2, r % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}
