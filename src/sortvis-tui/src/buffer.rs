//! Cell grid the screen is composed in before it is flushed.
//!
//! The renderer keeps two of these: the one on screen and the one being
//! drawn. [`changed_cells`] walks the difference so only cells that changed
//! are written to the terminal.

use crate::color::Color;

/// One terminal cell. `None` colors mean the terminal default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub symbol: char,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            symbol: ' ',
            fg: None,
            bg: None,
        }
    }
}

impl Cell {
    /// A blank cell painted with a background color.
    #[inline]
    pub fn filled(bg: Color) -> Self {
        Self {
            symbol: ' ',
            fg: None,
            bg: Some(bg),
        }
    }
}

/// A 2D grid of cells in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Buffer {
    cells: Vec<Cell>,
    width: u16,
    height: u16,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            cells: vec![Cell::default(); width as usize * height as usize],
            width,
            height,
        }
    }

    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    pub const fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// Cell at (x, y), or `None` out of bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Sets the cell at (x, y). Returns false when out of bounds.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Resets every cell to the default.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Fills the rectangle at (x, y) with `cell`, clipped to the buffer.
    pub fn fill(&mut self, x: u16, y: u16, width: u16, height: u16, cell: Cell) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);
        for row in y..y_end {
            for col in x..x_end {
                self.set(col, row, cell);
            }
        }
    }

    /// Writes `text` left to right starting at (x, y), truncated at the right
    /// edge. Returns the number of cells written.
    pub fn draw_str(&mut self, x: u16, y: u16, text: &str, fg: Option<Color>) -> u16 {
        let mut written = 0;
        for (col, ch) in (x..self.width).zip(text.chars().filter(|c| !c.is_control())) {
            self.set(
                col,
                y,
                Cell {
                    symbol: ch,
                    fg,
                    bg: None,
                },
            );
            written += 1;
        }
        written
    }

    /// Resizes and clears.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.cells = vec![Cell::default(); width as usize * height as usize];
        self.width = width;
        self.height = height;
    }

    /// The row at `y` as text, for tests and logs.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.symbol)
            .collect()
    }
}

/// Cells of `next` that differ from `current`, as `(x, y, cell)`.
///
/// A size mismatch yields every cell of `next`.
pub fn changed_cells<'a>(
    current: &'a Buffer,
    next: &'a Buffer,
) -> impl Iterator<Item = (u16, u16, &'a Cell)> + 'a {
    let full = current.size() != next.size();
    let width = next.width.max(1) as usize;
    next.cells
        .iter()
        .enumerate()
        .filter(move |(i, cell)| full || current.cells[*i] != **cell)
        .map(move |(i, cell)| ((i % width) as u16, (i / width) as u16, cell))
}
