use super::constants::{Cell, Mark, BOARD_HEIGHT, BOARD_WIDTH, SEPARATOR_WIDTH, WIN_LENGTH};
use super::errors::InvalidMove;

/// Directions a winning line can run in, as (column, row) steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
    /// Bottom-left to top-right.
    RisingDiagonal,
    /// Top-left to bottom-right.
    FallingDiagonal,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::RisingDiagonal,
        Orientation::FallingDiagonal,
    ];

    pub fn step(&self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
            Orientation::RisingDiagonal => (1, 1),
            Orientation::FallingDiagonal => (1, -1),
        }
    }
}

/// Which lines count as a win.
///
/// The classic rules of this game only score horizontal, vertical and
/// rising diagonals; falling diagonals are opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WinRules {
    pub falling_diagonals: bool,
}

impl WinRules {
    pub fn counts(&self, orientation: Orientation) -> bool {
        match orientation {
            Orientation::Horizontal | Orientation::Vertical | Orientation::RisingDiagonal => true,
            Orientation::FallingDiagonal => self.falling_diagonals,
        }
    }
}

/// The 7x6 playing grid. Internal indexing: cells[column][row], row 0 at the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardGrid {
    cells: [[Cell; BOARD_HEIGHT]; BOARD_WIDTH],
    rules: WinRules,
}

impl Default for BoardGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardGrid {
    pub fn new() -> Self {
        Self::with_rules(WinRules::default())
    }

    /// Creates an empty board scoring lines according to `rules`.
    pub fn with_rules(rules: WinRules) -> Self {
        BoardGrid {
            cells: [[Cell::Empty; BOARD_HEIGHT]; BOARD_WIDTH],
            rules,
        }
    }

    pub fn rules(&self) -> WinRules {
        self.rules
    }

    /// Get the cell at (column, row). Panics if either index is off the board.
    pub fn get(&self, column: usize, row: usize) -> Cell {
        self.cells[column][row]
    }

    /// Number of discs stacked in a column.
    pub fn height(&self, column: usize) -> usize {
        self.cells[column].iter().take_while(|c| !c.is_empty()).count()
    }

    /// True when the top row of `column` holds a disc. Panics if `column` is
    /// off the board.
    pub fn is_column_full(&self, column: usize) -> bool {
        !self.cells[column][BOARD_HEIGHT - 1].is_empty()
    }

    pub fn is_full(&self) -> bool {
        (0..BOARD_WIDTH).all(|column| self.is_column_full(column))
    }

    /// Drop a disc into a column. Returns the row it landed on.
    ///
    /// The column is taken as a raw integer and range-checked here, so callers
    /// may pass whatever they parsed from the player.
    ///
    /// # Errors
    ///
    /// * [`InvalidMove::OutOfRange`] - `column` is negative or not below the board width
    /// * [`InvalidMove::ColumnFull`] - the column's top cell is already taken
    ///
    /// The board is unchanged when an error is returned.
    pub fn place_disc(&mut self, column: i64, mark: Mark) -> Result<usize, InvalidMove> {
        let col = usize::try_from(column)
            .ok()
            .filter(|&c| c < BOARD_WIDTH)
            .ok_or(InvalidMove::OutOfRange { column })?;

        if self.is_column_full(col) {
            return Err(InvalidMove::ColumnFull { column: col });
        }

        let row = self.height(col);
        self.cells[col][row] = mark.cell();
        Ok(row)
    }

    pub fn has_winning_line(&self) -> bool {
        self.winning_mark().is_some()
    }

    /// The mark owning the first winning line found, scanning orientations
    /// enabled by the board's rules.
    pub fn winning_mark(&self) -> Option<Mark> {
        Orientation::ALL
            .iter()
            .filter(|o| self.rules.counts(**o))
            .find_map(|o| self.find_line(*o))
    }

    fn find_line(&self, orientation: Orientation) -> Option<Mark> {
        let (dc, dr) = orientation.step();
        for column in 0..BOARD_WIDTH {
            for row in 0..BOARD_HEIGHT {
                let Some(mark) = self.cells[column][row].mark() else {
                    continue;
                };
                let mut cells = (1..WIN_LENGTH as isize).map(|i| {
                    self.cell_at(column as isize + dc * i, row as isize + dr * i)
                });
                if cells.all(|c| c == Some(mark.cell())) {
                    return Some(mark);
                }
            }
        }
        None
    }

    fn cell_at(&self, column: isize, row: isize) -> Option<Cell> {
        let column = usize::try_from(column).ok()?;
        let row = usize::try_from(row).ok()?;
        self.cells.get(column)?.get(row).copied()
    }

    /// Render the board as text, top row first, each row followed by a
    /// dashed separator.
    pub fn render(&self) -> Vec<String> {
        let separator = "-".repeat(SEPARATOR_WIDTH);
        let mut lines = Vec::with_capacity(BOARD_HEIGHT * 2);
        for row in (0..BOARD_HEIGHT).rev() {
            let mut line = String::with_capacity(SEPARATOR_WIDTH);
            line.push('|');
            for column in 0..BOARD_WIDTH {
                line.push(self.cells[column][row].symbol());
                line.push('|');
            }
            lines.push(line);
            lines.push(separator.clone());
        }
        lines
    }
}
