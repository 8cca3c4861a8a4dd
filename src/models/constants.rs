pub const BOARD_WIDTH: usize = 7;
pub const BOARD_HEIGHT: usize = 6;
/// Number of same-mark cells in a line needed to win.
pub const WIN_LENGTH: usize = 4;

/// Width of the dashed separator printed under every board row.
pub const SEPARATOR_WIDTH: usize = 2 * BOARD_WIDTH + 1;

/// The disc colour a player drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Red,
    Yellow,
}

impl Mark {
    pub const ALL: [Mark; 2] = [Mark::Red, Mark::Yellow];

    pub fn name(&self) -> &'static str {
        match self {
            Mark::Red => "Red",
            Mark::Yellow => "Yellow",
        }
    }

    pub fn other(&self) -> Mark {
        match self {
            Mark::Red => Mark::Yellow,
            Mark::Yellow => Mark::Red,
        }
    }

    pub fn cell(&self) -> Cell {
        match self {
            Mark::Red => Cell::Red,
            Mark::Yellow => Cell::Yellow,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }

    /// The mark occupying this cell, if any.
    pub fn mark(&self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Mark::Red),
            Cell::Yellow => Some(Mark::Yellow),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        mark.cell()
    }
}
