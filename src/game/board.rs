use crate::error::{DimensionsError, IllegalMove};

use super::player::Player;

pub const DEFAULT_COLUMNS: usize = 7;
pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_CONNECT_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

/// Grid size and the run length needed to win.
///
/// Only constructible through [`Dimensions::new`], so a value always describes
/// a grid in which a winning run fits along both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    columns: usize,
    rows: usize,
    connect_length: usize,
}

impl Dimensions {
    pub fn new(columns: usize, rows: usize, connect_length: usize) -> Result<Self, DimensionsError> {
        if columns == 0 || rows == 0 {
            return Err(DimensionsError::ZeroDimension { columns, rows });
        }
        if connect_length == 0 {
            return Err(DimensionsError::ZeroConnectLength);
        }
        if connect_length > columns {
            return Err(DimensionsError::ConnectExceedsColumns {
                connect_length,
                columns,
            });
        }
        if connect_length > rows {
            return Err(DimensionsError::ConnectExceedsRows {
                connect_length,
                rows,
            });
        }
        Ok(Dimensions {
            columns,
            rows,
            connect_length,
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn connect_length(&self) -> usize {
        self.connect_length
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Dimensions {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            connect_length: DEFAULT_CONNECT_LENGTH,
        }
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{} connect {}",
            self.columns, self.rows, self.connect_length
        )
    }
}

/// The grid, stored as one append-only stack per column.
///
/// Row 0 is the bottom of a column. A position is occupied exactly when its
/// row is below the stack height, so there is no stored "empty" value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dimensions: Dimensions,
    stacks: Vec<Vec<Player>>,
}

impl Board {
    /// Create a new empty board
    pub fn new(dimensions: Dimensions) -> Self {
        Board {
            dimensions,
            stacks: vec![Vec::with_capacity(dimensions.rows()); dimensions.columns()],
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn columns(&self) -> usize {
        self.dimensions.columns()
    }

    pub fn rows(&self) -> usize {
        self.dimensions.rows()
    }

    pub fn connect_length(&self) -> usize {
        self.dimensions.connect_length()
    }

    /// Number of tokens in a column; 0 for columns outside the board
    pub fn column_height(&self, column: usize) -> usize {
        self.stacks.get(column).map_or(0, Vec::len)
    }

    /// Token at (column, row), or `None` when the position is empty or off the board
    pub fn occupant(&self, column: usize, row: usize) -> Option<Player> {
        let stack = self.stacks.get(column)?;
        if row < stack.len() {
            Some(stack[row])
        } else {
            None
        }
    }

    /// Get the cell at a specific position
    pub fn cell(&self, column: usize, row: usize) -> Cell {
        self.occupant(column, row)
            .map_or(Cell::Empty, Player::to_cell)
    }

    pub fn is_legal_move(&self, column: usize) -> bool {
        column < self.columns() && self.stacks[column].len() < self.rows()
    }

    /// Drop a token in a column, returns the row where it landed
    pub fn apply_move(&mut self, column: usize, player: Player) -> Result<usize, IllegalMove> {
        let rows = self.rows();
        let columns = self.columns();
        let stack = self
            .stacks
            .get_mut(column)
            .ok_or(IllegalMove::InvalidColumn { column, columns })?;

        if stack.len() >= rows {
            return Err(IllegalMove::ColumnFull { column });
        }

        stack.push(player);
        Ok(stack.len() - 1)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.stacks.iter().all(|stack| stack.len() == self.rows())
    }

    /// Total number of tokens on the board
    pub fn move_count(&self) -> usize {
        self.stacks.iter().map(Vec::len).sum()
    }

    /// Columns that can still take a token
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.columns())
            .filter(|&column| self.is_legal_move(column))
            .collect()
    }

    /// Empty every column, keeping the current dimensions
    pub fn clear(&mut self) {
        *self = Board::new(self.dimensions);
    }

    /// Replace the board with an empty one of a new size.
    ///
    /// On error the current board is left untouched.
    pub fn reset(
        &mut self,
        columns: usize,
        rows: usize,
        connect_length: usize,
    ) -> Result<(), DimensionsError> {
        let dimensions = Dimensions::new(columns, rows, connect_length)?;
        *self = Board::new(dimensions);
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Dimensions::default())
    }
}
