use crate::game::Dimensions;

/// Largest value offered for any grid field.
pub const MAX_GRID_VALUE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridField {
    Columns,
    Rows,
    ConnectLength,
}

impl GridField {
    pub const ALL: [GridField; 3] = [GridField::Columns, GridField::Rows, GridField::ConnectLength];

    pub fn label(self) -> &'static str {
        match self {
            GridField::Columns => "Columns",
            GridField::Rows => "Rows",
            GridField::ConnectLength => "Connecting tiles",
        }
    }
}

/// Pending grid settings, edited in place and applied as a whole.
///
/// Values are only range-limited here; whether the combination is playable
/// is decided by the session when the edit is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridEditor {
    columns: usize,
    rows: usize,
    connect_length: usize,
    selected: usize,
}

impl GridEditor {
    pub fn new(current: Dimensions) -> Self {
        GridEditor {
            columns: current.columns(),
            rows: current.rows(),
            connect_length: current.connect_length(),
            selected: 0,
        }
    }

    pub fn selected(&self) -> GridField {
        GridField::ALL[self.selected]
    }

    pub fn value(&self, field: GridField) -> usize {
        match field {
            GridField::Columns => self.columns,
            GridField::Rows => self.rows,
            GridField::ConnectLength => self.connect_length,
        }
    }

    /// (columns, rows, connect length)
    pub fn values(&self) -> (usize, usize, usize) {
        (self.columns, self.rows, self.connect_length)
    }

    pub fn next_field(&mut self) {
        self.selected = (self.selected + 1) % GridField::ALL.len();
    }

    pub fn previous_field(&mut self) {
        self.selected = (self.selected + GridField::ALL.len() - 1) % GridField::ALL.len();
    }

    pub fn increment(&mut self) {
        let value = self.value_mut();
        *value = (*value + 1).min(MAX_GRID_VALUE);
    }

    pub fn decrement(&mut self) {
        let value = self.value_mut();
        *value = value.saturating_sub(1).max(1);
    }

    fn value_mut(&mut self) -> &mut usize {
        match self.selected() {
            GridField::Columns => &mut self.columns,
            GridField::Rows => &mut self.rows,
            GridField::ConnectLength => &mut self.connect_length,
        }
    }
}
