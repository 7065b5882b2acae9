//! Win detection: looks for a run through the most recently placed token.

use tracing::instrument;

use super::board::Board;
use super::player::Player;

/// A line through the grid along which a run can form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Vertical,
    Horizontal,
    /// Top-left to bottom-right (`\`)
    DiagonalDown,
    /// Bottom-left to top-right (`/`)
    DiagonalUp,
}

impl Axis {
    /// Axes in the order they are checked
    pub const ALL: [Axis; 4] = [
        Axis::Vertical,
        Axis::Horizontal,
        Axis::DiagonalDown,
        Axis::DiagonalUp,
    ];

    /// (column, row) steps scanned outward from the placed token.
    ///
    /// Vertical only looks down: nothing can sit above the newest token.
    fn directions(self) -> &'static [(isize, isize)] {
        match self {
            Axis::Vertical => &[(0, -1)],
            Axis::Horizontal => &[(-1, 0), (1, 0)],
            Axis::DiagonalDown => &[(-1, 1), (1, -1)],
            Axis::DiagonalUp => &[(-1, -1), (1, 1)],
        }
    }
}

/// The winning line, for highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningRun {
    pub player: Player,
    pub axis: Axis,
    /// (column, row) positions, ordered by column then row
    pub cells: Vec<(usize, usize)>,
}

impl WinningRun {
    pub fn contains(&self, column: usize, row: usize) -> bool {
        self.cells.contains(&(column, row))
    }
}

/// Check if the token just placed at (column, row) completes a run of at
/// least `connect_length` tokens for `player`.
#[instrument(level = "trace", skip(board))]
pub fn check_win(board: &Board, column: usize, row: usize, player: Player) -> bool {
    if board.occupant(column, row) != Some(player) {
        return false;
    }

    let target = board.connect_length();
    Axis::ALL.iter().any(|&axis| {
        let mut count = 1;
        if count >= target {
            return true;
        }
        for &direction in axis.directions() {
            for _ in scan(board, column, row, player, direction) {
                count += 1;
                if count >= target {
                    return true;
                }
            }
        }
        false
    })
}

/// Like [`check_win`], but returns every cell of the first winning line.
pub fn winning_run(board: &Board, column: usize, row: usize, player: Player) -> Option<WinningRun> {
    if board.occupant(column, row) != Some(player) {
        return None;
    }

    Axis::ALL.iter().find_map(|&axis| {
        let mut cells = vec![(column, row)];
        for &direction in axis.directions() {
            cells.extend(scan(board, column, row, player, direction));
        }
        if cells.len() < board.connect_length() {
            return None;
        }
        cells.sort_unstable();
        Some(WinningRun {
            player,
            axis,
            cells,
        })
    })
}

/// Positions stepping away from (column, row), stopping at the first one that
/// is off the board, empty, or held by the opponent.
fn scan(
    board: &Board,
    column: usize,
    row: usize,
    player: Player,
    (d_column, d_row): (isize, isize),
) -> impl Iterator<Item = (usize, usize)> + '_ {
    std::iter::successors(Some((column, row)), move |&(c, r)| {
        let c = c.checked_add_signed(d_column)?;
        let r = r.checked_add_signed(d_row)?;
        if c < board.columns() && r < board.column_height(c) {
            Some((c, r))
        } else {
            None
        }
    })
    .skip(1)
    .take_while(move |&(c, r)| board.occupant(c, r) == Some(player))
}
