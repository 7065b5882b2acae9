//! Core game logic: column-stack board, win detection along the four axes,
//! and the session that runs rounds and keeps score.

mod board;
mod player;
mod session;
mod win;

pub use board::{
    Board, Cell, Dimensions, DEFAULT_COLUMNS, DEFAULT_CONNECT_LENGTH, DEFAULT_ROWS,
};
pub use player::Player;
pub use session::{GameSession, GameStatus, MoveResult, Scores};
pub use win::{check_win, winning_run, Axis, WinningRun};
