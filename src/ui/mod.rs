//! Terminal UI: board with column selector, score panel, and a grid editor
//! for changing the board size between rounds.

mod app;
mod game_view;
pub mod grid_editor;

pub use app::App;
