//! # Connect Four
//!
//! Two-player Connect Four on a grid of any size, with a configurable number
//! of tokens in a row needed to win. Scores carry over between rounds.
//!
//! ## Modules
//!
//! - [`game`] - Core game logic: board, win detection, session
//! - [`ui`] - Terminal UI: board, score panel, grid editor
//! - [`config`] - TOML configuration loading and validation
//! - [`error`] - Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
