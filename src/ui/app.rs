use crate::config::PlayerNames;
use crate::error::{IllegalMove, MoveError};
use crate::game::{GameSession, MoveResult};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

use super::grid_editor::GridEditor;

pub struct App {
    session: GameSession,
    names: PlayerNames,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    editor: Option<GridEditor>,
}

impl App {
    pub fn new(session: GameSession, names: PlayerNames) -> Self {
        let selected_column = session.board().columns() / 2; // Start in middle
        App {
            session,
            names,
            selected_column,
            should_quit: false,
            message: None,
            editor: None,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(Into::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        if self.editor.is_some() {
            self.handle_editor_key(key);
            return;
        }

        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.session.board().columns() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                if column < self.session.board().columns() {
                    self.selected_column = column;
                }
                self.drop_piece_in(column);
            }
            KeyCode::Char('r') => {
                self.session.request_reset();
                self.message = Some("New round started!".to_string());
            }
            KeyCode::Char('g') => {
                self.editor = Some(GridEditor::new(self.session.dimensions()));
            }
            KeyCode::Char('x') => {
                self.session.reset_scores();
                self.message = Some("Scores cleared.".to_string());
            }
            _ => {}
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Esc => {
                self.editor = None;
            }
            KeyCode::Up => editor.previous_field(),
            KeyCode::Down | KeyCode::Tab => editor.next_field(),
            KeyCode::Left | KeyCode::Char('-') => editor.decrement(),
            KeyCode::Right | KeyCode::Char('+') => editor.increment(),
            KeyCode::Enter => {
                let (columns, rows, connect_length) = editor.values();
                match self.session.request_resize(columns, rows, connect_length) {
                    Ok(()) => {
                        self.editor = None;
                        self.selected_column = columns / 2;
                        self.message = Some(format!("Grid set to {}", self.session.dimensions()));
                    }
                    Err(e) => {
                        // Keep the editor open so the values can be fixed
                        self.message = Some(format!("Cannot use that grid: {e}"));
                    }
                }
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        self.drop_piece_in(self.selected_column);
    }

    fn drop_piece_in(&mut self, column: usize) {
        self.message = match self.session.request_move(column) {
            MoveResult::Placed {
                player,
                triggered_win: true,
                ..
            } => Some(format!("{} wins!", self.names.get(player))),
            MoveResult::Placed {
                triggered_tie: true,
                ..
            } => Some("It's a tie!".to_string()),
            MoveResult::Placed { .. } => None,
            MoveResult::Rejected(MoveError::Illegal(IllegalMove::ColumnFull { .. })) => {
                Some("Column is full!".to_string())
            }
            MoveResult::Rejected(MoveError::Illegal(IllegalMove::InvalidColumn { .. })) => {
                Some("Invalid column!".to_string())
            }
            MoveResult::Rejected(MoveError::GameOver) => {
                Some("Game over! Press 'r' to start a new round.".to_string())
            }
        };
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.session,
            &self.names,
            self.selected_column,
            &self.message,
            self.editor.as_ref(),
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(GameSession::default(), PlayerNames::default())
    }
}
