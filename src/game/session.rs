use tracing::{debug, info, instrument, warn};

use crate::error::{DimensionsError, MoveError};

use super::board::{Board, Dimensions};
use super::player::Player;
use super::win::{check_win, winning_run, WinningRun};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tied,
}

/// Rounds won by each player. Survives resets and resizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scores {
    player_one: u32,
    player_two: u32,
}

impl Scores {
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }

    pub fn record_win(&mut self, player: Player) {
        match player {
            Player::One => self.player_one += 1,
            Player::Two => self.player_two += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.player_one + self.player_two
    }
}

/// Outcome of a move request, handed back to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// Nothing changed.
    Rejected(MoveError),
    Placed {
        player: Player,
        column: usize,
        row: usize,
        triggered_win: bool,
        triggered_tie: bool,
    },
}

impl MoveResult {
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveResult::Placed { .. })
    }
}

/// One player-vs-player match: the board of the current round, whose turn it
/// is, and the running score.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    current_player: Player,
    status: GameStatus,
    scores: Scores,
    last_win: Option<WinningRun>,
}

impl GameSession {
    /// Start a session with an empty board; player one moves first.
    pub fn new(dimensions: Dimensions) -> Self {
        GameSession {
            board: Board::new(dimensions),
            current_player: Player::One,
            status: GameStatus::InProgress,
            scores: Scores::default(),
            last_win: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dimensions(&self) -> Dimensions {
        self.board.dimensions()
    }

    /// The run that ended the current round, if it was won
    pub fn last_win(&self) -> Option<&WinningRun> {
        self.last_win.as_ref()
    }

    /// Check if the round is over
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Columns the current player may drop into
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// Drop the current player's token into `column`.
    ///
    /// A win is checked before a tie, so filling the last cell with a winning
    /// token scores the win.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn request_move(&mut self, column: usize) -> MoveResult {
        if self.is_over() {
            warn!(status = ?self.status, "move requested after the round ended");
            return MoveResult::Rejected(MoveError::GameOver);
        }

        let player = self.current_player;
        let row = match self.board.apply_move(column, player) {
            Ok(row) => row,
            Err(e) => {
                warn!(error = %e, "move rejected");
                return MoveResult::Rejected(e.into());
            }
        };
        debug!(row, "token placed");

        let triggered_win = check_win(&self.board, column, row, player);
        let mut triggered_tie = false;
        if triggered_win {
            self.status = GameStatus::Won(player);
            self.scores.record_win(player);
            self.last_win = winning_run(&self.board, column, row, player);
            info!(
                score_one = self.scores.get(Player::One),
                score_two = self.scores.get(Player::Two),
                "round won"
            );
        } else if self.board.is_full() {
            self.status = GameStatus::Tied;
            triggered_tie = true;
            info!("round tied");
        } else {
            self.current_player = player.other();
        }

        MoveResult::Placed {
            player,
            column,
            row,
            triggered_win,
            triggered_tie,
        }
    }

    /// Start a new round on an empty board of the same size. Scores are kept.
    #[instrument(skip(self))]
    pub fn request_reset(&mut self) {
        self.board.clear();
        self.current_player = Player::One;
        self.status = GameStatus::InProgress;
        self.last_win = None;
        info!(dimensions = %self.board.dimensions(), "new round");
    }

    /// Change the grid and start a new round. Scores are kept.
    ///
    /// An invalid combination leaves the session exactly as it was.
    #[instrument(skip(self))]
    pub fn request_resize(
        &mut self,
        columns: usize,
        rows: usize,
        connect_length: usize,
    ) -> Result<(), DimensionsError> {
        if let Err(e) = self.board.reset(columns, rows, connect_length) {
            warn!(error = %e, "resize rejected");
            return Err(e);
        }
        self.request_reset();
        Ok(())
    }

    /// Zero both players' scores without touching the current round
    pub fn reset_scores(&mut self) {
        self.scores = Scores::default();
        info!("scores cleared");
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Dimensions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IllegalMove;
    use crate::game::Cell;

    fn play_all(session: &mut GameSession, columns: &[usize]) -> MoveResult {
        let mut last = MoveResult::Rejected(MoveError::GameOver);
        for &column in columns {
            last = session.request_move(column);
            assert!(last.is_placed(), "move to column {column} failed: {last:?}");
        }
        last
    }

    #[test]
    fn test_initial_session() {
        let session = GameSession::default();
        assert_eq!(session.current_player(), Player::One);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.scores(), Scores::default());
        assert_eq!(session.legal_columns().len(), 7);
    }

    #[test]
    fn test_request_move_alternates_players() {
        let mut session = GameSession::default();
        let result = session.request_move(3);

        assert_eq!(
            result,
            MoveResult::Placed {
                player: Player::One,
                column: 3,
                row: 0,
                triggered_win: false,
                triggered_tie: false,
            }
        );
        assert_eq!(session.current_player(), Player::Two);
        assert_eq!(session.board().cell(3, 0), Cell::PlayerOne);
    }

    #[test]
    fn test_win_detection_and_score() {
        let mut session = GameSession::default();

        // One builds the bottom row, Two stacks on top of it
        let result = play_all(&mut session, &[0, 0, 1, 1, 2, 2, 3]);

        assert!(matches!(
            result,
            MoveResult::Placed {
                triggered_win: true,
                triggered_tie: false,
                ..
            }
        ));
        assert_eq!(session.status(), GameStatus::Won(Player::One));
        assert_eq!(session.scores().get(Player::One), 1);
        assert_eq!(session.scores().get(Player::Two), 0);
        // Winner stays as current player once the round is over
        assert_eq!(session.current_player(), Player::One);
        assert_eq!(session.last_win().map(|run| run.cells.len()), Some(4));
    }

    #[test]
    fn test_move_after_game_over_rejected() {
        let mut session = GameSession::default();
        play_all(&mut session, &[0, 0, 1, 1, 2, 2, 3]);
        let board_before = session.board().clone();

        assert_eq!(
            session.request_move(5),
            MoveResult::Rejected(MoveError::GameOver)
        );
        assert_eq!(session.board(), &board_before);
        assert_eq!(session.scores().get(Player::One), 1);
        assert!(session.legal_columns().is_empty());
    }

    #[test]
    fn test_illegal_move_keeps_turn() {
        let mut session = GameSession::new(Dimensions::new(4, 4, 4).unwrap());
        play_all(&mut session, &[0, 0, 0, 0]);

        assert_eq!(
            session.request_move(0),
            MoveResult::Rejected(MoveError::Illegal(IllegalMove::ColumnFull { column: 0 }))
        );
        assert_eq!(
            session.request_move(4),
            MoveResult::Rejected(MoveError::Illegal(IllegalMove::InvalidColumn {
                column: 4,
                columns: 4
            }))
        );
        assert_eq!(session.current_player(), Player::One);
        assert_eq!(session.board().move_count(), 4);
    }

    #[test]
    fn test_tie_when_board_fills_without_win() {
        let mut session = GameSession::new(Dimensions::new(4, 3, 3).unwrap());
        // Final layout, bottom to top:
        //   c0: 1 2 1   c1: 1 2 1   c2: 2 1 2   c3: 2 1 2
        let result = play_all(&mut session, &[0, 2, 1, 3, 2, 0, 3, 1, 0, 2, 1, 3]);

        assert!(matches!(
            result,
            MoveResult::Placed {
                triggered_win: false,
                triggered_tie: true,
                ..
            }
        ));
        assert_eq!(session.status(), GameStatus::Tied);
        assert!(session.board().is_full());
        assert_eq!(session.scores().total(), 0);
        assert!(session.last_win().is_none());
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_tie() {
        let mut session = GameSession::new(Dimensions::new(3, 3, 3).unwrap());
        // The ninth token completes the / diagonal and fills the board
        let result = play_all(&mut session, &[0, 1, 1, 0, 0, 2, 2, 1, 2]);

        assert!(session.board().is_full());
        assert!(matches!(
            result,
            MoveResult::Placed {
                row: 2,
                triggered_win: true,
                triggered_tie: false,
                ..
            }
        ));
        assert_eq!(session.status(), GameStatus::Won(Player::One));
    }

    #[test]
    fn test_reset_keeps_scores() {
        let mut session = GameSession::default();
        play_all(&mut session, &[0, 0, 1, 1, 2, 2, 3]);

        session.request_reset();
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.current_player(), Player::One);
        assert_eq!(session.board().move_count(), 0);
        assert!(session.last_win().is_none());
        assert_eq!(session.scores().get(Player::One), 1);
    }

    #[test]
    fn test_resize_rejects_connect_longer_than_columns() {
        let mut session = GameSession::default();
        play_all(&mut session, &[0, 0, 1, 1, 2, 2, 3]);
        let board_before = session.board().clone();

        assert_eq!(
            session.request_resize(3, 6, 4),
            Err(DimensionsError::ConnectExceedsColumns {
                connect_length: 4,
                columns: 3
            })
        );
        assert_eq!(session.board(), &board_before);
        assert_eq!(session.status(), GameStatus::Won(Player::One));
        assert_eq!(session.scores().get(Player::One), 1);
    }

    #[test]
    fn test_resize_starts_new_round() {
        let mut session = GameSession::default();
        play_all(&mut session, &[0, 0, 1, 1, 2, 2, 3]);

        session.request_resize(10, 8, 5).unwrap();
        assert_eq!(session.dimensions(), Dimensions::new(10, 8, 5).unwrap());
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.current_player(), Player::One);
        assert_eq!(session.board().move_count(), 0);
        assert_eq!(session.scores().get(Player::One), 1);
    }

    #[test]
    fn test_reset_scores() {
        let mut session = GameSession::default();
        play_all(&mut session, &[0, 0, 1, 1, 2, 2, 3]);
        session.reset_scores();
        assert_eq!(session.scores(), Scores::default());
        assert_eq!(session.status(), GameStatus::Won(Player::One));
    }
}
