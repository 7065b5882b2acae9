use crate::config::PlayerNames;
use crate::game::{Board, Cell, GameSession, GameStatus, Player, WinningRun};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::grid_editor::{GridEditor, GridField};

pub fn render(
    frame: &mut Frame,
    session: &GameSession,
    names: &PlayerNames,
    selected_column: usize,
    message: &Option<String>,
    editor: Option<&GridEditor>,
) {
    let board_height = session.board().rows() as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Length(3),         // Scores
            Constraint::Min(board_height), // Board
            Constraint::Length(3),         // Message
            Constraint::Length(4),         // Controls
        ])
        .split(frame.area());

    render_header(frame, session, names, chunks[0]);
    render_scores(frame, session, names, chunks[1]);
    render_board(
        frame,
        session.board(),
        session.last_win(),
        selected_column,
        chunks[2],
    );
    render_message(frame, message, chunks[3]);
    render_controls(frame, chunks[4]);

    if let Some(editor) = editor {
        let area = frame.area();
        render_grid_editor(frame, editor, area);
    }
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, session: &GameSession, names: &PlayerNames, area: Rect) {
    let (status, color) = match session.status() {
        GameStatus::InProgress => {
            let player = session.current_player();
            (
                format!("Current Player: {}", names.get(player)),
                player_color(player),
            )
        }
        GameStatus::Won(player) => (
            format!("Game Over  |  {} won", names.get(player)),
            player_color(player),
        ),
        GameStatus::Tied => ("Game Over  |  Tie".to_string(), Color::White),
    };

    let header = Paragraph::new(format!("{status}  |  {}", session.dimensions()))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_scores(frame: &mut Frame, session: &GameSession, names: &PlayerNames, area: Rect) {
    let scores = session.scores();
    let mut spans = Vec::new();
    for player in [Player::One, Player::Two] {
        if player == Player::Two {
            spans.push(Span::raw("     "));
        }
        spans.push(Span::styled(
            format!("{}: ", names.get(player)),
            Style::default().fg(player_color(player)),
        ));
        spans.push(Span::styled(
            scores.get(player).to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    }

    let widget = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Scores"));

    frame.render_widget(widget, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    winning_run: Option<&WinningRun>,
    selected_column: usize,
    area: Rect,
) {
    let columns = board.columns();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..columns {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(columns * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    // Top row first; row 0 is the bottom of each column
    for row in (0..board.rows()).rev() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..columns {
            let (symbol, color) = match board.cell(col, row) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::PlayerOne => (" ● ", player_color(Player::One)),
                Cell::PlayerTwo => (" ● ", player_color(Player::Two)),
            };
            let mut style = Style::default().fg(color);
            if winning_run.is_some_and(|run| run.contains(col, row)) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..columns {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line1 = Line::from("←/→: Move  |  Enter: Drop  |  1-9: Drop in column  |  Q: Quit");
    let line2 = Line::from("R: New round  |  G: Grid size  |  X: Clear scores");

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

fn render_grid_editor(frame: &mut Frame, editor: &GridEditor, area: Rect) {
    let popup = centered_rect(40, 9, area);

    let mut lines = Vec::new();
    for field in GridField::ALL {
        let text = format!("{:>16}:  < {:>2} >", field.label(), editor.value(field));
        let style = if field == editor.selected() {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(text, style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from("↑/↓: Field  ←/→: Adjust"));
    lines.push(Line::from("Enter: Apply  Esc: Cancel"));

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Grid"));

    frame.render_widget(Clear, popup);
    frame.render_widget(widget, popup);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Dimensions;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(session: &GameSession, editor: Option<&GridEditor>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|f| render(f, session, &PlayerNames::default(), 0, &None, editor))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_status_and_scores() {
        let session = GameSession::default();
        let text = screen(&session, None);
        assert!(text.contains("Current Player: Player 1"));
        assert!(text.contains("7x6 connect 4"));
        assert!(text.contains("Player 1: 0"));
        assert!(text.contains("Player 2: 0"));
    }

    #[test]
    fn test_renders_winner() {
        let mut session = GameSession::new(Dimensions::new(5, 5, 2).unwrap());
        session.request_move(0);
        session.request_move(0);
        session.request_move(1);
        let text = screen(&session, None);
        assert!(text.contains("Player 1 won"));
        assert!(text.contains("Player 1: 1"));
    }

    #[test]
    fn test_renders_grid_editor() {
        let session = GameSession::default();
        let editor = GridEditor::new(session.dimensions());
        let text = screen(&session, Some(&editor));
        assert!(text.contains("Connecting tiles"));
    }
}
