//! Stateless UI rendering for the timed game.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use timed_tictactoe::{Board, Player, RoundPhase, Square, Theme};

use super::app::{App, Screen};

const CELL_WIDTH: u16 = 5;

/// Colors for one theme.
struct Palette {
    background: Color,
    text: Color,
    accent: Color,
    muted: Color,
    cursor: Color,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::White,
                text: Color::Black,
                accent: Color::Blue,
                muted: Color::Gray,
                cursor: Color::LightYellow,
            },
            Theme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                accent: Color::Cyan,
                muted: Color::DarkGray,
                cursor: Color::DarkGray,
            },
        }
    }

    fn mark(&self, player: Player) -> Color {
        match player {
            Player::X => Color::Blue,
            Player::O => Color::Red,
        }
    }
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.theme());
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(2), // Score and countdown
            Constraint::Min(3),    // Board
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    match app.screen() {
        Screen::Menu => draw_menu(frame, chunks[2], &palette),
        Screen::Playing => {
            draw_header(frame, chunks[1], app);
            draw_board(frame, chunks[2], app, &palette);
        }
    }

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(palette.text))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" theme: {} ('t') | quit: 'q' ", app.theme())),
        );
    frame.render_widget(status, chunks[3]);

    if app.showing_result() {
        draw_result_dialog(frame, area, app, &palette);
    }
}

fn draw_menu(frame: &mut Frame, area: Rect, palette: &Palette) {
    let prompt = Paragraph::new(vec![
        Line::from(Span::styled(
            "[ Start Game ]",
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("press 's'", Style::default().fg(palette.muted))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(prompt, center_rect(area, 24, 2));
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let snapshot = app.snapshot();
    let score = snapshot.score();
    let turn = match snapshot.phase() {
        RoundPhase::Active => format!("Turn: {}", snapshot.current_player()),
        RoundPhase::Ended(_) => "Round over".to_string(),
        RoundPhase::NotStarted => "Not started".to_string(),
    };

    let header = Paragraph::new(vec![
        Line::from(format!("Score - X: {} | O: {}", score.x, score.o)),
        Line::from(format!("{} | Time left: {} s", turn, snapshot.countdown())),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let board = app.snapshot().board();
    let n = board.dimension() as u16;
    let width = n * CELL_WIDTH + n.saturating_sub(1);
    let height = (n * 2).saturating_sub(1);
    let board_area = center_rect(area, width, height);

    let mut row_constraints = Vec::with_capacity(board.dimension() * 2);
    for row in 0..board.dimension() {
        if row > 0 {
            row_constraints.push(Constraint::Length(1));
        }
        row_constraints.push(Constraint::Length(1));
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(board_area);

    for row in 0..board.dimension() {
        if row > 0 {
            draw_separator(frame, rows[row * 2 - 1], width, palette);
        }
        draw_row(frame, rows[row * 2], board, row, app.cursor(), palette);
    }
}

fn draw_row(frame: &mut Frame, area: Rect, board: &Board, row: usize, cursor: usize, palette: &Palette) {
    let n = board.dimension();
    let mut spans = Vec::with_capacity(n * 2);
    for col in 0..n {
        if col > 0 {
            spans.push(Span::styled("│", Style::default().fg(palette.muted)));
        }
        let index = row * n + col;
        let square = board.at(row, col);
        let base_style = match square {
            Square::Empty => Style::default().fg(palette.muted),
            Square::Occupied(player) => Style::default()
                .fg(palette.mark(player))
                .add_modifier(Modifier::BOLD),
        };
        let style = if index == cursor {
            base_style.bg(palette.cursor)
        } else {
            base_style
        };
        spans.push(Span::styled(format!("  {}  ", square.symbol()), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_separator(frame: &mut Frame, area: Rect, width: u16, palette: &Palette) {
    let sep = Paragraph::new("─".repeat(width as usize)).style(Style::default().fg(palette.muted));
    frame.render_widget(sep, area);
}

fn draw_result_dialog(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let Some(result) = app.snapshot().round_result() else {
        return;
    };
    let dialog_area = center_rect(area, 36, 6);
    frame.render_widget(Clear, dialog_area);

    let dialog = Paragraph::new(vec![
        Line::from(Span::styled(
            result.to_string(),
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("'r' Restart Round | 'x' Stop Game"),
    ])
    .alignment(Alignment::Center)
    .style(Style::default().bg(palette.background).fg(palette.text))
    .block(Block::default().borders(Borders::ALL).title(" Round Result "));
    frame.render_widget(dialog, dialog_area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
