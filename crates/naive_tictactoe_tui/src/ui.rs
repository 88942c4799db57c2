//! Stateless UI rendering for the board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::surface::TerminalSurface;
use naive_tictactoe::{Highlight, Position};

const ROWS: [[Position; 3]; 3] = [
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
];

/// Renders the game board with cursor highlight.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new("Naive Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app.surface(), app.cursor());

    let status_text = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);
}

fn draw_board(frame: &mut Frame, area: Rect, surface: &TerminalSurface, cursor: Position) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (i, row) in ROWS.iter().enumerate() {
        draw_row(frame, rows[i * 2], surface, cursor, row);
        if i < 2 {
            draw_separator(frame, rows[i * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    surface: &TerminalSurface,
    cursor: Position,
    positions: &[Position; 3],
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    draw_cell(frame, cols[0], surface, cursor, positions[0]);
    draw_separator_vertical(frame, cols[1]);
    draw_cell(frame, cols[2], surface, cursor, positions[1]);
    draw_separator_vertical(frame, cols[3]);
    draw_cell(frame, cols[4], surface, cursor, positions[2]);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    surface: &TerminalSurface,
    cursor: Position,
    pos: Position,
) {
    let tile = surface.tile(pos);
    let marker = tile.and_then(|t| t.marker.as_deref());

    let symbol = match marker {
        Some(marker) => format!(" {} ", marker),
        None => format!(" {} ", pos.to_index() + 1),
    };
    let base_style = match (marker, tile.and_then(|t| t.highlight)) {
        (_, Some(Highlight::Won)) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        (_, Some(Highlight::Lost)) => Style::default()
            .fg(Color::Black)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD),
        (Some(_), None) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        (None, None) => Style::default().fg(Color::DarkGray),
    };

    let style = if pos == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("──────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
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
