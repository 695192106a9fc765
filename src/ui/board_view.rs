use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::game::{Cursor, GridBuffer};
use crate::session::{AnimationMode, BoardView, SessionState};

const CELL: &str = "\u{2588}\u{2588}";

pub fn render(frame: &mut Frame, view: &BoardView<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(3),    // Board
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, view, chunks[0]);
    render_board(frame, view.grid, view.cursor, chunks[1]);
    render_controls(frame, view.state, chunks[2]);
}

fn render_header(frame: &mut Frame, view: &BoardView<'_>, area: Rect) {
    let color = match view.state {
        SessionState::Editing => Color::Yellow,
        SessionState::Animating(_) => Color::Green,
        SessionState::Setup | SessionState::Terminating => Color::Cyan,
    };

    let header_text = Line::from(vec![
        Span::raw(format!("Generation {}", view.generation)),
        Span::raw("  |  ["),
        Span::styled(
            view.state.name(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw("]  |  "),
        Span::raw(format!(
            "{}x{}  |  Live: {}",
            view.grid.height(),
            view.grid.width(),
            view.grid.live_count()
        )),
    ]);

    let header = Paragraph::new(header_text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Conway's Game of Life"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, grid: &GridBuffer, cursor: Option<Cursor>, area: Rect) {
    let border = Style::default().fg(Color::White);
    let border_row = || Line::from(Span::styled(CELL.repeat(grid.width() + 2), border));

    let mut lines = Vec::with_capacity(grid.height() + 2);
    lines.push(border_row());

    for (y, row) in grid.rows().enumerate() {
        let mut spans = Vec::with_capacity(row.len() + 2);
        spans.push(Span::styled(CELL, border));
        for (x, &alive) in row.iter().enumerate() {
            let color = if cursor == Some(Cursor { x, y }) {
                Color::Yellow
            } else if alive {
                Color::Green
            } else {
                Color::DarkGray
            };
            spans.push(Span::styled(CELL, Style::default().fg(color)));
        }
        spans.push(Span::styled(CELL, border));
        lines.push(Line::from(spans));
    }

    lines.push(border_row());

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn controls_text(state: SessionState) -> &'static str {
    match state {
        SessionState::Editing => {
            "\u{2190}\u{2191}\u{2193}\u{2192}: Move cursor  |  Enter: Toggle cell  |  Esc: Start animation"
        }
        SessionState::Animating(AnimationMode::Step) => {
            "\u{2192}: Next generation  |  \u{2193}: Continuous  |  Esc: Quit and save"
        }
        SessionState::Animating(AnimationMode::Continuous) => {
            "\u{2192}: Step-by-step  |  Esc: Quit and save"
        }
        SessionState::Setup | SessionState::Terminating => "",
    }
}

fn render_controls(frame: &mut Frame, state: SessionState, area: Rect) {
    let controls = Paragraph::new(Line::from(controls_text(state)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
