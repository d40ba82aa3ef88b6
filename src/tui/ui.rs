//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph,
        canvas::{Canvas, Points},
    },
};

use super::app::App;
use super::view::TerminalView;
use crate::bridge::{DisplaySurface, RenderBridge};
use crate::celebration::Hue;
use crate::games::tictactoe::{Player, Position};

const HELP: &str = "P: two players | C: vs computer | 1-9 / arrows+Enter: move | R: restart | Q: quit";

/// Renders any running celebration, then the board, status line and help on top.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let view = app.engine().bridge();

    // The canvas resets the background of its whole area, so it goes first.
    if !app.engine().particles().is_idle() {
        draw_celebration(frame, area, app);
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(area);

    let title = Paragraph::new("Strictly Confetti - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], view, app.cursor());

    let status = Paragraph::new(view.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

/// Collects particles as solid dot discs, flipping y so it grows downward.
struct Sparks {
    height: f64,
    discs: Vec<(Color, Vec<(f64, f64)>)>,
}

impl DisplaySurface for Sparks {
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Hue, alpha: f64) {
        let (r, g, b) = color.to_rgb_faded(alpha);
        self.discs
            .push((Color::Rgb(r, g, b), disc(x, self.height - y, radius)));
    }
}

/// Every whole dot offset from (`x`, `y`) that lies within `radius`. Always
/// includes the centre.
fn disc(x: f64, y: f64, radius: f64) -> Vec<(f64, f64)> {
    let reach = radius.max(0.0).floor() as i32;
    let mut dots = Vec::new();
    for dy in -reach..=reach {
        for dx in -reach..=reach {
            let (fx, fy) = (f64::from(dx), f64::from(dy));
            if fx * fx + fy * fy <= radius * radius || (dx == 0 && dy == 0) {
                dots.push((x + fx, y + fy));
            }
        }
    }
    dots
}

fn draw_celebration(frame: &mut Frame, area: Rect, app: &App) {
    let surface = app.engine().bridge().surface_size();
    let mut sparks = Sparks {
        height: surface.height,
        discs: Vec::with_capacity(app.engine().particles().len()),
    };
    app.engine().render(&mut sparks);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, surface.width])
        .y_bounds([0.0, surface.height])
        .paint(|ctx| {
            for (color, dots) in &sparks.discs {
                ctx.draw(&Points {
                    coords: dots,
                    color: *color,
                });
            }
        });
    frame.render_widget(canvas, area);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &TerminalView, cursor: Position) {
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

    for (row, chunk) in Position::ALL.chunks(3).enumerate() {
        draw_row(frame, rows[row * 2], view, cursor, chunk);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, view: &TerminalView, cursor: Position, positions: &[Position]) {
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

    for (col, pos) in positions.iter().enumerate() {
        draw_cell(frame, cols[col * 2], view, cursor, *pos);
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &TerminalView, cursor: Position, pos: Position) {
    let index = pos.to_index();
    let label = (index + 1).to_string();

    let (symbol, base_style) = match view.cell(index) {
        None => (label.as_str(), Style::default().fg(Color::DarkGray)),
        Some(Player::X) => ("X", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Some(Player::O) => ("O", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    let style = if view.is_highlighted(index) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(format!(" {symbol} "), style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend, layout::Size};

    #[test]
    fn test_disc_is_filled() {
        let dots = disc(10.0, 10.0, 2.0);
        assert_eq!(dots.len(), 13);
        assert!(dots.contains(&(10.0, 10.0)));
        assert!(dots.contains(&(11.0, 11.0)));
        assert!(dots.iter().all(|(x, y)| (x - 10.0).powi(2) + (y - 10.0).powi(2) <= 4.0));
    }

    #[test]
    fn test_tiny_disc_keeps_centre() {
        assert_eq!(disc(3.0, 4.0, 0.5), vec![(3.0, 4.0)]);
    }

    #[test]
    fn test_winning_highlight_visible_during_celebration() {
        let config = AppConfig::default().with_seed(Some(5));
        let mut app = App::new(&config, Size::new(80, 30));
        for c in ['p', '1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(c));
        }
        assert!(!app.engine().particles().is_idle());

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).expect("Test terminal");
        terminal.draw(|frame| draw(frame, &app)).expect("Frame draws");

        let green = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .filter(|cell| cell.bg == Color::Green)
            .count();
        // Three highlighted cells, each " X " wide.
        assert_eq!(green, 9);
    }
}
