//! Button component for TUI

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a boxed menu entry with its shortcut key
pub fn render_menu_button(frame: &mut Frame, area: Rect, key: &str, label: &str, is_selected: bool) {
    let accent = if is_selected {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let label_style = if is_selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let marker = if is_selected { "› " } else { "  " };
    let line = Line::from(vec![
        Span::styled(marker, Style::default().fg(accent)),
        Span::styled(format!("[{key}] "), Style::default().fg(accent)),
        Span::styled(label, label_style),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Stack buttons vertically, centred in `area`
pub fn button_column(area: Rect, count: usize, width: u16) -> Vec<Rect> {
    let mut constraints = vec![Constraint::Min(0)];
    constraints.extend(std::iter::repeat(Constraint::Length(BUTTON_HEIGHT)).take(count));
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    rows.iter()
        .skip(1)
        .take(count)
        .map(|row| {
            let x = row.x + row.width.saturating_sub(width) / 2;
            Rect {
                x,
                width: width.min(row.width),
                ..*row
            }
        })
        .collect()
}

/// Centred one-line hint, dimmed
pub fn hint_line(text: &str) -> Paragraph<'_> {
    Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray)))
        .alignment(Alignment::Center)
}
