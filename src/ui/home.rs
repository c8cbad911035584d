//! Home menu: choose which form to fill in

use super::components::{button_column, hint_line, render_menu_button};
use crate::app::App;
use crate::state::HOME_ITEMS;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

const MENU_WIDTH: u16 = 48;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Heading
            Constraint::Min(0),    // Menu
            Constraint::Length(1), // Hint
        ])
        .margin(1)
        .split(area);

    frame.render_widget(
        Paragraph::new("Que souhaitez-vous ajouter ?")
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD).fg(Color::White)),
        chunks[0],
    );

    let rows = button_column(chunks[1], HOME_ITEMS.len(), MENU_WIDTH);
    for (idx, ((_, label), row)) in HOME_ITEMS.iter().zip(rows).enumerate() {
        let key = (idx + 1).to_string();
        render_menu_button(frame, row, &key, label, idx == app.state.home_index);
    }

    frame.render_widget(
        hint_line("↑/↓ ou j/k : naviguer   Entrée : ouvrir   1-3 : accès direct"),
        chunks[2],
    );
}
