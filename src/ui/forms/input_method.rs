//! Manual / OCR tab header

use crate::platform::INPUT_METHOD_SHORTCUT;
use crate::state::InputMethod;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Tabs,
    Frame,
};

const METHODS: [InputMethod; 2] = [InputMethod::Manual, InputMethod::Ocr];

pub fn draw_input_method_tabs(frame: &mut Frame, area: Rect, current: InputMethod) {
    let titles: Vec<Line> = METHODS.iter().map(|m| Line::from(m.label())).collect();
    let selected = METHODS.iter().position(|m| *m == current).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(format!(" {INPUT_METHOD_SHORTCUT} "));

    frame.render_widget(tabs, area);
}
