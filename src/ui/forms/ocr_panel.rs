//! OCR input panel: source file path and the raw recognised text

use super::field_renderer::draw_help_text;
use crate::platform::EXTRACT_SHORTCUT;
use crate::state::{OcrFocus, OcrPanel};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn focus_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn draw_ocr_panel(frame: &mut Frame, area: Rect, panel: &OcrPanel) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Source path
            Constraint::Min(4),    // Raw text
            Constraint::Length(1), // Extraction state
            Constraint::Length(1), // Hints
        ])
        .split(area);

    let path_active = panel.focus == OcrFocus::Path;
    let cursor = |active: bool| Span::styled(if active { "▌" } else { "" }, focus_style(true));

    let path_line = if panel.source_path.is_empty() && !path_active {
        Line::from(Span::styled(
            "Chemin du fichier texte produit par l'OCR",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(vec![Span::raw(panel.source_path.as_str()), cursor(path_active)])
    };
    frame.render_widget(
        Paragraph::new(path_line).block(
            Block::default()
                .title(" Fichier source ")
                .borders(Borders::ALL)
                .border_style(focus_style(path_active)),
        ),
        chunks[0],
    );

    let mut text_lines: Vec<Line> = panel
        .raw_text
        .split('\n')
        .map(|l| Line::from(l.to_string()))
        .collect();
    if let Some(last) = text_lines.last_mut() {
        last.spans.push(cursor(!path_active));
    }
    // Keep the end of long texts in view
    let inner_height = chunks[1].height.saturating_sub(2) as usize;
    let skip = text_lines.len().saturating_sub(inner_height.max(1));
    frame.render_widget(
        Paragraph::new(text_lines.split_off(skip))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(" Texte reconnu ")
                    .borders(Borders::ALL)
                    .border_style(focus_style(!path_active)),
            ),
        chunks[1],
    );

    let state = if panel.pending {
        Span::styled("Extraction en cours…", Style::default().fg(Color::Yellow))
    } else if panel.text().is_some() {
        Span::styled(
            format!("Prêt : {EXTRACT_SHORTCUT} pour remplir le formulaire"),
            Style::default().fg(Color::Green),
        )
    } else {
        Span::styled("Aucun texte", Style::default().fg(Color::DarkGray))
    };
    frame.render_widget(Paragraph::new(Line::from(state)), chunks[2]);

    draw_help_text(
        frame,
        chunks[3],
        &[
            ("Tab", "basculer chemin/texte"),
            ("Ctrl+L", "charger le fichier"),
            (EXTRACT_SHORTCUT, "extraire"),
        ],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(panel: &OcrPanel) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 14)).unwrap();
        terminal
            .draw(|frame| draw_ocr_panel(frame, frame.area(), panel))
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
    fn test_pending_extraction_is_shown() {
        let panel = OcrPanel {
            raw_text: "Loi n° 90-11".into(),
            pending: true,
            ..Default::default()
        };
        let screen = render(&panel);
        assert!(screen.contains("Extraction en cours"));
        assert!(screen.contains("Loi n° 90-11"));
    }

    #[test]
    fn test_empty_panel() {
        let screen = render(&OcrPanel::default());
        assert!(screen.contains("Aucun texte"));
        assert!(screen.contains("Fichier source"));
    }
}
