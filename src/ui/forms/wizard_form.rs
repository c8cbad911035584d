//! Procedure wizard rendering: progress bar, step header and the step's fields

use super::field_renderer::draw_help_text;
use super::{draw_field_stack, field_hints, form_block};
use crate::platform::SAVE_SHORTCUT;
use crate::state::{FormKind, ProcedureWizard};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

pub fn draw_wizard(frame: &mut Frame, area: Rect, wizard: &ProcedureWizard) {
    let block = form_block(FormKind::ProcedureWizard.title());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Step header
            Constraint::Length(1), // Progress
            Constraint::Length(1), // Spacer
            Constraint::Min(3),    // Fields
            Constraint::Length(1), // Navigation hints
        ])
        .split(inner);

    let header = Line::from(vec![
        Span::styled(
            format!("Étape {} sur {}", wizard.current_step, wizard.total_steps()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  "),
        Span::styled(
            wizard.step_title(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let progress = wizard.progress().clamp(0.0, 1.0);
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
            .ratio(progress)
            .label(format!("{:.0}%", progress * 100.0)),
        chunks[1],
    );

    draw_field_stack(frame, chunks[3], wizard, None);

    let mut hints = field_hints(wizard);
    if !wizard.is_first_step() {
        hints.push(("PgPréc", "précédent"));
    }
    if wizard.is_final_step() {
        hints.push((SAVE_SHORTCUT, "enregistrer"));
    } else {
        hints.push(("PgSuiv", "suivant"));
    }
    draw_help_text(frame, chunks[4], &hints);
}
