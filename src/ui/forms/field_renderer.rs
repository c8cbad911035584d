//! Field rendering utilities for forms

use crate::state::{FieldDescriptor, FieldKind, FieldValue, EMPTY_LIST_PLACEHOLDER};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const SINGLE_LINE_HEIGHT: u16 = 3;
const MAX_BLOCK_HEIGHT: u16 = 8;
const CURSOR: &str = "▌";

/// Rows needed to draw `field` holding `value`
pub fn field_height(field: &FieldDescriptor, value: &FieldValue) -> u16 {
    let inner = match field.kind {
        FieldKind::Textarea => value.as_text().lines().count().max(2),
        FieldKind::DynamicList => value.as_list().len().max(1),
        _ => 1,
    };
    u16::try_from(inner)
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(MAX_BLOCK_HEIGHT)
}

fn accent(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn dim() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

fn cursor_span(is_active: bool) -> Span<'static> {
    Span::styled(if is_active { CURSOR } else { "" }, accent(true))
}

/// Bordered box titled with the field label; required fields get a star
fn field_block(field: &FieldDescriptor, is_active: bool) -> Block<'static> {
    let mut title = vec![Span::raw(format!(" {}", field.label))];
    if field.required {
        title.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }
    if field.kind == FieldKind::File {
        title.push(Span::styled(" (chemin)", dim()));
    }
    title.push(Span::raw(" "));

    Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(accent(is_active))
}

fn empty_text(field: &FieldDescriptor, is_active: bool) -> Span<'static> {
    match (field.placeholder, is_active) {
        (Some(placeholder), _) => Span::styled(placeholder, dim()),
        (None, false) => Span::styled("(vide)", dim()),
        (None, true) => Span::raw(""),
    }
}

/// Draw one templated field.
///
/// `list_cursor` is the focused entry when the field is an active list.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FieldDescriptor,
    value: &FieldValue,
    is_active: bool,
    list_cursor: usize,
) {
    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let lines: Vec<Line> = match field.kind {
        FieldKind::Toggle => {
            let (mark, label) = if value.as_bool() {
                ("[x]", "Oui")
            } else {
                ("[ ]", "Non")
            };
            vec![Line::from(vec![
                Span::styled(mark, accent(is_active)),
                Span::styled(format!(" {label}"), text_style),
            ])]
        }
        FieldKind::Select => {
            let current = value.as_text();
            let shown = if current.is_empty() {
                empty_text(field, is_active)
            } else {
                Span::styled(current.to_string(), text_style)
            };
            let mut spans = vec![Span::styled("◀ ", accent(is_active)), shown];
            spans.push(Span::styled(" ▶", accent(is_active)));
            if is_active {
                spans.push(Span::styled(
                    format!("  ({} choix)", field.options.len()),
                    dim(),
                ));
            }
            vec![Line::from(spans)]
        }
        FieldKind::DynamicList => {
            let items = value.as_list();
            if items.is_empty() {
                vec![Line::from(Span::styled(EMPTY_LIST_PLACEHOLDER, dim()))]
            } else {
                let visible = (MAX_BLOCK_HEIGHT - 2) as usize;
                let first = list_cursor.saturating_sub(visible - 1);
                items
                    .iter()
                    .enumerate()
                    .skip(first)
                    .take(visible)
                    .map(|(i, item)| {
                        let focused = is_active && i == list_cursor;
                        let marker = if focused { "› " } else { "  " };
                        let mut spans = vec![
                            Span::styled(marker, accent(focused)),
                            Span::styled(format!("{}. ", i + 1), dim()),
                        ];
                        if item.is_empty() && !focused {
                            spans.push(empty_text(field, false));
                        } else {
                            spans.push(Span::styled(item.clone(), text_style));
                        }
                        spans.push(cursor_span(focused));
                        Line::from(spans)
                    })
                    .collect()
            }
        }
        FieldKind::Textarea => {
            let text = value.as_text();
            if text.is_empty() {
                vec![Line::from(vec![empty_text(field, is_active), cursor_span(is_active)])]
            } else {
                let mut lines: Vec<Line> = text
                    .split('\n')
                    .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
                    .collect();
                if let Some(last) = lines.last_mut() {
                    last.spans.push(cursor_span(is_active));
                }
                lines
            }
        }
        FieldKind::Text | FieldKind::Date | FieldKind::Number | FieldKind::File => {
            let text = value.display_value();
            let shown = if text.is_empty() {
                empty_text(field, is_active)
            } else {
                Span::styled(text, text_style)
            };
            let mut spans = vec![shown, cursor_span(is_active)];
            if field.kind == FieldKind::Date && is_active {
                spans.push(Span::styled("  AAAA-MM-JJ", dim()));
            }
            vec![Line::from(spans)]
        }
    };

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(field_block(field, is_active)),
        area,
    );
}

/// Legal text type selector row, cycling through the registry
pub fn draw_type_selector(frame: &mut Frame, area: Rect, current: Option<&str>, is_active: bool) {
    let shown = match current {
        Some(name) => Span::styled(name.to_string(), Style::default().fg(Color::White)),
        None => Span::styled("Sélectionner un type de texte", dim()),
    };
    let line = Line::from(vec![
        Span::styled("◀ ", accent(is_active)),
        shown,
        Span::styled(" ▶", accent(is_active)),
    ]);
    let block = Block::default()
        .title(Line::from(vec![
            Span::raw(" Type de texte juridique"),
            Span::styled(" *", Style::default().fg(Color::Red)),
            Span::raw(" "),
        ]))
        .borders(Borders::ALL)
        .border_style(accent(is_active));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Range `[start, end)` of rows to draw so the active row fits in `available`
pub fn visible_window(heights: &[u16], active: usize, available: u16) -> (usize, usize) {
    if heights.is_empty() {
        return (0, 0);
    }
    let active = active.min(heights.len() - 1);
    let sum = |range: std::ops::RangeInclusive<usize>| -> u32 {
        heights[range].iter().map(|h| u32::from(*h)).sum()
    };

    let mut start = 0;
    while start < active && sum(start..=active) > u32::from(available) {
        start += 1;
    }

    let mut end = start;
    let mut used = 0u32;
    while end < heights.len() {
        let next = used + u32::from(heights[end]);
        if next > u32::from(available) && end > active {
            break;
        }
        used = next;
        end += 1;
    }
    (start, end)
}

/// Draw a row of key hints below a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        spans.push(Span::styled(key.to_string(), Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            format!(": {action}  "),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    const TITLE: FieldDescriptor = FieldDescriptor::text("title", "Titre").required();
    const ARTICLES: FieldDescriptor = FieldDescriptor::list("articles", "Articles");
    const SUBJECT: FieldDescriptor = FieldDescriptor::textarea("subject", "Sujet");

    fn render(field: &FieldDescriptor, value: &FieldValue, active: bool) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 8)).unwrap();
        terminal
            .draw(|frame| draw_field(frame, frame.area(), field, value, active, 0))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    mod heights {
        use super::*;

        #[test]
        fn test_single_line_kinds() {
            assert_eq!(field_height(&TITLE, &FieldValue::from("x")), SINGLE_LINE_HEIGHT);
        }

        #[test]
        fn test_list_grows_with_entries_up_to_cap() {
            assert_eq!(field_height(&ARTICLES, &FieldValue::List(vec![])), 3);
            let many = FieldValue::List(vec![String::new(); 20]);
            assert_eq!(field_height(&ARTICLES, &many), MAX_BLOCK_HEIGHT);
        }

        #[test]
        fn test_huge_inputs_stay_capped() {
            let entries = FieldValue::List(vec![String::new(); 70_000]);
            assert_eq!(field_height(&ARTICLES, &entries), MAX_BLOCK_HEIGHT);
            let text = FieldValue::from("x\n".repeat(70_000).as_str());
            assert_eq!(field_height(&SUBJECT, &text), MAX_BLOCK_HEIGHT);
        }

        #[test]
        fn test_textarea_has_room_for_two_lines() {
            assert_eq!(field_height(&SUBJECT, &FieldValue::from("")), 4);
            assert_eq!(field_height(&SUBJECT, &FieldValue::from("a\nb\nc")), 5);
        }
    }

    mod rendering {
        use super::*;

        #[test]
        fn test_required_label_is_starred() {
            let screen = render(&TITLE, &FieldValue::from("Loi"), false);
            assert!(screen.contains("Titre *"));
            assert!(screen.contains("Loi"));
        }

        #[test]
        fn test_empty_list_shows_placeholder() {
            let screen = render(&ARTICLES, &FieldValue::List(vec![]), true);
            assert!(screen.contains("Aucun élément ajouté"));
        }

        #[test]
        fn test_list_entries_are_numbered() {
            let value = FieldValue::List(vec!["Premier".into(), "Second".into()]);
            let screen = render(&ARTICLES, &value, true);
            assert!(screen.contains("1. Premier"));
            assert!(screen.contains("2. Second"));
        }

        #[test]
        fn test_toggle_shows_state() {
            const APPEAL: FieldDescriptor = FieldDescriptor::toggle("hasAppeal", "Recours");
            assert!(render(&APPEAL, &FieldValue::Bool(true), false).contains("[x] Oui"));
            assert!(render(&APPEAL, &FieldValue::Bool(false), false).contains("[ ] Non"));
        }
    }

    mod scrolling {
        use super::*;

        #[test]
        fn test_everything_fits() {
            assert_eq!(visible_window(&[3, 3, 3], 2, 20), (0, 3));
        }

        #[test]
        fn test_scrolls_to_keep_active_row() {
            let heights = [3, 3, 3, 3, 3];
            let (start, end) = visible_window(&heights, 4, 9);
            assert_eq!((start, end), (2, 5));
        }

        #[test]
        fn test_first_row_stays_when_active_is_top() {
            let (start, end) = visible_window(&[3, 8, 3, 3], 0, 10);
            assert_eq!(start, 0);
            assert_eq!(end, 1);
        }

        #[test]
        fn test_empty_rows() {
            assert_eq!(visible_window(&[], 0, 10), (0, 0));
        }
    }
}
