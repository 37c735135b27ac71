//! Field rendering utilities for forms

use crate::state::{Country, FieldValue, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = match &field.value {
        FieldValue::Toggle(_) => return draw_checkbox_field(frame, area, field, is_active),
        FieldValue::Choice(selected) => Line::from(
            Country::ALL
                .iter()
                .map(|country| {
                    if country == selected {
                        Span::styled(
                            format!("‹ {} › ", country.label()),
                            style.add_modifier(Modifier::BOLD),
                        )
                    } else {
                        Span::styled(
                            format!("  {}   ", country.label()),
                            Style::default().fg(Color::DarkGray),
                        )
                    }
                })
                .collect::<Vec<_>>(),
        ),
        FieldValue::Text(_) | FieldValue::Secret(_) => {
            let display_value = field.display_value();
            let display_str = if display_value.is_empty() && !is_active {
                "(empty)".to_string()
            } else {
                display_value
            };
            let cursor = if is_active { "▌" } else { "" };
            // Borders take two columns, the cursor one more
            let room = area.width.saturating_sub(2 + cursor.chars().count() as u16);
            let display_str = visible_tail(&display_str, room as usize);
            Line::from(vec![
                Span::styled(display_str, style),
                Span::styled(cursor, Style::default().fg(Color::Cyan)),
            ])
        }
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Draw a checkbox field. The label sits next to the box, so the border has no title.
fn draw_checkbox_field(frame: &mut Frame, area: Rect, field: &FormField, focused: bool) {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };

    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    let paragraph = Paragraph::new(field.display_value())
        .style(style)
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Draw a one-line help bar of `(key, description)` pairs
pub fn draw_help_text(frame: &mut Frame, area: Rect, entries: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(entries.len() * 2);
    for (key, description) in entries {
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::raw(format!(": {description}  ")));
    }

    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

/// The last `width` characters of `text`, so the end being typed stays in view
fn visible_tail(text: &str, width: usize) -> String {
    let len = text.chars().count();
    text.chars().skip(len.saturating_sub(width)).collect()
}
