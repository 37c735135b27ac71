//! Profile screen rendering

use crate::state::NavigationPayload;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// The information lines shown for a payload, without the heading
pub fn profile_lines(payload: &NavigationPayload) -> [String; 3] {
    [
        format!("Email: {}", payload.email),
        format!("Country: {}", payload.selected_country),
        format!(
            "Accept Terms: {}",
            if payload.terms_accepted { "Yes" } else { "No" }
        ),
    ]
}

/// Rows a line of `width` columns takes once wrapped. A wrapped line may also
/// break before its first long word, hence the extra row.
fn wrapped_rows(width: usize, inner_width: usize) -> usize {
    if width <= inner_width {
        1
    } else {
        width.div_ceil(inner_width) + 1
    }
}

/// Draw the profile screen
pub fn draw(frame: &mut Frame, area: Rect, payload: &NavigationPayload) {
    let mut content = vec![
        Line::styled(
            "Profile Information:",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];
    content.extend(profile_lines(payload).into_iter().map(Line::from));

    let inner_width = area.width.saturating_sub(2).max(1) as usize;
    let rows: usize = content
        .iter()
        .map(|line| wrapped_rows(line.width(), inner_width))
        .sum();
    let height = (rows as u16).saturating_add(2);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let block = Block::default()
        .title(" Profile ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(block);

    frame.render_widget(paragraph, chunks[1]);
}
