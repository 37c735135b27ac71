//! Login form rendering

use super::field_renderer::{draw_field, draw_help_text};
use crate::state::{
    Form, LoginForm, COUNTRY_FIELD, EMAIL_FIELD, PASSWORD_FIELD, TERMS_FIELD,
};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Widest the form grows on large terminals
const FORM_MAX_WIDTH: u16 = 60;

/// Draw the login form
pub fn draw_login(frame: &mut Frame, area: Rect, form: &LoginForm) {
    let width = area.width.min(FORM_MAX_WIDTH);
    let form_area = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Top padding (flex)
            Constraint::Length(3),             // Email
            Constraint::Length(3),             // Password
            Constraint::Length(3),             // Country
            Constraint::Length(3),             // Terms
            Constraint::Length(BUTTON_HEIGHT), // Login
            Constraint::Length(2),             // Help text
            Constraint::Min(0),                // Bottom padding (flex)
        ])
        .margin(1)
        .split(form_area);

    let block = Block::default()
        .title(" Sign In ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, form_area);

    let active = form.active_field();
    for (slot, index) in [EMAIL_FIELD, PASSWORD_FIELD, COUNTRY_FIELD, TERMS_FIELD]
        .into_iter()
        .enumerate()
    {
        if let Some(field) = form.get_field(index) {
            draw_field(frame, chunks[slot + 1], field, active == index);
        }
    }

    render_button(frame, chunks[5], "Login", form.is_button_active());

    let help: &[(&str, &str)] = match active {
        COUNTRY_FIELD => &[("←/→", "change"), ("Tab", "next field"), ("Esc", "quit")],
        TERMS_FIELD => &[("Space", "toggle"), ("Tab", "next field"), ("Esc", "quit")],
        _ if form.is_button_active() => &[("Enter", "login"), ("Tab", "next field"), ("Esc", "quit")],
        _ => &[
            ("Tab", "next"),
            (crate::platform::CLEAR_SHORTCUT, "clear"),
            (crate::platform::SUBMIT_SHORTCUT, "login"),
            ("Esc", "quit"),
        ],
    };
    draw_help_text(frame, chunks[6], help);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Country;
    use crate::ui::test_support::screen_text;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn render(form: &LoginForm) -> Buffer {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_login(frame, frame.area(), form))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_renders_all_fields() {
        let text = screen_text(&render(&LoginForm::new()));
        assert!(text.contains("Email"));
        assert!(text.contains("Password"));
        assert!(text.contains("Country"));
        assert!(text.contains("USA"));
        assert!(text.contains("[ ] I accept the terms and conditions"));
        assert!(text.contains("Login"));
    }

    #[test]
    fn test_password_is_never_drawn() {
        let mut form = LoginForm::with_country(Country::Uk);
        for c in "hunter2".chars() {
            form.password.push_char(c);
        }
        let text = screen_text(&render(&form));
        assert!(!text.contains("hunter2"));
        assert!(text.contains("•••••••"));
        assert!(text.contains("UK"));
    }

    #[test]
    fn test_checked_terms_are_drawn() {
        let mut form = LoginForm::new();
        form.terms.toggle_checked();
        let text = screen_text(&render(&form));
        assert!(text.contains("[x] I accept the terms and conditions"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let backend = TestBackend::new(10, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        let form = LoginForm::new();
        terminal
            .draw(|frame| draw_login(frame, frame.area(), &form))
            .unwrap();
    }
}
