//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod profile;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    match app.state.current_view() {
        View::Login => forms::draw_login(frame, main_area, &app.state.login_form),
        View::Profile(payload) => profile::draw(frame, main_area, payload),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Alerts render last so they sit on top
    if let Some(alert) = app.state.current_alert() {
        components::render_alert_dialog(frame, alert);
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::screen_text;
    use super::*;
    use crate::config::TuiConfig;
    use crate::state::ValidationError;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        screen_text(terminal.backend().buffer())
    }

    #[test]
    fn test_login_screen_with_status_bar() {
        let app = App::new(&TuiConfig::default());
        let text = render(&app);
        assert!(text.contains("Sign In"));
        assert!(text.contains(" Login "));
        assert!(text.contains("Ctrl+C: quit"));
    }

    #[test]
    fn test_alert_overlays_login() {
        let mut app = App::new(&TuiConfig::default());
        app.state.push_alert(ValidationError::InvalidEmail.alert());
        let text = render(&app);
        assert!(text.contains("Error"));
        assert!(text.contains("Please enter a valid email address."));
        assert!(text.contains("to dismiss"));
    }

    #[test]
    fn test_profile_after_submit() {
        let mut app = App::new(&TuiConfig::default());
        let form = &mut app.state.login_form;
        for c in "a@b.com".chars() {
            form.email.push_char(c);
        }
        form.password.push_char('x');
        form.terms.toggle_checked();
        app.submit_login();

        let text = render(&app);
        assert!(text.contains("Profile Information:"));
        assert!(text.contains("Email: a@b.com"));
        assert!(text.contains("Country: USA"));
        assert!(text.contains("Accept Terms: Yes"));
        assert!(!text.contains("Sign In"));
    }
}
