//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{AppState, Form, View, COUNTRY_FIELD, TERMS_FIELD};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance showing an empty login form
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            state: AppState::with_country(config.initial_country()),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        tracing::debug!(view = self.state.current_view().name(), "Quit requested");
        self.quit = true;
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        // Alert dismissal comes first (modal)
        if self.state.has_alert() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_alert();
            }
            return;
        }

        match self.state.current_view() {
            View::Login => self.handle_login_key(key),
            View::Profile(_) => self.handle_profile_key(key),
        }
    }

    /// Handle keys in Login view
    fn handle_login_key(&mut self, key: KeyEvent) {
        let active = self.state.login_form.active_field();
        let on_button = self.state.login_form.is_button_active();

        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Char('s') if is_control_chord(key.modifiers) => {
                self.submit_login();
            }
            KeyCode::Tab | KeyCode::Down => self.state.login_form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.login_form.prev_field(),
            KeyCode::Enter | KeyCode::Char(' ') if on_button => self.submit_login(),
            KeyCode::Enter | KeyCode::Char(' ') if active == TERMS_FIELD => {
                self.state.login_form.terms.toggle_checked();
            }
            KeyCode::Right | KeyCode::Char(' ') if active == COUNTRY_FIELD => {
                self.state.login_form.country.next_choice();
            }
            KeyCode::Left if active == COUNTRY_FIELD => {
                self.state.login_form.country.prev_choice();
            }
            KeyCode::Enter => self.state.login_form.next_field(),
            KeyCode::Char('u') if is_control_chord(key.modifiers) => {
                if let Some(field) = self.state.login_form.get_active_field_mut() {
                    field.clear();
                }
            }
            KeyCode::Char(c) if !is_control_chord(key.modifiers) => {
                if let Some(field) = self.state.login_form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.login_form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
    }

    /// Handle keys in Profile view. There is no way back to the form.
    fn handle_profile_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
            self.quit();
        }
    }

    /// Validate the login form and either navigate to the profile or raise an alert
    pub fn submit_login(&mut self) {
        let AppState {
            router, login_form, ..
        } = &mut self.state;

        if let Err(err) = login_form.submit(router) {
            tracing::warn!(rule = err.rule(), "Login submission rejected");
            self.state.push_alert(err.alert());
        }
    }
}

/// Ctrl held without Alt. Windows reports AltGr characters (`@` on many
/// European layouts) as Ctrl+Alt, and those are typed input.
fn is_control_chord(modifiers: KeyModifiers) -> bool {
    modifiers.contains(crate::platform::SHORTCUT_MODIFIER)
        && !modifiers.contains(KeyModifiers::ALT)
}
