//! Application state definitions

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::forms::LoginForm;
use crate::navigation::Router;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Login,
    /// Profile screen; it cannot exist without the values handed to it
    Profile(NavigationPayload),
}

impl View {
    /// Route name used in logs and the status bar
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Profile(_) => "Profile",
        }
    }
}

/// Countries offered by the login picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Country {
    #[default]
    #[serde(rename = "USA")]
    Usa,
    Canada,
    #[serde(rename = "UK")]
    Uk,
    Australia,
}

impl Country {
    pub const ALL: [Country; 4] = [Self::Usa, Self::Canada, Self::Uk, Self::Australia];

    pub fn next(&self) -> Self {
        match self {
            Self::Usa => Self::Canada,
            Self::Canada => Self::Uk,
            Self::Uk => Self::Australia,
            Self::Australia => Self::Usa,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Usa => Self::Australia,
            Self::Canada => Self::Usa,
            Self::Uk => Self::Canada,
            Self::Australia => Self::Uk,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Usa => "USA",
            Self::Canada => "Canada",
            Self::Uk => "UK",
            Self::Australia => "Australia",
        }
    }
}

/// Validated login values handed to the profile screen. Never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationPayload {
    pub email: String,
    pub selected_country: String,
    pub terms_accepted: bool,
}

/// A modal notification with a title and a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub router: Router,

    // Login screen
    pub login_form: LoginForm,

    // Modal alerts, oldest first
    pub alerts: VecDeque<Alert>,
}

impl AppState {
    /// Create state for a fresh login screen with the picker preset to `country`
    pub fn with_country(country: Country) -> Self {
        Self {
            login_form: LoginForm::with_country(country),
            ..Default::default()
        }
    }

    pub fn current_view(&self) -> &View {
        self.router.current()
    }

    pub fn push_alert(&mut self, alert: Alert) {
        self.alerts.push_back(alert);
    }

    pub fn has_alert(&self) -> bool {
        !self.alerts.is_empty()
    }

    /// The alert currently on screen
    pub fn current_alert(&self) -> Option<&Alert> {
        self.alerts.front()
    }

    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }
}
