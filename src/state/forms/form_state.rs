//! Login form state and submission

use super::field::FormField;
use super::validation::{validate_login, ValidationError};
use crate::navigation::Navigator;
use crate::state::{Country, NavigationPayload, View};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Focus slot indices on the login form
pub const EMAIL_FIELD: usize = 0;
pub const PASSWORD_FIELD: usize = 1;
pub const COUNTRY_FIELD: usize = 2;
pub const TERMS_FIELD: usize = 3;
pub const LOGIN_BUTTON: usize = 4;

/// Editable state of the login screen
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: FormField,
    pub password: FormField,
    pub country: FormField,
    pub terms: FormField,
    pub active_field_index: usize,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::with_country(Country::default())
    }

    /// Create an empty form with the picker preset to `country`
    pub fn with_country(country: Country) -> Self {
        Self {
            email: FormField::text("email", "Email"),
            password: FormField::secret("password", "Password"),
            country: FormField::choice("country", "Country", country),
            terms: FormField::toggle("terms", "I accept the terms and conditions"),
            active_field_index: EMAIL_FIELD,
        }
    }

    /// Returns true if the Login button currently has focus
    pub fn is_button_active(&self) -> bool {
        self.active_field_index == LOGIN_BUTTON
    }

    /// Validate the current values and snapshot them for the profile screen.
    /// The password never leaves the form.
    pub fn validate(&self) -> Result<NavigationPayload, ValidationError> {
        let email = self.email.as_text();
        validate_login(email, self.password.as_text(), self.terms.is_checked())?;

        Ok(NavigationPayload {
            email: email.to_string(),
            selected_country: self.country.as_choice().label().to_string(),
            terms_accepted: self.terms.is_checked(),
        })
    }

    /// Validate and, on success, hand the payload to the profile screen.
    /// On failure the form is left untouched and nothing is navigated.
    pub fn submit(&self, navigator: &mut dyn Navigator) -> Result<(), ValidationError> {
        match self.validate() {
            Ok(payload) => {
                tracing::info!(
                    country = %payload.selected_country,
                    "Login form accepted"
                );
                navigator.navigate(View::Profile(payload));
                Ok(())
            }
            Err(err) => {
                tracing::debug!(rule = err.rule(), "Login form rejected");
                Err(err)
            }
        }
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LoginForm {
    fn field_count(&self) -> usize {
        5 // email, password, country, terms, button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(LOGIN_BUTTON);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            EMAIL_FIELD => Some(&mut self.email),
            PASSWORD_FIELD => Some(&mut self.password),
            COUNTRY_FIELD => Some(&mut self.country),
            TERMS_FIELD => Some(&mut self.terms),
            // Button row has no FormField
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            EMAIL_FIELD => Some(&self.email),
            PASSWORD_FIELD => Some(&self.password),
            COUNTRY_FIELD => Some(&self.country),
            TERMS_FIELD => Some(&self.terms),
            _ => None,
        }
    }
}
