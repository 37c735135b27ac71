//! Form domain layer
//!
//! Field value objects, the login form and its validation rules.

mod field;
mod form_state;
mod validation;

pub use field::{FieldValue, FormField};
pub use form_state::{
    Form, LoginForm, COUNTRY_FIELD, EMAIL_FIELD, LOGIN_BUTTON, PASSWORD_FIELD, TERMS_FIELD,
};
pub use validation::ValidationError;
