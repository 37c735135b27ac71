//! Form field value objects

use crate::state::Country;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Text that is never echoed back to the screen
    Secret(String),
    Choice(Country),
    Toggle(bool),
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new masked text field
    pub fn secret(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Secret(String::new()),
        }
    }

    /// Create a new picker field with an initial selection
    pub fn choice(name: &str, label: &str, selected: Country) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Choice(selected),
        }
    }

    /// Create a new checkbox field, initially unchecked
    pub fn toggle(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Toggle(false),
        }
    }

    /// Get the text value (returns empty string for non-text fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Secret(s) => s,
            FieldValue::Choice(_) | FieldValue::Toggle(_) => "",
        }
    }

    /// Get the selected country (falls back to the default for non-choice fields)
    pub fn as_choice(&self) -> Country {
        match &self.value {
            FieldValue::Choice(c) => *c,
            _ => Country::default(),
        }
    }

    /// Get the checkbox state (returns false for non-toggle fields)
    pub fn is_checked(&self) -> bool {
        matches!(self.value, FieldValue::Toggle(true))
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Secret(s) => s.push(c),
            // Pickers and checkboxes don't take typed input
            FieldValue::Choice(_) | FieldValue::Toggle(_) => {}
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) | FieldValue::Secret(s) = &mut self.value {
            s.pop();
        }
    }

    /// Clear a text or secret field. Pickers and checkboxes keep their value.
    pub fn clear(&mut self) {
        if let FieldValue::Text(s) | FieldValue::Secret(s) = &mut self.value {
            tracing::debug!(field = %self.name, "Cleared field");
            s.clear();
        }
    }

    /// Select the next picker option (wraps around)
    pub fn next_choice(&mut self) {
        if let FieldValue::Choice(c) = &mut self.value {
            *c = c.next();
        }
    }

    /// Select the previous picker option (wraps around)
    pub fn prev_choice(&mut self) {
        if let FieldValue::Choice(c) = &mut self.value {
            *c = c.prev();
        }
    }

    /// Flip a checkbox
    pub fn toggle_checked(&mut self) {
        if let FieldValue::Toggle(b) = &mut self.value {
            *b = !*b;
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Secret(s) => "•".repeat(s.chars().count()),
            FieldValue::Choice(c) => format!("‹ {} ›", c.label()),
            FieldValue::Toggle(checked) => {
                let mark = if *checked { "[x]" } else { "[ ]" };
                format!("{mark} {}", self.label)
            }
        }
    }
}
