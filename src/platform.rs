//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifier for form shortcuts (Ctrl on all platforms)
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Clear-field shortcut display for form help text
pub const CLEAR_SHORTCUT: &str = "Ctrl+U";
