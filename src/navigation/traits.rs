//! Trait abstraction for screen navigation to enable mocking in tests

use crate::state::View;

/// Hands control (and any data the target needs) to another view
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    /// Switch to `view`. The transition is one-way.
    fn navigate(&mut self, view: View);
}
