//! Router holding the currently displayed view

use super::traits::Navigator;
use crate::state::View;

#[derive(Debug, Default)]
pub struct Router {
    current: View,
}

impl Router {
    pub fn current(&self) -> &View {
        &self.current
    }
}

impl Navigator for Router {
    fn navigate(&mut self, view: View) {
        match &view {
            View::Profile(payload) => tracing::info!(
                from = self.current.name(),
                to = view.name(),
                email = %payload.email,
                country = %payload.selected_country,
                terms_accepted = payload.terms_accepted,
                "Navigating"
            ),
            View::Login => tracing::info!(
                from = self.current.name(),
                to = view.name(),
                "Navigating"
            ),
        }
        self.current = view;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NavigationPayload;

    fn payload() -> NavigationPayload {
        NavigationPayload {
            email: "a@b.com".to_string(),
            selected_country: "Canada".to_string(),
            terms_accepted: true,
        }
    }

    #[test]
    fn test_starts_on_login() {
        let router = Router::default();
        assert_eq!(*router.current(), View::Login);
    }

    #[test]
    fn test_navigate_replaces_view() {
        let mut router = Router::default();
        router.navigate(View::Profile(payload()));
        assert_eq!(*router.current(), View::Profile(payload()));
    }

    #[test]
    fn test_payload_is_carried_by_value() {
        let mut router = Router::default();
        let mut original = payload();
        router.navigate(View::Profile(original.clone()));
        original.email.clear();
        match router.current() {
            View::Profile(p) => assert_eq!(p.email, "a@b.com"),
            View::Login => panic!("expected profile view"),
        }
    }
}
