use crate::domain::a001_contributor::events::ErrorEvent;

/// Shown when the API does not know the organization
pub const ORG_NOT_FOUND_MESSAGE: &str = "Couldnt find that organization.";

/// Which organization is listed and what went wrong last.
///
/// The input form is visible exactly when no organization is set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RootState {
    pub org_name: Option<String>,
    pub error_message: Option<String>,
    pub show_error: bool,
}

impl RootState {
    /// Start listing `org`. Blank input is ignored and `false` is returned.
    pub fn submit(&mut self, org: &str) -> bool {
        let org = org.trim();
        if org.is_empty() {
            return false;
        }
        self.error_message = None;
        self.show_error = false;
        self.org_name = Some(org.to_string());
        true
    }

    /// Back to the input form
    pub fn reset(&mut self) {
        self.org_name = None;
    }

    /// End the listing session and surface the failure
    pub fn handle_error(&mut self, event: &ErrorEvent) {
        self.reset();
        let message = if event.is_not_found() {
            ORG_NOT_FOUND_MESSAGE.to_string()
        } else {
            event.message.clone()
        };
        self.error_message = Some(message);
        self.show_error = true;
    }

    pub fn dismiss_error(&mut self) {
        self.show_error = false;
    }

    pub fn show_input(&self) -> bool {
        self.org_name.is_none()
    }

    pub fn visible_error(&self) -> Option<&str> {
        if self.show_error {
            self.error_message.as_deref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_switches_to_table() {
        let mut state = RootState::default();
        assert!(state.show_input());

        assert!(state.submit("  octocat "));
        assert!(!state.show_input());
        assert_eq!(state.org_name.as_deref(), Some("octocat"));
    }

    #[test]
    fn test_submit_clears_previous_error() {
        let mut state = RootState::default();
        state.submit("doesnotexist");
        state.handle_error(&ErrorEvent::new(404, "NOT FOUND"));
        assert!(state.visible_error().is_some());

        state.submit("rust-lang");
        assert_eq!(state.visible_error(), None);
        assert_eq!(state.error_message, None);
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut state = RootState::default();
        assert!(!state.submit("   "));
        assert!(state.show_input());
    }

    #[test]
    fn test_not_found_uses_fixed_message() {
        let mut state = RootState::default();
        state.submit("doesnotexist");
        state.handle_error(&ErrorEvent::new(404, "NOT FOUND"));

        assert!(state.show_input());
        assert_eq!(state.org_name, None);
        assert_eq!(state.visible_error(), Some("Couldnt find that organization."));
    }

    #[test]
    fn test_other_errors_pass_message_through() {
        for (code, message) in [(500, "INTERNAL SERVER ERROR"), (0, "Failed to fetch"), (403, "")] {
            let mut state = RootState::default();
            state.submit("octocat");
            state.handle_error(&ErrorEvent::new(code, message));
            assert!(state.show_input());
            assert_eq!(state.visible_error(), Some(message));
        }
    }

    #[test]
    fn test_reset_returns_to_input() {
        let mut state = RootState::default();
        state.submit("octocat");
        state.reset();
        assert!(state.show_input());
        assert_eq!(state.visible_error(), None);
    }

    #[test]
    fn test_dismiss_error() {
        let mut state = RootState::default();
        state.handle_error(&ErrorEvent::new(500, "boom"));
        state.dismiss_error();
        assert_eq!(state.visible_error(), None);
        assert_eq!(state.error_message.as_deref(), Some("boom"));
    }
}
