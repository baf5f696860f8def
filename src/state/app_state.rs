//! Application state definitions

use crate::submit::Submission;

use super::forms::ContactForm;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// The contact form being edited
    #[default]
    Form,
    /// Confirmation screen after a successful submission
    Submitted,
}

/// Top-level application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_view: View,
    /// The active form session
    pub form: ContactForm,
    /// The most recent successful submission, shown on the confirmation view
    pub last_submission: Option<Submission>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_starts_on_the_form() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Form);
        assert!(state.last_submission.is_none());
        assert_eq!(state.form.active_field_index, 0);
    }
}
