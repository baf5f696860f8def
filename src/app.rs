//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{AppState, FieldControl, View};
use crate::submit::{Submission, SubmitSink};
use crate::validation::{RuleSet, ValidationReport};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: TuiConfig,
    /// Static rule table, built once for the configured encoding
    rules: RuleSet,
    /// Destination for validated submissions
    sink: Box<dyn SubmitSink>,
    /// Whether the app should quit
    quit: bool,
    /// Transient feedback message for the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig, sink: Box<dyn SubmitSink>) -> Self {
        let rules = RuleSet::for_style(config.rule_style());
        Self {
            state: AppState::default(),
            config,
            rules,
            sink,
            quit: false,
            status_message: None,
        }
    }

    /// Derive the validation report from the current values.
    ///
    /// Recomputed on every draw and every input event; there is no stored
    /// validity state to fall out of sync.
    pub fn validation(&self) -> ValidationReport {
        self.rules.validate(&self.state.form.values)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event for the current view
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        self.status_message = None;
        match self.state.current_view {
            View::Form => self.handle_form_key(key).await?,
            View::Submitted => self.handle_submitted_key(key),
        }
        Ok(())
    }

    async fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Left => self.state.form.select_prev(),
            KeyCode::Right => self.state.form.select_next(),
            KeyCode::Esc => {
                self.state.form.reset();
                self.status_message = Some("Form reset".to_string());
            }
            KeyCode::Enter if self.state.form.is_submit_row_active() => {
                // The submit control is disabled while the form is invalid;
                // activating it then does nothing.
                if self.validation().is_valid() {
                    self.submit().await?;
                }
            }
            KeyCode::Enter => self.state.form.insert_newline(),
            KeyCode::Char(' ')
                if !matches!(
                    self.state.form.active_control(),
                    Some(FieldControl::Text { .. })
                ) =>
            {
                self.state.form.toggle();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.form.push_char(c);
            }
            KeyCode::Backspace => self.state.form.pop_char(),
            _ => {}
        }
        Ok(())
    }

    fn handle_submitted_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('n') => {
                self.state.last_submission = None;
                self.state.current_view = View::Form;
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Hand the current values to the sink and move to the confirmation
    /// view. The session's values are discarded on success.
    async fn submit(&mut self) -> Result<()> {
        let submission = Submission::new(self.state.form.values.clone());
        match self.sink.submit(&submission).await {
            Ok(()) => {
                self.state.last_submission = Some(submission);
                self.state.form.reset();
                self.state.current_view = View::Submitted;
            }
            Err(e) => {
                tracing::warn!("submit sink rejected the payload: {e}");
                self.status_message = Some(format!("Submit failed: {e}"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submit::{MockSubmitSink, SubmitError};
    use crate::validation::{messages, Country, FieldKey, FormValues};
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with(mock: MockSubmitSink) -> App {
        App::new(TuiConfig::default(), Box::new(mock))
    }

    async fn press(app: &mut App, code: KeyCode) {
        app.handle_key(key(code)).await.unwrap();
    }

    async fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c)).await;
        }
    }

    /// Drive the form from its defaults to a valid state through key
    /// events: fill the memo, pick a country, check the agreement.
    async fn make_valid(app: &mut App) {
        // Name(0) -> Email(1) -> Gender(2) -> Memo(3)
        for _ in 0..3 {
            press(app, KeyCode::Tab).await;
        }
        type_str(app, "ten characters plus").await;
        press(app, KeyCode::Tab).await; // Country
        press(app, KeyCode::Right).await; // Japan
        press(app, KeyCode::Tab).await; // Terms
        press(app, KeyCode::Char(' ')).await;
        press(app, KeyCode::Tab).await; // Submit row
    }

    fn expected_valid_values() -> FormValues {
        FormValues {
            memo: "ten characters plus".to_string(),
            country: Some(Country::Japan),
            agree_to_terms: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_form_is_invalid() {
        let app = app_with(MockSubmitSink::new());
        let report = app.validation();
        assert!(!report.is_valid());
        assert_eq!(
            report.invalid_fields(),
            vec![FieldKey::Memo, FieldKey::Country, FieldKey::AgreeToTerms]
        );
    }

    #[tokio::test]
    async fn test_live_validation_tracks_every_edit() {
        let mut app = app_with(MockSubmitSink::new());
        for _ in 0..3 {
            press(&mut app, KeyCode::Tab).await;
        }

        type_str(&mut app, "123456789").await;
        assert_eq!(
            app.validation().error(FieldKey::Memo),
            Some(messages::MEMO_TOO_SHORT)
        );

        press(&mut app, KeyCode::Char('0')).await;
        assert_eq!(app.validation().error(FieldKey::Memo), None);

        press(&mut app, KeyCode::Backspace).await;
        assert_eq!(
            app.validation().error(FieldKey::Memo),
            Some(messages::MEMO_TOO_SHORT)
        );
    }

    #[tokio::test]
    async fn test_submit_while_invalid_never_reaches_the_sink() {
        let mut mock = MockSubmitSink::new();
        mock.expect_submit().times(0);
        let mut app = app_with(mock);

        // Jump straight to the submit row and try to activate it.
        press(&mut app, KeyCode::BackTab).await;
        assert!(app.state.form.is_submit_row_active());
        press(&mut app, KeyCode::Enter).await;

        assert_eq!(app.state.current_view, View::Form);
        assert!(app.state.last_submission.is_none());
    }

    #[tokio::test]
    async fn test_end_to_end_submit_hands_exact_values_to_the_sink() {
        let expected = expected_valid_values();
        let mut mock = MockSubmitSink::new();
        mock.expect_submit()
            .withf(move |s| s.values == expected)
            .times(1)
            .returning(|_| Ok(()));
        let mut app = app_with(mock);

        make_valid(&mut app).await;
        assert!(app.validation().is_valid());

        press(&mut app, KeyCode::Enter).await;

        assert_eq!(app.state.current_view, View::Submitted);
        let submission = app.state.last_submission.as_ref().unwrap();
        assert_eq!(submission.values, expected_valid_values());
        // The session's values are discarded after submission.
        assert_eq!(app.state.form.values, FormValues::default());
    }

    #[tokio::test]
    async fn test_sink_failure_keeps_the_session() {
        let mut mock = MockSubmitSink::new();
        mock.expect_submit().times(1).returning(|_| {
            Err(SubmitError::Encode(
                serde_json::from_str::<i32>("bogus").unwrap_err(),
            ))
        });
        let mut app = app_with(mock);

        make_valid(&mut app).await;
        press(&mut app, KeyCode::Enter).await;

        assert_eq!(app.state.current_view, View::Form);
        assert_eq!(app.state.form.values, expected_valid_values());
        assert!(app.status_message.as_deref().unwrap().starts_with("Submit failed"));
    }

    #[tokio::test]
    async fn test_escape_discards_edits() {
        let mut app = app_with(MockSubmitSink::new());
        make_valid(&mut app).await;
        press(&mut app, KeyCode::Esc).await;

        assert_eq!(app.state.form.values, FormValues::default());
        assert_eq!(app.status_message.as_deref(), Some("Form reset"));
    }

    #[tokio::test]
    async fn test_submitted_view_returns_to_a_fresh_form() {
        let mut mock = MockSubmitSink::new();
        mock.expect_submit().times(1).returning(|_| Ok(()));
        let mut app = app_with(mock);

        make_valid(&mut app).await;
        press(&mut app, KeyCode::Enter).await;
        assert_eq!(app.state.current_view, View::Submitted);

        press(&mut app, KeyCode::Enter).await;
        assert_eq!(app.state.current_view, View::Form);
        assert!(app.state.last_submission.is_none());
        assert_eq!(app.state.form.values, FormValues::default());
    }

    #[tokio::test]
    async fn test_quit_from_submitted_view() {
        let mut mock = MockSubmitSink::new();
        mock.expect_submit().times(1).returning(|_| Ok(()));
        let mut app = app_with(mock);

        make_valid(&mut app).await;
        press(&mut app, KeyCode::Enter).await;
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Char('q')).await;
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_space_types_into_text_fields() {
        let mut app = app_with(MockSubmitSink::new());
        press(&mut app, KeyCode::Char(' ')).await;
        assert_eq!(app.state.form.values.name, "山田太郎 ");
        // Space on the checkbox toggles instead of typing.
        assert!(!app.state.form.values.agree_to_terms);
    }
}
