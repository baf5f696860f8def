//! Contact form session state

use super::field::FieldControl;
use crate::validation::{Country, FieldKey, FormValues, Gender};

/// Index of the submit button row, one past the last field
const SUBMIT_ROW: usize = FieldKey::COUNT;

/// The active form session: current values plus the field cursor.
///
/// Editing operations dispatch on the active field's control kind; anything
/// that does not apply to the active field is a no-op. Values are discarded
/// by replacing the whole session on submit or reset.
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub values: FormValues,
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            values: FormValues::default(),
            active_field_index: 0,
        }
    }

    /// Number of focusable positions: every field plus the submit row
    pub fn position_count(&self) -> usize {
        SUBMIT_ROW + 1
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.position_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.position_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// True if the submit button row is focused
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    /// The focused field, or `None` on the submit row
    pub fn active_key(&self) -> Option<FieldKey> {
        FieldKey::ALL.get(self.active_field_index).copied()
    }

    /// The focused field's control kind, or `None` on the submit row
    pub fn active_control(&self) -> Option<FieldControl> {
        self.active_key().map(FieldControl::of)
    }

    /// Append a character to the focused text field
    pub fn push_char(&mut self, c: char) {
        if let Some(text) = self.active_text_mut() {
            text.push(c);
        }
    }

    /// Remove the last character from the focused text field
    pub fn pop_char(&mut self) {
        if let Some(text) = self.active_text_mut() {
            text.pop();
        }
    }

    /// Insert a line break into the focused field if it is multiline
    pub fn insert_newline(&mut self) {
        if self.active_control().is_some_and(FieldControl::is_multiline) {
            self.values.memo.push('\n');
        }
    }

    /// Move the focused choice field to its next option.
    ///
    /// Gender has exactly two options and toggles. Country cycles through
    /// the enumerated list and back to the unselected placeholder, like a
    /// select control with a placeholder option.
    pub fn select_next(&mut self) {
        match self.active_key() {
            Some(FieldKey::Gender) => self.toggle_gender(),
            Some(FieldKey::Country) => {
                self.values.country = match self.values.country {
                    None => Some(Country::Japan),
                    Some(Country::Uk) => None,
                    Some(c) => Some(c.next()),
                };
            }
            _ => {}
        }
    }

    /// Move the focused choice field to its previous option
    pub fn select_prev(&mut self) {
        match self.active_key() {
            Some(FieldKey::Gender) => self.toggle_gender(),
            Some(FieldKey::Country) => {
                self.values.country = match self.values.country {
                    None => Some(Country::Uk),
                    Some(Country::Japan) => None,
                    Some(c) => Some(c.prev()),
                };
            }
            _ => {}
        }
    }

    /// Toggle the focused checkbox, or cycle a focused choice field
    pub fn toggle(&mut self) {
        match self.active_control() {
            Some(FieldControl::Checkbox) => {
                self.values.agree_to_terms = !self.values.agree_to_terms;
            }
            Some(FieldControl::Choice) => self.select_next(),
            _ => {}
        }
    }

    /// Discard all edits and start over from the defaults
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn toggle_gender(&mut self) {
        match &mut self.values.gender {
            Some(gender) => gender.toggle(),
            // The radio group starts selected by default, but cover the
            // unselected state anyway.
            None => self.values.gender = Some(Gender::Male),
        }
    }

    fn active_text_mut(&mut self) -> Option<&mut String> {
        match self.active_key()? {
            FieldKey::Name => Some(&mut self.values.name),
            FieldKey::Email => Some(&mut self.values.email),
            FieldKey::Memo => Some(&mut self.values.memo),
            _ => None,
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_on_first_field_with_defaults() {
        let form = ContactForm::new();
        assert_eq!(form.active_field_index, 0);
        assert_eq!(form.active_key(), Some(FieldKey::Name));
        assert_eq!(form.values, FormValues::default());
    }

    #[test]
    fn test_next_field_wraps_through_submit_row() {
        let mut form = ContactForm::new();
        for _ in 0..FieldKey::COUNT {
            form.next_field();
        }
        assert!(form.is_submit_row_active());
        assert_eq!(form.active_key(), None);
        form.next_field();
        assert_eq!(form.active_field_index, 0);
    }

    #[test]
    fn test_prev_field_wraps_to_submit_row() {
        let mut form = ContactForm::new();
        form.prev_field();
        assert!(form.is_submit_row_active());
    }

    #[test]
    fn test_push_and_pop_char_edit_active_text_field() {
        let mut form = ContactForm::new();
        form.values.name.clear();
        form.push_char('a');
        form.push_char('b');
        assert_eq!(form.values.name, "ab");
        form.pop_char();
        assert_eq!(form.values.name, "a");
    }

    #[test]
    fn test_text_editing_ignored_on_non_text_fields() {
        let mut form = ContactForm::new();
        form.active_field_index = FieldKey::Gender.index();
        form.push_char('x');
        form.pop_char();
        assert_eq!(form.values, FormValues::default());
    }

    #[test]
    fn test_newline_only_inserted_into_memo() {
        let mut form = ContactForm::new();
        form.active_field_index = FieldKey::Memo.index();
        form.insert_newline();
        assert_eq!(form.values.memo, "\n");

        form.active_field_index = FieldKey::Name.index();
        form.insert_newline();
        assert_eq!(form.values.name, "山田太郎");
    }

    #[test]
    fn test_gender_toggles_between_the_two_options() {
        let mut form = ContactForm::new();
        form.active_field_index = FieldKey::Gender.index();
        form.select_next();
        assert_eq!(form.values.gender, Some(Gender::Female));
        form.select_prev();
        assert_eq!(form.values.gender, Some(Gender::Male));
    }

    #[test]
    fn test_country_cycles_through_placeholder() {
        let mut form = ContactForm::new();
        form.active_field_index = FieldKey::Country.index();

        assert_eq!(form.values.country, None);
        form.select_next();
        assert_eq!(form.values.country, Some(Country::Japan));
        for _ in 0..3 {
            form.select_next();
        }
        assert_eq!(form.values.country, Some(Country::Uk));
        form.select_next();
        assert_eq!(form.values.country, None);
        form.select_prev();
        assert_eq!(form.values.country, Some(Country::Uk));
    }

    #[test]
    fn test_toggle_flips_the_checkbox() {
        let mut form = ContactForm::new();
        form.active_field_index = FieldKey::AgreeToTerms.index();
        form.toggle();
        assert!(form.values.agree_to_terms);
        form.toggle();
        assert!(!form.values.agree_to_terms);
    }

    #[test]
    fn test_toggle_on_submit_row_is_noop() {
        let mut form = ContactForm::new();
        form.active_field_index = FieldKey::COUNT;
        form.toggle();
        assert_eq!(form.values, FormValues::default());
    }

    #[test]
    fn test_reset_discards_edits() {
        let mut form = ContactForm::new();
        form.push_char('x');
        form.next_field();
        form.reset();
        assert_eq!(form.values, FormValues::default());
        assert_eq!(form.active_field_index, 0);
    }
}
