//! Field control kinds for input handling and rendering

use crate::validation::FieldKey;

/// How a field is edited and drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldControl {
    /// Free-text input
    Text { multiline: bool },
    /// One option out of an enumerated list (radio group or select)
    Choice,
    /// Boolean checkbox
    Checkbox,
}

impl FieldControl {
    /// The control kind for a field
    pub fn of(key: FieldKey) -> Self {
        match key {
            FieldKey::Name | FieldKey::Email => Self::Text { multiline: false },
            FieldKey::Memo => Self::Text { multiline: true },
            FieldKey::Gender | FieldKey::Country => Self::Choice,
            FieldKey::AgreeToTerms => Self::Checkbox,
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, Self::Text { multiline: true })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_memo_is_multiline() {
        for key in FieldKey::ALL {
            let multiline = FieldControl::of(key).is_multiline();
            assert_eq!(multiline, key == FieldKey::Memo);
        }
    }

    #[test]
    fn test_control_kinds() {
        assert_eq!(
            FieldControl::of(FieldKey::Name),
            FieldControl::Text { multiline: false }
        );
        assert_eq!(FieldControl::of(FieldKey::Gender), FieldControl::Choice);
        assert_eq!(FieldControl::of(FieldKey::Country), FieldControl::Choice);
        assert_eq!(FieldControl::of(FieldKey::AgreeToTerms), FieldControl::Checkbox);
    }
}
