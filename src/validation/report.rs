//! Rule evaluation and the derived per-field error report

use super::rules::RuleSet;
use super::values::{FieldKey, FormValues};

/// Derived validation state: at most one message per field.
///
/// A report is a pure function of the values and the rule table. It is
/// recomputed on every input event and never stored alongside the values,
/// so it cannot drift out of sync with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    errors: [Option<&'static str>; FieldKey::COUNT],
}

impl ValidationReport {
    /// The first failing rule's message for a field, if any
    pub fn error(&self, key: FieldKey) -> Option<&'static str> {
        self.errors[key.index()]
    }

    /// True iff no field has an error
    pub fn is_valid(&self) -> bool {
        self.errors.iter().all(Option::is_none)
    }

    /// Fields that currently fail a rule, in display order
    pub fn invalid_fields(&self) -> Vec<FieldKey> {
        FieldKey::ALL
            .into_iter()
            .filter(|key| self.errors[key.index()].is_some())
            .collect()
    }
}

impl RuleSet {
    /// Evaluate every field's rule list against the current values.
    ///
    /// Rules apply in declaration order; a field reports the earliest
    /// failing rule's message and nothing else.
    pub fn validate(&self, values: &FormValues) -> ValidationReport {
        let mut errors = [None; FieldKey::COUNT];
        for key in FieldKey::ALL {
            errors[key.index()] = self
                .rules_for(key)
                .iter()
                .find(|rule| !rule.passes(values))
                .map(|rule| rule.message());
        }
        ValidationReport { errors }
    }
}
