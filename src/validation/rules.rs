//! Constraint rules and the static rule table for the contact form
//!
//! A field owns an ordered list of [`ConstraintRule`]s; only the first
//! failing rule's message is ever reported. The same rule table exists in
//! two encodings, inline closures and a declarative schema, which must stay
//! behaviorally identical. Which one gets built is a configuration choice.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::values::{FieldKey, FieldValue, FormValues};

/// Maximum character count for the name field
pub const NAME_MAX_CHARS: usize = 20;

/// Minimum character count for the memo field
pub const MEMO_MIN_CHARS: usize = 10;

/// Legacy email pattern, kept verbatim.
///
/// Intentionally permissive and unanchored: it matches anywhere in the
/// input and accepts a bare `local@domain` without a dot. Kept as-is for
/// compatibility; do not tighten it.
pub const EMAIL_PATTERN: &str = r"(?i)([a-z\d+\-.]+)@([a-z\d+\-]+(?:\.[a-z]+)*)";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("invalid email pattern"));

/// Failure messages, one per rule
pub mod messages {
    pub const NAME_REQUIRED: &str = "Name is required.";
    pub const NAME_TOO_LONG: &str = "Name must be 20 characters or fewer.";
    pub const EMAIL_REQUIRED: &str = "Email is required.";
    pub const EMAIL_INVALID: &str = "Email format is invalid.";
    pub const GENDER_REQUIRED: &str = "Gender is required.";
    pub const MEMO_REQUIRED: &str = "Memo is required.";
    pub const MEMO_TOO_SHORT: &str = "Memo must be at least 10 characters.";
    pub const COUNTRY_REQUIRED: &str = "Country is required.";
    pub const MUST_AGREE: &str = "You must agree to the terms of service.";
}

/// A single pass/fail check with its failure message
pub struct ConstraintRule {
    message: &'static str,
    check: Box<dyn Fn(&FormValues) -> bool + Send + Sync>,
}

impl ConstraintRule {
    pub fn new<F>(message: &'static str, check: F) -> Self
    where
        F: Fn(&FormValues) -> bool + Send + Sync + 'static,
    {
        Self {
            message,
            check: Box::new(check),
        }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Evaluate the rule against the current values
    pub fn passes(&self, values: &FormValues) -> bool {
        (self.check)(values)
    }
}

impl std::fmt::Debug for ConstraintRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConstraintRule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Declarative constraint, the schema encoding of a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Text must not be empty (no trimming)
    NonEmpty,
    /// Text must be at most this many characters
    MaxChars(usize),
    /// Text must be at least this many characters
    MinChars(usize),
    /// Text must contain a match for the email pattern
    Email,
    /// An option must be selected
    Selected,
    /// The checkbox must be checked
    Checked,
}

impl Constraint {
    /// Check the constraint against a field value.
    ///
    /// A constraint applied to a field of the wrong kind never fires.
    fn check(self, value: FieldValue<'_>) -> bool {
        match (self, value) {
            (Self::NonEmpty, FieldValue::Text(s)) => !s.is_empty(),
            (Self::MaxChars(max), FieldValue::Text(s)) => s.chars().count() <= max,
            (Self::MinChars(min), FieldValue::Text(s)) => s.chars().count() >= min,
            (Self::Email, FieldValue::Text(s)) => EMAIL_REGEX.is_match(s),
            (Self::Selected, FieldValue::Selection(present)) => present,
            (Self::Checked, FieldValue::Flag(checked)) => checked,
            _ => true,
        }
    }
}

/// Which encoding of the rule table to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStyle {
    #[default]
    Inline,
    Schema,
}

impl RuleStyle {
    pub fn label(self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::Schema => "schema",
        }
    }
}

/// The static rule table: an ordered rule list per field
pub struct RuleSet {
    rules: [Vec<ConstraintRule>; FieldKey::COUNT],
}

impl RuleSet {
    /// Build the rule table for the configured encoding
    pub fn for_style(style: RuleStyle) -> Self {
        match style {
            RuleStyle::Inline => Self::inline(),
            RuleStyle::Schema => Self::schema(),
        }
    }

    /// Inline encoding: per-field closures over the form values
    pub fn inline() -> Self {
        let mut set = Self::empty();
        set.add(
            FieldKey::Name,
            ConstraintRule::new(messages::NAME_REQUIRED, |v| !v.name.is_empty()),
        );
        set.add(
            FieldKey::Name,
            ConstraintRule::new(messages::NAME_TOO_LONG, |v| {
                v.name.chars().count() <= NAME_MAX_CHARS
            }),
        );
        set.add(
            FieldKey::Email,
            ConstraintRule::new(messages::EMAIL_REQUIRED, |v| !v.email.is_empty()),
        );
        set.add(
            FieldKey::Email,
            ConstraintRule::new(messages::EMAIL_INVALID, |v| EMAIL_REGEX.is_match(&v.email)),
        );
        set.add(
            FieldKey::Gender,
            ConstraintRule::new(messages::GENDER_REQUIRED, |v| v.gender.is_some()),
        );
        set.add(
            FieldKey::Memo,
            ConstraintRule::new(messages::MEMO_REQUIRED, |v| !v.memo.is_empty()),
        );
        set.add(
            FieldKey::Memo,
            ConstraintRule::new(messages::MEMO_TOO_SHORT, |v| {
                v.memo.chars().count() >= MEMO_MIN_CHARS
            }),
        );
        set.add(
            FieldKey::Country,
            ConstraintRule::new(messages::COUNTRY_REQUIRED, |v| v.country.is_some()),
        );
        set.add(
            FieldKey::AgreeToTerms,
            ConstraintRule::new(messages::MUST_AGREE, |v| v.agree_to_terms),
        );
        set
    }

    /// Schema encoding: a declarative constraint list compiled into the
    /// same rule form
    pub fn schema() -> Self {
        const SCHEMA: &[(FieldKey, Constraint, &str)] = &[
            (FieldKey::Name, Constraint::NonEmpty, messages::NAME_REQUIRED),
            (
                FieldKey::Name,
                Constraint::MaxChars(NAME_MAX_CHARS),
                messages::NAME_TOO_LONG,
            ),
            (
                FieldKey::Email,
                Constraint::NonEmpty,
                messages::EMAIL_REQUIRED,
            ),
            (FieldKey::Email, Constraint::Email, messages::EMAIL_INVALID),
            (
                FieldKey::Gender,
                Constraint::Selected,
                messages::GENDER_REQUIRED,
            ),
            (FieldKey::Memo, Constraint::NonEmpty, messages::MEMO_REQUIRED),
            (
                FieldKey::Memo,
                Constraint::MinChars(MEMO_MIN_CHARS),
                messages::MEMO_TOO_SHORT,
            ),
            (
                FieldKey::Country,
                Constraint::Selected,
                messages::COUNTRY_REQUIRED,
            ),
            (
                FieldKey::AgreeToTerms,
                Constraint::Checked,
                messages::MUST_AGREE,
            ),
        ];

        let mut set = Self::empty();
        for &(key, constraint, message) in SCHEMA {
            set.add(
                key,
                ConstraintRule::new(message, move |v| constraint.check(key.value_of(v))),
            );
        }
        set
    }

    fn empty() -> Self {
        Self {
            rules: std::array::from_fn(|_| Vec::new()),
        }
    }

    fn add(&mut self, key: FieldKey, rule: ConstraintRule) {
        self.rules[key.index()].push(rule);
    }

    /// Ordered rules for a field
    pub fn rules_for(&self, key: FieldKey) -> &[ConstraintRule] {
        &self.rules[key.index()]
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::inline()
    }
}
