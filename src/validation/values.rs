//! Form value definitions

use serde::{Deserialize, Serialize};

/// Keys for the contact form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Name,
    Email,
    Gender,
    Memo,
    Country,
    AgreeToTerms,
}

impl FieldKey {
    /// All fields in display order
    pub const ALL: [FieldKey; 6] = [
        FieldKey::Name,
        FieldKey::Email,
        FieldKey::Gender,
        FieldKey::Memo,
        FieldKey::Country,
        FieldKey::AgreeToTerms,
    ];

    /// Number of fields in the form
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this field in `ALL`
    pub fn index(self) -> usize {
        self as usize
    }

    /// Wire name of the field (matches the submitted payload keys)
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Gender => "gender",
            Self::Memo => "memo",
            Self::Country => "country",
            Self::AgreeToTerms => "agreeToTerms",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Gender => "Gender",
            Self::Memo => "Memo",
            Self::Country => "Country",
            Self::AgreeToTerms => "Terms of Service",
        }
    }

    /// Extract this field's current value for rule evaluation
    pub fn value_of(self, values: &FormValues) -> FieldValue<'_> {
        match self {
            Self::Name => FieldValue::Text(&values.name),
            Self::Email => FieldValue::Text(&values.email),
            Self::Gender => FieldValue::Selection(values.gender.is_some()),
            Self::Memo => FieldValue::Text(&values.memo),
            Self::Country => FieldValue::Selection(values.country.is_some()),
            Self::AgreeToTerms => FieldValue::Flag(values.agree_to_terms),
        }
    }
}

/// A field's current value, viewed by kind rather than by name
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    /// Free text (name, email, memo)
    Text(&'a str),
    /// Whether an option is selected (gender, country)
    Selection(bool),
    /// Checkbox state (terms of service)
    Flag(bool),
}

/// Gender selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Self::Male => Self::Female,
            Self::Female => Self::Male,
        };
    }
}

/// Country selection, mirroring the enumerated option list of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    Japan,
    Usa,
    Canada,
    Uk,
}

impl Country {
    pub const ALL: [Country; 4] = [Country::Japan, Country::Usa, Country::Canada, Country::Uk];

    pub fn label(self) -> &'static str {
        match self {
            Self::Japan => "Japan",
            Self::Usa => "USA",
            Self::Canada => "Canada",
            Self::Uk => "UK",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Japan => Self::Usa,
            Self::Usa => Self::Canada,
            Self::Canada => Self::Uk,
            Self::Uk => Self::Japan,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Japan => Self::Uk,
            Self::Usa => Self::Japan,
            Self::Canada => Self::Usa,
            Self::Uk => Self::Canada,
        }
    }
}

/// Current contents of the contact form
///
/// Owned by the active form session, mutated field-by-field as the user
/// edits, and discarded on submit. Validation never stores anything here;
/// every report is derived from these values and the static rule set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub gender: Option<Gender>,
    pub memo: String,
    pub country: Option<Country>,
    #[serde(rename = "agreeToTerms")]
    pub agree_to_terms: bool,
}

impl Default for FormValues {
    /// The documented initial values of the form
    fn default() -> Self {
        Self {
            name: "山田太郎".to_string(),
            email: "admin@example.com".to_string(),
            gender: Some(Gender::Male),
            memo: String::new(),
            country: None,
            agree_to_terms: false,
        }
    }
}
