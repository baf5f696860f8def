//! Rule-based field validation for the contact form
//!
//! The validator owns nothing: a static [`RuleSet`] maps each [`FieldKey`]
//! to an ordered list of constraint checks, and evaluating it against the
//! current [`FormValues`] yields a [`ValidationReport`] with the first
//! failing message per field plus the aggregate validity flag that gates
//! submission.

mod report;
mod rules;
mod values;

pub use report::*;
pub use rules::*;
pub use values::*;
