//! Form domain layer
//!
//! Field identifiers, validation rules, and the registration form
//! controller. Nothing here depends on the terminal.

mod field;
mod registration;
mod validators;
mod values;

pub use field::{FieldKind, FieldName};
pub use registration::{Form, RegistrationForm, SubmitDecision, SubmitPhase};
pub use values::FormValues;
