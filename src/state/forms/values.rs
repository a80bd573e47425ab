//! Raw form values, the derived error map, and the touched set

use super::field::FieldName;
use super::validators::validate_field;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Raw, untrimmed field values as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub country: String,
    pub city: String,
    pub pan_number: String,
    pub aadhar_number: String,
}

impl FormValues {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Username => &self.username,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::PhoneNumber => &self.phone_number,
            FieldName::Country => &self.country,
            FieldName::City => &self.city,
            FieldName::PanNumber => &self.pan_number,
            FieldName::AadharNumber => &self.aadhar_number,
        }
    }

    fn get_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Username => &mut self.username,
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
            FieldName::PhoneNumber => &mut self.phone_number,
            FieldName::Country => &mut self.country,
            FieldName::City => &mut self.city,
            FieldName::PanNumber => &mut self.pan_number,
            FieldName::AadharNumber => &mut self.aadhar_number,
        }
    }

    pub fn set(&mut self, field: FieldName, value: String) {
        *self.get_mut(field) = value;
    }
}

/// Error message per field; an empty message means the field is valid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormErrors {
    messages: [&'static str; FieldName::COUNT],
}

impl FormErrors {
    /// Run every field rule against `values`
    pub fn compute(values: &FormValues) -> Self {
        Self {
            messages: FieldName::ALL.map(|field| validate_field(field, values)),
        }
    }

    pub fn get(&self, field: FieldName) -> &'static str {
        self.messages[field.index()]
    }

    /// True when no field has an error
    pub fn is_clean(&self) -> bool {
        self.messages.iter().all(|m| m.is_empty())
    }

    /// Fields that currently carry an error, in display order
    pub fn invalid_fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        FieldName::ALL
            .into_iter()
            .filter(|field| !self.get(*field).is_empty())
    }
}

/// Fields the user has interacted with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchedSet(BTreeSet<FieldName>);

impl TouchedSet {
    pub fn touch(&mut self, field: FieldName) {
        self.0.insert(field);
    }

    pub fn touch_all(&mut self) {
        self.0.extend(FieldName::ALL);
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::validators::{EMAIL_INVALID, REQUIRED};
    use pretty_assertions::assert_eq;

    fn filled() -> FormValues {
        FormValues {
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            username: "asha".to_string(),
            email: "asha@example.in".to_string(),
            password: "Abc123!@".to_string(),
            phone_number: "+91 9876543210".to_string(),
            country: "India".to_string(),
            city: "Pune".to_string(),
            pan_number: "ABCDE1234F".to_string(),
            aadhar_number: "123456789012".to_string(),
        }
    }

    mod form_values {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_set_then_get_each_field() {
            let mut values = FormValues::default();
            for field in FieldName::ALL {
                values.set(field, field.key().to_uppercase());
            }
            for field in FieldName::ALL {
                assert_eq!(values.get(field), field.key().to_uppercase());
            }
        }

        #[test]
        fn test_values_are_not_trimmed() {
            let mut values = FormValues::default();
            values.set(FieldName::Username, "  asha  ".to_string());
            assert_eq!(values.username, "  asha  ");
        }

        #[test]
        fn test_serializes_with_camel_case_keys() {
            let json = serde_json::to_value(filled()).unwrap();
            for field in FieldName::ALL {
                assert!(json.get(field.key()).is_some(), "{}", field.key());
            }
            assert_eq!(json["panNumber"], "ABCDE1234F");
        }
    }

    mod form_errors {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_form_has_ten_errors() {
            let errors = FormErrors::compute(&FormValues::default());
            assert!(!errors.is_clean());
            assert_eq!(errors.invalid_fields().count(), FieldName::COUNT);
        }

        #[test]
        fn test_filled_form_is_clean() {
            let errors = FormErrors::compute(&filled());
            assert!(errors.is_clean());
            assert_eq!(errors.invalid_fields().count(), 0);
        }

        #[test]
        fn test_single_bad_field() {
            let mut values = filled();
            values.email = "a@b".to_string();
            let errors = FormErrors::compute(&values);
            assert_eq!(errors.get(FieldName::Email), EMAIL_INVALID);
            assert_eq!(
                errors.invalid_fields().collect::<Vec<_>>(),
                vec![FieldName::Email]
            );
        }

        #[test]
        fn test_recompute_drops_stale_errors() {
            let mut values = filled();
            values.city.clear();
            assert_eq!(FormErrors::compute(&values).get(FieldName::City), REQUIRED);
            values.city = "Delhi".to_string();
            assert!(FormErrors::compute(&values).is_clean());
        }
    }

    mod touched_set {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_empty() {
            let touched = TouchedSet::default();
            assert!(touched.is_empty());
            assert!(!touched.contains(FieldName::Email));
        }

        #[test]
        fn test_touch_is_idempotent() {
            let mut touched = TouchedSet::default();
            touched.touch(FieldName::Email);
            touched.touch(FieldName::Email);
            assert_eq!(touched.len(), 1);
            assert!(touched.contains(FieldName::Email));
        }

        #[test]
        fn test_touch_all() {
            let mut touched = TouchedSet::default();
            touched.touch_all();
            assert_eq!(touched.len(), FieldName::COUNT);
        }
    }
}
