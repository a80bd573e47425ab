//! Per-field validation rules
//!
//! Every validator is a pure function from the raw input to an error
//! message. An empty message means the value is valid. When several rules
//! fail only the first one, in the order listed for the field, is reported.

use super::field::FieldName;
use super::values::FormValues;
use once_cell::sync::Lazy;
use regex::Regex;

pub const REQUIRED: &str = "This field is required";

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";

pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const PASSWORD_NO_UPPERCASE: &str = "Password must contain at least one uppercase letter";
pub const PASSWORD_NO_LOWERCASE: &str = "Password must contain at least one lowercase letter";
pub const PASSWORD_NO_DIGIT: &str = "Password must contain at least one number";
pub const PASSWORD_NO_SPECIAL: &str = "Password must contain at least one special character";

pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const PHONE_INVALID: &str = "Please enter a valid phone number";
pub const PHONE_TOO_SHORT: &str = "Phone number must have at least 10 digits";

pub const PAN_REQUIRED: &str = "PAN number is required";
pub const PAN_INVALID: &str = "Please enter a valid PAN number (e.g., ABCDE1234F)";

pub const AADHAR_REQUIRED: &str = "Aadhar number is required";
pub const AADHAR_INVALID: &str = "Please enter a valid 12-digit Aadhar number";

const MIN_PASSWORD_LEN: usize = 8;
const MIN_PHONE_DIGITS: usize = 10;
const PASSWORD_SPECIALS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));
static PHONE_CHARSET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9+\s]+$").expect("phone pattern is valid"));
static PAN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("PAN pattern is valid"));
static AADHAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{12}$").expect("Aadhar pattern is valid"));

/// Non-empty after trimming whitespace
pub fn validate_required(value: &str) -> &'static str {
    if value.trim().is_empty() {
        REQUIRED
    } else {
        ""
    }
}

/// Shape check only: `local@domain.tld` with no whitespace or extra `@`
pub fn validate_email(email: &str) -> &'static str {
    if email.is_empty() {
        return EMAIL_REQUIRED;
    }
    if EMAIL_PATTERN.is_match(email) {
        ""
    } else {
        EMAIL_INVALID
    }
}

pub fn validate_password(password: &str) -> &'static str {
    if password.is_empty() {
        return PASSWORD_REQUIRED;
    }
    // Length is measured in UTF-16 code units
    if password.encode_utf16().count() < MIN_PASSWORD_LEN {
        return PASSWORD_TOO_SHORT;
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return PASSWORD_NO_UPPERCASE;
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return PASSWORD_NO_LOWERCASE;
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return PASSWORD_NO_DIGIT;
    }
    if !password.chars().any(|c| PASSWORD_SPECIALS.contains(c)) {
        return PASSWORD_NO_SPECIAL;
    }
    ""
}

/// Digits, `+` and whitespace only, with at least ten digits
pub fn validate_phone_number(phone: &str) -> &'static str {
    if phone.is_empty() {
        return PHONE_REQUIRED;
    }
    if !PHONE_CHARSET.is_match(phone) {
        return PHONE_INVALID;
    }
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    if digits < MIN_PHONE_DIGITS {
        return PHONE_TOO_SHORT;
    }
    ""
}

/// Five uppercase letters, four digits, one uppercase letter
pub fn validate_pan(pan: &str) -> &'static str {
    if pan.is_empty() {
        return PAN_REQUIRED;
    }
    if PAN_PATTERN.is_match(pan) {
        ""
    } else {
        PAN_INVALID
    }
}

/// Exactly twelve digits, no separators
pub fn validate_aadhar(aadhar: &str) -> &'static str {
    if aadhar.is_empty() {
        return AADHAR_REQUIRED;
    }
    if AADHAR_PATTERN.is_match(aadhar) {
        ""
    } else {
        AADHAR_INVALID
    }
}

/// Run the rule for `field` against the full set of values.
///
/// Rules receive the whole record so that a rule may consult sibling
/// fields; none of the current rules do.
pub fn validate_field(field: FieldName, values: &FormValues) -> &'static str {
    let raw = values.get(field);
    match field {
        FieldName::FirstName
        | FieldName::LastName
        | FieldName::Username
        | FieldName::Country
        | FieldName::City => validate_required(raw),
        FieldName::Email => validate_email(raw),
        FieldName::Password => validate_password(raw),
        FieldName::PhoneNumber => validate_phone_number(raw),
        FieldName::PanNumber => validate_pan(raw),
        FieldName::AadharNumber => validate_aadhar(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod required {
        use super::*;

        #[test]
        fn test_empty_and_whitespace_are_required() {
            assert_eq!(validate_required(""), REQUIRED);
            assert_eq!(validate_required("   "), REQUIRED);
            assert_eq!(validate_required("\t\n"), REQUIRED);
        }

        #[test]
        fn test_padded_value_is_valid() {
            assert_eq!(validate_required("  Asha "), "");
        }

        #[test]
        fn test_every_field_reports_its_required_message() {
            let values = FormValues::default();
            let expected = [
                (FieldName::FirstName, REQUIRED),
                (FieldName::LastName, REQUIRED),
                (FieldName::Username, REQUIRED),
                (FieldName::Email, EMAIL_REQUIRED),
                (FieldName::Password, PASSWORD_REQUIRED),
                (FieldName::PhoneNumber, PHONE_REQUIRED),
                (FieldName::Country, REQUIRED),
                (FieldName::City, REQUIRED),
                (FieldName::PanNumber, PAN_REQUIRED),
                (FieldName::AadharNumber, AADHAR_REQUIRED),
            ];
            for (field, message) in expected {
                assert_eq!(validate_field(field, &values), message, "{field:?}");
            }
        }
    }

    mod email {
        use super::*;

        #[test]
        fn test_accepts_minimal_address() {
            assert_eq!(validate_email("a@b.co"), "");
            assert_eq!(validate_email("asha.rao@mail.example.in"), "");
        }

        #[test]
        fn test_rejects_malformed_addresses() {
            assert_eq!(validate_email("a@b"), EMAIL_INVALID);
            assert_eq!(validate_email("a.com"), EMAIL_INVALID);
            assert_eq!(validate_email("a @b.com"), EMAIL_INVALID);
            assert_eq!(validate_email("a@@b.com"), EMAIL_INVALID);
        }

        #[test]
        fn test_empty_is_required() {
            assert_eq!(validate_email(""), EMAIL_REQUIRED);
        }

        #[test]
        fn test_whitespace_only_is_invalid_not_required() {
            assert_eq!(validate_email("   "), EMAIL_INVALID);
        }
    }

    mod password {
        use super::*;

        #[test]
        fn test_accepts_all_classes() {
            assert_eq!(validate_password("Abc123!@"), "");
        }

        #[test]
        fn test_empty_is_required() {
            assert_eq!(validate_password(""), PASSWORD_REQUIRED);
        }

        #[test]
        fn test_length_is_checked_first() {
            assert_eq!(validate_password("abc"), PASSWORD_TOO_SHORT);
            assert_eq!(validate_password("Ab1!"), PASSWORD_TOO_SHORT);
        }

        #[test]
        fn test_length_counts_utf16_units() {
            // Each emoji is two UTF-16 units
            assert_eq!(validate_password("Ab1!\u{1F600}\u{1F600}"), "");
            assert_eq!(validate_password("Ab1!\u{1F600}"), PASSWORD_TOO_SHORT);
        }

        #[test]
        fn test_missing_uppercase() {
            assert_eq!(validate_password("abc12345"), PASSWORD_NO_UPPERCASE);
        }

        #[test]
        fn test_missing_lowercase_reported_before_special() {
            assert_eq!(validate_password("ABCDEFG1"), PASSWORD_NO_LOWERCASE);
        }

        #[test]
        fn test_missing_digit() {
            assert_eq!(validate_password("Abcdefg!"), PASSWORD_NO_DIGIT);
        }

        #[test]
        fn test_missing_special() {
            assert_eq!(validate_password("Abcdefg1"), PASSWORD_NO_SPECIAL);
        }

        #[test]
        fn test_each_special_character_counts() {
            for special in PASSWORD_SPECIALS.chars() {
                let candidate = format!("Abcdef1{special}");
                assert_eq!(validate_password(&candidate), "", "{special}");
            }
        }

        #[test]
        fn test_length_counts_characters_not_bytes() {
            // Seven characters, more than eight bytes
            assert_eq!(validate_password("Ab1!ééé"), PASSWORD_TOO_SHORT);
        }
    }

    mod phone {
        use super::*;

        #[test]
        fn test_accepts_plain_and_international() {
            assert_eq!(validate_phone_number("9876543210"), "");
            assert_eq!(validate_phone_number("+91 9876543210"), "");
        }

        #[test]
        fn test_too_short() {
            assert_eq!(validate_phone_number("98765"), PHONE_TOO_SHORT);
            assert_eq!(validate_phone_number("   "), PHONE_TOO_SHORT);
        }

        #[test]
        fn test_rejects_separators() {
            assert_eq!(validate_phone_number("98-76543210"), PHONE_INVALID);
            assert_eq!(validate_phone_number("(987) 6543210"), PHONE_INVALID);
        }

        #[test]
        fn test_empty_is_required() {
            assert_eq!(validate_phone_number(""), PHONE_REQUIRED);
        }
    }

    mod pan {
        use super::*;

        #[test]
        fn test_accepts_canonical_format() {
            assert_eq!(validate_pan("ABCDE1234F"), "");
        }

        #[test]
        fn test_is_case_sensitive() {
            assert_eq!(validate_pan("abcde1234f"), PAN_INVALID);
        }

        #[test]
        fn test_rejects_wrong_shape() {
            assert_eq!(validate_pan("ABCD1234F"), PAN_INVALID);
            assert_eq!(validate_pan("ABCDE-1234-F"), PAN_INVALID);
            assert_eq!(validate_pan("ABCDE1234FG"), PAN_INVALID);
        }

        #[test]
        fn test_empty_is_required() {
            assert_eq!(validate_pan(""), PAN_REQUIRED);
        }
    }

    mod aadhar {
        use super::*;

        #[test]
        fn test_accepts_twelve_digits() {
            assert_eq!(validate_aadhar("123456789012"), "");
        }

        #[test]
        fn test_rejects_wrong_shape() {
            assert_eq!(validate_aadhar("12345"), AADHAR_INVALID);
            assert_eq!(validate_aadhar("12345678901a"), AADHAR_INVALID);
            assert_eq!(validate_aadhar("1234 5678 9012"), AADHAR_INVALID);
            assert_eq!(validate_aadhar("1234567890123"), AADHAR_INVALID);
        }

        #[test]
        fn test_empty_is_required() {
            assert_eq!(validate_aadhar(""), AADHAR_REQUIRED);
        }
    }

    #[test]
    fn test_validators_are_deterministic() {
        for _ in 0..3 {
            assert_eq!(validate_password("abc12345"), PASSWORD_NO_UPPERCASE);
            assert_eq!(validate_email("a@b"), EMAIL_INVALID);
        }
    }
}
