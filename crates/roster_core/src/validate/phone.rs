//! Phone number shape checks.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PHONE_LENGTH: usize = 9;
/// Longest national number a rule may require (E.164 caps numbers at 15 digits).
pub const MAX_PHONE_LENGTH: usize = 15;
pub const DEFAULT_PHONE_MESSAGE: &str =
    "Invalid phone number. Must contain exactly {length} digits or be in international format if allowed";
const PHONE_REQUIRED_MESSAGE: &str = "Phone number is required";

/// Configurable phone rule for employee numbers.
///
/// International input (leading `+`) may carry a 1–3 digit country code on
/// top of `length`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneRule {
    /// Required count of national digits.
    pub length: usize,
    pub allow_international: bool,
    /// Rejection template; `{length}` is substituted.
    pub message: String,
}

impl Default for PhoneRule {
    fn default() -> Self {
        Self {
            length: DEFAULT_PHONE_LENGTH,
            allow_international: true,
            message: DEFAULT_PHONE_MESSAGE.to_string(),
        }
    }
}

impl PhoneRule {
    pub fn rendered_message(&self) -> String {
        self.message.replace("{length}", &self.length.to_string())
    }
}

/// Checks `input` against `rule`, returning the rejection message on failure.
pub fn check_phone(input: Option<&str>, rule: &PhoneRule) -> Result<(), String> {
    let Some(phone) = input.filter(|value| !value.trim().is_empty()) else {
        return Err(PHONE_REQUIRED_MESSAGE.to_string());
    };

    let accepted = match phone.strip_prefix('+') {
        Some(rest) if rule.allow_international => {
            (rule.length..=rule.length.saturating_add(3)).contains(&count_digits(rest))
        }
        _ => count_digits(phone) == rule.length,
    };

    if accepted {
        Ok(())
    } else {
        Err(rule.rendered_message())
    }
}

pub fn is_valid_phone(input: Option<&str>, rule: &PhoneRule) -> bool {
    check_phone(input, rule).is_ok()
}

/// Department numbers are optional: empty, or exactly `digits` ASCII digits
/// with no separators.
pub fn check_department_phone(input: Option<&str>, digits: usize) -> Result<(), String> {
    match input {
        None | Some("") => Ok(()),
        Some(phone) if phone.len() == digits && phone.bytes().all(|b| b.is_ascii_digit()) => {
            Ok(())
        }
        Some(_) => Err(format!("Mobile number must be {digits} digits")),
    }
}

fn count_digits(value: &str) -> usize {
    value.chars().filter(char::is_ascii_digit).count()
}

#[cfg(test)]
mod tests {
    use super::{check_phone, count_digits, PhoneRule};

    #[test]
    fn count_digits_ignores_separators() {
        assert_eq!(count_digits("(123) 456-789"), 9);
        assert_eq!(count_digits("abc"), 0);
    }

    #[test]
    fn national_rejection_renders_length_into_message() {
        let rule = PhoneRule {
            length: 7,
            ..PhoneRule::default()
        };
        let message = check_phone(Some("123"), &rule).unwrap_err();
        assert!(message.contains("exactly 7 digits"));
        assert!(!message.contains("{length}"));
    }
}
