//! Email shape check.

use once_cell::sync::Lazy;
use regex::Regex;

const EMAIL_MESSAGE: &str = "Invalid email address";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$",
    )
    .expect("valid email regex")
});

/// Accepts `local@domain.tld` shapes only.
pub fn check_email(input: Option<&str>) -> Result<(), String> {
    match input {
        Some(email) if EMAIL_RE.is_match(email) => Ok(()),
        _ => Err(EMAIL_MESSAGE.to_string()),
    }
}

pub fn is_valid_email(input: Option<&str>) -> bool {
    check_email(input).is_ok()
}
