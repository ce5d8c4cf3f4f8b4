use roster_core::validate::{check_phone, is_valid_email, is_valid_phone, PhoneRule};

#[test]
fn default_rule_accepts_national_and_international_numbers() {
    let rule = PhoneRule::default();
    assert_eq!(rule.length, 9);
    assert!(rule.allow_international);

    assert!(is_valid_phone(Some("123456789"), &rule));
    assert!(is_valid_phone(Some("+34123456789"), &rule));
    assert!(is_valid_phone(Some("123 456 789"), &rule));
}

#[test]
fn short_blank_and_missing_numbers_fail() {
    let rule = PhoneRule::default();
    assert!(!is_valid_phone(Some("12345"), &rule));
    assert!(!is_valid_phone(Some(""), &rule));
    assert!(!is_valid_phone(Some("   "), &rule));
    assert!(!is_valid_phone(None, &rule));
}

#[test]
fn international_digit_window_is_length_to_length_plus_three() {
    let rule = PhoneRule::default();
    assert!(is_valid_phone(Some("+123456789"), &rule));
    assert!(is_valid_phone(Some("+123 456 789 012"), &rule));
    assert!(!is_valid_phone(Some("+12345678"), &rule));
    assert!(!is_valid_phone(Some("+1234567890123"), &rule));
}

#[test]
fn international_prefix_is_counted_as_national_when_disallowed() {
    let rule = PhoneRule {
        allow_international: false,
        ..PhoneRule::default()
    };
    assert!(is_valid_phone(Some("+123456789"), &rule));
    assert!(!is_valid_phone(Some("+34123456789"), &rule));
}

#[test]
fn national_rejection_message_substitutes_length() {
    let rule = PhoneRule {
        length: 10,
        ..PhoneRule::default()
    };
    let message = check_phone(Some("123456789"), &rule).unwrap_err();
    assert_eq!(
        message,
        "Invalid phone number. Must contain exactly 10 digits or be in international format if allowed"
    );
}

#[test]
fn email_requires_local_part_at_and_domain() {
    assert!(is_valid_email(Some("a@b.com")));
    assert!(is_valid_email(Some("first.last+tag@mail.example.org")));

    assert!(!is_valid_email(Some("ab.com")));
    assert!(!is_valid_email(Some("@b.com")));
    assert!(!is_valid_email(Some("a@")));
    assert!(!is_valid_email(Some("a@b")));
    assert!(!is_valid_email(Some("a@.com")));
    assert!(!is_valid_email(Some("")));
    assert!(!is_valid_email(None));
}

#[test]
fn huge_length_rule_rejects_instead_of_overflowing() {
    let rule = PhoneRule {
        length: usize::MAX,
        ..PhoneRule::default()
    };
    assert!(!is_valid_phone(Some("+34123456789"), &rule));
    assert!(!is_valid_phone(Some("123456789"), &rule));
}
