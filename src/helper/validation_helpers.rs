use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

// local@domain with at least a two-letter TLD; "a@b" is rejected, "a@b.com"
// accepted. Case-insensitive.
fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[a-z]{2,}$").expect("email pattern is valid")
    })
}

/// Maps one contact-form field to an error message, or "" when it passes.
/// The same rules run client-side on every keystroke and here on submit.
pub fn validate_field(name: &str, value: &str) -> &'static str {
    match name {
        "name" => {
            if value.chars().count() < 2 {
                "Name must be at least 2 characters"
            } else {
                ""
            }
        }
        "email" => {
            if !email_regex().is_match(value) {
                "Please enter a valid email address"
            } else {
                ""
            }
        }
        "message" => {
            if value.chars().count() < 10 {
                "Message must be at least 10 characters"
            } else {
                ""
            }
        }
        _ => "",
    }
}

/// Validates the whole form; returns only the failing fields.
pub fn validate_contact(
    name: &str,
    email: &str,
    message: &str,
) -> HashMap<&'static str, &'static str> {
    let mut errors = HashMap::new();
    for (field, value) in [("name", name), ("email", email), ("message", message)] {
        let error = validate_field(field, value);
        if !error.is_empty() {
            errors.insert(field, error);
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_requires_two_characters() {
        assert!(!validate_field("name", "").is_empty());
        assert!(!validate_field("name", "a").is_empty());
        assert!(validate_field("name", "ab").is_empty());
        // Multi-byte names count by characters, not bytes.
        assert!(validate_field("name", "حب").is_empty());
    }

    #[test]
    fn email_needs_local_domain_and_tld() {
        for bad in ["", "plain", "a@b", "@b.com", "a@.com", "a b@c.com", "a@b,com"] {
            assert!(!validate_field("email", bad).is_empty(), "accepted {bad:?}");
        }
        for good in ["a@b.com", "A.B@Example.ORG", "user+tag@mail.co"] {
            assert!(validate_field("email", good).is_empty(), "rejected {good:?}");
        }
    }

    #[test]
    fn message_requires_ten_characters() {
        assert!(!validate_field("message", "too short").is_empty());
        assert!(validate_field("message", "long enough").is_empty());
    }

    #[test]
    fn whole_form_reports_only_failing_fields() {
        let errors = validate_contact("J", "a@b.com", "hello there friend");
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key("name"));

        assert!(validate_contact("Jo", "a@b.com", "hello there friend").is_empty());
    }
}
