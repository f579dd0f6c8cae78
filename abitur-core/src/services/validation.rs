//! Form field validation

use regex::Regex;

/// Check an email address: local part, `@`, domain with at least one dot
pub fn is_valid_email(email: &str) -> bool {
    let re = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    re.is_match(email)
}

/// Check a phone number: digits, `+`, `-`, spaces and parentheses only,
/// with at least ten digits overall
pub fn is_valid_phone(phone: &str) -> bool {
    let re = Regex::new(r"^[0-9+\-\s()]+$").unwrap();
    re.is_match(phone) && phone.chars().filter(|c| c.is_ascii_digit()).count() >= 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("ivan.petrov@mail.example.ru"));
        assert!(is_valid_email("user+tag@sub.domain.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("a@x"));
        assert!(!is_valid_email("a b@x.com"));
        assert!(!is_valid_email("a@@x.com"));
    }

    #[test]
    fn test_valid_phones() {
        assert!(is_valid_phone("+7 (495) 123-45-67"));
        assert!(is_valid_phone("84951234567"));
    }

    #[test]
    fn test_invalid_phones() {
        // Too few digits
        assert!(!is_valid_phone("123-45-67"));
        // Disallowed characters
        assert!(!is_valid_phone("+7 495 abc 45 67"));
        assert!(!is_valid_phone(""));
    }
}
