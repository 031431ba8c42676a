use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating contact numbers
    /// Digits with an optional leading +, allowing spaces and hyphens as separators
    /// - Valid: "+911234567890", "080-1234-5678", "1234567"
    /// - Invalid: "call me", "12", "++91"
    pub static ref CONTACT_NUMBER_REGEX: Regex =
        Regex::new(r"^\+?[0-9][0-9 \-]{5,19}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_number_regex_valid() {
        assert!(CONTACT_NUMBER_REGEX.is_match("+911234567890"));
        assert!(CONTACT_NUMBER_REGEX.is_match("080-1234-5678"));
        assert!(CONTACT_NUMBER_REGEX.is_match("1234567"));
        assert!(CONTACT_NUMBER_REGEX.is_match("98 7654 3210"));
    }

    #[test]
    fn test_contact_number_regex_invalid() {
        assert!(!CONTACT_NUMBER_REGEX.is_match("call me")); // letters
        assert!(!CONTACT_NUMBER_REGEX.is_match("12")); // too short
        assert!(!CONTACT_NUMBER_REGEX.is_match("++911234567890")); // double plus
        assert!(!CONTACT_NUMBER_REGEX.is_match("")); // empty
        assert!(!CONTACT_NUMBER_REGEX.is_match("123456789012345678901234")); // too long
    }
}
