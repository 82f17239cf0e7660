use super::INVALID_URL;
use crate::result::FieldValidationResult;
use once_cell::sync::Lazy;
use regex::Regex;

// Lowercase http/https scheme and "://", dot-separated labels ending in an
// alphabetic TLD of 2+ letters, then an optional path without whitespace.
static HOMEPAGE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://(?:[A-Za-z0-9-]+\.)+[A-Za-z]{2,}(?:/\S*)?$")
        .expect("homepage pattern is a valid regex")
});

/// Whether `raw` is an acceptable homepage URL
#[must_use]
pub fn is_valid_homepage(raw: &str) -> bool {
    HOMEPAGE_PATTERN.is_match(raw)
}

/// Validate the homepage field
#[must_use]
pub fn validate_homepage(raw: &str) -> FieldValidationResult {
    FieldValidationResult::check(is_valid_homepage(raw), INVALID_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(is_valid_homepage("https://smith.com/pat"));
        assert!(is_valid_homepage("http://smith.com"));
        assert!(is_valid_homepage("https://www.smith.co.uk/"));
        assert!(is_valid_homepage("https://smith.com/pat/index.html?tab=1"));
    }

    #[test]
    fn rejects_bad_scheme() {
        for raw in ["htt://johndoe.com", "https:/johndoe.com", "johndoe.com", "ftp://johndoe.com", "HTTPS://johndoe.com", "https//johndoe.com"] {
            assert!(!is_valid_homepage(raw), "{raw:?} should be invalid");
        }
    }

    #[test]
    fn rejects_bad_domain() {
        for raw in ["", "https://johndoe.c", "http://jo#hndoe.com", "https://johndoe", "https://.com", "https://johndoe.c0m"] {
            assert!(!is_valid_homepage(raw), "{raw:?} should be invalid");
        }
    }

    #[test]
    fn rejects_whitespace_in_path() {
        assert!(!is_valid_homepage("https://smith.com/pat smith"));
    }

    #[test]
    fn error_message() {
        assert_eq!(validate_homepage("").message(), Some("Invalid URL"));
    }
}
