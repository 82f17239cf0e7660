use super::WEAK_PASSWORD;
use crate::result::FieldValidationResult;

/// Shortest accepted password, in characters
pub const MIN_PASSWORD_LEN: usize = 8;

/// Character classes present in a password
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterClasses {
    /// Number of characters
    pub length: usize,
    /// At least one uppercase letter
    pub upper: bool,
    /// At least one lowercase letter
    pub lower: bool,
    /// At least one ASCII digit
    pub digit: bool,
    /// At least one printable non-alphanumeric character
    pub symbol: bool,
}

impl CharacterClasses {
    /// Scan a password once and record what it contains
    #[must_use]
    pub fn scan(raw: &str) -> Self {
        raw.chars().fold(Self::default(), |mut classes, c| {
            classes.length += 1;
            classes.upper |= c.is_uppercase();
            classes.lower |= c.is_lowercase();
            classes.digit |= c.is_ascii_digit();
            classes.symbol |= !c.is_alphanumeric() && !c.is_whitespace() && !c.is_control();
            classes
        })
    }

    /// Whether every strength requirement is met
    #[inline]
    #[must_use]
    pub fn is_strong(&self) -> bool {
        self.length >= MIN_PASSWORD_LEN && self.upper && self.lower && self.digit && self.symbol
    }

    /// Names of the unmet requirements, in a fixed order
    #[must_use]
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.length < MIN_PASSWORD_LEN {
            missing.push("length");
        }
        if !self.upper {
            missing.push("uppercase");
        }
        if !self.lower {
            missing.push("lowercase");
        }
        if !self.digit {
            missing.push("digit");
        }
        if !self.symbol {
            missing.push("symbol");
        }
        missing
    }
}

/// Validate the password field
#[must_use]
pub fn validate_password(raw: &str) -> FieldValidationResult {
    FieldValidationResult::check(CharacterClasses::scan(raw).is_strong(), WEAK_PASSWORD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strong_password_accepted() {
        assert!(validate_password("Str0ngP@ssword~").is_valid());
        assert!(validate_password("aB3$aB3$").is_valid());
    }

    #[test]
    fn each_missing_class_rejected() {
        assert_eq!(CharacterClasses::scan("aaaaaaa").missing(), vec!["length", "uppercase", "digit", "symbol"]);
        assert_eq!(CharacterClasses::scan("1@qqqww/").missing(), vec!["uppercase"]);
        assert_eq!(CharacterClasses::scan("1@1111Q1/").missing(), vec!["lowercase"]);
        assert_eq!(CharacterClasses::scan("w@qqqWw/").missing(), vec!["digit"]);
        assert_eq!(CharacterClasses::scan("11qqqWwW").missing(), vec!["symbol"]);
    }

    #[test]
    fn seven_characters_too_short() {
        assert!(!validate_password("aB3$aB3").is_valid());
    }

    #[test]
    fn whitespace_is_not_a_symbol() {
        assert!(!validate_password("aB3 aB3 a").is_valid());
    }

    #[test]
    fn error_message() {
        assert_eq!(validate_password("").message(), Some("Weak Password"));
    }
}
