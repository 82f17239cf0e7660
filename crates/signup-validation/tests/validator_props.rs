use proptest::prelude::*;
use signup_validation::rules::{
    is_valid_email, is_valid_homepage, is_valid_phone_number, validate_age, validate_password,
    MAX_EMAIL_LEN,
};
use signup_validation::FieldName;

#[test]
fn reference_page_invalid_inputs() {
    let cases: &[(FieldName, &str)] = &[
        (FieldName::Name, ""),
        (FieldName::Email, ""),
        (FieldName::Email, "hellogmail.com"),
        (FieldName::Email, "hello@gmail.c"),
        (FieldName::Email, "hello@gmail.c#om"),
        (FieldName::Email, "hello@gma#il.co"),
        (FieldName::Email, "hell@o@gmail.co"),
        (FieldName::Email, "@gmail.co"),
        (FieldName::Age, ""),
        (FieldName::Age, "0"),
        (FieldName::Age, "-2"),
        (FieldName::Age, "200"),
        (FieldName::Age, "300"),
        (FieldName::Age, "30~0"),
        (FieldName::Age, "30.0."),
        (FieldName::Age, "30.0 "),
        (FieldName::PhoneNumber, ""),
        (FieldName::PhoneNumber, "333333a"),
        (FieldName::PhoneNumber, "33333"),
        (FieldName::PhoneNumber, "333333333333"),
        (FieldName::PhoneNumber, "*333-333-333"),
        (FieldName::PhoneNumber, "3333-333-333"),
        (FieldName::PhoneNumber, "333-33-3333"),
        (FieldName::Password, ""),
        (FieldName::Password, "aaaaaaa"),
        (FieldName::Password, "1@qqqww/"),
        (FieldName::Password, "1@1111Q1/"),
        (FieldName::Password, "w@qqqWw/"),
        (FieldName::Password, "11qqqWwW"),
        (FieldName::Homepage, ""),
        (FieldName::Homepage, "https://johndoe.c"),
        (FieldName::Homepage, "htt://johndoe.com"),
        (FieldName::Homepage, "https:/johndoe.com"),
        (FieldName::Homepage, "http://jo#hndoe.com"),
    ];

    for &(field, raw) in cases {
        let result = field.validate(raw);
        assert_eq!(
            result.message(),
            Some(field.error_message()),
            "{field} should reject {raw:?}"
        );
    }
}

#[test]
fn overlong_email_rejected() {
    let local = "a".repeat(254);
    assert!(!is_valid_email(&format!("{local}@gmail.com")));
}

proptest! {
    #[test]
    fn prop_whole_ages_inside_range_valid(age in 1u32..200) {
        prop_assert!(validate_age(&age.to_string()).is_valid());
        let signed = format!("+{age}");
        prop_assert!(validate_age(&signed).is_valid());
    }

    #[test]
    fn prop_whole_ages_outside_range_invalid(age in 200u32..100_000) {
        prop_assert!(!validate_age(&age.to_string()).is_valid());
        let negative = format!("-{age}");
        prop_assert!(!validate_age(&negative).is_valid());
    }

    #[test]
    fn prop_decimal_ages_inside_range_valid(whole in 0u32..199, frac in 1u32..100) {
        let raw = format!("{whole}.{frac:02}");
        prop_assert!(validate_age(&raw).is_valid());
    }

    #[test]
    fn prop_ages_with_whitespace_invalid(age in 1u32..200, pad in prop_oneof![Just(" "), Just("\t")]) {
        let trailing = format!("{age}{pad}");
        let leading = format!("{pad}{age}");
        prop_assert!(!validate_age(&trailing).is_valid());
        prop_assert!(!validate_age(&leading).is_valid());
    }

    #[test]
    fn prop_plain_phone_length(digits in "[0-9]{1,20}") {
        let expected = (6..=11).contains(&digits.len());
        prop_assert_eq!(is_valid_phone_number(&digits), expected);
    }

    #[test]
    fn prop_hyphenated_phone_valid(head in "[0-9]{3}", tail in "[0-9]{4}", sign in prop_oneof![Just(""), Just("+"), Just("-")]) {
        let raw = format!("{sign}{head}-{tail}");
        prop_assert!(is_valid_phone_number(&raw));
    }

    #[test]
    fn prop_simple_emails_valid(local in "[a-z0-9._-]{1,40}", domain in "[a-z0-9-]{1,20}", tld in "[a-z]{2,6}") {
        let raw = format!("{local}@{domain}.{tld}");
        prop_assert_eq!(is_valid_email(&raw), raw.len() <= MAX_EMAIL_LEN);
    }

    #[test]
    fn prop_single_letter_tld_invalid(local in "[a-z]{1,20}", domain in "[a-z]{1,20}", tld in "[a-z]") {
        let email = format!("{local}@{domain}.{tld}");
        let url = format!("https://{domain}.{tld}");
        prop_assert!(!is_valid_email(&email));
        prop_assert!(!is_valid_homepage(&url));
    }

    #[test]
    fn prop_password_without_uppercase_weak(raw in "[a-z0-9!@#$%^&*~]{8,32}") {
        prop_assert!(!validate_password(&raw).is_valid());
    }

    #[test]
    fn prop_validators_never_panic(raw in "\\PC{0,300}") {
        for field in FieldName::ALL {
            let result = field.validate(&raw);
            prop_assert_eq!(result.is_valid(), result.message().is_none());
        }
    }
}
