//! Tests for the built-in field schemas.

use signup_lib::validation::{email_schema, name_schema, password_schema};
use signup_lib::{MessageCatalog, MessageKey};

const UPPER: &str = "QWERTYUI";
const LOWER: &str = "qwertyui";
const DIGIT: &str = "12345678";
const SPECIAL: &str = "!@#$%^&*";

#[test]
fn test_empty_reports_required_for_every_schema() {
    let catalog = MessageCatalog::default();
    assert_eq!(
        name_schema(&catalog).check("").key(),
        Some(MessageKey::NameRequired)
    );
    assert_eq!(
        email_schema(&catalog).check("").key(),
        Some(MessageKey::EmailRequired)
    );
    assert_eq!(
        password_schema(&catalog).check("").key(),
        Some(MessageKey::PasswordRequired)
    );
}

#[test]
fn test_valid_passwords_pass() {
    let schema = password_schema(&MessageCatalog::default());
    let passwords = [
        "Abcd123!".to_string(),
        "zZ9~zZ9~".to_string(),
        "Contraseña#2024".to_string(),
        format!("A1!{}", "b".repeat(97)),
    ];
    for password in &passwords {
        assert!(schema.check(password).is_valid(), "{password} rejected");
    }
}

#[test]
fn test_first_missing_class_is_reported() {
    let schema = password_schema(&MessageCatalog::default());
    let classes = [
        (UPPER, MessageKey::PasswordMissingUppercase),
        (LOWER, MessageKey::PasswordMissingLowercase),
        (DIGIT, MessageKey::PasswordMissingDigit),
        (SPECIAL, MessageKey::PasswordMissingSpecial),
    ];

    // Every subset of classes that leaves two or more missing.
    for mask in 0u8..16 {
        if mask.count_ones() > 2 {
            continue;
        }
        let present: String = classes
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1u8 << *i) != 0)
            .map(|(_, (chars, _))| *chars)
            .collect();
        let expected = classes
            .iter()
            .enumerate()
            .find(|(i, _)| mask & (1u8 << *i) == 0)
            .map(|(_, (_, key))| *key);

        assert_eq!(
            schema.check(&present).key(),
            if present.is_empty() {
                Some(MessageKey::PasswordRequired)
            } else {
                expected
            },
            "classes present: {mask:04b}"
        );
    }
}

#[test]
fn test_schema_check_is_total() {
    let catalog = MessageCatalog::default();
    let schemas = [
        name_schema(&catalog),
        email_schema(&catalog),
        password_schema(&catalog),
    ];
    let inputs = [
        String::new(),
        " ".to_string(),
        "\u{0}".to_string(),
        "🦀🦀🦀".to_string(),
        "@".repeat(300),
        "x".repeat(10_000),
    ];
    for schema in &schemas {
        for input in &inputs {
            let result = schema.check(input);
            assert_eq!(result.is_valid(), result.message().is_empty());
        }
    }
}
