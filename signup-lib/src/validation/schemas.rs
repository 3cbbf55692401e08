//! Built-in schemas for the registration fields.

use super::schema::FieldSchema;
use crate::messages::{MessageCatalog, MessageKey};

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 50;
pub const EMAIL_MAX_LENGTH: usize = 255;
pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 100;
pub const SIMPLE_PASSWORD_MIN_LENGTH: usize = 6;

/// Display name: 3..=50 letters and spaces.
pub fn name_schema(catalog: &MessageCatalog) -> FieldSchema {
    FieldSchema::with_catalog(catalog)
        .required(catalog.message(MessageKey::NameRequired))
        .min_length(NAME_MIN_LENGTH, catalog.message(MessageKey::NameMinLength))
        .max_length(NAME_MAX_LENGTH, catalog.message(MessageKey::NameMaxLength))
        .letters_and_spaces(catalog.message(MessageKey::NameInvalidCharacters))
}

/// Email address, at most 255 characters.
pub fn email_schema(catalog: &MessageCatalog) -> FieldSchema {
    FieldSchema::with_catalog(catalog)
        .required(catalog.message(MessageKey::EmailRequired))
        .email(catalog.message(MessageKey::EmailInvalid))
        .max_length(EMAIL_MAX_LENGTH, catalog.message(MessageKey::EmailMaxLength))
}

/// Strong password: 8..=100 characters with an uppercase letter, a lowercase
/// letter, a digit and a special character, checked in that order.
pub fn password_schema(catalog: &MessageCatalog) -> FieldSchema {
    password_length(catalog, PASSWORD_MIN_LENGTH, MessageKey::PasswordMinLength)
        .contains_any(
            |c| c.is_ascii_uppercase(),
            catalog.message(MessageKey::PasswordMissingUppercase),
        )
        .contains_any(
            |c| c.is_ascii_lowercase(),
            catalog.message(MessageKey::PasswordMissingLowercase),
        )
        .contains_any(
            |c| c.is_ascii_digit(),
            catalog.message(MessageKey::PasswordMissingDigit),
        )
        .contains_any(
            |c| !c.is_ascii_alphanumeric(),
            catalog.message(MessageKey::PasswordMissingSpecial),
        )
}

/// Length-only password: 6..=100 characters.
pub fn simple_password_schema(catalog: &MessageCatalog) -> FieldSchema {
    password_length(
        catalog,
        SIMPLE_PASSWORD_MIN_LENGTH,
        MessageKey::PasswordSimpleMinLength,
    )
}

// Empty input is the "too short" case reported as PASSWORD_REQUIRED.
fn password_length(catalog: &MessageCatalog, min: usize, min_key: MessageKey) -> FieldSchema {
    FieldSchema::with_catalog(catalog)
        .rule(|v| !v.is_empty(), catalog.message(MessageKey::PasswordRequired))
        .min_length(min, catalog.message(min_key))
        .max_length(PASSWORD_MAX_LENGTH, catalog.message(MessageKey::PasswordMaxLength))
}
