//! Message catalog for validation failures.
//!
//! Every failure the schemas can report maps to a [`MessageKey`]. The text
//! shown for a key comes from a [`MessageCatalog`], which defaults to the
//! built-in Spanish set and can be partially overridden from JSON.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Identifies a validation failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageKey {
    NameRequired,
    NameMinLength,
    NameMaxLength,
    NameInvalidCharacters,
    EmailRequired,
    EmailInvalid,
    EmailMaxLength,
    PasswordRequired,
    PasswordMinLength,
    PasswordSimpleMinLength,
    PasswordMaxLength,
    PasswordMissingUppercase,
    PasswordMissingLowercase,
    PasswordMissingDigit,
    PasswordMissingSpecial,
    PasswordConfirmRequired,
    PasswordMismatch,
    /// Fallback for constraints declared with an empty message.
    ValidationFailed,
}

impl MessageKey {
    /// All keys, in catalog order.
    pub const ALL: [MessageKey; 18] = [
        MessageKey::NameRequired,
        MessageKey::NameMinLength,
        MessageKey::NameMaxLength,
        MessageKey::NameInvalidCharacters,
        MessageKey::EmailRequired,
        MessageKey::EmailInvalid,
        MessageKey::EmailMaxLength,
        MessageKey::PasswordRequired,
        MessageKey::PasswordMinLength,
        MessageKey::PasswordSimpleMinLength,
        MessageKey::PasswordMaxLength,
        MessageKey::PasswordMissingUppercase,
        MessageKey::PasswordMissingLowercase,
        MessageKey::PasswordMissingDigit,
        MessageKey::PasswordMissingSpecial,
        MessageKey::PasswordConfirmRequired,
        MessageKey::PasswordMismatch,
        MessageKey::ValidationFailed,
    ];

    /// The configuration name of this key.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::NameRequired => "NAME_REQUIRED",
            MessageKey::NameMinLength => "NAME_MIN_LENGTH",
            MessageKey::NameMaxLength => "NAME_MAX_LENGTH",
            MessageKey::NameInvalidCharacters => "NAME_INVALID_CHARACTERS",
            MessageKey::EmailRequired => "EMAIL_REQUIRED",
            MessageKey::EmailInvalid => "EMAIL_INVALID",
            MessageKey::EmailMaxLength => "EMAIL_MAX_LENGTH",
            MessageKey::PasswordRequired => "PASSWORD_REQUIRED",
            MessageKey::PasswordMinLength => "PASSWORD_MIN_LENGTH",
            MessageKey::PasswordSimpleMinLength => "PASSWORD_SIMPLE_MIN_LENGTH",
            MessageKey::PasswordMaxLength => "PASSWORD_MAX_LENGTH",
            MessageKey::PasswordMissingUppercase => "PASSWORD_MISSING_UPPERCASE",
            MessageKey::PasswordMissingLowercase => "PASSWORD_MISSING_LOWERCASE",
            MessageKey::PasswordMissingDigit => "PASSWORD_MISSING_DIGIT",
            MessageKey::PasswordMissingSpecial => "PASSWORD_MISSING_SPECIAL",
            MessageKey::PasswordConfirmRequired => "PASSWORD_CONFIRM_REQUIRED",
            MessageKey::PasswordMismatch => "PASSWORD_MISMATCH",
            MessageKey::ValidationFailed => "VALIDATION_FAILED",
        }
    }

    /// Built-in text for this key.
    pub fn default_text(&self) -> &'static str {
        match self {
            MessageKey::NameRequired => "El nombre es requerido",
            MessageKey::NameMinLength => "El nombre debe tener al menos 3 caracteres",
            MessageKey::NameMaxLength => "El nombre no puede exceder los 50 caracteres",
            MessageKey::NameInvalidCharacters => "El nombre solo puede contener letras y espacios",
            MessageKey::EmailRequired => "El correo electrónico es requerido",
            MessageKey::EmailInvalid => "El formato del correo electrónico no es válido",
            MessageKey::EmailMaxLength => {
                "El correo electrónico no puede exceder los 255 caracteres"
            }
            MessageKey::PasswordRequired => "La contraseña es requerida",
            MessageKey::PasswordMinLength => "La contraseña debe tener al menos 8 caracteres",
            MessageKey::PasswordSimpleMinLength => {
                "La contraseña debe tener al menos 6 caracteres"
            }
            MessageKey::PasswordMaxLength => "La contraseña no puede exceder los 100 caracteres",
            MessageKey::PasswordMissingUppercase => "Debe contener al menos una letra mayúscula",
            MessageKey::PasswordMissingLowercase => "Debe contener al menos una letra minúscula",
            MessageKey::PasswordMissingDigit => "Debe contener al menos un número",
            MessageKey::PasswordMissingSpecial => "Debe contener al menos un carácter especial",
            MessageKey::PasswordConfirmRequired => "Debes confirmar tu contraseña",
            MessageKey::PasswordMismatch => "Las contraseñas no coinciden",
            MessageKey::ValidationFailed => "Error de validación",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved message: display text plus the key it came from, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub key: Option<MessageKey>,
    pub text: String,
}

impl Message {
    /// Creates a message without a catalog key.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            key: None,
            text: text.into(),
        }
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

/// Text for every [`MessageKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    messages: HashMap<MessageKey, String>,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        let messages = MessageKey::ALL
            .iter()
            .map(|key| (*key, key.default_text().to_string()))
            .collect();
        Self { messages }
    }
}

impl MessageCatalog {
    /// Parse a JSON object of overrides and apply it on top of the defaults.
    ///
    /// Keys must be known message names (`"NAME_REQUIRED"`, ...); keys left
    /// out keep their built-in text.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let overrides: HashMap<MessageKey, String> = serde_json::from_str(json)?;
        let mut catalog = Self::default();
        for (key, text) in overrides {
            catalog.set(key, text)?;
        }
        Ok(catalog)
    }

    /// Load overrides from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        let catalog = Self::from_json(&json)?;
        log::debug!("Loaded message catalog from {}", path.display());
        Ok(catalog)
    }

    /// Replace the text for a key.
    pub fn set(&mut self, key: MessageKey, text: impl Into<String>) -> Result<(), CatalogError> {
        let text = text.into();
        if text.is_empty() {
            return Err(CatalogError::EmptyMessage {
                key: key.to_string(),
            });
        }
        self.messages.insert(key, text);
        Ok(())
    }

    /// Text for a key.
    pub fn get(&self, key: MessageKey) -> &str {
        self.messages
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| key.default_text())
    }

    /// Resolve a key into a [`Message`].
    pub fn message(&self, key: MessageKey) -> Message {
        Message {
            key: Some(key),
            text: self.get(key).to_string(),
        }
    }
}
