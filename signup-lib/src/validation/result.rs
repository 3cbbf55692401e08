use crate::form::FieldId;
use crate::messages::{Message, MessageKey};

/// Result of checking a value against a schema or rule.
///
/// `Invalid` always carries a non-empty message, so a result is valid
/// exactly when its message is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// The value satisfied every constraint.
    #[default]
    Valid,
    /// The first violated constraint.
    Invalid {
        key: Option<MessageKey>,
        message: String,
    },
}

impl ValidationResult {
    pub(crate) fn invalid(message: Message) -> Self {
        Self::Invalid {
            key: message.key,
            message: message.text,
        }
    }

    /// Check if the value passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if the value failed.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// The failure message, or `""` when valid.
    pub fn message(&self) -> &str {
        match self {
            Self::Valid => "",
            Self::Invalid { message, .. } => message,
        }
    }

    /// The failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid { message, .. } => Some(message),
        }
    }

    /// The catalog key of the failure, if it came from the catalog.
    pub fn key(&self) -> Option<MessageKey> {
        match self {
            Self::Valid => None,
            Self::Invalid { key, .. } => *key,
        }
    }
}

/// Information about a single field that is currently invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The field that failed.
    pub field: FieldId,
    /// Error message.
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
