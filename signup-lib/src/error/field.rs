//! FieldParseError for field names

/// Error type for resolving a form field from its name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field '{name}' (expected one of: name, email, password, confirm)")]
pub struct FieldParseError {
    /// The name that did not match any field.
    pub name: String,
}

impl FieldParseError {
    /// Creates a new unknown field error.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
