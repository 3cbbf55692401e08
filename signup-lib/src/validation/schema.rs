//! Schema builder for fluent rule declaration.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::result::ValidationResult;
use crate::messages::{Message, MessageCatalog, MessageKey};

// Letters plus combining marks, so decomposed accents ("e\u{301}") are accepted.
static LETTERS_AND_SPACES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{Alphabetic}\p{M} ]*$").expect("Invalid regex pattern")
});

/// Type alias for constraint predicates.
type Predicate = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// A single rule: a pure predicate plus the message reported when it fails.
pub struct Constraint {
    predicate: Predicate,
    message: Message,
}

impl Constraint {
    /// Create a constraint from a predicate and its failure message.
    pub fn new<F>(predicate: F, message: impl Into<Message>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Box::new(predicate),
            message: message.into(),
        }
    }

    /// Check if the value satisfies this constraint.
    pub fn holds(&self, value: &str) -> bool {
        (self.predicate)(value)
    }

    /// The failure message.
    pub fn message(&self) -> &Message {
        &self.message
    }
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Ordered constraints for one field.
///
/// # Example
///
/// ```
/// use signup_lib::validation::FieldSchema;
///
/// let schema = FieldSchema::new()
///     .required("Email is required")
///     .email("Invalid email format");
///
/// assert_eq!(schema.check("nope").message(), "Invalid email format");
/// ```
#[derive(Debug)]
pub struct FieldSchema {
    constraints: Vec<Constraint>,
    fallback: Message,
}

impl Default for FieldSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldSchema {
    /// Create an empty schema. An empty schema accepts every value.
    pub fn new() -> Self {
        Self {
            constraints: Vec::new(),
            fallback: Message {
                key: Some(MessageKey::ValidationFailed),
                text: MessageKey::ValidationFailed.default_text().to_string(),
            },
        }
    }

    /// Create an empty schema whose fallback message comes from `catalog`.
    pub fn with_catalog(catalog: &MessageCatalog) -> Self {
        Self {
            constraints: Vec::new(),
            fallback: catalog.message(MessageKey::ValidationFailed),
        }
    }

    /// Append a prebuilt constraint.
    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Add a custom rule.
    pub fn rule<F>(self, f: F, msg: impl Into<Message>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.constraint(Constraint::new(f, msg))
    }

    /// Require the field to be non-blank.
    pub fn required(self, msg: impl Into<Message>) -> Self {
        self.rule(|v| !v.trim().is_empty(), msg)
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<Message>) -> Self {
        self.rule(move |v| v.chars().count() >= min, msg)
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, msg: impl Into<Message>) -> Self {
        self.rule(move |v| v.chars().count() <= max, msg)
    }

    /// Require the value to match a compiled regex.
    pub fn matches(self, re: Regex, msg: impl Into<Message>) -> Self {
        self.rule(move |v| re.is_match(v), msg)
    }

    /// Require the value to match a regex pattern.
    pub fn pattern(self, pattern: &str, msg: impl Into<Message>) -> Result<Self, regex::Error> {
        let re = Regex::new(pattern)?;
        Ok(self.matches(re, msg))
    }

    /// Require a valid `local@domain.tld` email address.
    pub fn email(self, msg: impl Into<Message>) -> Self {
        self.rule(
            |v| {
                if v.is_empty() {
                    true // Empty is valid; use required() for non-empty
                } else {
                    is_email(v)
                }
            },
            msg,
        )
    }

    /// Require every character to be a letter (any script), a combining mark
    /// or a space.
    pub fn letters_and_spaces(self, msg: impl Into<Message>) -> Self {
        self.rule(|v| LETTERS_AND_SPACES.is_match(v), msg)
    }

    /// Require at least one character matching `class`.
    pub fn contains_any<F>(self, class: F, msg: impl Into<Message>) -> Self
    where
        F: Fn(char) -> bool + Send + Sync + 'static,
    {
        self.rule(move |v| v.chars().any(&class), msg)
    }

    /// Number of constraints.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Check if the schema has no constraints.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Check a value, reporting the first failing constraint.
    pub fn check(&self, value: &str) -> ValidationResult {
        match self.constraints.iter().find(|c| !c.holds(value)) {
            None => ValidationResult::Valid,
            Some(failed) if failed.message.text.is_empty() => {
                ValidationResult::invalid(self.fallback.clone())
            }
            Some(failed) => ValidationResult::invalid(failed.message.clone()),
        }
    }

    /// Replace an empty failure message with this schema's fallback.
    pub fn normalize(&self, result: &ValidationResult) -> ValidationResult {
        match result {
            ValidationResult::Invalid { message, .. } if message.is_empty() => {
                ValidationResult::invalid(self.fallback.clone())
            }
            other => other.clone(),
        }
    }

    /// Check a value and return every failing message, in declaration order.
    pub fn violations(&self, value: &str) -> Vec<&Message> {
        self.constraints
            .iter()
            .filter(|c| !c.holds(value))
            .map(|c| {
                if c.message.text.is_empty() {
                    &self.fallback
                } else {
                    &c.message
                }
            })
            .collect()
    }
}

/// The domain must contain a dot with something on both sides.
fn is_email(value: &str) -> bool {
    if !email_address::EmailAddress::is_valid(value) {
        return false;
    }
    match value.rsplit_once('@') {
        Some((_, domain)) => domain
            .split_once('.')
            .is_some_and(|(head, tail)| !head.is_empty() && !tail.is_empty() && !tail.ends_with('.')),
        None => false,
    }
}
