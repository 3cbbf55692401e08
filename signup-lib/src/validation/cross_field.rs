//! Password confirmation rule.

use super::result::ValidationResult;
use crate::messages::{Message, MessageCatalog, MessageKey};

/// Checks that a confirmation field repeats the password exactly.
///
/// The result depends on both values, so it has to be re-run whenever
/// either of them changes.
#[derive(Debug, Clone)]
pub struct ConfirmationRule {
    required: Message,
    mismatch: Message,
}

impl ConfirmationRule {
    /// Build the rule with messages from `catalog`.
    pub fn new(catalog: &MessageCatalog) -> Self {
        Self {
            required: catalog.message(MessageKey::PasswordConfirmRequired),
            mismatch: catalog.message(MessageKey::PasswordMismatch),
        }
    }

    pub fn check(&self, password: &str, confirmation: &str) -> ValidationResult {
        if confirmation.is_empty() {
            ValidationResult::invalid(self.required.clone())
        } else if password != confirmation {
            ValidationResult::invalid(self.mismatch.clone())
        } else {
            ValidationResult::Valid
        }
    }
}

impl Default for ConfirmationRule {
    fn default() -> Self {
        Self::new(&MessageCatalog::default())
    }
}
