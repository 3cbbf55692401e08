use serde::{Deserialize, Serialize};

/// When a field runs its schema.
///
/// Supplied by the field's owner. The field validator only reads it, except
/// when the owner forces validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerPolicy {
    /// Validate when the field loses focus.
    pub validate_on_blur: bool,
    /// Validate on every change of the value.
    pub validate_on_change: bool,
}

impl Default for TriggerPolicy {
    fn default() -> Self {
        Self::on_blur()
    }
}

impl TriggerPolicy {
    /// Validate on blur only (default).
    pub const fn on_blur() -> Self {
        Self {
            validate_on_blur: true,
            validate_on_change: false,
        }
    }

    /// Validate on every change.
    pub const fn on_change() -> Self {
        Self {
            validate_on_blur: true,
            validate_on_change: true,
        }
    }

    /// Never validate on its own; only when forced or fed from outside.
    pub const fn manual() -> Self {
        Self {
            validate_on_blur: false,
            validate_on_change: false,
        }
    }
}
