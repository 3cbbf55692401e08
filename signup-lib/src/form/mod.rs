//! Field validators and the registration form that owns them.

mod config;
mod effects;
mod field;
mod id;
mod registration;

pub use config::{FormConfig, PasswordStrength, DEFAULT_SUCCESS_ROUTE};
pub use effects::SubmitEffects;
pub use field::{FieldPhase, FieldState, FieldValidator, ValidationListener};
pub use id::FieldId;
pub use registration::{FieldSnapshot, RegistrationForm};
