//! Registration form validation
//!
//! Declarative rule schemas, per-field trigger policies with touched-state
//! tracking, the password confirmation rule, and the submit gate that ties
//! the four registration fields together.

pub mod error;
pub mod form;
pub mod messages;
pub mod validation;

pub use form::{FieldId, FormConfig, RegistrationForm, SubmitEffects};
pub use messages::{MessageCatalog, MessageKey};
pub use validation::{FieldSchema, TriggerPolicy, ValidationResult};
