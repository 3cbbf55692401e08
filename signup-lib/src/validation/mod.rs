//! Field validation rules.
//!
//! A [`FieldSchema`] is an ordered list of constraints built with a fluent
//! API. Checking a value stops at the first failing constraint and reports
//! its message, so declaration order decides which error a user sees.
//!
//! # Example
//!
//! ```
//! use signup_lib::validation::FieldSchema;
//!
//! let schema = FieldSchema::new()
//!     .required("Username is required")
//!     .min_length(3, "Username must be at least 3 characters");
//!
//! assert!(schema.check("bob").is_valid());
//! assert_eq!(schema.check("").message(), "Username is required");
//! ```

mod cross_field;
mod policy;
mod result;
mod schema;
mod schemas;

pub use cross_field::ConfirmationRule;
pub use policy::TriggerPolicy;
pub use result::{FieldError, ValidationResult};
pub use schema::{Constraint, FieldSchema};
pub use schemas::{
    email_schema, name_schema, password_schema, simple_password_schema, EMAIL_MAX_LENGTH,
    NAME_MAX_LENGTH, NAME_MIN_LENGTH, PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH,
    SIMPLE_PASSWORD_MIN_LENGTH,
};
