//! The registration form: four fields, one cross-field rule, one submit gate.

use std::collections::BTreeMap;

use log::{debug, info};

use super::{FieldId, FieldValidator, FormConfig, PasswordStrength, SubmitEffects};
use crate::validation::{
    email_schema, name_schema, password_schema, simple_password_schema, ConfirmationRule,
    FieldError, FieldSchema, TriggerPolicy, ValidationResult,
};

/// What the presentation layer renders for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub field: FieldId,
    pub value: String,
    pub is_valid: bool,
    /// Error to display; `None` until the field is touched.
    pub error: Option<String>,
}

/// Orchestrates the name, email, password and confirmation fields.
///
/// Field results are folded into an aggregate validity map as they are
/// produced, and the submit gate is a reduction over that map. The
/// confirmation field has no schema of its own: its error comes from the
/// [`ConfirmationRule`], re-run whenever the password or the confirmation
/// changes.
///
/// # Example
///
/// ```
/// use signup_lib::{FieldId, RegistrationForm, SubmitEffects};
///
/// struct Noop;
/// impl SubmitEffects for Noop {
///     fn navigate(&mut self, _route: &str) {}
///     fn haptic_pulse(&mut self) {}
/// }
///
/// let mut form = RegistrationForm::default();
/// form.change(FieldId::Name, "Ana");
/// form.change(FieldId::Email, "ana@example.com");
/// form.change(FieldId::Password, "Abcd123!");
/// form.change(FieldId::ConfirmPassword, "Abcd123!");
/// assert!(form.attempt_submit(&mut Noop));
/// ```
#[derive(Debug)]
pub struct RegistrationForm {
    name: FieldValidator,
    email: FieldValidator,
    password: FieldValidator,
    confirm: FieldValidator,
    confirmation: ConfirmationRule,
    validity: BTreeMap<FieldId, bool>,
    confirmation_valid: bool,
    success_route: String,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

impl RegistrationForm {
    /// Mount the form with every field empty and untouched.
    pub fn new(config: FormConfig) -> Self {
        let catalog = &config.catalog;
        let password = match config.password_strength {
            PasswordStrength::Strong => password_schema(catalog),
            PasswordStrength::Simple => simple_password_schema(catalog),
        };

        Self {
            name: FieldValidator::new(
                FieldId::Name,
                name_schema(catalog),
                config.policy(FieldId::Name),
            ),
            email: FieldValidator::new(
                FieldId::Email,
                email_schema(catalog),
                config.policy(FieldId::Email),
            ),
            password: FieldValidator::new(
                FieldId::Password,
                password,
                config.policy(FieldId::Password),
            ),
            confirm: FieldValidator::new(
                FieldId::ConfirmPassword,
                FieldSchema::with_catalog(catalog),
                config.policy(FieldId::ConfirmPassword),
            ),
            confirmation: ConfirmationRule::new(catalog),
            validity: FieldId::ALL.into_iter().map(|id| (id, false)).collect(),
            confirmation_valid: false,
            success_route: config.success_route,
        }
    }

    pub fn field(&self, id: FieldId) -> &FieldValidator {
        match id {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
            FieldId::ConfirmPassword => &self.confirm,
        }
    }

    fn field_mut(&mut self, id: FieldId) -> &mut FieldValidator {
        match id {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Password => &mut self.password,
            FieldId::ConfirmPassword => &mut self.confirm,
        }
    }

    /// Subscribe to a field's validation results.
    pub fn on_validation<F>(&mut self, id: FieldId, listener: F)
    where
        F: FnMut(FieldId, &ValidationResult) + Send + 'static,
    {
        self.field_mut(id).on_validation(listener);
    }

    /// Handle a keystroke in `id`.
    ///
    /// The field's own validation (if its policy runs one) is recorded before
    /// the confirmation rule is re-evaluated.
    pub fn change(&mut self, id: FieldId, text: impl Into<String>) {
        if let Some(result) = self.field_mut(id).on_change(text) {
            self.record(id, &result);
        }

        match id {
            FieldId::Password if !self.confirm.value().is_empty() => {
                self.check_confirmation();
            }
            FieldId::ConfirmPassword => {
                self.check_confirmation();
            }
            _ => {}
        }
    }

    /// Handle focus loss on `id`.
    pub fn blur(&mut self, id: FieldId) {
        if let Some(result) = self.field_mut(id).on_blur() {
            self.record(id, &result);
        }
    }

    /// Replace a field's trigger policy.
    pub fn set_policy(&mut self, id: FieldId, policy: TriggerPolicy) {
        if let Some(result) = self.field_mut(id).set_policy(policy) {
            self.record(id, &result);
        }
    }

    /// Validate every field now, touched or not, then re-run the
    /// confirmation rule. Fields stay in validate-on-change afterwards.
    pub fn force_validate_all(&mut self) {
        debug!("Forcing validation of all fields");
        for id in FieldId::ALL {
            let result = self.field_mut(id).force();
            self.record(id, &result);
        }
        self.check_confirmation();
    }

    /// Force validation and, if everything passes, run the success effects.
    ///
    /// Returns `false` without side effects otherwise; each failing field
    /// keeps its error visible.
    pub fn attempt_submit(&mut self, effects: &mut dyn SubmitEffects) -> bool {
        self.force_validate_all();

        if !self.is_valid() {
            info!("Submit blocked: {} field(s) invalid", self.errors().len());
            return false;
        }

        info!("Submit accepted, navigating to {}", self.success_route);
        effects.navigate(&self.success_route);
        effects.haptic_pulse();
        true
    }

    /// Re-run the confirmation rule against the current values.
    pub fn check_confirmation(&mut self) -> ValidationResult {
        let result = self
            .confirmation
            .check(self.password.value(), self.confirm.value());
        self.confirm.apply_external(&result);
        self.confirmation_valid = result.is_valid();

        let own = self
            .confirm
            .last_result()
            .is_none_or(ValidationResult::is_valid);
        self.validity
            .insert(FieldId::ConfirmPassword, own && self.confirmation_valid);
        result
    }

    /// Whether a field is currently valid, from the aggregate state.
    pub fn is_field_valid(&self, id: FieldId) -> bool {
        self.validity.get(&id).copied().unwrap_or(false)
    }

    /// The submit gate: every entry of the aggregate map is valid.
    pub fn is_valid(&self) -> bool {
        self.validity.values().all(|valid| *valid)
    }

    /// Current errors, one per failing field, in form order.
    pub fn errors(&self) -> Vec<FieldError> {
        FieldId::ALL
            .into_iter()
            .filter_map(|id| {
                self.field(id).error().map(|message| FieldError {
                    field: id,
                    message: message.to_string(),
                })
            })
            .collect()
    }

    /// `(value, is_valid, error)` for every field, in form order.
    pub fn snapshot(&self) -> Vec<FieldSnapshot> {
        FieldId::ALL
            .into_iter()
            .map(|id| {
                let field = self.field(id);
                FieldSnapshot {
                    field: id,
                    value: field.value().to_string(),
                    is_valid: self.is_field_valid(id),
                    error: field.visible_error().map(str::to_string),
                }
            })
            .collect()
    }

    /// Discard all field state, as if the form were remounted.
    pub fn reset(&mut self) {
        debug!("Resetting registration form");
        for id in FieldId::ALL {
            self.field_mut(id).reset();
        }
        self.validity.values_mut().for_each(|valid| *valid = false);
        self.confirmation_valid = false;
    }

    // The confirmation entry also requires the cross-field rule to pass.
    fn record(&mut self, id: FieldId, result: &ValidationResult) {
        let valid = match id {
            FieldId::ConfirmPassword => result.is_valid() && self.confirmation_valid,
            _ => result.is_valid(),
        };
        self.validity.insert(id, valid);
    }
}
