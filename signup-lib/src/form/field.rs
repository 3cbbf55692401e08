//! Per-field validation state machine.

use std::fmt;

use log::{debug, trace};

use super::FieldId;
use crate::validation::{FieldSchema, TriggerPolicy, ValidationResult};

/// Observer called with every validation result a field produces.
pub type ValidationListener = Box<dyn FnMut(FieldId, &ValidationResult) + Send>;

/// Raw state of a mounted field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    /// Current text value.
    pub value: String,
    /// Set on the first blur or validation run; never cleared while mounted.
    pub touched: bool,
    /// Internally computed error currently shown (if any).
    pub error: Option<String>,
}

/// Where a field is in its validation lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPhase {
    /// Never blurred or validated. No error is shown.
    Untouched,
    /// Interacted with. `valid` is the outcome of the last schema run
    /// (`false` if the schema has not run yet).
    Touched { valid: bool },
}

/// One schema bound to a trigger policy and the field's state.
///
/// The owner feeds it change and blur events; the validator decides whether
/// those events run the schema. Every run updates the state, notifies the
/// listeners and is returned to the caller.
pub struct FieldValidator {
    id: FieldId,
    schema: FieldSchema,
    initial_policy: TriggerPolicy,
    policy: TriggerPolicy,
    state: FieldState,
    last: Option<ValidationResult>,
    external_error: Option<String>,
    listeners: Vec<ValidationListener>,
}

impl FieldValidator {
    /// Mount a field: empty value, untouched, no error.
    pub fn new(id: FieldId, schema: FieldSchema, policy: TriggerPolicy) -> Self {
        Self {
            id,
            schema,
            initial_policy: policy,
            policy,
            state: FieldState::default(),
            last: None,
            external_error: None,
            listeners: Vec::new(),
        }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn value(&self) -> &str {
        &self.state.value
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    pub fn policy(&self) -> TriggerPolicy {
        self.policy
    }

    pub fn is_touched(&self) -> bool {
        self.state.touched
    }

    /// Result of the last schema run, if any.
    pub fn last_result(&self) -> Option<&ValidationResult> {
        self.last.as_ref()
    }

    /// Whether the last schema run passed. `false` before the first run.
    pub fn is_valid(&self) -> bool {
        self.last.as_ref().is_some_and(ValidationResult::is_valid)
    }

    pub fn phase(&self) -> FieldPhase {
        if self.state.touched {
            FieldPhase::Touched {
                valid: self.is_valid(),
            }
        } else {
            FieldPhase::Untouched
        }
    }

    /// The error to display: an external error overrides the internal one.
    pub fn error(&self) -> Option<&str> {
        self.external_error
            .as_deref()
            .or(self.state.error.as_deref())
    }

    /// [`error`](Self::error), but only once the field has been touched.
    pub fn visible_error(&self) -> Option<&str> {
        if self.state.touched { self.error() } else { None }
    }

    /// Run the schema on `value` without touching any state.
    pub fn check(&self, value: &str) -> ValidationResult {
        self.schema.check(value)
    }

    /// Run the schema on the current value and record the outcome.
    pub fn validate(&mut self) -> ValidationResult {
        let result = self.schema.check(&self.state.value);
        // Values may be passwords; log the outcome only.
        trace!("{}: validated -> {:?}", self.id, result.key());

        if !self.state.touched {
            debug!("{}: touched by validation", self.id);
            self.state.touched = true;
        }
        self.state.error = result.error().map(str::to_string);
        self.last = Some(result.clone());
        self.notify(&result);
        result
    }

    /// Handle a new value typed into the field.
    ///
    /// Returns the result if the policy made the change run the schema.
    /// Otherwise a shown error is hidden until the next trigger, without
    /// re-checking the value.
    pub fn on_change(&mut self, text: impl Into<String>) -> Option<ValidationResult> {
        let text = text.into();
        let changed = text != self.state.value;
        self.state.value = text;

        if self.policy.validate_on_change {
            return Some(self.validate());
        }

        if changed && self.state.touched && self.state.error.is_some() {
            debug!("{}: hiding stale error while typing", self.id);
            self.state.error = None;
        }
        None
    }

    /// Handle focus loss. Always marks the field touched.
    pub fn on_blur(&mut self) -> Option<ValidationResult> {
        if !self.state.touched {
            debug!("{}: touched by blur", self.id);
            self.state.touched = true;
        }

        if self.policy.validate_on_blur {
            Some(self.validate())
        } else {
            None
        }
    }

    /// Replace the trigger policy.
    ///
    /// Turning `validate_on_change` on validates the current value right away.
    pub fn set_policy(&mut self, policy: TriggerPolicy) -> Option<ValidationResult> {
        let enabling = policy.validate_on_change && !self.policy.validate_on_change;
        self.policy = policy;

        if enabling {
            debug!("{}: validate-on-change enabled", self.id);
            Some(self.validate())
        } else {
            None
        }
    }

    /// Switch to validate-on-change and validate now, regardless of touched state.
    pub fn force(&mut self) -> ValidationResult {
        let forced = TriggerPolicy {
            validate_on_change: true,
            ..self.policy
        };
        match self.set_policy(forced) {
            Some(result) => result,
            None => self.validate(),
        }
    }

    /// Show the outcome of a rule evaluated outside this field.
    ///
    /// A failing result becomes the external error; a passing one clears it.
    /// A failure without a message gets the schema's fallback message.
    pub fn apply_external(&mut self, result: &ValidationResult) {
        let result = self.schema.normalize(result);
        self.external_error = result.error().map(str::to_string);
        self.notify(&result);
    }

    /// Subscribe to validation results.
    pub fn on_validation<F>(&mut self, listener: F)
    where
        F: FnMut(FieldId, &ValidationResult) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Back to the freshly mounted state. Listeners are kept.
    pub fn reset(&mut self) {
        self.state = FieldState::default();
        self.policy = self.initial_policy;
        self.last = None;
        self.external_error = None;
    }

    fn notify(&mut self, result: &ValidationResult) {
        let id = self.id;
        for listener in &mut self.listeners {
            listener(id, result);
        }
    }
}

impl fmt::Debug for FieldValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldValidator")
            .field("id", &self.id)
            .field("schema", &self.schema)
            .field("policy", &self.policy)
            .field("state", &self.state)
            .field("last", &self.last)
            .field("external_error", &self.external_error)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn min3(policy: TriggerPolicy) -> FieldValidator {
        let schema = FieldSchema::new()
            .required("required")
            .min_length(3, "too short");
        FieldValidator::new(FieldId::Name, schema, policy)
    }

    #[test]
    fn test_mounts_untouched() {
        let field = min3(TriggerPolicy::on_blur());
        assert_eq!(field.phase(), FieldPhase::Untouched);
        assert_eq!(field.state(), &FieldState::default());
        assert!(!field.is_valid());
        assert_eq!(field.error(), None);
    }

    #[test]
    fn test_change_without_policy_does_not_validate() {
        let mut field = min3(TriggerPolicy::on_blur());
        assert_eq!(field.on_change("ab"), None);
        assert_eq!(field.phase(), FieldPhase::Untouched);
        assert_eq!(field.visible_error(), None);
    }

    #[test]
    fn test_blur_validates_and_touches() {
        let mut field = min3(TriggerPolicy::on_blur());
        field.on_change("ab");
        let result = field.on_blur().unwrap();
        assert_eq!(result.message(), "too short");
        assert_eq!(field.phase(), FieldPhase::Touched { valid: false });
        assert_eq!(field.visible_error(), Some("too short"));

        field.on_change("abc");
        assert_eq!(field.on_blur(), Some(ValidationResult::Valid));
        assert_eq!(field.phase(), FieldPhase::Touched { valid: true });
        assert_eq!(field.visible_error(), None);
    }

    #[test]
    fn test_blur_touches_without_validating_when_disabled() {
        let mut field = min3(TriggerPolicy::manual());
        field.on_change("ab");
        assert_eq!(field.on_blur(), None);
        assert_eq!(field.phase(), FieldPhase::Touched { valid: false });
        assert_eq!(field.last_result(), None);
    }

    #[test]
    fn test_typing_hides_stale_error_without_revalidating() {
        let mut field = min3(TriggerPolicy::on_blur());
        field.on_change("a");
        field.on_blur();
        assert_eq!(field.visible_error(), Some("too short"));

        // Still too short, but the error stays hidden until the next blur.
        assert_eq!(field.on_change("ab"), None);
        assert_eq!(field.visible_error(), None);
        assert_eq!(field.phase(), FieldPhase::Touched { valid: false });

        field.on_blur();
        assert_eq!(field.visible_error(), Some("too short"));
    }

    #[test]
    fn test_same_value_keeps_error() {
        let mut field = min3(TriggerPolicy::on_blur());
        field.on_change("a");
        field.on_blur();
        field.on_change("a");
        assert_eq!(field.visible_error(), Some("too short"));
    }

    #[test]
    fn test_change_policy_validates_every_keystroke() {
        let mut field = min3(TriggerPolicy::on_change());
        assert_eq!(field.on_change("a").unwrap().message(), "too short");
        assert!(field.is_touched());
        assert_eq!(field.on_change("abc"), Some(ValidationResult::Valid));
    }

    #[test]
    fn test_enabling_change_validation_runs_immediately() {
        let mut field = min3(TriggerPolicy::on_blur());
        field.on_change("ab");
        let result = field.set_policy(TriggerPolicy::on_change()).unwrap();
        assert_eq!(result.message(), "too short");
        assert_eq!(field.visible_error(), Some("too short"));

        // Already enabled: no edge, no run.
        assert_eq!(field.set_policy(TriggerPolicy::on_change()), None);
    }

    #[test]
    fn test_force_validates_empty_untouched_field() {
        let mut field = min3(TriggerPolicy::manual());
        assert_eq!(field.force().message(), "required");
        assert!(field.policy().validate_on_change);
        assert_eq!(field.visible_error(), Some("required"));
        // Forcing again still runs.
        assert_eq!(field.force().message(), "required");
    }

    #[test]
    fn test_validate_is_idempotent() {
        let mut field = min3(TriggerPolicy::on_blur());
        field.on_change("xy");
        let first = field.validate();
        let second = field.validate();
        assert_eq!(first, second);
        assert_eq!(field.check("xy"), first);
    }

    #[test]
    fn test_external_error_overrides_internal() {
        let mut field = min3(TriggerPolicy::on_blur());
        field.on_change("a");
        field.on_blur();
        field.apply_external(&ValidationResult::Invalid {
            key: None,
            message: "mismatch".into(),
        });
        assert_eq!(field.error(), Some("mismatch"));
        field.apply_external(&ValidationResult::Valid);
        assert_eq!(field.error(), Some("too short"));
    }

    #[test]
    fn test_external_error_without_message_uses_fallback() {
        let mut field = min3(TriggerPolicy::manual());
        field.apply_external(&ValidationResult::Invalid {
            key: None,
            message: String::new(),
        });
        assert_eq!(field.error(), Some("Error de validación"));
        assert!(field.error().is_some_and(|e| !e.is_empty()));
    }

    #[test]
    fn test_listeners_see_every_run() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut field = min3(TriggerPolicy::on_blur());
        field.on_validation(move |id, result| {
            sink.lock().unwrap().push((id, result.is_valid()));
        });

        field.on_change("ab"); // no run
        field.on_blur();
        field.on_change("abc");
        field.on_blur();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![(FieldId::Name, false), (FieldId::Name, true)]
        );
    }

    #[test]
    fn test_reset_restores_mount_state() {
        let mut field = min3(TriggerPolicy::on_blur());
        field.on_change("ab");
        field.force();
        field.reset();
        assert_eq!(field.phase(), FieldPhase::Untouched);
        assert_eq!(field.value(), "");
        assert_eq!(field.policy(), TriggerPolicy::on_blur());
        assert_eq!(field.last_result(), None);
    }
}
