use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::FieldId;
use crate::messages::MessageCatalog;
use crate::validation::TriggerPolicy;

/// Route passed to [`SubmitEffects::navigate`](super::SubmitEffects::navigate) by default.
pub const DEFAULT_SUCCESS_ROUTE: &str = "/DashboardScreen";

/// Which password schema the form uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordStrength {
    /// Length plus upper, lower, digit and special character.
    #[default]
    Strong,
    /// Length only.
    Simple,
}

/// Configuration for a [`RegistrationForm`](super::RegistrationForm).
#[derive(Debug, Clone)]
pub struct FormConfig {
    pub catalog: MessageCatalog,
    pub password_strength: PasswordStrength,
    pub success_route: String,
    policies: BTreeMap<FieldId, TriggerPolicy>,
}

impl Default for FormConfig {
    fn default() -> Self {
        let policies = FieldId::ALL
            .into_iter()
            .map(|id| (id, default_policy(id)))
            .collect();
        Self {
            catalog: MessageCatalog::default(),
            password_strength: PasswordStrength::default(),
            success_route: DEFAULT_SUCCESS_ROUTE.to_string(),
            policies,
        }
    }
}

// The confirmation field is driven by the cross-field rule, not by its own triggers.
fn default_policy(id: FieldId) -> TriggerPolicy {
    match id {
        FieldId::ConfirmPassword => TriggerPolicy::manual(),
        _ => TriggerPolicy::on_blur(),
    }
}

impl FormConfig {
    pub fn with_catalog(mut self, catalog: MessageCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_password_strength(mut self, strength: PasswordStrength) -> Self {
        self.password_strength = strength;
        self
    }

    pub fn with_success_route(mut self, route: impl Into<String>) -> Self {
        self.success_route = route.into();
        self
    }

    pub fn with_policy(mut self, id: FieldId, policy: TriggerPolicy) -> Self {
        self.policies.insert(id, policy);
        self
    }

    /// Initial trigger policy for a field.
    pub fn policy(&self, id: FieldId) -> TriggerPolicy {
        self.policies
            .get(&id)
            .copied()
            .unwrap_or_else(|| default_policy(id))
    }
}
