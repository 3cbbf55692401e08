/// Side effects of an accepted submit.
///
/// Called by [`RegistrationForm::attempt_submit`](super::RegistrationForm::attempt_submit)
/// only when every field and the confirmation rule are valid: first
/// `navigate`, then `haptic_pulse`.
pub trait SubmitEffects {
    /// Move to the screen shown after registration.
    fn navigate(&mut self, route: &str);

    /// Short tactile confirmation.
    fn haptic_pulse(&mut self);
}
