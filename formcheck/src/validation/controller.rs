//! The per-form validation controller.

use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::host::FormHost;

use super::evaluator::evaluate;
use super::registry::{FieldBuilder, FieldRegistry};
use super::result::{FieldValidationResult, FormValidationResult, StructureCheckResult};
use super::structure::audit;

/// When the host is expected to call [`FormController::validate`].
///
/// The controller registers no listeners itself; the mode is advisory for the
/// code that wires it to submit, change or blur events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationMode {
    #[default]
    OnSubmit,
    OnChange,
    OnBlur,
}

/// Validation state for one form.
///
/// The controller owns its field registry and only a handle to the form; the
/// host document is passed into each call.
#[derive(Debug, Clone)]
pub struct FormController<N> {
    form: N,
    mode: ValidationMode,
    registry: FieldRegistry<N>,
}

/// Create a controller for `form` without auditing it.
pub fn create_controller<N: Copy + Eq + Hash + Debug>(
    form: N,
    mode: ValidationMode,
) -> FormController<N> {
    FormController::new(form, mode)
}

impl<N: Copy + Eq + Hash + Debug> FormController<N> {
    pub fn new(form: N, mode: ValidationMode) -> Self {
        Self {
            form,
            mode,
            registry: FieldRegistry::new(),
        }
    }

    /// Create a controller and audit the form, logging a warning for every
    /// structural issue. Issues never prevent construction.
    pub fn attach<H: FormHost<Node = N>>(host: &H, form: N, mode: ValidationMode) -> Self {
        let controller = Self::new(form, mode);
        let structure = controller.check_structure(host);

        if !structure.is_ok {
            log::warn!(
                "form {form:?} has {} structural issue(s)",
                structure.issues.len()
            );
            for issue in &structure.issues {
                log::warn!("  {issue}");
            }
        }

        controller
    }

    pub fn form(&self) -> N {
        self.form
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    pub fn registry(&self) -> &FieldRegistry<N> {
        &self.registry
    }

    /// Declare rules for the field called `name`.
    ///
    /// Repeated calls return a builder over the same config, so settings
    /// accumulate. Fails if the form has no control with that name.
    pub fn field<H: FormHost<Node = N>>(
        &mut self,
        host: &H,
        name: &str,
    ) -> Result<FieldBuilder<'_, N>, FormError> {
        let controls = if self.registry.contains(name) {
            Vec::new()
        } else {
            let controls = host.controls_named(self.form, name);
            if controls.is_empty() {
                return Err(FormError::field_not_found(name));
            }
            log::debug!("registered field {name:?} over {} control(s)", controls.len());
            controls
        };

        Ok(FieldBuilder::new(self.registry.register(name, controls)))
    }

    /// Evaluate every control of the form in document order.
    pub fn validate<H: FormHost<Node = N>>(&self, host: &mut H) -> FormValidationResult<N> {
        let fields = host
            .form_controls(self.form)
            .into_iter()
            .map(|control| evaluate(host, self.form, &self.registry, control))
            .collect();

        let result = FormValidationResult::from_fields(fields);
        log::debug!(
            "validated {} control(s), form valid: {}",
            result.fields.len(),
            result.is_valid
        );
        result
    }

    /// Evaluate a single control, e.g. when it loses focus.
    pub fn evaluate_one<H: FormHost<Node = N>>(
        &self,
        host: &mut H,
        control: N,
    ) -> FieldValidationResult<N> {
        evaluate(host, self.form, &self.registry, control)
    }

    /// Audit labels and error displays of the form.
    pub fn check_structure<H: FormHost<Node = N>>(&self, host: &H) -> StructureCheckResult<N> {
        audit(host, self.form)
    }
}
