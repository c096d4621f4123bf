//! Error types

/// Errors raised while declaring field rules.
///
/// Validation itself never fails; an invalid field is reported through
/// [`FieldValidationResult`](crate::validation::FieldValidationResult).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// No control with this name exists in the form.
    #[error("field \"{name}\" not found in form")]
    FieldNotFound { name: String },
}

impl FormError {
    pub fn field_not_found(name: impl Into<String>) -> Self {
        Self::FieldNotFound { name: name.into() }
    }
}
