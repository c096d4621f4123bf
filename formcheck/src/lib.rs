//! Form validation on top of native constraint validation.
//!
//! A [`FormController`](validation::FormController) layers per-field custom
//! messages and field kinds over whatever the host reports natively, updates
//! error displays and `aria-invalid` markers, and audits the form's
//! accessibility wiring. The host document is reached only through the
//! [`FormHost`](host::FormHost) trait.

pub mod error;
pub mod host;
pub mod validation;

pub use error::FormError;
pub use host::{FormHost, ValiditySnapshot};

pub mod prelude {
    pub use crate::error::FormError;
    pub use crate::host::{FormHost, ValiditySnapshot};
    pub use crate::validation::{
        create_controller, FieldBuilder, FieldKind, FieldValidationResult, FormController,
        FormValidationResult, IssueKind, StructureCheckResult, StructureIssue, ValidationMode,
    };
}
