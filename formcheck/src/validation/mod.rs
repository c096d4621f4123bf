//! Form validation controller.
//!
//! This module layers custom messages and field kinds on top of the host's
//! native constraint validation, and audits the accessibility wiring of a form.
//!
//! # Example
//!
//! ```
//! use formcheck::validation::{FormController, ValidationMode};
//! use formdom::{Document, Element};
//!
//! let (mut doc, form) = Document::from_element(
//!     Element::form().children([
//!         Element::label("Name").label_for("name"),
//!         Element::input("text").id("name").name("name").required(),
//!         Element::div().role("alert").error_for("name"),
//!     ]),
//! );
//!
//! let mut controller = FormController::attach(&doc, form, ValidationMode::OnSubmit);
//! controller
//!     .field(&doc, "name")?
//!     .as_text()
//!     .required("Enter a name");
//!
//! let result = controller.validate(&mut doc);
//! assert!(!result.is_valid);
//! assert_eq!(result.fields[0].message, "Enter a name");
//! # Ok::<(), formcheck::FormError>(())
//! ```

mod accessor;
mod controller;
mod evaluator;
mod lookup;
mod messages;
mod registry;
mod result;
mod structure;

pub use accessor::{display_name, owner_form, validity_state};
pub use controller::{create_controller, FormController, ValidationMode};
pub use evaluator::{evaluate, ARIA_INVALID};
pub use lookup::{find_error_container, find_label, ERROR_FOR_ATTR};
pub use messages::{apply_custom_messages, checkbox_minimum};
pub use registry::{FieldBuilder, FieldConfig, FieldKind, FieldMessages, FieldRegistry};
pub use result::{
    FieldValidationResult, FormValidationResult, IssueKind, StructureCheckResult, StructureIssue,
};
pub use structure::audit;
