//! Host document capabilities consumed by the validator.
//!
//! The validator never builds or destroys nodes. It only reads structure and
//! validity, and mutates three things: a control's custom validity message,
//! the `aria-invalid` marker, and the text of error display elements.

mod document;

use std::fmt::Debug;
use std::hash::Hash;

/// Snapshot of a control's native validity flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValiditySnapshot {
    pub value_missing: bool,
    pub type_mismatch: bool,
    pub pattern_mismatch: bool,
    pub too_long: bool,
    pub too_short: bool,
    pub range_underflow: bool,
    pub range_overflow: bool,
    pub step_mismatch: bool,
    pub bad_input: bool,
    pub custom_error: bool,
    /// Overall determination, including any custom message.
    pub valid: bool,
}

impl Default for ValiditySnapshot {
    /// The empty snapshot: no flags raised, valid.
    fn default() -> Self {
        Self {
            value_missing: false,
            type_mismatch: false,
            pattern_mismatch: false,
            too_long: false,
            too_short: false,
            range_underflow: false,
            range_overflow: false,
            step_mismatch: false,
            bad_input: false,
            custom_error: false,
            valid: true,
        }
    }
}

/// A document that hosts forms.
///
/// Handles are plain copyable values; every method must be total and answer
/// `None`/empty for handles the host does not know.
pub trait FormHost {
    /// Handle to an element in the document.
    type Node: Copy + Eq + Hash + Debug;

    // Enumeration

    /// All input/select/textarea controls of `form`, in document order.
    fn form_controls(&self, form: Self::Node) -> Vec<Self::Node>;

    /// Controls of `form` whose `name` is exactly `name`, in document order.
    fn controls_named(&self, form: Self::Node, name: &str) -> Vec<Self::Node> {
        self.form_controls(form)
            .into_iter()
            .filter(|&c| self.control_name(c).as_deref() == Some(name))
            .collect()
    }

    // Control reads

    fn owner_form(&self, control: Self::Node) -> Option<Self::Node>;

    /// Non-empty `name` of the control.
    fn control_name(&self, control: Self::Node) -> Option<String>;

    /// Non-empty `id` of the control.
    fn control_id(&self, control: Self::Node) -> Option<String>;

    /// Control type as a browser reports it (`text`, `checkbox`, `select-one`, ...).
    fn control_type(&self, control: Self::Node) -> Option<String>;

    fn is_checked(&self, control: Self::Node) -> bool;

    fn validity(&self, control: Self::Node) -> ValiditySnapshot;

    /// Effective validation message; empty when the control is valid.
    fn validation_message(&self, control: Self::Node) -> String;

    // Control mutation

    /// Install a custom validity message. An empty message clears it.
    fn set_custom_validity(&mut self, control: Self::Node, message: &str);

    /// Run native and custom validation together.
    fn check_validity(&mut self, control: Self::Node) -> bool;

    // Structure

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    fn next_element_sibling(&self, node: Self::Node) -> Option<Self::Node>;

    /// Nearest inclusive ancestor with the given tag.
    fn closest(&self, node: Self::Node, tag: &str) -> Option<Self::Node>;

    fn attribute(&self, node: Self::Node, name: &str) -> Option<String>;

    /// First descendant of `root` with `attr` equal to `value`.
    fn query_attribute(&self, root: Self::Node, attr: &str, value: &str) -> Option<Self::Node>;

    /// First `<label for=id>` under `root`.
    fn label_for(&self, root: Self::Node, id: &str) -> Option<Self::Node>;

    // Markers

    fn toggle_attribute(&mut self, node: Self::Node, name: &str, force: bool);

    fn set_text_content(&mut self, node: Self::Node, text: &str);
}
