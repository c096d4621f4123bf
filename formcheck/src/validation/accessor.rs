//! Reads of a control's owning form and native validity.

use crate::host::{FormHost, ValiditySnapshot};

/// The form that owns `control`, if it is attached to one.
pub fn owner_form<H: FormHost>(host: &H, control: H::Node) -> Option<H::Node> {
    host.owner_form(control)
}

/// Current native validity flags of `control`.
pub fn validity_state<H: FormHost>(host: &H, control: H::Node) -> ValiditySnapshot {
    host.validity(control)
}

/// Name used in results: the control's `name`, falling back to its `id`.
pub fn display_name<H: FormHost>(host: &H, control: H::Node) -> Option<String> {
    host.control_name(control).or_else(|| host.control_id(control))
}
