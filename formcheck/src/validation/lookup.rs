//! Locating the label and error display that belong to a control.

use crate::host::FormHost;

/// Attribute tagging an element as the error display for a named control.
pub const ERROR_FOR_ATTR: &str = "data-error-for";

/// The control's label: `<label for=id>` inside the form, else a wrapping `<label>`.
pub fn find_label<H: FormHost>(host: &H, form: H::Node, control: H::Node) -> Option<H::Node> {
    if let Some(id) = host.control_id(control) {
        if let Some(label) = host.label_for(form, &id) {
            return Some(label);
        }
    }

    host.closest(control, "label")
}

/// The control's error display.
///
/// The element right after the control's parent wins if it is an alert or is
/// tagged for this control's name. Otherwise any element in the form tagged
/// for the name is used.
pub fn find_error_container<H: FormHost>(
    host: &H,
    form: H::Node,
    control: H::Node,
) -> Option<H::Node> {
    let name = host.control_name(control);

    if let Some(candidate) = host.parent(control).and_then(|p| host.next_element_sibling(p)) {
        let is_alert = host.attribute(candidate, "role").as_deref() == Some("alert");
        let tagged = name.is_some() && host.attribute(candidate, ERROR_FOR_ATTR) == name;
        if is_alert || tagged {
            return Some(candidate);
        }
    }

    name.and_then(|name| host.query_attribute(form, ERROR_FOR_ATTR, &name))
}
