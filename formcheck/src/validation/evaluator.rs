//! Evaluation of a single control.

use crate::host::FormHost;

use super::accessor::{display_name, owner_form, validity_state};
use super::lookup::find_error_container;
use super::messages::apply_custom_messages;
use super::registry::FieldRegistry;
use super::result::FieldValidationResult;

/// Accessibility marker toggled on invalid controls.
pub const ARIA_INVALID: &str = "aria-invalid";

/// Validate a single control of `form`.
///
/// Custom messages from the control's field config are installed first (a
/// control without config has any stale custom message cleared), then the
/// control validates itself. The error display and `aria-invalid` marker are
/// updated to match before the snapshot is returned.
pub fn evaluate<H: FormHost>(
    host: &mut H,
    form: H::Node,
    registry: &FieldRegistry<H::Node>,
    control: H::Node,
) -> FieldValidationResult<H::Node> {
    let name = display_name(host, control);

    match host.control_name(control).and_then(|n| registry.get(&n)) {
        Some(config) => apply_custom_messages(host, config, control),
        None => host.set_custom_validity(control, ""),
    }

    let is_valid = host.check_validity(control);
    let validity = validity_state(host, control);
    let message = host.validation_message(control);

    if let Some(error_element) = find_error_container(host, form, control) {
        let text = if is_valid { "" } else { message.as_str() };
        host.set_text_content(error_element, text);
    }

    host.toggle_attribute(control, ARIA_INVALID, !is_valid);

    if is_valid {
        log::debug!("field {name:?} is valid");
    } else {
        log::debug!("field {name:?} is invalid: {message}");
    }

    FieldValidationResult {
        control,
        form: owner_form(host, control),
        validity,
        is_valid,
        name,
        message,
    }
}
