//! Installs custom validity messages according to a field's config.

use crate::host::FormHost;

use super::registry::{FieldConfig, FieldKind};

/// Minimum number of checked boxes declared by the `min` attribute of the
/// first box. Missing, non-numeric or non-positive values count as zero;
/// fractional minimums round up (`2.5` needs three boxes).
pub fn checkbox_minimum<H: FormHost>(host: &H, first: H::Node) -> usize {
    host.attribute(first, "min")
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|min| min.is_finite() && *min > 0.0)
        .map(|min| min.ceil() as usize)
        .unwrap_or(0)
}

/// Clear and then re-install custom messages for the field that `control`
/// belongs to.
///
/// Checkbox groups are handled as a whole. For other kinds every control of
/// the field is cleared and only `control` is checked. `required` always takes
/// precedence over `min` when both apply.
pub fn apply_custom_messages<H: FormHost>(
    host: &mut H,
    config: &FieldConfig<H::Node>,
    control: H::Node,
) {
    if config.kind == FieldKind::CheckboxGroup {
        apply_to_group(host, config);
    } else {
        apply_to_single(host, config, control);
    }
}

fn apply_to_group<H: FormHost>(host: &mut H, config: &FieldConfig<H::Node>) {
    let boxes: Vec<H::Node> = config
        .controls
        .iter()
        .copied()
        .filter(|&c| host.control_type(c).as_deref() == Some("checkbox"))
        .collect();

    for &checkbox in &boxes {
        host.set_custom_validity(checkbox, "");
    }

    let Some(&first) = boxes.first() else {
        return;
    };

    let minimum = checkbox_minimum(host, first);
    let checked = boxes.iter().filter(|&&b| host.is_checked(b)).count();

    let message = match (&config.messages.required, &config.messages.min) {
        (Some(required), _) if checked == 0 => required,
        (_, Some(min)) if minimum > 0 && checked < minimum => min,
        _ => return,
    };

    for &checkbox in &boxes {
        host.set_custom_validity(checkbox, message);
    }
}

fn apply_to_single<H: FormHost>(host: &mut H, config: &FieldConfig<H::Node>, control: H::Node) {
    for &other in &config.controls {
        host.set_custom_validity(other, "");
    }
    host.set_custom_validity(control, "");
    let validity = host.validity(control);

    if let Some(required) = &config.messages.required {
        if validity.value_missing {
            host.set_custom_validity(control, required);
            return;
        }
    }

    if let Some(min) = &config.messages.min {
        let below_min = match config.kind {
            FieldKind::Text | FieldKind::Password => validity.too_short,
            FieldKind::Numeric => validity.range_underflow,
            FieldKind::CheckboxGroup => false,
        };
        if below_min {
            host.set_custom_validity(control, min);
        }
    }
}
