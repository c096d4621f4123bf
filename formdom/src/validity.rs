//! Native constraint validation.
//!
//! Mirrors the browser constraint validation model closely enough for form
//! tooling: the declared attributes of a control (`required`, `minlength`,
//! `min`, `pattern`, ...) are checked against its current value and the
//! result is reported as a set of flags.

use email_address::EmailAddress;
use regex::Regex;

use crate::document::{Document, Node, NodeId};

/// Native validity flags of a single control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidityState {
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
}

impl ValidityState {
    pub fn valid(&self) -> bool {
        !(self.value_missing
            || self.type_mismatch
            || self.pattern_mismatch
            || self.too_long
            || self.too_short
            || self.range_underflow
            || self.range_overflow
            || self.step_mismatch
            || self.bad_input
            || self.custom_error)
    }

    /// Built-in message for the first failing native flag.
    pub fn native_message(&self) -> &'static str {
        if self.value_missing {
            "Please fill out this field."
        } else if self.type_mismatch {
            "Please enter a valid value."
        } else if self.pattern_mismatch {
            "Please match the requested format."
        } else if self.too_long {
            "Please shorten this text."
        } else if self.too_short {
            "Please lengthen this text."
        } else if self.range_underflow {
            "Value must be greater than or equal to the minimum."
        } else if self.range_overflow {
            "Value must be less than or equal to the maximum."
        } else if self.step_mismatch {
            "Please enter a valid value."
        } else if self.bad_input {
            "Please enter a number."
        } else {
            ""
        }
    }
}

/// Input types excluded from constraint validation.
const BARRED_TYPES: [&str; 5] = ["submit", "reset", "button", "hidden", "image"];

/// Input types that honour `minlength`, `maxlength` and `pattern`.
const TEXTUAL_TYPES: [&str; 6] = ["text", "search", "url", "tel", "email", "password"];

pub(crate) fn compute(doc: &Document, id: NodeId) -> ValidityState {
    let mut state = ValidityState::default();
    let Some(node) = doc.node(id) else {
        return state;
    };
    if !doc.is_control(id) || is_barred(node) {
        return state;
    }

    state.custom_error = !node.custom_validity.is_empty();

    let input_type = node.input_type();
    let required = node.attr("required").is_some();

    match input_type.as_deref() {
        Some("checkbox") => {
            state.value_missing = required && !node.checked;
        }
        Some("radio") => {
            state.value_missing = required && !radio_group_checked(doc, id, node);
        }
        Some(kind) if kind == "number" || kind == "range" => {
            state.value_missing = required && node.value.is_empty();
            if !node.value.is_empty() {
                check_numeric(node, &mut state);
            }
        }
        _ => {
            state.value_missing = required && node.value.is_empty();
            let textual = node.tag == "textarea"
                || input_type
                    .as_deref()
                    .is_some_and(|t| TEXTUAL_TYPES.contains(&t));
            if textual && !node.value.is_empty() {
                check_text(node, input_type.as_deref(), &mut state);
            }
        }
    }

    state
}

fn is_barred(node: &Node) -> bool {
    node.attr("disabled").is_some()
        || node
            .input_type()
            .is_some_and(|t| BARRED_TYPES.contains(&t.as_str()))
}

/// A required radio is satisfied by any checked radio of the same name in the same form.
fn radio_group_checked(doc: &Document, id: NodeId, node: &Node) -> bool {
    if node.checked {
        return true;
    }
    let Some(name) = node.attr("name").filter(|n| !n.is_empty()) else {
        return false;
    };
    let scope = doc.form_of(id).unwrap_or_else(|| doc.root());
    doc.query_all(scope, |d, n| {
        d.input_type(n).as_deref() == Some("radio") && d.attribute(n, "name") == Some(name)
    })
    .into_iter()
    .any(|n| doc.checked(n))
}

fn check_text(node: &Node, input_type: Option<&str>, state: &mut ValidityState) {
    let len = node.value.chars().count();

    if let Some(min) = parse_len(node.attr("minlength")) {
        state.too_short = len < min;
    }
    if let Some(max) = parse_len(node.attr("maxlength")) {
        state.too_long = len > max;
    }

    if input_type == Some("email") {
        state.type_mismatch = !EmailAddress::is_valid(&node.value);
    }

    if let Some(pattern) = node.attr("pattern") {
        match Regex::new(&format!("^(?:{pattern})$")) {
            Ok(re) => state.pattern_mismatch = !re.is_match(&node.value),
            Err(e) => log::debug!("ignoring invalid pattern {pattern:?}: {e}"),
        }
    }
}

fn check_numeric(node: &Node, state: &mut ValidityState) {
    let Ok(value) = node.value.trim().parse::<f64>() else {
        state.bad_input = true;
        return;
    };
    if !value.is_finite() {
        state.bad_input = true;
        return;
    }

    let min = parse_number(node.attr("min"));
    let max = parse_number(node.attr("max"));

    if let Some(min) = min {
        state.range_underflow = value < min;
    }
    if let Some(max) = max {
        state.range_overflow = value > max;
    }

    let step = node
        .attr("step")
        .filter(|s| !s.eq_ignore_ascii_case("any"))
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|s| *s > 0.0);
    if let Some(step) = step {
        let steps = (value - min.unwrap_or(0.0)) / step;
        state.step_mismatch = (steps - steps.round()).abs() > 1e-9;
    }
}

fn parse_len(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|s| s.trim().parse().ok())
}

fn parse_number(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite())
}
