//! Structural audit of a form's accessibility wiring.

use crate::host::FormHost;

use super::accessor::display_name;
use super::lookup::{find_error_container, find_label};
use super::result::{IssueKind, StructureCheckResult, StructureIssue};

const NO_FIELDS: &str = "Form contains no input, select or textarea controls.";
const MISSING_LABEL: &str = "No associated <label> found for the control.";
const MISSING_ERROR_CONTAINER: &str =
    "No error display element found for the control (role=\"alert\" or [data-error-for]).";

/// Report missing labels and error displays for every control of `form`.
///
/// Never fails: problems are returned as data.
pub fn audit<H: FormHost>(host: &H, form: H::Node) -> StructureCheckResult<H::Node> {
    let controls = host.form_controls(form);
    let mut issues = Vec::new();

    if controls.is_empty() {
        issues.push(StructureIssue {
            control: None,
            name: None,
            kind: IssueKind::NoFields,
            message: NO_FIELDS.to_string(),
        });
    }

    for control in controls {
        let name = display_name(host, control);

        if find_label(host, form, control).is_none() {
            issues.push(StructureIssue {
                control: Some(control),
                name: name.clone(),
                kind: IssueKind::MissingLabel,
                message: MISSING_LABEL.to_string(),
            });
        }

        if find_error_container(host, form, control).is_none() {
            issues.push(StructureIssue {
                control: Some(control),
                name,
                kind: IssueKind::MissingErrorContainer,
                message: MISSING_ERROR_CONTAINER.to_string(),
            });
        }
    }

    StructureCheckResult::from_issues(issues)
}
