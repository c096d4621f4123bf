//! Plain-text rendering of audit and validation results.

use std::fmt::Write;

use formcheck::validation::{FormValidationResult, StructureCheckResult};

pub fn render_structure<N>(result: &StructureCheckResult<N>) -> String {
    let mut out = String::new();
    if result.is_ok {
        out.push_str("structure: ok\n");
        return out;
    }

    let _ = writeln!(out, "structure: {} issue(s)", result.issues.len());
    for issue in &result.issues {
        let _ = writeln!(out, "  {issue}");
    }
    out
}

pub fn render_validation<N>(result: &FormValidationResult<N>) -> String {
    let mut out = String::new();
    let verdict = if result.is_valid { "valid" } else { "invalid" };
    let _ = writeln!(out, "validation: {verdict}");

    for field in &result.fields {
        let name = field.name.as_deref().unwrap_or("<unnamed>");
        if field.is_valid {
            let _ = writeln!(out, "  ok   {name}");
        } else {
            let _ = writeln!(out, "  FAIL {name}: {}", field.message);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use formcheck::validation::{create_controller, ValidationMode};
    use formdom::{Document, Element};

    use super::*;

    #[test]
    fn test_render_reports() {
        let (mut doc, form) = Document::from_element(Element::form().children([
            Element::input("text").name("a").required(),
            Element::input("text").id("b"),
        ]));
        let controller = create_controller(form, ValidationMode::OnSubmit);

        let structure = render_structure(&controller.check_structure(&doc));
        assert!(structure.starts_with("structure: 4 issue(s)\n"));
        assert!(structure.contains("  MissingLabel (a): "));

        let validation = render_validation(&controller.validate(&mut doc));
        assert_eq!(
            validation,
            "validation: invalid\n  FAIL a: Please fill out this field.\n  ok   b\n"
        );
    }

    #[test]
    fn test_render_ok_structure() {
        let (doc, form) = Document::from_element(Element::form().children([
            Element::label("A").child(Element::input("text").name("a")),
            Element::div().role("alert"),
        ]));
        let controller = create_controller(form, ValidationMode::OnSubmit);
        assert_eq!(render_structure(&controller.check_structure(&doc)), "structure: ok\n");
    }
}
