use formcheck::prelude::*;
use formdom::{Document, Element, NodeId};

fn controller(element: Element) -> (Document, FormController<NodeId>) {
    let (doc, form) = Document::from_element(element);
    let controller = FormController::attach(&doc, form, ValidationMode::OnSubmit);
    (doc, controller)
}

fn kinds(result: &StructureCheckResult<NodeId>) -> Vec<IssueKind> {
    result.issues.iter().map(|i| i.kind).collect()
}

// ============================================================================
// Happy path
// ============================================================================

#[test]
fn test_well_formed_form_is_ok() {
    let (doc, controller) = controller(Element::form().children([
        Element::label("Name").label_for("name"),
        Element::input("text").id("name").name("name"),
        Element::div().role("alert").error_for("name"),
        Element::label("Email").label_for("email"),
        Element::input("email").id("email").name("email"),
        Element::div().role("alert").error_for("email"),
    ]));

    let result = controller.check_structure(&doc);
    assert!(result.is_ok);
    assert!(result.issues.is_empty());
}

#[test]
fn test_wrapping_label_and_alert_after_parent() {
    let (doc, controller) = controller(Element::form().children([
        Element::label("Name").child(Element::input("text").name("name")),
        Element::div().role("alert"),
    ]));

    let result = controller.check_structure(&doc);
    assert!(result.is_ok, "unexpected issues: {:?}", result.issues);
}

#[test]
fn test_error_container_anywhere_in_form() {
    let (doc, controller) = controller(Element::form().children([
        Element::div().children([
            Element::label("City").label_for("city"),
            Element::input("text").id("city").name("city"),
        ]),
        Element::p("Shipping"),
        Element::div().child(Element::span().error_for("city")),
    ]));

    assert!(controller.check_structure(&doc).is_ok);
}

#[test]
fn test_sibling_tagged_for_other_field_falls_back_to_query() {
    let (doc, controller) = controller(Element::form().children([
        Element::div().children([
            Element::label("A").label_for("a"),
            Element::input("text").id("a").name("a"),
        ]),
        Element::div().error_for("b"),
        Element::div().children([
            Element::label("B").label_for("b"),
            Element::input("text").id("b").name("b"),
        ]),
    ]));

    let result = controller.check_structure(&doc);
    assert_eq!(kinds(&result), vec![IssueKind::MissingErrorContainer]);
    assert_eq!(result.issues[0].name.as_deref(), Some("a"));
}

// ============================================================================
// Issues
// ============================================================================

#[test]
fn test_form_without_fields() {
    let (doc, controller) = controller(Element::form().child(Element::p("No fields here")));

    let result = controller.check_structure(&doc);
    assert!(!result.is_ok);
    assert_eq!(result.issues.len(), 1);

    let issue = &result.issues[0];
    assert_eq!(issue.kind, IssueKind::NoFields);
    assert_eq!(issue.control, None);
    assert_eq!(issue.name, None);
    assert!(issue.message.contains("no input"));
}

#[test]
fn test_missing_label() {
    let (doc, controller) = controller(Element::form().children([
        Element::input("text").id("username").name("username"),
        Element::div().error_for("username"),
    ]));

    let result = controller.check_structure(&doc);
    assert!(!result.is_ok);
    assert_eq!(kinds(&result), vec![IssueKind::MissingLabel]);
    assert_eq!(result.issues[0].name.as_deref(), Some("username"));
}

#[test]
fn test_missing_error_container() {
    let (doc, controller) = controller(Element::form().children([
        Element::label("Email").label_for("email"),
        Element::input("email").id("email").name("email"),
    ]));

    let result = controller.check_structure(&doc);
    assert!(!result.is_ok);
    assert_eq!(kinds(&result), vec![IssueKind::MissingErrorContainer]);
}

#[test]
fn test_control_without_id_or_label() {
    let (doc, controller) =
        controller(Element::form().child(Element::input("text").name("username")));

    let result = controller.check_structure(&doc);
    assert!(!result.is_ok);
    assert_eq!(
        kinds(&result),
        vec![IssueKind::MissingLabel, IssueKind::MissingErrorContainer]
    );
}

#[test]
fn test_label_for_other_id_does_not_count() {
    let (doc, controller) = controller(Element::form().children([
        Element::label("Other").label_for("other"),
        Element::input("text").id("mine").name("mine"),
        Element::div().error_for("mine"),
    ]));

    let result = controller.check_structure(&doc);
    assert!(result.has(IssueKind::MissingLabel));
}

#[test]
fn test_unnamed_control_uses_id_as_display_name() {
    let (doc, controller) = controller(Element::form().child(Element::textarea().id("notes")));

    let result = controller.check_structure(&doc);
    assert!(result.issues.iter().all(|i| i.name.as_deref() == Some("notes")));
}

#[test]
fn test_issues_follow_document_order() {
    let (doc, controller) = controller(Element::form().children([
        // No label.
        Element::input("text").id("field1").name("field1"),
        Element::div().error_for("field1"),
        // No error container.
        Element::label("Field 2").label_for("field2"),
        Element::input("text").id("field2").name("field2"),
        // Complete.
        Element::label("Field 3").label_for("field3"),
        Element::input("text").id("field3").name("field3"),
        Element::div().error_for("field3"),
    ]));

    let result = controller.check_structure(&doc);
    assert!(!result.is_ok);
    assert_eq!(
        kinds(&result),
        vec![IssueKind::MissingLabel, IssueKind::MissingErrorContainer]
    );
    let names: Vec<_> = result.issues.iter().map(|i| i.name.as_deref()).collect();
    assert_eq!(names, vec![Some("field1"), Some("field2")]);
    assert_eq!(result.issues_of(IssueKind::MissingLabel).count(), 1);
}

#[test]
fn test_check_structure_does_not_mutate() {
    let (doc, controller) = controller(Element::form().child(Element::input("text").name("x")));
    let before = format!("{doc:?}");

    controller.check_structure(&doc);
    assert_eq!(format!("{doc:?}"), before);
}

#[test]
fn test_issue_display() {
    let (doc, controller) = controller(Element::form().child(Element::input("text").name("x")));
    let result = controller.check_structure(&doc);

    assert_eq!(
        result.issues[0].to_string(),
        "MissingLabel (x): No associated <label> found for the control."
    );
}
