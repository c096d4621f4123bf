use formdom::{Document, Element};

fn sample_form() -> Element {
    Element::form().id("signup").children([
        Element::label("Name").label_for("name"),
        Element::div().child(Element::input("text").id("name").name("name")),
        Element::div().role("alert"),
        Element::label("Bio").child(Element::textarea().name("bio").text("hello")),
        Element::select()
            .name("plan")
            .child(Element::option("free"))
            .child(Element::option("pro").flag("selected")),
    ])
}

// ============================================================================
// Building
// ============================================================================

#[test]
fn test_mount_preserves_document_order() {
    let (doc, form) = Document::from_element(sample_form());

    let tags: Vec<&str> = doc
        .descendants(form)
        .into_iter()
        .map(|n| doc.tag(n))
        .collect();
    assert_eq!(
        tags,
        vec!["label", "div", "input", "div", "label", "textarea", "select", "option", "option"]
    );
}

#[test]
fn test_initial_values() {
    let (doc, form) = Document::from_element(sample_form());
    let controls = doc.form_controls(form);

    assert_eq!(controls.len(), 3);
    assert_eq!(doc.value(controls[0]), "");
    assert_eq!(doc.value(controls[1]), "hello");
    assert_eq!(doc.value(controls[2]), "pro");
}

#[test]
fn test_checked_attribute_initializes_state() {
    let (doc, form) = Document::from_element(
        Element::form().child(Element::checkbox().name("a").flag("checked")),
    );
    let boxes = doc.form_controls(form);
    assert!(doc.checked(boxes[0]));
}

#[test]
fn test_detach_and_reattach() {
    let (mut doc, form) = Document::from_element(sample_form());
    let input = doc.find_by_id("name").unwrap();

    doc.detach(input);
    assert_eq!(doc.parent(input), None);
    assert_eq!(doc.form_of(input), None);
    assert!(!doc.is_connected(input));
    assert_eq!(doc.form_controls(form).len(), 2);

    doc.append_child(form, input);
    assert_eq!(doc.form_of(input), Some(form));
    assert!(doc.is_connected(input));
}

#[test]
fn test_append_child_rejects_cycles() {
    let (mut doc, form) = Document::from_element(sample_form());
    let input = doc.find_by_id("name").unwrap();

    doc.append_child(input, form);
    assert_eq!(doc.parent(form), Some(doc.root()));
}

// ============================================================================
// Traversal
// ============================================================================

#[test]
fn test_next_element_sibling_of_parent() {
    let (doc, _) = Document::from_element(sample_form());
    let input = doc.find_by_id("name").unwrap();
    let wrapper = doc.parent(input).unwrap();
    let alert = doc.next_element_sibling(wrapper).unwrap();

    assert_eq!(doc.attribute(alert, "role"), Some("alert"));
    assert_eq!(doc.next_element_sibling(input), None);
}

#[test]
fn test_closest_is_inclusive() {
    let (doc, form) = Document::from_element(sample_form());
    let bio = doc.form_controls(form)[1];
    let label = doc.closest(bio, "label").unwrap();

    assert_eq!(doc.parent(bio), Some(label));
    assert_eq!(doc.closest(label, "label"), Some(label));
    assert_eq!(doc.closest(bio, "fieldset"), None);
}

#[test]
fn test_first_form_and_find_by_id() {
    let (doc, form) = Document::from_element(sample_form());
    assert_eq!(doc.first_form(), Some(form));
    assert_eq!(doc.find_by_id("signup"), Some(form));
    assert_eq!(doc.find_by_id("missing"), None);
}

// ============================================================================
// Attributes and content
// ============================================================================

#[test]
fn test_toggle_attribute() {
    let (mut doc, _) = Document::from_element(sample_form());
    let input = doc.find_by_id("name").unwrap();

    assert!(doc.toggle_attribute(input, "aria-invalid", Some(true)));
    assert_eq!(doc.attribute(input, "aria-invalid"), Some(""));
    assert!(doc.toggle_attribute(input, "aria-invalid", Some(true)));

    assert!(!doc.toggle_attribute(input, "aria-invalid", None));
    assert!(!doc.has_attribute(input, "aria-invalid"));
}

#[test]
fn test_set_text_content_replaces_children() {
    let (mut doc, form) = Document::from_element(sample_form());
    let label = doc.closest(doc.form_controls(form)[1], "label").unwrap();

    doc.set_text_content(label, "About you");
    assert_eq!(doc.text_content(label), "About you");
    assert!(doc.children(label).is_empty());
}

#[test]
fn test_element_from_json() {
    let json = r#"{
        "tag": "form",
        "children": [
            { "tag": "input", "attributes": { "name": "age", "type": "number", "min": "18" }, "value": "21" }
        ]
    }"#;
    let element: Element = serde_json::from_str(json).unwrap();
    let (doc, form) = Document::from_element(element);
    let age = doc.form_controls(form)[0];

    assert_eq!(doc.input_type(age).as_deref(), Some("number"));
    assert_eq!(doc.value(age), "21");
}

#[test]
fn test_find_element_in_declarative_tree() {
    let form = sample_form();
    let input = formdom::element::find_element(&form, "name").unwrap();

    assert_eq!(input.tag, "input");
    assert_eq!(input.get_attr("name"), Some("name"));
    assert!(formdom::element::find_element(&form, "nope").is_none());
}
