mod node;

pub use node::Element;

/// Tags that take part in constraint validation.
pub const CONTROL_TAGS: [&str; 3] = ["input", "select", "textarea"];

/// Returns true if `tag` names a form control.
pub fn is_control_tag(tag: &str) -> bool {
    CONTROL_TAGS.contains(&tag)
}

/// Find an element by its `id` attribute in a declarative tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.get_attr("id") == Some(id) {
        return Some(root);
    }

    for child in &root.children {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}
