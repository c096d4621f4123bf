use formdom::{Document, NodeId, ValidityState};

use super::{FormHost, ValiditySnapshot};

impl From<ValidityState> for ValiditySnapshot {
    fn from(state: ValidityState) -> Self {
        Self {
            valid: state.valid(),
            value_missing: state.value_missing,
            type_mismatch: state.type_mismatch,
            pattern_mismatch: state.pattern_mismatch,
            too_long: state.too_long,
            too_short: state.too_short,
            range_underflow: state.range_underflow,
            range_overflow: state.range_overflow,
            step_mismatch: state.step_mismatch,
            bad_input: state.bad_input,
            custom_error: state.custom_error,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

impl FormHost for Document {
    type Node = NodeId;

    fn form_controls(&self, form: NodeId) -> Vec<NodeId> {
        Document::form_controls(self, form)
    }

    fn owner_form(&self, control: NodeId) -> Option<NodeId> {
        self.form_of(control)
    }

    fn control_name(&self, control: NodeId) -> Option<String> {
        non_empty(self.attribute(control, "name"))
    }

    fn control_id(&self, control: NodeId) -> Option<String> {
        non_empty(self.attribute(control, "id"))
    }

    fn control_type(&self, control: NodeId) -> Option<String> {
        match self.tag(control) {
            "input" => self.input_type(control),
            "select" if self.has_attribute(control, "multiple") => {
                Some("select-multiple".to_string())
            }
            "select" => Some("select-one".to_string()),
            "textarea" => Some("textarea".to_string()),
            _ => None,
        }
    }

    fn is_checked(&self, control: NodeId) -> bool {
        self.checked(control)
    }

    fn validity(&self, control: NodeId) -> ValiditySnapshot {
        Document::validity(self, control).into()
    }

    fn validation_message(&self, control: NodeId) -> String {
        Document::validation_message(self, control)
    }

    fn set_custom_validity(&mut self, control: NodeId, message: &str) {
        Document::set_custom_validity(self, control, message);
    }

    fn check_validity(&mut self, control: NodeId) -> bool {
        Document::check_validity(self, control)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        Document::parent(self, node)
    }

    fn next_element_sibling(&self, node: NodeId) -> Option<NodeId> {
        Document::next_element_sibling(self, node)
    }

    fn closest(&self, node: NodeId, tag: &str) -> Option<NodeId> {
        Document::closest(self, node, tag)
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        Document::attribute(self, node, name).map(str::to_string)
    }

    fn query_attribute(&self, root: NodeId, attr: &str, value: &str) -> Option<NodeId> {
        self.query_first(root, |doc, n| doc.attribute(n, attr) == Some(value))
    }

    fn label_for(&self, root: NodeId, id: &str) -> Option<NodeId> {
        self.query_first(root, |doc, n| {
            doc.tag(n) == "label" && doc.attribute(n, "for") == Some(id)
        })
    }

    fn toggle_attribute(&mut self, node: NodeId, name: &str, force: bool) {
        Document::toggle_attribute(self, node, name, Some(force));
    }

    fn set_text_content(&mut self, node: NodeId, text: &str) {
        Document::set_text_content(self, node, text);
    }
}
