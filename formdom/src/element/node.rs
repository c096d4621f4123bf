use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Declarative description of a document fragment.
///
/// Elements are plain data: they are built with the fluent constructors below
/// (or deserialized from JSON) and then mounted into a [`crate::Document`],
/// which owns the live tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Element {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    /// Own text, rendered before the children.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Initial value for controls. Falls back to the `value` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub checked: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            ..Default::default()
        }
    }

    pub fn form() -> Self {
        Self::new("form")
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn p(text: impl Into<String>) -> Self {
        Self::new("p").text(text)
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self::new("label").text(text)
    }

    /// Create an `<input>` of the given type.
    pub fn input(input_type: impl Into<String>) -> Self {
        Self::new("input").attr("type", input_type)
    }

    pub fn checkbox() -> Self {
        Self::input("checkbox")
    }

    pub fn select() -> Self {
        Self::new("select")
    }

    pub fn option(value: impl Into<String>) -> Self {
        Self::new("option").attr("value", value)
    }

    pub fn textarea() -> Self {
        Self::new("textarea")
    }

    // Attributes
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    /// Set a boolean attribute (present with an empty value).
    pub fn flag(self, name: impl Into<String>) -> Self {
        self.attr(name, "")
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        self.attr("name", name)
    }

    pub fn role(self, role: impl Into<String>) -> Self {
        self.attr("role", role)
    }

    /// Mark this element as the error display for the control named `name`.
    pub fn error_for(self, name: impl Into<String>) -> Self {
        self.attr("data-error-for", name)
    }

    /// Associate a `<label>` with the control whose id is `id`.
    pub fn label_for(self, id: impl Into<String>) -> Self {
        self.attr("for", id)
    }

    // Constraints
    pub fn required(self) -> Self {
        self.flag("required")
    }

    pub fn disabled(self) -> Self {
        self.flag("disabled")
    }

    pub fn min_length(self, len: usize) -> Self {
        self.attr("minlength", len.to_string())
    }

    pub fn max_length(self, len: usize) -> Self {
        self.attr("maxlength", len.to_string())
    }

    pub fn min(self, min: impl ToString) -> Self {
        self.attr("min", min.to_string())
    }

    pub fn max(self, max: impl ToString) -> Self {
        self.attr("max", max.to_string())
    }

    pub fn step(self, step: impl ToString) -> Self {
        self.attr("step", step.to_string())
    }

    pub fn pattern(self, pattern: impl Into<String>) -> Self {
        self.attr("pattern", pattern)
    }

    // State
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(new_children);
        self
    }
}
