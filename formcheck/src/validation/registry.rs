//! Field configuration registry and the fluent builder over it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Declared semantic category of a field.
///
/// The kind decides which native flag a `min` message replaces: "too short"
/// for text and password, "range underflow" for numeric. Checkbox groups are
/// validated as a whole by their checked count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    #[default]
    Text,
    Password,
    Numeric,
    CheckboxGroup,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Numeric => "numeric",
            Self::CheckboxGroup => "checkbox-group",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Custom messages declared for a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMessages {
    /// Replaces "value missing" (or an empty checkbox group).
    pub required: Option<String>,
    /// Replaces "too short" / "range underflow" (or too few boxes checked).
    pub min: Option<String>,
}

/// Validation intent for one field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldConfig<N> {
    pub name: String,
    pub kind: FieldKind,
    pub messages: FieldMessages,
    /// Controls sharing this name, in document order.
    pub controls: Vec<N>,
}

impl<N> FieldConfig<N> {
    pub fn new(name: impl Into<String>, controls: Vec<N>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::default(),
            messages: FieldMessages::default(),
            controls,
        }
    }
}

/// Field configurations keyed by name. At most one entry per name.
#[derive(Debug, Clone)]
pub struct FieldRegistry<N> {
    fields: HashMap<String, FieldConfig<N>>,
}

impl<N> Default for FieldRegistry<N> {
    fn default() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }
}

impl<N> FieldRegistry<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&FieldConfig<N>> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldConfig<N>> {
        self.fields.values()
    }

    /// Returns the config for `name`, creating a default one over `controls`
    /// if none exists. An existing config keeps its controls.
    pub fn register(&mut self, name: &str, controls: Vec<N>) -> &mut FieldConfig<N> {
        self.fields
            .entry(name.to_string())
            .or_insert_with(|| FieldConfig::new(name, controls))
    }
}

/// Fluent builder bound to one registry entry.
///
/// Every method mutates the entry in place and hands the builder back, so
/// calls chain in any order and the last kind set wins.
///
/// ```ignore
/// controller
///     .field(&doc, "password")?
///     .as_password()
///     .required("Choose a password")
///     .min("At least 8 characters");
/// ```
#[derive(Debug)]
pub struct FieldBuilder<'a, N> {
    config: &'a mut FieldConfig<N>,
}

impl<'a, N> FieldBuilder<'a, N> {
    pub fn new(config: &'a mut FieldConfig<N>) -> Self {
        Self { config }
    }

    /// The config being built.
    pub fn config(&self) -> &FieldConfig<N> {
        &*self.config
    }

    pub fn kind(self, kind: FieldKind) -> Self {
        self.config.kind = kind;
        self
    }

    pub fn as_text(self) -> Self {
        self.kind(FieldKind::Text)
    }

    pub fn as_password(self) -> Self {
        self.kind(FieldKind::Password)
    }

    pub fn as_numeric(self) -> Self {
        self.kind(FieldKind::Numeric)
    }

    pub fn as_checkbox_group(self) -> Self {
        self.kind(FieldKind::CheckboxGroup)
    }

    /// Message shown when the field is empty.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.config.messages.required = Some(msg.into());
        self
    }

    /// Message shown when the field is below its declared minimum.
    pub fn min(self, msg: impl Into<String>) -> Self {
        self.config.messages.min = Some(msg.into());
        self
    }
}
