//! Loading form descriptions and field rules from JSON.

use std::fs;
use std::path::Path;

use formcheck::validation::{FieldKind, FormController};
use formdom::{Document, Element, NodeId};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::CliError;

/// Field rules to declare on a controller.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    pub fields: Vec<FieldRule>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldRule {
    pub name: String,
    #[serde(default)]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: Option<String>,
    #[serde(default)]
    pub min: Option<String>,
}

impl RuleSet {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        read_json(path)
    }

    /// Declare every rule on `controller`. Stops at the first unknown field.
    pub fn apply(
        &self,
        doc: &Document,
        controller: &mut FormController<NodeId>,
    ) -> Result<(), CliError> {
        for rule in &self.fields {
            let mut builder = controller.field(doc, &rule.name)?.kind(rule.kind);
            if let Some(msg) = &rule.required {
                builder = builder.required(msg.as_str());
            }
            if let Some(msg) = &rule.min {
                builder = builder.min(msg.as_str());
            }
            log::info!("declared {} field {:?}", builder.config().kind, rule.name);
        }
        Ok(())
    }
}

/// Load an element tree and locate the form to validate: the root itself if
/// it is a `<form>`, else the first form inside it.
pub fn load_form(path: &Path) -> Result<(Document, NodeId), CliError> {
    let element: Element = read_json(path)?;
    let (doc, root) = Document::from_element(element);

    let form = if doc.tag(root) == "form" {
        Some(root)
    } else {
        doc.first_form()
    };

    form.map(|form| (doc, form))
        .ok_or_else(|| CliError::NoForm(path.to_path_buf()))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use formcheck::validation::ValidationMode;
    use tempfile::NamedTempFile;

    use super::*;

    fn json_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const FORM: &str = r#"{
        "tag": "div",
        "children": [
            { "tag": "form", "children": [
                { "tag": "input", "attributes": { "name": "user", "type": "text", "required": "" } },
                { "tag": "input", "attributes": { "name": "age", "type": "number", "min": "18" }, "value": "4" }
            ] }
        ]
    }"#;

    #[test]
    fn test_load_form_finds_nested_form() {
        let file = json_file(FORM);
        let (doc, form) = load_form(file.path()).unwrap();
        assert_eq!(doc.tag(form), "form");
        assert_eq!(doc.form_controls(form).len(), 2);
    }

    #[test]
    fn test_load_form_without_form() {
        let file = json_file(r#"{ "tag": "div" }"#);
        assert!(matches!(load_form(file.path()), Err(CliError::NoForm(_))));
    }

    #[test]
    fn test_load_invalid_json() {
        let file = json_file("{ not json");
        assert!(matches!(load_form(file.path()), Err(CliError::Json { .. })));
    }

    #[test]
    fn test_apply_rules() {
        let (mut doc, form) = load_form(json_file(FORM).path()).unwrap();
        let rules: RuleSet = serde_json::from_str(
            r#"{ "fields": [
                { "name": "user", "required": "Who are you?" },
                { "name": "age", "kind": "numeric", "min": "Adults only" }
            ] }"#,
        )
        .unwrap();

        let mut controller = FormController::new(form, ValidationMode::OnSubmit);
        rules.apply(&doc, &mut controller).unwrap();
        assert_eq!(controller.registry().len(), 2);

        let result = controller.validate(&mut doc);
        let messages: Vec<_> = result.fields.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(messages, vec!["Who are you?", "Adults only"]);
    }

    #[test]
    fn test_apply_unknown_field() {
        let (doc, form) = load_form(json_file(FORM).path()).unwrap();
        let rules = RuleSet {
            fields: vec![FieldRule {
                name: "nope".into(),
                kind: FieldKind::Text,
                required: None,
                min: None,
            }],
        };

        let mut controller = FormController::new(form, ValidationMode::OnSubmit);
        assert!(matches!(
            rules.apply(&doc, &mut controller),
            Err(CliError::Form(_))
        ));
    }
}
