//! Immutable snapshots returned by validation and structural audits.

use crate::host::ValiditySnapshot;

/// Outcome of evaluating one control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidationResult<N> {
    pub control: N,
    /// Form that owns the control, if any.
    pub form: Option<N>,
    pub validity: ValiditySnapshot,
    pub is_valid: bool,
    /// The control's `name`, else its `id`.
    pub name: Option<String>,
    /// Effective validation message; empty when valid.
    pub message: String,
}

/// Outcome of validating every control of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValidationResult<N> {
    pub is_valid: bool,
    /// One result per control, in document order.
    pub fields: Vec<FieldValidationResult<N>>,
}

impl<N> FormValidationResult<N> {
    pub fn from_fields(fields: Vec<FieldValidationResult<N>>) -> Self {
        Self {
            is_valid: fields.iter().all(|f| f.is_valid),
            fields,
        }
    }

    pub fn invalid_fields(&self) -> impl Iterator<Item = &FieldValidationResult<N>> {
        self.fields.iter().filter(|f| !f.is_valid)
    }

    /// The first failing control in document order (for focusing).
    pub fn first_invalid(&self) -> Option<&FieldValidationResult<N>> {
        self.invalid_fields().next()
    }
}

/// Kind of structural problem found by an audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueKind {
    NoFields,
    MissingLabel,
    MissingErrorContainer,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::NoFields => "NoFields",
            Self::MissingLabel => "MissingLabel",
            Self::MissingErrorContainer => "MissingErrorContainer",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureIssue<N> {
    /// The offending control; `None` for form-level issues.
    pub control: Option<N>,
    pub name: Option<String>,
    pub kind: IssueKind,
    pub message: String,
}

impl<N> std::fmt::Display for StructureIssue<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} ({}): {}", self.kind, name, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureCheckResult<N> {
    pub is_ok: bool,
    /// Issues in encounter order.
    pub issues: Vec<StructureIssue<N>>,
}

impl<N> StructureCheckResult<N> {
    pub fn from_issues(issues: Vec<StructureIssue<N>>) -> Self {
        Self {
            is_ok: issues.is_empty(),
            issues,
        }
    }

    pub fn issues_of(&self, kind: IssueKind) -> impl Iterator<Item = &StructureIssue<N>> {
        self.issues.iter().filter(move |i| i.kind == kind)
    }

    pub fn has(&self, kind: IssueKind) -> bool {
        self.issues_of(kind).next().is_some()
    }
}
