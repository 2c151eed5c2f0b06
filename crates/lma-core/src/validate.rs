//! Reference checking for rendered or parsed documents.
//!
//! Every `$ref` must point into `#/components/{section}/{name}` of the same
//! document, and `{name}` must be defined there.

use serde_json::Value;

use crate::descriptor::components::Components;
use crate::descriptor::document::OpenApiDocument;
use crate::error::{DocumentError, ResolveError};
use crate::naming::ComponentSection;

/// One `$ref` found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// JSON pointer of the object holding the `$ref`.
    pub location: String,
    pub target: String,
}

/// Outcome of [`check_document`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub references: usize,
    pub dangling: Vec<Reference>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.dangling.is_empty()
    }

    /// Turn the first dangling reference into an error.
    pub fn into_result(self) -> Result<usize, ResolveError> {
        match self.dangling.into_iter().next() {
            Some(reference) => Err(ResolveError::RefTargetNotFound(reference.target)),
            None => Ok(self.references),
        }
    }
}

/// Split `#/components/{section}/{name}` into its section and name.
pub fn parse_ref(ref_path: &str) -> Result<(ComponentSection, &str), ResolveError> {
    let stripped = ref_path
        .strip_prefix("#/components/")
        .ok_or_else(|| ResolveError::InvalidRefFormat(ref_path.to_string()))?;
    let (section, name) = stripped
        .split_once('/')
        .ok_or_else(|| ResolveError::InvalidRefFormat(ref_path.to_string()))?;
    let section = ComponentSection::parse(section)
        .ok_or_else(|| ResolveError::InvalidRefFormat(ref_path.to_string()))?;
    if name.is_empty() || name.contains('/') {
        return Err(ResolveError::InvalidRefFormat(ref_path.to_string()));
    }
    Ok((section, name))
}

/// Whether `ref_path` is well formed and names a defined component.
pub fn resolves(components: &Components, ref_path: &str) -> bool {
    parse_ref(ref_path)
        .map(|(section, name)| components.contains(section.as_str(), name))
        .unwrap_or(false)
}

/// All `$ref`s in `value`, in document order.
pub fn collect_refs(value: &Value) -> Vec<Reference> {
    let mut refs = Vec::new();
    walk(value, &mut String::new(), &mut refs);
    refs
}

fn walk(value: &Value, pointer: &mut String, refs: &mut Vec<Reference>) {
    match value {
        Value::Object(map) => {
            if let Some(Value::String(target)) = map.get("$ref") {
                refs.push(Reference {
                    location: pointer.clone(),
                    target: target.clone(),
                });
            }
            for (key, child) in map {
                let len = pointer.len();
                pointer.push('/');
                pointer.push_str(&key.replace('~', "~0").replace('/', "~1"));
                walk(child, pointer, refs);
                pointer.truncate(len);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                let len = pointer.len();
                pointer.push('/');
                pointer.push_str(&index.to_string());
                walk(child, pointer, refs);
                pointer.truncate(len);
            }
        }
        _ => {}
    }
}

/// Find every `$ref` in `document` and report those that don't resolve.
pub fn check_document(document: &OpenApiDocument) -> Result<ValidationReport, DocumentError> {
    let value = serde_json::to_value(document)?;
    let references = collect_refs(&value);
    let total = references.len();
    let dangling = references
        .into_iter()
        .filter(|r| !resolves(&document.components, &r.target))
        .collect();
    Ok(ValidationReport {
        references: total,
        dangling,
    })
}
