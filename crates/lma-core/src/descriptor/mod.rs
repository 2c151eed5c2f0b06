//! Value types mirroring the OpenAPI 3.0 / 3.1 object model.
//!
//! Every map is an [`indexmap::IndexMap`], so serialized JSON keeps the
//! insertion order the builders used.

pub mod components;
pub mod document;
pub mod media_type;
pub mod operation;
pub mod parameter;
pub mod request_body;
pub mod response;
pub mod schema;
pub mod server;

use crate::error::DocumentError;
use document::OpenApiDocument;

/// Parse a document from JSON, e.g. one previously written by `lma generate`.
pub fn from_json(input: &str) -> Result<OpenApiDocument, DocumentError> {
    let document: OpenApiDocument = serde_json::from_str(input)?;
    if !document.openapi.starts_with("3.") {
        return Err(DocumentError::UnsupportedVersion(document.openapi));
    }
    Ok(document)
}
