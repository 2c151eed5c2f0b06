use serde::{Deserialize, Serialize};

use super::schema::SchemaOrRef;

/// Media type used by every request and response body in the document.
pub const APPLICATION_JSON: &str = "application/json";

/// A media type object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MediaType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaOrRef>,
}

impl MediaType {
    pub fn with_schema(schema: SchemaOrRef) -> Self {
        Self {
            schema: Some(schema),
        }
    }
}
