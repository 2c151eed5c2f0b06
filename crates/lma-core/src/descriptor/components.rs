use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::operation::PathItemOrRef;
use super::parameter::ParameterOrRef;
use super::request_body::RequestBodyOrRef;
use super::response::ResponseOrRef;
use super::schema::SchemaOrRef;

/// Components object holding the reusable definitions every `$ref` in the
/// document points into.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Components {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub parameters: IndexMap<String, ParameterOrRef>,

    #[serde(
        rename = "requestBodies",
        default,
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub request_bodies: IndexMap<String, RequestBodyOrRef>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub responses: IndexMap<String, ResponseOrRef>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub schemas: IndexMap<String, SchemaOrRef>,

    /// OpenAPI 3.1 only.
    #[serde(rename = "pathItems", default, skip_serializing_if = "IndexMap::is_empty")]
    pub path_items: IndexMap<String, PathItemOrRef>,
}

impl Components {
    /// Whether `name` is defined in the section called `section`
    /// (as spelled in a `$ref`, e.g. `requestBodies`).
    pub fn contains(&self, section: &str, name: &str) -> bool {
        match section {
            "parameters" => self.parameters.contains_key(name),
            "requestBodies" => self.request_bodies.contains_key(name),
            "responses" => self.responses.contains_key(name),
            "schemas" => self.schemas.contains_key(name),
            "pathItems" => self.path_items.contains_key(name),
            _ => false,
        }
    }
}
