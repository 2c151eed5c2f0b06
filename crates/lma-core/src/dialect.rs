//! Differences between the OpenAPI 3.0 and 3.1 renderings of a document.
//!
//! The builders always produce 3.0-style schemas (`nullable: true`); the
//! 3.1 rendering rewrites them into JSON Schema type arrays.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::descriptor::document::OpenApiDocument;
use crate::descriptor::media_type::MediaType;
use crate::descriptor::parameter::ParameterOrRef;
use crate::descriptor::request_body::RequestBodyOrRef;
use crate::descriptor::response::ResponseOrRef;
use crate::descriptor::schema::{Schema, SchemaOrRef, SchemaType, TypeSet};

/// The OpenAPI version a document is rendered for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecVersion {
    #[serde(rename = "3.0")]
    V3_0,
    #[default]
    #[serde(rename = "3.1")]
    V3_1,
}

impl SpecVersion {
    pub const ALL: [SpecVersion; 2] = [SpecVersion::V3_0, SpecVersion::V3_1];

    /// Value of the document's `openapi` field.
    pub fn openapi(self) -> &'static str {
        match self {
            SpecVersion::V3_0 => "3.0.3",
            SpecVersion::V3_1 => "3.1.0",
        }
    }

    /// Route the document is served at, e.g. `/openapi31.json`.
    pub fn document_path(self) -> &'static str {
        match self {
            SpecVersion::V3_0 => "/openapi30.json",
            SpecVersion::V3_1 => "/openapi31.json",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SpecVersion::V3_0 => "3.0",
            SpecVersion::V3_1 => "3.1",
        }
    }
}

impl fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpecVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "3.0" | "30" | "3.0.3" => Ok(SpecVersion::V3_0),
            "3.1" | "31" | "3.1.0" => Ok(SpecVersion::V3_1),
            other => Err(format!("unsupported OpenAPI version '{other}' (expected 3.0 or 3.1)")),
        }
    }
}

/// Rewrite a document built by the assembler into the dialect of `version`.
pub fn apply(document: &mut OpenApiDocument, version: SpecVersion) {
    document.openapi = version.openapi().to_string();
    if version == SpecVersion::V3_1 {
        rewrite_nullable(document);
    }
}

fn rewrite_nullable(document: &mut OpenApiDocument) {
    let components = &mut document.components;
    for schema in components.schemas.values_mut() {
        nullable_to_type_array(schema);
    }
    for parameter in components.parameters.values_mut() {
        if let ParameterOrRef::Parameter(p) = parameter {
            if let Some(schema) = p.schema.as_mut() {
                nullable_to_type_array(schema);
            }
        }
    }
    for body in components.request_bodies.values_mut() {
        if let RequestBodyOrRef::RequestBody(b) = body {
            b.content.values_mut().for_each(media_type);
        }
    }
    for response in components.responses.values_mut() {
        if let ResponseOrRef::Response(r) = response {
            r.content.values_mut().for_each(media_type);
        }
    }
}

fn media_type(media: &mut MediaType) {
    if let Some(schema) = media.schema.as_mut() {
        nullable_to_type_array(schema);
    }
}

fn nullable_to_type_array(schema: &mut SchemaOrRef) {
    let SchemaOrRef::Schema(schema) = schema else {
        return;
    };
    rewrite_schema(schema);
}

fn rewrite_schema(schema: &mut Schema) {
    if schema.nullable.take() == Some(true) {
        schema.schema_type = match schema.schema_type.take() {
            Some(TypeSet::Single(t)) if t != SchemaType::Null => {
                Some(TypeSet::Multiple(vec![t, SchemaType::Null]))
            }
            Some(TypeSet::Multiple(mut types)) => {
                if !types.contains(&SchemaType::Null) {
                    types.push(SchemaType::Null);
                }
                Some(TypeSet::Multiple(types))
            }
            other => other,
        };
    }
    for property in schema.properties.values_mut() {
        nullable_to_type_array(property);
    }
    if let Some(items) = schema.items.as_mut() {
        nullable_to_type_array(items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nullable_string() -> Schema {
        Schema {
            nullable: Some(true),
            ..Schema::of_type(SchemaType::String)
        }
    }

    #[test]
    fn test_version_parsing() {
        assert_eq!("3.0".parse::<SpecVersion>().unwrap(), SpecVersion::V3_0);
        assert_eq!("31".parse::<SpecVersion>().unwrap(), SpecVersion::V3_1);
        assert!("2.0".parse::<SpecVersion>().is_err());
    }

    #[test]
    fn test_version_serde_names() {
        let v: SpecVersion = serde_yaml_ng::from_str("\"3.0\"").unwrap();
        assert_eq!(v, SpecVersion::V3_0);
        assert_eq!(serde_json::to_string(&SpecVersion::V3_1).unwrap(), "\"3.1\"");
    }

    #[test]
    fn test_nullable_becomes_type_array() {
        let mut schema = nullable_string();
        rewrite_schema(&mut schema);
        assert_eq!(schema.nullable, None);
        assert_eq!(
            schema.schema_type,
            Some(TypeSet::Multiple(vec![SchemaType::String, SchemaType::Null]))
        );
    }

    #[test]
    fn test_nested_properties_rewritten() {
        let mut outer = Schema::of_type(SchemaType::Object);
        outer
            .properties
            .insert("notes".to_string(), nullable_string().into());
        rewrite_schema(&mut outer);
        let json = serde_json::to_value(&outer).unwrap();
        assert_eq!(
            json["properties"]["notes"]["type"],
            serde_json::json!(["string", "null"])
        );
        assert!(json["properties"]["notes"].get("nullable").is_none());
    }

    #[test]
    fn test_non_nullable_untouched() {
        let mut schema = Schema {
            nullable: Some(false),
            ..Schema::of_type(SchemaType::Integer)
        };
        rewrite_schema(&mut schema);
        assert_eq!(schema.schema_type, Some(TypeSet::Single(SchemaType::Integer)));
        assert_eq!(schema.nullable, None);
    }
}
